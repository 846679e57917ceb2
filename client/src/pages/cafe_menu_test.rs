use super::*;
use crate::net::types::CartLine;

fn line(item_id: i64, quantity: i64) -> CartLine {
    CartLine {
        item_id,
        name: format!("item {item_id}"),
        quantity,
        subtotal: 0.0,
    }
}

fn cart(lines: Option<Vec<CartLine>>, cart_count: i64) -> Cart {
    Cart {
        items: lines,
        total: 0.0,
        cart_count,
    }
}

fn state(quantities: HashMap<i64, i64>, count: i64) -> CartState {
    CartState { quantities, count }
}

#[test]
fn quantities_come_from_cart_lines() {
    let map = quantities_from_cart(&cart(Some(vec![line(1, 2), line(4, 1)]), 3));
    assert_eq!(map.get(&1), Some(&2));
    assert_eq!(map.get(&4), Some(&1));
    assert_eq!(map.len(), 2);
}

#[test]
fn local_delta_never_goes_negative() {
    let mut map = HashMap::new();
    apply_local_delta(&mut map, 9, -1);
    assert!(map.is_empty());
    apply_local_delta(&mut map, 9, 1);
    apply_local_delta(&mut map, 9, 1);
    assert_eq!(map.get(&9), Some(&2));
    apply_local_delta(&mut map, 9, -5);
    assert!(!map.contains_key(&9));
}

// =============================================================
// CartState
// =============================================================

#[test]
fn loaded_cart_sets_quantities_and_count() {
    let loaded = CartState::from_cart(&cart(Some(vec![line(1, 2), line(4, 1)]), 3));
    assert_eq!(loaded.quantity(1), 2);
    assert_eq!(loaded.quantity(7), 0);
    assert_eq!(loaded.count, 3);
}

#[test]
fn response_with_items_replaces_map() {
    let mut current = state(HashMap::from([(1, 5), (2, 1)]), 6);
    let change = CartChange {
        menu_item_id: 1,
        delta: 1,
    };
    current.reconcile(&cart(Some(vec![line(1, 6)]), 6), change);
    assert_eq!(current, state(HashMap::from([(1, 6)]), 6));
}

#[test]
fn response_without_items_adjusts_locally() {
    let mut current = state(HashMap::from([(1, 5)]), 5);
    let change = CartChange {
        menu_item_id: 1,
        delta: -1,
    };
    current.reconcile(&cart(None, 4), change);
    assert_eq!(current.quantities, HashMap::from([(1, 4)]));
    assert_eq!(current.count, 4);
}

#[test]
fn count_follows_server_even_when_it_disagrees() {
    let mut current = state(HashMap::from([(1, 1)]), 1);
    let change = CartChange {
        menu_item_id: 2,
        delta: 1,
    };
    current.reconcile(&cart(None, 3), change);
    assert_eq!(current.count, 3);
    assert_eq!(current.quantity(2), 1);
}

#[test]
fn cart_link_shows_count_when_non_empty() {
    assert_eq!(cart_link_label(0), "View cart");
    assert_eq!(cart_link_label(1), "View cart (1 item)");
    assert_eq!(cart_link_label(3), "View cart (3 items)");
}

#[test]
fn missing_availability_means_orderable() {
    let mut item = MenuItem {
        id: 1,
        name: "Latte".to_owned(),
        description: String::new(),
        price: 90_000.0,
        is_available: None,
    };
    assert!(is_orderable(&item));
    item.is_available = Some(false);
    assert!(!is_orderable(&item));
}
