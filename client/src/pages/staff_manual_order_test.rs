use super::*;

fn item(id: i64, name: &str, category: &str, price: f64) -> StaffMenuItem {
    StaffMenuItem {
        id,
        name: name.to_owned(),
        description: String::new(),
        is_available: true,
        category_name: category.to_owned(),
        price,
    }
}

fn top(name: &str, qty: f64) -> TopItem {
    TopItem {
        name: name.to_owned(),
        total_qty: qty,
        total_rev: 0.0,
    }
}

fn customer(phone: &str) -> Customer {
    Customer {
        id: 9,
        phone_number: phone.to_owned(),
        full_name: "Reza".to_owned(),
        is_active: true,
    }
}

// =============================================================
// Suggestions
// =============================================================

#[test]
fn sales_rank_normalises_names_and_skips_blanks() {
    let rank = sales_rank(&[top("  Latte ", 30.0), top("", 99.0)]);
    assert_eq!(rank.len(), 1);
    assert_eq!(rank.get("latte"), Some(&30.0));
}

#[test]
fn best_sellers_come_first_then_name() {
    let items = [
        item(1, "Americano", "Coffee", 1.0),
        item(2, "Latte", "Coffee", 1.0),
        item(3, "Brownie", "Cake", 1.0),
        item(4, "Cappuccino", "Coffee", 1.0),
    ];
    let rank = sales_rank(&[top("latte", 12.0), top("Brownie", 5.0)]);
    let names: Vec<_> = rank_suggestions(&items, &rank, "")
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, vec!["Latte", "Brownie", "Americano", "Cappuccino"]);
}

#[test]
fn query_matches_name_category_or_id() {
    let items = [item(15, "Latte", "Coffee", 1.0), item(7, "Brownie", "Cake", 1.0)];
    let rank = HashMap::new();
    assert_eq!(rank_suggestions(&items, &rank, "CAKE")[0].id, 7);
    assert_eq!(rank_suggestions(&items, &rank, "lat")[0].id, 15);
    assert_eq!(rank_suggestions(&items, &rank, "15")[0].id, 15);
    assert!(rank_suggestions(&items, &rank, "tea").is_empty());
}

#[test]
fn suggestions_are_capped() {
    let items: Vec<_> = (0..20).map(|i| item(i, &format!("Item {i:02}"), "x", 1.0)).collect();
    assert_eq!(rank_suggestions(&items, &HashMap::new(), "").len(), MAX_SUGGESTIONS);
}

// =============================================================
// Selection editing
// =============================================================

#[test]
fn adding_existing_item_increments() {
    let latte = item(1, "Latte", "Coffee", 90_000.0);
    let mut selection = Vec::new();
    add_item(&mut selection, &latte);
    add_item(&mut selection, &latte);
    assert_eq!(selection.len(), 1);
    assert_eq!(selection[0].quantity, 2);
}

#[test]
fn quantity_reaching_zero_removes_line() {
    let mut selection = Vec::new();
    add_item(&mut selection, &item(1, "Latte", "Coffee", 90_000.0));
    add_item(&mut selection, &item(2, "Tea", "Tea", 40_000.0));
    update_quantity(&mut selection, 1, 2);
    assert_eq!(selection[0].quantity, 3);
    update_quantity(&mut selection, 2, -1);
    assert_eq!(selection.len(), 1);
    update_quantity(&mut selection, 1, -10);
    assert!(selection.is_empty());
}

#[test]
fn total_and_removal() {
    let mut selection = Vec::new();
    add_item(&mut selection, &item(1, "Latte", "Coffee", 90_000.0));
    add_item(&mut selection, &item(1, "Latte", "Coffee", 90_000.0));
    add_item(&mut selection, &item(2, "Tea", "Tea", 40_000.0));
    assert!((selection_total(&selection) - 220_000.0).abs() < f64::EPSILON);
    remove_item(&mut selection, 1);
    assert!((selection_total(&selection) - 40_000.0).abs() < f64::EPSILON);
}

// =============================================================
// Order payload
// =============================================================

#[test]
fn selected_customer_phone_wins() {
    assert_eq!(order_phone(Some(&customer("09121234567")), "Reza - 0912"), "09121234567");
}

#[test]
fn typed_phone_is_normalised() {
    assert_eq!(order_phone(None, "۰۹۱۲ ۱۲۳ ۴۵۶۷"), "09121234567");
}

#[test]
fn invalid_phone_becomes_anonymous() {
    assert_eq!(order_phone(None, "Reza"), "");
    assert_eq!(order_phone(None, "12345"), "");
}

#[test]
fn build_order_carries_notes_and_lines() {
    let mut selection = Vec::new();
    add_item(&mut selection, &item(3, "Mocha", "Coffee", 1.0));
    add_item(&mut selection, &item(3, "Mocha", "Coffee", 1.0));
    let order = build_order(&selection, None, "", CustomerType::Vip);
    assert_eq!(order.phone_number, "");
    assert_eq!(order.notes, "Customer type: VIP");
    assert_eq!(
        order.items,
        vec![ManualOrderLine {
            menu_item_id: 3,
            quantity: 2,
        }]
    );
}

#[test]
fn customer_type_parse_defaults_to_walk_in() {
    assert_eq!(CustomerType::parse("member"), CustomerType::Member);
    assert_eq!(CustomerType::parse("???"), CustomerType::WalkIn);
}

#[test]
fn created_message_formats_total() {
    let created = ManualOrderCreated {
        order_id: 42,
        total_price: 130_000.0,
    };
    assert_eq!(created_message(&created), "Order 42 created. Total: 130,000 Toman");
}
