use super::*;

fn order(id: i64, status: &str, is_paid: bool) -> Order {
    Order {
        id,
        status: status.to_owned(),
        is_paid,
        total_price: 50_000.0,
        created_at: None,
        customer: None,
    }
}

#[test]
fn metrics_count_each_bucket() {
    let orders = [
        order(1, "PENDING", false),
        order(2, "PENDING", true),
        order(3, "PREPARING", false),
        order(4, "READY", true),
        order(5, "DELIVERED", true),
    ];
    assert_eq!(
        OrderMetrics::from_orders(&orders),
        OrderMetrics {
            total: 5,
            pending: 2,
            preparing: 1,
            ready: 1,
            paid: 3,
        }
    );
}

#[test]
fn metrics_of_empty_queue_are_zero() {
    assert_eq!(OrderMetrics::from_orders(&[]), OrderMetrics::default());
}

#[test]
fn next_statuses_skip_current() {
    assert_eq!(next_statuses("READY"), vec!["PREPARING", "DELIVERED", "CANCELLED"]);
    assert_eq!(next_statuses("PENDING"), ORDER_TRANSITIONS.to_vec());
}
