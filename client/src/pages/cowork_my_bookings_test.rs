use super::*;

fn booking(status: &str) -> Booking {
    Booking {
        id: 1,
        space_name: "Desk 4".to_owned(),
        start_time: "2025-05-01T09:00:00Z".to_owned(),
        end_time: "2025-06-01T09:00:00Z".to_owned(),
        start_time_jalali: String::new(),
        end_time_jalali: "1404/03/11".to_owned(),
        status: status.to_owned(),
        price_charged: 0.0,
    }
}

#[test]
fn only_pending_bookings_await_approval() {
    assert!(awaiting_approval(&booking("PENDING")));
    assert!(!awaiting_approval(&booking("CONFIRMED")));
}

#[test]
fn display_date_prefers_jalali() {
    let b = booking("PENDING");
    assert_eq!(display_date(&b.start_time_jalali, &b.start_time), "2025-05-01");
    assert_eq!(display_date(&b.end_time_jalali, &b.end_time), "1404/03/11");
}

#[test]
fn status_labels() {
    assert_eq!(booking_status_label("PENDING"), "Pending approval");
    assert_eq!(booking_status_label("ODD"), "ODD");
}
