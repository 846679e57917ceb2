use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::mock::MockTransport;
use crate::net::transport::Method;

fn request() -> BookingRequest {
    BookingRequest {
        space_id: 12,
        booking_type: BookingType::Monthly,
        start_time: "2026-03-01".to_owned(),
    }
}

#[test]
fn preview_path_carries_all_parameters() {
    assert_eq!(
        request().preview_path(),
        "/api/cowork/bookings/preview/?space_id=12&booking_type=MONTHLY&start_time=2026-03-01"
    );
}

#[test]
fn preview_decodes_price_and_dates() {
    let api = MockTransport::new().client();
    api.transport().reply(
        Method::Get,
        &request().preview_path(),
        200,
        r#"{"valid":true,"price":"4500000","start_time":"2026-03-01","end_time":"2026-03-31","end_time_jalali":"1405/01/11"}"#,
    );

    let preview = block_on(preview_booking(&api, &request())).unwrap();
    assert!((preview.price - 4_500_000.0).abs() < f64::EPSILON);
    assert_eq!(preview.end_time_jalali, "1405/01/11");
}

#[test]
fn create_booking_posts_typed_body() {
    let api = MockTransport::new().client();
    api.set_csrf_token("tok");
    api.transport()
        .reply(Method::Post, BOOKINGS_PATH, 201, r#"{"detail":"Booked, awaiting approval"}"#);

    let created = block_on(create_booking(&api, &request())).unwrap();
    assert_eq!(created.detail.as_deref(), Some("Booked, awaiting approval"));
    let sent = &api.transport().requests_to(Method::Post, BOOKINGS_PATH)[0];
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(
        body,
        json!({ "space_id": 12, "booking_type": "MONTHLY", "start_time": "2026-03-01" })
    );
}

#[test]
fn create_booking_tolerates_empty_body() {
    let api = MockTransport::new().client();
    api.set_csrf_token("tok");
    api.transport().reply(Method::Post, BOOKINGS_PATH, 201, "");

    let created = block_on(create_booking(&api, &request())).unwrap();
    assert_eq!(created, BookingCreated::default());
}
