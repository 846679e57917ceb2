use super::*;
use serde_json::json;

// =============================================================
// Session
// =============================================================

fn user_with_roles(is_admin: bool, is_barista: bool, is_customer: bool) -> SessionUser {
    SessionUser {
        id: 7,
        phone_number: "09120000000".to_owned(),
        full_name: "Sara".to_owned(),
        national_id: None,
        birth_date: None,
        roles: UserRoles {
            is_admin,
            is_barista,
            is_customer,
        },
        freelancer_profile_status: None,
        freelancer_public_slug: None,
    }
}

#[test]
fn is_staff_truth_table() {
    for is_admin in [false, true] {
        for is_barista in [false, true] {
            for is_customer in [false, true] {
                let session = Session {
                    authenticated: true,
                    user: Some(user_with_roles(is_admin, is_barista, is_customer)),
                    ..Session::anonymous()
                };
                assert_eq!(session.is_staff(), is_admin || is_barista);
            }
        }
    }
}

#[test]
fn is_staff_false_without_user() {
    let session = Session {
        authenticated: true,
        ..Session::anonymous()
    };
    assert!(!session.is_staff());
    assert!(!Session::anonymous().is_staff());
}

#[test]
fn anonymous_session_shape() {
    let session = Session::anonymous();
    assert!(!session.authenticated);
    assert_eq!(session.csrf_token, "");
    assert_eq!(session.login_url, "/login/");
    assert!(session.user.is_none());
}

#[test]
fn session_decodes_with_sparse_fields() {
    let session: Session = serde_json::from_value(json!({
        "authenticated": true,
        "csrf_token": "tok",
        "user": {
            "id": 3,
            "phone_number": "0912",
            "full_name": "A",
            "national_id": null,
            "birth_date": "1990-01-01",
            "roles": { "is_admin": false, "is_barista": true, "is_customer": true }
        }
    }))
    .unwrap();
    assert_eq!(session.login_url, "/login/");
    assert_eq!(session.user.as_ref().map(|u| u.id), Some(3));
    assert!(session.is_staff());
}

// =============================================================
// Amounts
// =============================================================

#[test]
fn amounts_accept_numbers_and_numeric_strings() {
    let order: Order = serde_json::from_value(json!({
        "id": 1, "status": "PENDING", "total_price": "125000.00"
    }))
    .unwrap();
    assert!((order.total_price - 125_000.0).abs() < f64::EPSILON);

    let item: MenuItem = serde_json::from_value(json!({
        "id": 2, "name": "Latte", "price": 90000
    }))
    .unwrap();
    assert!((item.price - 90_000.0).abs() < f64::EPSILON);
}

#[test]
fn amounts_reject_garbage() {
    let result = serde_json::from_value::<MenuItem>(json!({ "id": 2, "name": "x", "price": "abc" }));
    assert!(result.is_err());
}

#[test]
fn cart_without_items_is_distinguishable() {
    let cart: Cart = serde_json::from_value(json!({ "cart_count": 2 })).unwrap();
    assert!(cart.items.is_none());
    assert!(cart.is_empty());
    assert_eq!(cart.cart_count, 2);
}

// =============================================================
// Blog content
// =============================================================

#[test]
fn content_blocks_decode_by_type_tag() {
    let blocks: Vec<ContentBlock> = serde_json::from_value(json!([
        { "type": "paragraph", "text": "p" },
        { "type": "quote", "text": "q", "author": "me" },
        { "type": "image", "url": "/m/a.png" },
        { "type": "list", "items": ["a", "b"] },
        { "type": "video", "src": "x" }
    ]))
    .unwrap();
    assert_eq!(blocks[0], ContentBlock::Paragraph { text: "p".to_owned() });
    assert_eq!(
        blocks[1],
        ContentBlock::Quote {
            text: "q".to_owned(),
            author: Some("me".to_owned())
        }
    );
    assert!(matches!(&blocks[2], ContentBlock::Image { alt: None, .. }));
    assert!(matches!(&blocks[3], ContentBlock::List { items } if items.len() == 2));
    assert_eq!(blocks[4], ContentBlock::Unsupported);
}

// =============================================================
// Staff
// =============================================================

#[test]
fn analytics_rows_use_friendly_names() {
    let overview: AnalyticsOverview = serde_json::from_value(json!({
        "cafe_total": "10.5",
        "top_items": [{ "menu_item__name": "Latte", "total_qty": 4, "total_rev": "360000" }],
        "top_cafe_buyers": [{ "user__phone_number": "0912", "user__full_name": "", "total_spent": 5 }]
    }))
    .unwrap();
    assert_eq!(overview.top_items[0].name, "Latte");
    assert_eq!(overview.top_cafe_buyers[0].display_name(), "0912");
    assert!(overview.top_cowork_members.is_empty());
}

#[test]
fn role_round_trips_through_strings() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert_eq!(Role::parse("Unassigned"), None);
    assert_eq!(serde_json::to_value(Role::Barista).unwrap(), json!("Barista"));
}

#[test]
fn booking_type_wire_names() {
    assert_eq!(serde_json::to_value(BookingType::SixMonth).unwrap(), json!("SIX_MONTH"));
    assert_eq!(BookingType::parse("HOURLY"), Some(BookingType::Hourly));
    assert_eq!(BookingType::parse("weekly"), None);
}

#[test]
fn page_defaults_when_fields_missing() {
    let page: Page<Customer> = serde_json::from_value(json!({})).unwrap();
    assert_eq!(page.count, 0);
    assert_eq!(page.page, 1);
    assert!(page.results.is_empty());
}
