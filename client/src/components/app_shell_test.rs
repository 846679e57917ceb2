use super::*;
use crate::net::types::UserRoles;

fn member(full_name: &str) -> SessionUser {
    SessionUser {
        id: 1,
        phone_number: "09121112222".to_owned(),
        full_name: full_name.to_owned(),
        national_id: None,
        birth_date: None,
        roles: UserRoles::default(),
        freelancer_profile_status: None,
        freelancer_public_slug: None,
    }
}

fn hrefs(items: &[NavItem]) -> Vec<&'static str> {
    items.iter().map(|item| item.href).collect()
}

#[test]
fn guests_see_only_public_links() {
    let items = visible_nav(false, false);
    assert!(items.iter().all(|item| item.audience == Audience::Everyone));
    assert!(hrefs(&items).contains(&"/cafe/menu"));
    assert!(!hrefs(&items).contains(&"/cafe/orders"));
    assert!(!hrefs(&items).contains(&"/staff/users"));
}

#[test]
fn customers_see_their_orders_but_no_staff_links() {
    let items = visible_nav(true, false);
    assert!(hrefs(&items).contains(&"/cafe/orders"));
    assert!(items.iter().all(|item| item.audience != Audience::Staff));
}

#[test]
fn staff_see_every_link_in_order() {
    let items = visible_nav(true, true);
    assert_eq!(items.len(), NAV_ITEMS.len());
    assert_eq!(items[0].href, "/");
    assert!(hrefs(&items).contains(&"/cafe/dashboard"));
}

#[test]
fn user_label_prefers_name() {
    assert_eq!(user_label(&member("  Mina  ")), "Mina");
    assert_eq!(user_label(&member("")), "09121112222");
}
