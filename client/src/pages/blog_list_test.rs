use super::*;

fn on_page(page: u32) -> PostFilter {
    PostFilter {
        page,
        q: "espresso".to_owned(),
        tag: "events".to_owned(),
    }
}

#[test]
fn search_resets_page_and_trims() {
    let next = with_search(&on_page(4), "  latte art ");
    assert_eq!(next.page, 1);
    assert_eq!(next.q, "latte art");
    assert_eq!(next.tag, "events");
}

#[test]
fn selecting_tag_resets_page() {
    let next = with_tag(&on_page(3), "news");
    assert_eq!(next.page, 1);
    assert_eq!(next.tag, "news");
    assert_eq!(next.q, "espresso");
}

#[test]
fn selecting_active_tag_clears_it() {
    assert_eq!(with_tag(&on_page(2), "events").tag, "");
}
