use super::*;

#[test]
fn pairs_keep_insertion_order() {
    let query = Query::new().with("page", 2).with("page_size", 9);
    assert_eq!(query.encode(), "page=2&page_size=9");
}

#[test]
fn values_are_percent_encoded() {
    let query = Query::new().with("q", "latte & co");
    assert_eq!(query.encode(), "q=latte%20%26%20co");
}

#[test]
fn blank_optional_values_are_skipped() {
    let query = Query::new().with_nonempty("q", "  ").with_nonempty("tag", " rust ");
    assert_eq!(query.encode(), "tag=rust");
}

#[test]
fn append_to_leaves_bare_path_when_empty() {
    assert_eq!(Query::new().append_to("/api/blog/posts/"), "/api/blog/posts/");
    assert_eq!(
        Query::new().with("q", "x").append_to("/api/blog/posts/"),
        "/api/blog/posts/?q=x"
    );
}
