use super::*;

#[test]
fn page_title_appends_site_name() {
    assert_eq!(page_title("Blog"), "Blog | Cowork & Cafe");
    assert_eq!(page_title("  "), SITE_NAME);
}

#[test]
fn short_description_is_kept() {
    assert_eq!(meta_description("  fresh   coffee  ", 160), "fresh coffee");
}

#[test]
fn long_description_cuts_at_word() {
    assert_eq!(meta_description("alpha beta gamma", 12), "alpha beta…");
    assert_eq!(meta_description("abcdefghij", 4), "abcd…");
}
