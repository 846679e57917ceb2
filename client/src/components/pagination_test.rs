use super::*;

#[test]
fn single_page_hides_pager() {
    assert!(!pager_state(1, 1).visible);
}

#[test]
fn first_page_has_only_next() {
    let state = pager_state(1, 3);
    assert!(state.visible);
    assert!(!state.has_prev);
    assert!(state.has_next);
}

#[test]
fn last_page_has_only_prev() {
    let state = pager_state(3, 3);
    assert!(state.has_prev);
    assert!(!state.has_next);
}
