use super::*;
use crate::net::types::ReviewStatus;

fn item(id: &str) -> ComponentItem {
    ComponentItem {
        id: id.to_owned(),
        title: String::new(),
        author: None,
        technology: None,
        code: None,
        html_code: None,
        css_code: None,
        tailwind_code: None,
        status: ReviewStatus::Approved,
    }
}

fn ids(state: &ShowcaseState) -> Vec<&str> {
    state.items.iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn default_state_is_idle_and_empty() {
    let state = ShowcaseState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.next_page(), 1);
}

#[test]
fn begin_fetch_sets_loading_and_clears_error() {
    let mut state = ShowcaseState { error: Some("old".to_owned()), ..ShowcaseState::default() };
    state.begin_fetch(1);
    assert!(state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.pending_page, Some(1));
    assert_eq!(state.page, 0);
}

#[test]
fn first_page_replaces_items() {
    let mut state = ShowcaseState { items: vec![item("stale")], ..ShowcaseState::default() };
    state.begin_fetch(1);
    state.apply_fetch(Ok(vec![item("a"), item("b")]));
    assert!(!state.loading);
    assert_eq!(ids(&state), ["a", "b"]);
}

#[test]
fn later_pages_append_without_duplicates() {
    let mut state = ShowcaseState::default();
    state.begin_fetch(1);
    state.apply_fetch(Ok(vec![item("a"), item("b")]));
    state.begin_fetch(state.next_page());
    state.apply_fetch(Ok(vec![item("b"), item("c")]));
    assert_eq!(ids(&state), ["a", "b", "c"]);
    assert_eq!(state.next_page(), 3);
}

#[test]
fn empty_page_marks_exhausted() {
    let mut state = ShowcaseState::default();
    state.begin_fetch(2);
    state.apply_fetch(Ok(Vec::new()));
    assert!(state.exhausted);
}

#[test]
fn error_keeps_existing_items() {
    let mut state = ShowcaseState::default();
    state.begin_fetch(1);
    state.apply_fetch(Ok(vec![item("a")]));
    state.begin_fetch(2);
    state.apply_fetch(Err("component listing failed: 500".to_owned()));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("component listing failed: 500"));
    assert_eq!(ids(&state), ["a"]);
}

#[test]
fn failed_page_is_requested_again() {
    let mut state = ShowcaseState::default();
    state.begin_fetch(1);
    state.apply_fetch(Ok(vec![item("a")]));
    state.begin_fetch(state.next_page());
    state.apply_fetch(Err("component listing failed: 503".to_owned()));
    assert_eq!(state.page, 1);
    assert_eq!(state.pending_page, None);
    assert_eq!(state.next_page(), 2);

    state.begin_fetch(state.next_page());
    state.apply_fetch(Ok(vec![item("b")]));
    assert_eq!(ids(&state), ["a", "b"]);
    assert_eq!(state.next_page(), 3);
}

#[test]
fn failed_first_page_keeps_page_at_zero() {
    let mut state = ShowcaseState::default();
    state.begin_fetch(1);
    state.apply_fetch(Err("component listing failed: 500".to_owned()));
    assert_eq!(state.page, 0);
    assert_eq!(state.next_page(), 1);
}
