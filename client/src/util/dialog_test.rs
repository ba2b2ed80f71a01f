#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn confirm_declines_outside_browser() {
    assert!(!confirm("Delete this entry?"));
}

#[test]
fn alert_and_scroll_are_noops_but_callable() {
    alert("hello");
    scroll_to_top();
}
