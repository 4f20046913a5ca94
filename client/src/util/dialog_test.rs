#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn confirm_declines_without_a_browser() {
    assert!(!confirm(CONFIRM_DELETE));
}

#[test]
fn alert_is_noop_but_callable() {
    alert("Purchase Failed");
}
