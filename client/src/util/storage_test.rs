#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn get_is_none_without_a_browser() {
    assert_eq!(LocalStorage.get(storefront::session::TOKEN_KEY), None);
}

#[test]
fn session_load_is_guest_without_a_browser() {
    assert_eq!(storefront::session::load(&LocalStorage), None);
}

#[test]
fn set_and_clear_are_noops_but_callable() {
    LocalStorage.set("token", "abc");
    LocalStorage.clear();
    assert_eq!(LocalStorage.get("token"), None);
}
