use std::cell::RefCell;
use std::collections::HashMap;

use super::*;

#[derive(Default)]
struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn clear(&self) {
        self.items.borrow_mut().clear();
    }
}

fn admin() -> Session {
    Session { token: "abc".to_owned(), role: "admin".to_owned() }
}

#[test]
fn empty_store_is_guest() {
    assert_eq!(load(&MemoryStore::default()), None);
}

#[test]
fn persist_writes_token_and_role_keys() {
    let store = MemoryStore::default();
    persist(&store, &admin());
    assert_eq!(store.get("token").as_deref(), Some("abc"));
    assert_eq!(store.get("role").as_deref(), Some("admin"));
    assert_eq!(load(&store), Some(admin()));
}

#[test]
fn token_without_role_loads_with_empty_role() {
    let store = MemoryStore::default();
    store.set(TOKEN_KEY, "abc");
    let session = load(&store).expect("session");
    assert_eq!(session.role, "");
    assert!(!session.is_admin());
}

#[test]
fn empty_token_is_guest() {
    let store = MemoryStore::default();
    store.set(TOKEN_KEY, "");
    store.set(ROLE_KEY, "admin");
    assert_eq!(load(&store), None);
}

#[test]
fn clear_removes_both_keys_and_unrelated_keys() {
    let store = MemoryStore::default();
    persist(&store, &admin());
    store.set("draft", "x");
    clear(&store);
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(ROLE_KEY), None);
    assert_eq!(store.get("draft"), None);
    assert_eq!(load(&store), None);
}

#[test]
fn admin_role_is_exact_match() {
    assert!(admin().is_admin());
    let shouting = Session { role: "ADMIN".to_owned(), ..admin() };
    assert!(!shouting.is_admin());
    let user = Session { role: "user".to_owned(), ..admin() };
    assert!(!user.is_admin());
}

#[test]
fn role_label_is_upper_cased() {
    assert_eq!(admin().role_label(), "ADMIN");
}

#[test]
fn session_from_login_response() {
    let resp = LoginResponse { token: "abc".to_owned(), role: "admin".to_owned() };
    assert_eq!(Session::from(resp), admin());
}

#[test]
fn optional_admin_check() {
    assert!(is_admin(Some(&admin())));
    assert!(!is_admin(None));
}
