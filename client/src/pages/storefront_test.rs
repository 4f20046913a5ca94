use storefront::Session;

use super::*;

fn signed_in(role: &str) -> SessionState {
    SessionState { current: Some(Session { token: "abc".to_owned(), role: role.to_owned() }) }
}

#[test]
fn guest_sees_auth_form() {
    assert_eq!(sidebar_panel(&SessionState::default()), SidebarPanel::Auth);
}

#[test]
fn admin_sees_inventory_form() {
    assert_eq!(sidebar_panel(&signed_in("admin")), SidebarPanel::Admin);
}

#[test]
fn ordinary_user_sees_no_sidebar_controls() {
    assert_eq!(sidebar_panel(&signed_in("user")), SidebarPanel::Empty);
    assert_eq!(sidebar_panel(&signed_in("Admin")), SidebarPanel::Empty);
}

#[test]
fn logout_returns_sidebar_to_auth_form() {
    let mut state = signed_in("admin");
    state.sign_out();
    assert_eq!(sidebar_panel(&state), SidebarPanel::Auth);
}
