//! The single storefront screen: header, banner, sidebar and product grid.

#[cfg(test)]
#[path = "storefront_test.rs"]
mod storefront_test;

use leptos::prelude::*;

use crate::components::admin_panel::AdminPanel;
use crate::components::auth_form::AuthForm;
use crate::components::header::Header;
use crate::components::product_card::{ProductCard, card_key};
use crate::state::catalog::CatalogState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::dispatch;

/// What the left column shows for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarPanel {
    /// Guests get the login/register form.
    Auth,
    /// Admins get the inventory form.
    Admin,
    /// Ordinary signed-in users get nothing.
    Empty,
}

pub fn sidebar_panel(session: &SessionState) -> SidebarPanel {
    if !session.is_authenticated() {
        SidebarPanel::Auth
    } else if session.is_admin() {
        SidebarPanel::Admin
    } else {
        SidebarPanel::Empty
    }
}

#[component]
pub fn StorefrontPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Effects only run in the browser, after hydration, so the SSR markup
    // always matches the guest view.
    Effect::new(move || {
        let stored = storefront::session::load(&crate::util::storage::LocalStorage);
        session.update(|s| s.restore(stored));
        dispatch::reload_catalog(catalog);
    });

    view! {
        <div class="container">
            <Header/>

            <Show when=move || ui.get().has_error()>
                <div class="error-banner">{move || ui.get().error}</div>
            </Show>

            <div class="main-layout">
                <div class="sidebar">
                    {move || match sidebar_panel(&session.get()) {
                        SidebarPanel::Auth => view! { <AuthForm/> }.into_any(),
                        SidebarPanel::Admin => view! { <AdminPanel/> }.into_any(),
                        SidebarPanel::Empty => ().into_any(),
                    }}
                </div>

                <div class="content">
                    <h2>"Marketplace"</h2>
                    <div class="product-grid">
                        <For
                            each=move || catalog.get().products
                            key=card_key
                            children=move |product| view! { <ProductCard product=product/> }
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
