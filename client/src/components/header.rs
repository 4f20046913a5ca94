//! Page header with the signed-in role and logout, or a guest tag.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::storage::LocalStorage;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_logout = move |_| {
        storefront::actions::logout(&LocalStorage);
        session.update(SessionState::sign_out);
        ui.update(UiState::clear_error);
    };

    view! {
        <header class="header">
            <h1>"FlashMart Pro ⚡"</h1>
            <Show
                when=move || session.get().is_authenticated()
                fallback=|| view! { <span class="guest-tag">"Guest Mode"</span> }
            >
                <div class="user-info">
                    <span>
                        "Role: " <strong>{move || session.get().role_label()}</strong>
                    </span>
                    <button class="btn-logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </Show>
        </header>
    }
}
