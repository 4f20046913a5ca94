//! Sign-in / registration card shown to guests.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;
use storefront::Credentials;

use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::dispatch;

/// Which backend call the form submits to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    /// Card heading and submit button label.
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    pub fn switch_prompt(self) -> &'static str {
        match self {
            Self::Login => "Need an account? Register",
            Self::Register => "Have an account? Login",
        }
    }
}

#[component]
pub fn AuthForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let mode = RwSignal::new(AuthMode::Login);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        ui.update(UiState::clear_error);
        let credentials = match Credentials::new(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(e) => {
                dispatch::show_banner(ui, &e);
                return;
            }
        };
        let submitted_mode = mode.get_untracked();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use storefront::actions;

            use crate::net::api::HttpApi;
            use crate::util::{dialog, storage::LocalStorage};

            let api = HttpApi::from_env();
            match submitted_mode {
                AuthMode::Login => match actions::login(&api, &LocalStorage, &credentials).await {
                    Ok(signed_in) => session.update(|s| s.sign_in(signed_in)),
                    Err(e) => dispatch::show_banner(ui, &e),
                },
                AuthMode::Register => match actions::register(&api, &credentials).await {
                    Ok(notice) => {
                        dialog::alert(notice);
                        mode.set(AuthMode::Login);
                    }
                    Err(e) => dispatch::show_banner(ui, &e),
                },
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, submitted_mode, session);
            busy.set(false);
        }
    };

    view! {
        <div class="card auth-card">
            <h3>{move || mode.get().title()}</h3>
            <form on:submit=on_submit>
                <input
                    placeholder="Email"
                    type="email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    placeholder="Password"
                    type="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-primary" disabled=move || busy.get()>
                    {move || mode.get().title()}
                </button>
            </form>
            <p class="switch-auth" on:click=move |_| mode.update(|m| *m = m.toggled())>
                {move || mode.get().switch_prompt()}
            </p>
        </div>
    }
}
