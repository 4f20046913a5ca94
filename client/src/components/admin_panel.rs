//! Inventory form shown to admins.

use leptos::prelude::*;
use storefront::NewProduct;

use crate::state::catalog::CatalogState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::dispatch;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let product = match NewProduct::parse(&name.get_untracked(), &price.get_untracked(), &stock.get_untracked()) {
            Ok(product) => product,
            Err(e) => {
                dispatch::show_banner(ui, &e);
                return;
            }
        };
        let current = session.get_untracked().current;

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpApi::from_env();
            match storefront::actions::add_product(&api, current.as_ref(), &product).await {
                Ok(refreshed) => {
                    catalog.update(|c| c.apply(refreshed));
                    name.set(String::new());
                    price.set(String::new());
                    stock.set(String::new());
                }
                Err(e) => dispatch::show_banner(ui, &e),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (product, current, catalog);
        }
    };

    view! {
        <div class="card admin-card">
            <h3>"👑 Admin Tools"</h3>
            <form on:submit=on_add>
                <input
                    placeholder="Product Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <div class="row">
                    <input
                        placeholder="Price"
                        type="number"
                        step="any"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                    <input
                        placeholder="Stock"
                        type="number"
                        prop:value=move || stock.get()
                        on:input=move |ev| stock.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn-admin">
                    "Add Product"
                </button>
            </form>
        </div>
    }
}
