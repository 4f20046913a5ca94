//! Catalog card with buy and (for admins) delete actions.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;
use storefront::{Product, ProductId};

use crate::state::catalog::CatalogState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::dialog;

pub fn buy_label(product: &Product) -> &'static str {
    if product.is_sold_out() { "Sold Out" } else { "Buy Now" }
}

pub fn card_class(product: &Product) -> &'static str {
    if product.is_sold_out() {
        "card product-card out-of-stock"
    } else {
        "card product-card"
    }
}

/// `<For>` key: any server-side change to a product re-renders its card.
pub fn card_key(product: &Product) -> (ProductId, i64, String, u64) {
    (product.id, product.stock, product.name.clone(), product.price.to_bits())
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let id = product.id;
    let sold_out = product.is_sold_out();
    let class = card_class(&product);
    let label = buy_label(&product);
    let name = product.name.clone();
    let price = product.price_label();
    let stock = product.stock;

    let on_buy = move |_| {
        let current = session.get_untracked().current;
        let product = product.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpApi::from_env();
            match storefront::actions::buy(&api, current.as_ref(), &product).await {
                Ok(refreshed) => catalog.update(|c| c.apply(refreshed)),
                Err(e) => dialog::alert(&e.to_string()),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current, product);
        }
    };

    let on_delete = move |_| {
        if !dialog::confirm(dialog::CONFIRM_DELETE) {
            return;
        }
        let current = session.get_untracked().current;

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpApi::from_env();
            match storefront::actions::delete_product(&api, current.as_ref(), id).await {
                Ok(refreshed) => catalog.update(|c| c.apply(refreshed)),
                Err(e) => crate::util::dispatch::show_banner(ui, &e),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current, id, catalog, ui);
        }
    };

    view! {
        <div class=class>
            <div class="card-header">
                <h4>{name}</h4>
                <span class="price">{price}</span>
            </div>
            <div class="stock-info">
                "Stock: " <strong>{stock}</strong>
            </div>

            <div class="actions">
                <button class="btn-buy" disabled=sold_out on:click=on_buy>
                    {label}
                </button>
                <Show when=move || session.get().is_admin()>
                    <button class="btn-delete" on:click=on_delete>
                        "🗑"
                    </button>
                </Show>
            </div>
        </div>
    }
}
