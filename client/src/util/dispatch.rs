//! Glue between async actions and reactive state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call these after user events. Requests only run in the
//! `hydrate` build; under SSR they are skipped.

use leptos::prelude::*;

use crate::state::catalog::CatalogState;
use crate::state::ui::UiState;

/// Fetch the catalog into `catalog`. Failures only reach the console.
pub fn reload_catalog(catalog: RwSignal<CatalogState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use storefront::StorefrontApi;

        match crate::net::api::HttpApi::from_env().list_products().await {
            Ok(products) => catalog.update(|c| c.replace(products)),
            Err(e) => log::error!("Failed to fetch products: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = catalog;
    }
}

/// Show an action failure in the inline banner.
pub fn show_banner(ui: RwSignal<UiState>, error: &storefront::ActionError) {
    ui.update(|u| u.show_error(error.to_string()));
}
