//! Cached copy of the server's product catalog.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use storefront::actions::Refreshed;
use storefront::{Product, ProductId};

/// Product list as last fetched. Always replaced wholesale, never patched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    /// Set after the first successful fetch.
    pub loaded: bool,
}

impl CatalogState {
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
        self.loaded = true;
    }

    /// Apply the outcome of a mutation; a failed refetch keeps the stale list.
    pub fn apply(&mut self, refreshed: Refreshed) {
        if let Some(products) = refreshed {
            self.replace(products);
        }
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}
