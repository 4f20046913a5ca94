//! Plain-text rendering of the catalog and session.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use storefront::{Product, Session};

/// One row per product, sold-out items flagged.
pub fn catalog_table(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products.\n".to_owned();
    }
    let mut out = format!("{:<6} {:<24} {:>10} {:>6}\n", "ID", "NAME", "PRICE", "STOCK");
    for p in products {
        let flag = if p.is_sold_out() { "  Sold Out" } else { "" };
        let _ = writeln!(out, "{:<6} {:<24} {:>10} {:>6}{flag}", p.id, p.name, p.price_label(), p.stock);
    }
    out
}

/// Header line: `Role: ADMIN` when signed in, `Guest Mode` otherwise.
pub fn session_line(session: Option<&Session>) -> String {
    match session {
        Some(s) => format!("Role: {}", s.role_label()),
        None => "Guest Mode".to_owned(),
    }
}
