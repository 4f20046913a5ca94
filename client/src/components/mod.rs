//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront fragments while reading/writing shared state
//! from Leptos context providers.

pub mod admin_panel;
pub mod auth_form;
pub mod header;
pub mod product_card;
