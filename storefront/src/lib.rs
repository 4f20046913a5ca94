//! Shared storefront model and action layer.
//!
//! This crate owns the REST wire types used by both `client` (browser) and
//! `cli` (terminal), plus the session and dispatch logic they render. Transport
//! and storage are injected through the [`StorefrontApi`] and
//! [`KeyValueStore`] traits so the flow is tested once, here.

pub mod actions;
pub mod api;
pub mod session;
pub mod types;

pub use actions::ActionError;
pub use api::{ApiError, DEFAULT_API_URL, StorefrontApi};
pub use session::{KeyValueStore, Session};
pub use types::{Credentials, ErrorBody, LoginResponse, NewProduct, Product, ProductId};
