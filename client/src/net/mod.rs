//! Networking for the storefront backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the shared `StorefrontApi` contract over browser fetch.

pub mod api;
