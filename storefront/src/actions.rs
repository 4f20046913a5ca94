//! User actions dispatched against the backend.
//!
//! DESIGN
//! ======
//! Each action is a single request with no retry. Mutations refetch the
//! catalog on success and hand the fresh list back, so the caller replaces
//! its copy wholesale. A failed refetch after a successful mutation is not an
//! error; it is logged and the caller keeps its stale list.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as [`ActionError`] whose `Display` is the exact text the
//! user should see: the server's `error` string when it sent one, otherwise a
//! generic fallback.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::api::{ApiError, StorefrontApi};
use crate::session::{self, KeyValueStore, Session};
use crate::types::{Credentials, NewProduct, Product, ProductId};

pub const AUTH_FAILED: &str = "Authentication Failed";
pub const REGISTERED: &str = "Registration Successful! Please Login.";
pub const PURCHASE_FAILED: &str = "Purchase Failed";
pub const ADD_FAILED: &str = "Failed to add product";
pub const DELETE_FAILED: &str = "Delete failed";

/// Catalog returned by a mutation: `None` when the follow-up fetch failed.
pub type Refreshed = Option<Vec<Product>>;

/// A user-facing action failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// Form input rejected before any request was made.
    #[error("{0}")]
    Invalid(&'static str),
    /// The action needs a session and there is none.
    #[error("Please Login to {0}!")]
    LoginRequired(&'static str),
    /// Purchase attempted on a product with no stock; nothing was sent.
    #[error("Sold Out")]
    SoldOut,
    /// The backend call failed.
    #[error("{0}")]
    Rejected(String),
}

fn rejected(err: &ApiError, fallback: &str) -> ActionError {
    ActionError::Rejected(err.server_message().unwrap_or(fallback).to_owned())
}

fn rejected_with_prefix(err: &ApiError, prefix: &str) -> ActionError {
    match err.server_message() {
        Some(msg) => ActionError::Rejected(format!("{prefix}: {msg}")),
        None => ActionError::Rejected(prefix.to_owned()),
    }
}

fn require_session<'a>(
    session: Option<&'a Session>,
    action: &'static str,
) -> Result<&'a Session, ActionError> {
    session.ok_or(ActionError::LoginRequired(action))
}

/// Fetch the catalog. Failures are logged and swallowed.
pub async fn refresh_catalog<A>(api: &A) -> Option<Vec<Product>>
where
    A: StorefrontApi + ?Sized,
{
    match api.list_products().await {
        Ok(products) => Some(products),
        Err(e) => {
            tracing::warn!(error = %e, "failed to fetch products");
            None
        }
    }
}

/// Create an account. Returns the notice to show on success.
///
/// # Errors
///
/// Returns [`ActionError::Rejected`] with the server message or
/// [`AUTH_FAILED`].
pub async fn register<A>(api: &A, credentials: &Credentials) -> Result<&'static str, ActionError>
where
    A: StorefrontApi + ?Sized,
{
    api.register(credentials).await.map_err(|e| rejected(&e, AUTH_FAILED))?;
    tracing::debug!("registered");
    Ok(REGISTERED)
}

/// Sign in and persist the resulting session into `store`.
///
/// # Errors
///
/// Returns [`ActionError::Rejected`] with the server message or
/// [`AUTH_FAILED`]. The store is left untouched on failure.
pub async fn login<A, S>(api: &A, store: &S, credentials: &Credentials) -> Result<Session, ActionError>
where
    A: StorefrontApi + ?Sized,
    S: KeyValueStore,
{
    let resp = api.login(credentials).await.map_err(|e| rejected(&e, AUTH_FAILED))?;
    let session = Session::from(resp);
    session::persist(store, &session);
    tracing::debug!(role = %session.role, "signed in");
    Ok(session)
}

/// Drop the persisted session. The caller resets its in-memory copy.
pub fn logout<S: KeyValueStore>(store: &S) {
    session::clear(store);
}

/// Add a product, then refetch the catalog.
///
/// # Errors
///
/// [`ActionError::LoginRequired`] without a session; otherwise
/// [`ActionError::Rejected`] prefixed with [`ADD_FAILED`].
pub async fn add_product<A>(
    api: &A,
    session: Option<&Session>,
    product: &NewProduct,
) -> Result<Refreshed, ActionError>
where
    A: StorefrontApi + ?Sized,
{
    let session = require_session(session, "Add Products")?;
    api.create_product(&session.token, product)
        .await
        .map_err(|e| rejected_with_prefix(&e, ADD_FAILED))?;
    tracing::debug!(name = %product.name, "product added");
    Ok(refresh_catalog(api).await)
}

/// Delete a product, then refetch the catalog.
///
/// # Errors
///
/// [`ActionError::LoginRequired`] without a session; otherwise
/// [`ActionError::Rejected`] prefixed with [`DELETE_FAILED`].
pub async fn delete_product<A>(
    api: &A,
    session: Option<&Session>,
    id: ProductId,
) -> Result<Refreshed, ActionError>
where
    A: StorefrontApi + ?Sized,
{
    let session = require_session(session, "Delete Products")?;
    api.delete_product(&session.token, id)
        .await
        .map_err(|e| rejected_with_prefix(&e, DELETE_FAILED))?;
    tracing::debug!(id, "product deleted");
    Ok(refresh_catalog(api).await)
}

/// Buy one unit of `product`, then refetch the catalog.
///
/// # Errors
///
/// [`ActionError::LoginRequired`] without a session, [`ActionError::SoldOut`]
/// when stock is exhausted (nothing is sent in either case), otherwise
/// [`ActionError::Rejected`] with the server message or [`PURCHASE_FAILED`].
pub async fn buy<A>(api: &A, session: Option<&Session>, product: &Product) -> Result<Refreshed, ActionError>
where
    A: StorefrontApi + ?Sized,
{
    let session = require_session(session, "Buy")?;
    if product.is_sold_out() {
        return Err(ActionError::SoldOut);
    }
    api.buy_product(&session.token, product.id)
        .await
        .map_err(|e| rejected(&e, PURCHASE_FAILED))?;
    tracing::debug!(id = product.id, "product bought");
    Ok(refresh_catalog(api).await)
}
