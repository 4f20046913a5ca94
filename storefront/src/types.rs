//! REST DTOs for the storefront backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly so serde needs no renames.
//! Request bodies validate on construction; response bodies are trusted.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::actions::ActionError;

/// Backend identifier for a product.
pub type ProductId = i64;

/// A catalog entry as returned by `GET /products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in the store currency.
    pub price: f64,
    /// Units left in stock.
    pub stock: i64,
}

impl Product {
    /// True when nothing is left to buy.
    #[must_use]
    pub fn is_sold_out(&self) -> bool {
        self.stock <= 0
    }

    /// Price formatted for display, e.g. `$10` or `$12.5`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

/// Body for `POST /login` and `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Build credentials from raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Invalid`] when the trimmed email or the password
    /// is empty.
    pub fn new(email: &str, password: &str) -> Result<Self, ActionError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ActionError::Invalid("Email is required."));
        }
        if password.is_empty() {
            return Err(ActionError::Invalid("Password is required."));
        }
        Ok(Self { email: email.to_owned(), password: password.to_owned() })
    }
}

/// Successful `POST /login` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
}

/// Body for `POST /products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

impl NewProduct {
    /// Build a product from typed values.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Invalid`] for an empty name, a negative or
    /// non-finite price, or negative stock.
    pub fn new(name: &str, price: f64, stock: i64) -> Result<Self, ActionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ActionError::Invalid("Product name is required."));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(ActionError::Invalid("Price must be a non-negative number."));
        }
        if stock < 0 {
            return Err(ActionError::Invalid("Stock must be a non-negative whole number."));
        }
        Ok(Self { name: name.to_owned(), price, stock })
    }

    /// Build a product from the raw text of the admin form fields.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Invalid`] when a field fails to parse or fails
    /// the checks in [`NewProduct::new`].
    pub fn parse(name: &str, price: &str, stock: &str) -> Result<Self, ActionError> {
        let price = price
            .trim()
            .parse::<f64>()
            .map_err(|_| ActionError::Invalid("Price must be a non-negative number."))?;
        let stock = stock
            .trim()
            .parse::<i64>()
            .map_err(|_| ActionError::Invalid("Stock must be a non-negative whole number."))?;
        Self::new(name, price, stock)
    }
}

/// Error payload a failing backend call may carry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
