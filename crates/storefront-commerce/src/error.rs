//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Cart mutations never produce these; out-of-range input there is
/// normalized instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Checkout attempted with nothing in the cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Unrecognized sort key.
    #[error("Unknown sort option: {0}")]
    UnknownSortKey(String),

    /// Malformed product id.
    #[error("Invalid product id: {0}")]
    InvalidProductId(String),
}
