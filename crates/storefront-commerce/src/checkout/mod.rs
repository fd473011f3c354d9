//! Checkout module.
//!
//! Contains customer details, the simulated submission flow, and order
//! confirmations.

mod address;
mod flow;
mod order;

pub use address::Address;
pub use flow::{Checkout, CheckoutConfig, CheckoutDetails, CheckoutStatus};
pub use order::OrderConfirmation;
