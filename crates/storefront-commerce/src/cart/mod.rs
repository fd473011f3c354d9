//! Shopping cart module.
//!
//! Contains the cart state, the observable store that owns it, and pricing.

mod cart;
mod pricing;
mod store;

pub use cart::{Cart, LineItem};
pub use pricing::{CartPricing, LineItemPricing, PricingPolicy};
pub use store::{CartListener, CartStore, SubscriptionId};
