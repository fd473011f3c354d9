//! Storefront domain types and logic.
//!
//! This crate holds everything the storefront does without touching the network:
//!
//! - **Catalog**: Products, ratings, categories
//! - **Cart**: Line items, the observable [`CartStore`], pricing
//! - **Checkout**: Customer details, simulated order submission, confirmations
//! - **Search**: Filter state, sorting, featured selection
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let shirt = Product::new(1, "Cotton Shirt", Money::from_decimal(10.0, Currency::USD));
//!
//! let mut store = CartStore::new();
//! store.subscribe(|cart| println!("{} items in cart", cart.item_count()));
//! store.add_item(shirt, 2);
//!
//! assert_eq!(store.subtotal().amount_cents, 2000);
//! let pricing = store.pricing(&PricingPolicy::default());
//! assert_eq!(pricing.grand_total.display(), "$31.60");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, Product, Rating};

    // Cart
    pub use crate::cart::{
        Cart, CartListener, CartPricing, CartStore, LineItem, LineItemPricing, PricingPolicy,
        SubscriptionId,
    };

    // Checkout
    pub use crate::checkout::{
        Address, Checkout, CheckoutConfig, CheckoutDetails, CheckoutStatus, OrderConfirmation,
    };

    // Search
    pub use crate::search::{featured, FilterState, PriceRange, SortOption};
}
