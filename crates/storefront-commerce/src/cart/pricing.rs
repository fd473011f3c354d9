//! Cart pricing calculations.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Flat shipping and a single tax rate applied to the subtotal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PricingPolicy {
    /// Shipping charged once per non-empty order.
    pub shipping_flat: Money,
    /// Tax rate as a percentage of the subtotal.
    pub tax_rate_percent: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            shipping_flat: Money::new(1000, Currency::USD),
            tax_rate_percent: 8.0,
        }
    }
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping cost.
    pub shipping_total: Money,
    /// Tax amount.
    pub tax_total: Money,
    /// Final total (subtotal + shipping + tax).
    pub grand_total: Money,
    /// Per-line-item pricing breakdown.
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    /// Total number of units across all lines.
    pub fn item_count(&self) -> i64 {
        self.line_items.iter().map(|l| l.quantity).sum()
    }
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Line total (unit_price * quantity).
    pub total: Money,
}
