//! Order confirmation types.

use crate::cart::{CartPricing, LineItem};
use crate::checkout::Address;
use crate::ids::OrderId;
use serde::{Deserialize, Serialize};

/// Record of a successfully submitted order.
///
/// Built from the cart right before it is cleared, so it stays valid after
/// the cart empties.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    /// Unique order identifier.
    pub id: OrderId,
    /// Customer email.
    pub email: String,
    /// Where the order ships.
    pub shipping_address: Address,
    /// Last four digits of the card used.
    pub card_last4: String,
    /// Purchased line items.
    pub items: Vec<LineItem>,
    /// Totals at submission time.
    pub pricing: CartPricing,
    /// Unix timestamp of placement.
    pub placed_at: i64,
}

impl OrderConfirmation {
    /// Short human-facing order number derived from the id.
    pub fn order_number(&self) -> String {
        let chars: Vec<char> = self.id.as_str().chars().collect();
        let tail: String = chars[chars.len().saturating_sub(8)..].iter().collect();
        format!("SF-{}", tail.to_uppercase())
    }

    /// Total number of units purchased.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}
