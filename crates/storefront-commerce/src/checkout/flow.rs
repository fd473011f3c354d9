//! Simulated checkout flow.
//!
//! There is no payment gateway: submission validates the form, waits a
//! fixed delay standing in for order processing, records a confirmation,
//! and clears the cart. There is no failure path after validation.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cart::{CartStore, PricingPolicy};
use crate::checkout::{Address, OrderConfirmation};
use crate::ids::OrderId;
use crate::CommerceError;

/// Where the checkout is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutStatus {
    /// Waiting for the customer to submit.
    #[default]
    Idle,
    /// Order submitted, waiting for the simulated processing delay.
    Processing,
    /// Order placed; the cart has been cleared.
    Complete,
}

impl CheckoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStatus::Idle => "idle",
            CheckoutStatus::Processing => "processing",
            CheckoutStatus::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStatus::Idle => "Ready",
            CheckoutStatus::Processing => "Processing...",
            CheckoutStatus::Complete => "Order Complete",
        }
    }
}

/// Customer input collected by the checkout form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CheckoutDetails {
    /// Contact email.
    pub email: String,
    /// Shipping address.
    pub shipping_address: Address,
    /// Card number as typed (spaces and dashes allowed).
    pub card_number: String,
}

impl CheckoutDetails {
    /// Required fields that are blank or malformed.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            missing.push("email");
        }
        missing.extend(self.shipping_address.missing_fields());
        if self.card_digits().is_none() {
            missing.push("card number");
        }
        missing
    }

    /// Last four digits of a well-formed card number.
    pub fn card_last4(&self) -> Option<String> {
        self.card_digits()
            .map(|digits| digits[digits.len() - 4..].to_string())
    }

    fn card_digits(&self) -> Option<String> {
        let digits: String = self
            .card_number
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .collect();
        let valid = (12..=19).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit());
        valid.then_some(digits)
    }
}

/// Checkout settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckoutConfig {
    /// Simulated processing time.
    pub delay: Duration,
    /// Shipping and tax applied to the order.
    pub pricing: PricingPolicy,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(2),
            pricing: PricingPolicy::default(),
        }
    }
}

/// Checkout flow state.
#[derive(Debug, Clone, Default)]
pub struct Checkout {
    config: CheckoutConfig,
    status: CheckoutStatus,
    last_order: Option<OrderConfirmation>,
}

impl Checkout {
    /// Create a checkout with the given settings.
    pub fn new(config: CheckoutConfig) -> Self {
        Self {
            config,
            status: CheckoutStatus::Idle,
            last_order: None,
        }
    }

    /// Current status.
    pub fn status(&self) -> CheckoutStatus {
        self.status
    }

    /// Check if an order has been placed.
    pub fn is_complete(&self) -> bool {
        self.status == CheckoutStatus::Complete
    }

    /// The most recently placed order.
    pub fn last_order(&self) -> Option<&OrderConfirmation> {
        self.last_order.as_ref()
    }

    /// Settings in use.
    pub fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    /// Return to the idle state, forgetting the last order.
    pub fn reset(&mut self) {
        self.status = CheckoutStatus::Idle;
        self.last_order = None;
    }

    /// Submit the order for everything in the cart.
    ///
    /// Fails only on an empty cart or incomplete details. Otherwise waits
    /// for the configured delay, then clears the cart and returns the
    /// confirmation.
    pub async fn submit(
        &mut self,
        store: &mut CartStore,
        details: CheckoutDetails,
    ) -> Result<OrderConfirmation, CommerceError> {
        if store.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let missing = details.missing_fields();
        if !missing.is_empty() {
            return Err(CommerceError::CheckoutIncomplete(missing.join(", ")));
        }
        let card_last4 = details.card_last4().unwrap_or_default();

        let pricing = store.pricing(&self.config.pricing);
        let items = store.items().to_vec();

        self.status = CheckoutStatus::Processing;
        info!(
            items = store.item_count(),
            total = %pricing.grand_total,
            "submitting order"
        );
        tokio::time::sleep(self.config.delay).await;

        let order = OrderConfirmation {
            id: OrderId::generate(),
            email: details.email.trim().to_string(),
            shipping_address: details.shipping_address,
            card_last4,
            items,
            pricing,
            placed_at: current_timestamp(),
        };

        store.clear();
        self.status = CheckoutStatus::Complete;
        self.last_order = Some(order.clone());
        info!(order_id = %order.id, "order placed");

        Ok(order)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
