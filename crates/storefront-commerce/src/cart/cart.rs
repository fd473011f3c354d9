//! Cart and line item types.

use crate::cart::{CartPricing, LineItemPricing, PricingPolicy};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Cart state: ordered line items plus their aggregates.
///
/// Line items keep the order in which products were first added. At most
/// one line item exists per product, and every stored quantity is at
/// least 1. `subtotal` and `item_count` are recomputed after every
/// mutation; both saturate instead of overflowing.
///
/// Mutation goes through [`CartStore`](crate::cart::CartStore), which
/// notifies listeners.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: Currency,
    subtotal: Money,
    item_count: i64,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
            subtotal: Money::zero(currency),
            item_count: 0,
        }
    }

    /// Add `quantity` of a product.
    ///
    /// Merges into an existing line item for the same product. A combined
    /// quantity of zero or less removes the line item; a non-positive
    /// quantity for a product not yet in the cart does nothing.
    pub(crate) fn add_item(&mut self, product: Product, quantity: i64) {
        match self.position(product.id) {
            Some(index) => {
                let combined = self.items[index].quantity.saturating_add(quantity);
                if combined <= 0 {
                    self.items.remove(index);
                } else {
                    self.items[index].set_quantity(combined);
                }
            }
            None if quantity >= 1 => self.items.push(LineItem::new(product, quantity)),
            None => {}
        }
        self.recompute();
    }

    /// Set a line item's quantity exactly. Non-positive quantities remove
    /// it; unknown products are ignored.
    pub(crate) fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(index) = self.position(product_id) {
            self.items[index].set_quantity(quantity);
        }
        self.recompute();
    }

    /// Remove a line item if present.
    pub(crate) fn remove_item(&mut self, product_id: ProductId) {
        self.items.retain(|i| i.product.id != product_id);
        self.recompute();
    }

    /// Remove every line item.
    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.recompute();
    }

    /// Line items in first-added order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of unit price times quantity over all line items.
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.item_count
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the line item for a product.
    pub fn get_item(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Calculate the order summary under a pricing policy.
    ///
    /// An empty cart prices to zero across the board; shipping is only
    /// charged when there is something to ship.
    pub fn calculate_pricing(&self, policy: &PricingPolicy) -> CartPricing {
        let line_items: Vec<LineItemPricing> = self
            .items
            .iter()
            .map(|item| LineItemPricing {
                product_id: item.product.id,
                title: item.product.title.clone(),
                unit_price: item.product.price,
                quantity: item.quantity,
                total: item.total_price,
            })
            .collect();

        if self.is_empty() {
            let zero = Money::zero(self.currency);
            return CartPricing {
                subtotal: zero,
                shipping_total: zero,
                tax_total: zero,
                grand_total: zero,
                line_items,
            };
        }

        let subtotal = self.subtotal;
        let shipping_total = Money::new(policy.shipping_flat.amount_cents, self.currency);
        let tax_total = subtotal.percentage(policy.tax_rate_percent);
        let grand_total = Money::sum(
            [subtotal, shipping_total, tax_total].iter(),
            self.currency,
        );

        CartPricing {
            subtotal,
            shipping_total,
            tax_total,
            grand_total,
            line_items,
        }
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|i| i.product.id == product_id)
    }

    fn recompute(&mut self) {
        self.subtotal = Money::sum(self.items.iter().map(|i| &i.total_price), self.currency);
        self.item_count = self
            .items
            .iter()
            .map(|i| i.quantity)
            .fold(0_i64, i64::saturating_add);
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::USD)
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product snapshot taken when first added.
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: i64,
    /// Total price (unit price * quantity).
    pub total_price: Money,
}

impl LineItem {
    fn new(product: Product, quantity: i64) -> Self {
        let mut item = Self {
            total_price: product.price,
            product,
            quantity: 1,
        };
        item.set_quantity(quantity);
        item
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity.max(1);
        self.total_price = self.product.price.multiply(self.quantity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), Money::new(cents, Currency::USD))
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.subtotal().is_zero());
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::default();
        cart.add_item(product(1, 1000), 2);

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.subtotal().amount_cents, 2000);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::default();
        cart.add_item(product(1, 1000), 1);
        cart.add_item(product(1, 1000), 2);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.get_item(ProductId::new(1)).unwrap().quantity, 3);
    }

    #[test]
    fn test_add_preserves_first_added_order() {
        let mut cart = Cart::default();
        cart.add_item(product(3, 100), 1);
        cart.add_item(product(1, 100), 1);
        cart.add_item(product(3, 100), 1);
        cart.add_item(product(2, 100), 1);

        let ids: Vec<u64> = cart.items().iter().map(|i| i.product.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_add_non_positive_quantity_to_new_product_is_ignored() {
        let mut cart = Cart::default();
        cart.add_item(product(1, 1000), 0);
        cart.add_item(product(2, 1000), -4);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_negative_quantity_that_empties_line_removes_it() {
        let mut cart = Cart::default();
        cart.add_item(product(1, 1000), 2);
        cart.add_item(product(1, 1000), -1);
        assert_eq!(cart.item_count(), 1);

        cart.add_item(product(1, 1000), -5);
        assert!(cart.is_empty());
        assert!(cart.subtotal().is_zero());
    }

    #[test]
    fn test_update_quantity_sets_exactly() {
        let mut cart = Cart::default();
        cart.add_item(product(1, 1000), 3);
        cart.update_quantity(ProductId::new(1), 5);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.subtotal().amount_cents, 5000);
    }

    #[test]
    fn test_update_unknown_product_is_noop() {
        let mut cart = Cart::default();
        cart.add_item(product(1, 1000), 1);
        let before = cart.clone();
        cart.update_quantity(ProductId::new(99), 4);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_large_quantities_are_kept_exactly() {
        let mut cart = Cart::default();
        cart.add_item(product(1, 100), 6000);
        cart.add_item(product(1, 100), 6000);
        assert_eq!(cart.get_item(ProductId::new(1)).map(|i| i.quantity), Some(12000));
        assert_eq!(cart.item_count(), 12000);
        assert_eq!(cart.subtotal().amount_cents, 1_200_000);

        cart.update_quantity(ProductId::new(1), 20000);
        assert_eq!(cart.item_count(), 20000);
        assert_eq!(cart.subtotal().amount_cents, 2_000_000);
    }

    #[test]
    fn test_overflowing_quantity_saturates() {
        let mut cart = Cart::default();
        cart.add_item(product(1, 100), i64::MAX);
        cart.add_item(product(1, 100), 5);
        assert_eq!(cart.item_count(), i64::MAX);
        assert_eq!(cart.subtotal().amount_cents, i64::MAX);
    }

    #[test]
    fn test_pricing() {
        let mut cart = Cart::default();
        cart.add_item(product(1, 1000), 2);
        cart.add_item(product(2, 500), 1);

        let pricing = cart.calculate_pricing(&PricingPolicy::default());
        assert_eq!(pricing.subtotal.amount_cents, 2500);
        assert_eq!(pricing.shipping_total.amount_cents, 1000);
        assert_eq!(pricing.tax_total.amount_cents, 200);
        assert_eq!(pricing.grand_total.amount_cents, 3700);
        assert_eq!(pricing.line_items.len(), 2);
        assert_eq!(pricing.line_items[0].total.amount_cents, 2000);
    }

    #[test]
    fn test_pricing_empty_cart_is_zero() {
        let pricing = Cart::default().calculate_pricing(&PricingPolicy::default());
        assert!(pricing.grand_total.is_zero());
        assert!(pricing.shipping_total.is_zero());
        assert!(pricing.line_items.is_empty());
    }
}
