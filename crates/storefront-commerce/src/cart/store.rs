//! Observable cart store.
//!
//! The store is the only writer of a session's [`Cart`]. Views that need
//! the cart are handed the store (or a reference to it) instead of reaching
//! for a global. Each mutating call updates the cart, recomputes its
//! aggregates, then calls every registered listener with the new state
//! before returning.

use std::fmt;

use tracing::debug;

use crate::cart::{Cart, CartPricing, LineItem, PricingPolicy};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Callback invoked after every cart mutation.
pub type CartListener = Box<dyn FnMut(&Cart)>;

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Single-consumer cart state container with change notification.
///
/// Not `Sync`: the store lives on the thread that drives the storefront and
/// needs no locking.
pub struct CartStore {
    cart: Cart,
    listeners: Vec<(SubscriptionId, CartListener)>,
    next_subscription: u64,
}

impl CartStore {
    /// Create a store holding an empty USD cart.
    pub fn new() -> Self {
        Self {
            cart: Cart::new(Currency::USD),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Register a listener. It is called synchronously after each mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&Cart) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() < len_before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Add `quantity` of a product, merging with any existing line item.
    pub fn add_item(&mut self, product: Product, quantity: i64) {
        debug!(product_id = %product.id, quantity, "cart add");
        self.cart.add_item(product, quantity);
        self.notify();
    }

    /// Add a single unit of a product.
    pub fn add_one(&mut self, product: Product) {
        self.add_item(product, 1);
    }

    /// Set a product's quantity. Zero or less removes the line item;
    /// unknown products are left alone.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        debug!(%product_id, quantity, "cart update quantity");
        self.cart.update_quantity(product_id, quantity);
        self.notify();
    }

    /// Remove a product's line item, if any.
    pub fn remove_item(&mut self, product_id: ProductId) {
        debug!(%product_id, "cart remove");
        self.cart.remove_item(product_id);
        self.notify();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        debug!("cart clear");
        self.cart.clear();
        self.notify();
    }

    /// End the session: empty the cart. Listeners stay registered.
    pub fn reset(&mut self) {
        self.clear();
    }

    /// Current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Line items in first-added order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Current subtotal.
    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    /// Current item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Line item for a product.
    pub fn get_item(&self, product_id: ProductId) -> Option<&LineItem> {
        self.cart.get_item(product_id)
    }

    /// Order summary for the current cart.
    pub fn pricing(&self, policy: &PricingPolicy) -> CartPricing {
        self.cart.calculate_pricing(policy)
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.cart);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn product(id: u64, dollars: f64) -> Product {
        Product::new(id, format!("Product {}", id), Money::from_decimal(dollars, Currency::USD))
    }

    fn recorder(store: &mut CartStore) -> Rc<RefCell<Vec<(i64, i64)>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |cart| {
            sink.borrow_mut()
                .push((cart.item_count(), cart.subtotal().amount_cents));
        });
        seen
    }

    #[test]
    fn test_cart_scenario() {
        let mut store = CartStore::new();
        let a = product(1, 10.0);
        let b = product(2, 5.0);

        store.add_item(a.clone(), 2);
        assert_eq!(store.subtotal().amount_cents, 2000);
        assert_eq!(store.item_count(), 2);

        store.add_item(b, 1);
        assert_eq!(store.subtotal().amount_cents, 2500);
        assert_eq!(store.item_count(), 3);

        store.update_quantity(a.id, 0);
        assert!(store.get_item(a.id).is_none());
        assert_eq!(store.subtotal().amount_cents, 500);
        assert_eq!(store.item_count(), 1);

        store.clear();
        assert!(store.subtotal().is_zero());
        assert_eq!(store.item_count(), 0);
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_add_one_defaults_to_single_unit() {
        let mut store = CartStore::new();
        store.add_one(product(1, 3.5));
        store.add_one(product(1, 3.5));
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.item_count(), 2);
        assert_eq!(store.subtotal().amount_cents, 700);
    }

    #[test]
    fn test_listeners_see_state_after_each_mutation() {
        let mut store = CartStore::new();
        let seen = recorder(&mut store);

        store.add_item(product(1, 10.0), 2);
        store.add_item(product(2, 5.0), 1);
        store.update_quantity(ProductId::new(1), 0);
        store.clear();

        assert_eq!(
            *seen.borrow(),
            vec![(2, 2000), (3, 2500), (1, 500), (0, 0)]
        );
    }

    #[test]
    fn test_noop_mutations_still_notify() {
        let mut store = CartStore::new();
        let seen = recorder(&mut store);

        store.remove_item(ProductId::new(42));
        store.update_quantity(ProductId::new(42), 3);
        assert_eq!(seen.borrow().len(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_missing_item_leaves_state_unchanged() {
        let mut store = CartStore::new();
        store.add_item(product(1, 10.0), 2);
        let before = store.cart().clone();

        store.remove_item(ProductId::new(7));
        assert_eq!(store.cart(), &before);
    }

    #[test]
    fn test_update_quantity_is_not_additive() {
        let mut store = CartStore::new();
        store.add_item(product(1, 10.0), 4);
        store.update_quantity(ProductId::new(1), 2);
        assert_eq!(store.get_item(ProductId::new(1)).unwrap().quantity, 2);

        store.update_quantity(ProductId::new(1), -3);
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut once = CartStore::new();
        once.add_item(product(1, 10.0), 2);
        once.clear();

        let mut twice = CartStore::new();
        twice.add_item(product(1, 10.0), 2);
        twice.clear();
        twice.clear();

        assert_eq!(once.cart(), twice.cart());
        assert_eq!(twice.item_count(), 0);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = CartStore::new();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);
        assert_eq!(store.listener_count(), 1);

        store.add_one(product(1, 1.0));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add_one(product(1, 1.0));

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_reset_keeps_listeners() {
        let mut store = CartStore::new();
        let seen = recorder(&mut store);
        store.add_one(product(1, 1.0));
        store.reset();

        assert!(store.is_empty());
        assert_eq!(store.listener_count(), 1);
        assert_eq!(seen.borrow().last(), Some(&(0, 0)));
    }

    #[test]
    fn test_pricing_through_store() {
        let mut store = CartStore::new();
        store.add_item(product(1, 10.0), 2);
        store.add_item(product(2, 5.0), 1);

        let pricing = store.pricing(&PricingPolicy::default());
        assert_eq!(pricing.subtotal.display(), "$25.00");
        assert_eq!(pricing.shipping_total.display(), "$10.00");
        assert_eq!(pricing.tax_total.display(), "$2.00");
        assert_eq!(pricing.grand_total.display(), "$37.00");
    }
}
