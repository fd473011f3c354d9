//! Product listing filters.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Product};
use crate::money::{Currency, Money};
use crate::search::SortOption;

/// Upper price bound used before any catalog data is known.
const DEFAULT_MAX_PRICE_CENTS: i64 = 100_000;

/// Inclusive price range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    /// Create a range; bounds given in the wrong order are swapped.
    pub fn new(min: Money, max: Money) -> Self {
        if min.amount_cents <= max.amount_cents {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// `[0, ceil(highest price)]` over the given products, or the default
    /// range when there are none.
    pub fn covering(products: &[Product]) -> Self {
        match products.iter().map(|p| p.price).max_by_key(|m| m.amount_cents) {
            Some(highest) => Self::new(Money::zero(highest.currency), highest.ceil_whole()),
            None => Self::default(),
        }
    }

    /// Check if a price lies within the range, bounds included.
    pub fn contains(&self, price: Money) -> bool {
        price.amount_cents >= self.min.amount_cents && price.amount_cents <= self.max.amount_cents
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(
            Money::zero(Currency::USD),
            Money::new(DEFAULT_MAX_PRICE_CENTS, Currency::USD),
        )
    }
}

/// Filter and sort settings for a product listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FilterState {
    /// Free-text title search.
    pub search: String,
    /// Selected categories; empty means all.
    pub categories: Vec<Category>,
    /// Inclusive price range.
    pub price_range: PriceRange,
    /// Sort order.
    pub sort: SortOption,
}

impl FilterState {
    /// Default filters with the price range fitted to `products`.
    pub fn for_products(products: &[Product]) -> Self {
        Self {
            price_range: PriceRange::covering(products),
            ..Self::default()
        }
    }

    /// Set the search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Select a category.
    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        let category = category.into();
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Select the category if unselected, otherwise deselect it.
    pub fn toggle_category(&mut self, category: &Category) {
        if let Some(index) = self.categories.iter().position(|c| c == category) {
            self.categories.remove(index);
        } else {
            self.categories.push(category.clone());
        }
    }

    /// Reset everything, refitting the price range to `products`.
    pub fn clear(&mut self, products: &[Product]) {
        *self = Self::for_products(products);
    }

    /// Number of active filter chips: one per category, plus one for a
    /// non-empty search.
    pub fn active_filter_count(&self) -> usize {
        self.categories.len() + usize::from(!self.search.trim().is_empty())
    }

    /// Check if a product passes the search, category and price filters.
    pub fn matches(&self, product: &Product) -> bool {
        product.matches_search(&self.search)
            && (self.categories.is_empty() || self.categories.contains(&product.category))
            && self.price_range.contains(product.price)
    }

    /// Products passing the filters, in the selected order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut filtered: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();
        self.sort.sort(&mut filtered);
        filtered
    }

    /// Query-string pairs: `search`, `sort` (omitted for the default), and
    /// one `category` per selected category.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search".to_string(), self.search.clone()));
        }
        if self.sort != SortOption::default() {
            pairs.push(("sort".to_string(), self.sort.as_str().to_string()));
        }
        for category in &self.categories {
            pairs.push(("category".to_string(), category.as_str().to_string()));
        }
        pairs
    }

    /// Rebuild filters from query-string pairs. Unknown keys and unknown
    /// sort values are ignored; the price range is left at its default.
    pub fn from_query_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut state = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "search" => state.search = value.to_string(),
                "sort" => state.sort = value.parse().unwrap_or_default(),
                "category" => state = state.with_category(value),
                _ => {}
            }
        }
        state
    }
}
