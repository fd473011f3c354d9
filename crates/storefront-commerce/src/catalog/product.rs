//! Product types.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// Aggregate customer rating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Rating {
    /// Average score, 0 to 5.
    pub rate: f64,
    /// Number of reviews.
    pub count: u32,
}

impl Rating {
    /// Create a rating, clamping the score into 0..=5.
    pub fn new(rate: f64, count: u32) -> Self {
        let rate = if rate.is_finite() { rate.clamp(0.0, 5.0) } else { 0.0 };
        Self { rate, count }
    }

    /// Score rounded to whole stars.
    pub fn stars(&self) -> u8 {
        self.rate.clamp(0.0, 5.0).round() as u8
    }
}

/// A product in the catalog.
///
/// Products are owned by the catalog service; the storefront never
/// mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price.
    #[serde(with = "money::decimal")]
    pub price: Money,
    /// Category label.
    pub category: Category,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Customer rating, when the catalog has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Create a product with an empty category, description and image.
    pub fn new(id: u64, title: impl Into<String>, price: Money) -> Self {
        Self {
            id: ProductId::new(id),
            title: title.into(),
            price,
            category: Category::new(""),
            description: String::new(),
            image: String::new(),
            rating: None,
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rate: f64, count: u32) -> Self {
        self.rating = Some(Rating::new(rate, count));
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Average rating, or 0 when unrated.
    pub fn rating_score(&self) -> f64 {
        self.rating.map(|r| r.rate).unwrap_or(0.0)
    }

    /// Case-insensitive substring match on the title.
    ///
    /// An empty or whitespace-only term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim();
        term.is_empty() || self.title.to_lowercase().contains(&term.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    const CATALOG_ITEM: &str = r#"{
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
        "price": 109.95,
        "description": "Your perfect pack for everyday use",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    }"#;

    #[test]
    fn test_deserialize_catalog_item() {
        let product: Product = serde_json::from_str(CATALOG_ITEM).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, Money::new(10995, Currency::USD));
        assert_eq!(product.category, Category::new("men's clothing"));
        assert_eq!(product.rating, Some(Rating { rate: 3.9, count: 120 }));
    }

    #[test]
    fn test_deserialize_without_rating() {
        let product: Product = serde_json::from_str(
            r#"{"id": 2, "title": "Mug", "price": 5, "category": "kitchen"}"#,
        )
        .unwrap();
        assert!(product.rating.is_none());
        assert_eq!(product.rating_score(), 0.0);
        assert!(product.description.is_empty());
    }

    #[test]
    fn test_matches_search() {
        let product = Product::new(1, "Solid Gold Petite Micropave", Money::zero(Currency::USD));
        assert!(product.matches_search("gold"));
        assert!(product.matches_search("  PETITE "));
        assert!(product.matches_search(""));
        assert!(!product.matches_search("silver"));
    }

    #[test]
    fn test_rating_clamped() {
        let rating = Rating::new(7.2, 3);
        assert_eq!(rating.rate, 5.0);
        assert_eq!(rating.stars(), 5);
        assert_eq!(Rating::new(3.4, 1).stars(), 3);
        assert_eq!(Rating::new(f64::NAN, 0).rate, 0.0);
    }
}
