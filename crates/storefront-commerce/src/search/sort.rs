//! Sort options for product listings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::CommerceError;

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Sort by title A-Z.
    #[default]
    Title,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by highest rated.
    Rating,
}

impl SortOption {
    /// All options, in menu order.
    pub const ALL: [SortOption; 4] = [
        SortOption::Title,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::Rating,
    ];

    /// Key used in query strings and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Title => "title",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Title => "Name: A-Z",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
        }
    }

    /// Compare two products under this ordering.
    ///
    /// Titles compare case-insensitively; unrated products rank as 0.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortOption::PriceAsc => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortOption::PriceDesc => b.price.amount_cents.cmp(&a.price.amount_cents),
            SortOption::Rating => b.rating_score().total_cmp(&a.rating_score()),
        }
    }

    /// Stable sort of `products` in place.
    pub fn sort(&self, products: &mut [Product]) {
        products.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::UnknownSortKey(s.to_string()))
    }
}
