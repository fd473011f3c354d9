//! Search module.
//!
//! Contains the product listing filter state, sort options, and featured
//! product selection.

mod featured;
mod filter;
mod sort;

pub use featured::{featured, FEATURED_LIMIT};
pub use filter::{FilterState, PriceRange};
pub use sort::SortOption;
