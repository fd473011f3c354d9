//! Product catalog module.
//!
//! Contains the read-only product and category types served by the catalog
//! service.

mod category;
mod product;

pub use category::Category;
pub use product::{Product, Rating};
