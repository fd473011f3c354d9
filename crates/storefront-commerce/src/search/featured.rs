//! Featured product selection for the landing view.

use crate::catalog::Product;
use crate::search::SortOption;

/// Number of products featured on the landing view.
pub const FEATURED_LIMIT: usize = 8;

/// The `limit` highest-rated products. Ties keep catalog order.
pub fn featured(products: &[Product], limit: usize) -> Vec<Product> {
    let mut ranked = products.to_vec();
    SortOption::Rating.sort(&mut ranked);
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    #[test]
    fn test_featured_picks_top_rated() {
        let products: Vec<Product> = (1..=10)
            .map(|i| {
                Product::new(i, format!("P{}", i), Money::new(100, Currency::USD))
                    .with_rating((i % 5) as f64, 1)
            })
            .collect();

        let top = featured(&products, 3);
        let ids: Vec<u64> = top.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![4, 9, 3]);
    }

    #[test]
    fn test_featured_with_fewer_products_than_limit() {
        let products = vec![Product::new(1, "Only", Money::zero(Currency::USD))];
        assert_eq!(featured(&products, FEATURED_LIMIT).len(), 1);
        assert!(featured(&[], FEATURED_LIMIT).is_empty());
    }
}
