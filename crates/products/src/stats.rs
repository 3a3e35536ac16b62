//! Aggregate statistics over the catalog.

use crate::category::Category;
use crate::product::Product;

/// Summary of the current catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats {
    pub total_products: usize,
    /// Mean price rounded to 2 decimal places; `0.0` for an empty catalog.
    pub average_price: f64,
    /// Category with the highest count. Ties go to the category that
    /// appears first in catalog order.
    pub most_popular_category: Option<Category>,
    /// Per-category counts, ordered by first appearance in the catalog.
    pub products_per_category: Vec<(Category, usize)>,
}

impl CatalogStats {
    pub fn compute(products: &[Product]) -> Self {
        if products.is_empty() {
            return Self {
                total_products: 0,
                average_price: 0.0,
                most_popular_category: None,
                products_per_category: Vec::new(),
            };
        }

        let total = products.len();
        let sum: f64 = products.iter().map(Product::price).sum();

        let mut counts: Vec<(Category, usize)> = Vec::new();
        for product in products {
            match counts.iter_mut().find(|(c, _)| *c == product.category()) {
                Some((_, n)) => *n += 1,
                None => counts.push((product.category(), 1)),
            }
        }

        // Strict `>` keeps the first maximum on ties.
        let mut popular: Option<(Category, usize)> = None;
        for &(category, n) in &counts {
            if popular.is_none_or(|(_, best)| n > best) {
                popular = Some((category, n));
            }
        }

        Self {
            total_products: total,
            average_price: round2(sum / total as f64),
            most_popular_category: popular.map(|(c, _)| c),
            products_per_category: counts,
        }
    }

    pub fn count_for(&self, category: Category) -> usize {
        self.products_per_category
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

/// Round to cents, ties to even (0.125 -> 0.12).
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
