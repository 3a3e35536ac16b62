//! Catalog search: category, free-text term, and price bounds.

use campustrade_core::{DomainError, DomainResult};

use crate::category::Category;
use crate::product::Product;

/// Minimum length (in characters) of a free-text search term.
pub const MIN_TERM_LEN: usize = 2;

/// Validated search criteria. Every criterion is optional; an empty filter
/// keeps the whole catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    category: Option<Category>,
    term: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
}

impl SearchFilter {
    /// Build a filter from raw query values.
    ///
    /// An empty `category` counts as absent. The term is stored lowercase.
    pub fn from_query(
        category: Option<&str>,
        term: Option<&str>,
        min_price: Option<f64>,
        max_price: Option<f64>,
    ) -> DomainResult<Self> {
        let category = match category {
            Some(raw) if !raw.is_empty() => Some(raw.parse::<Category>()?),
            _ => None,
        };

        let term = match term {
            Some(raw) if raw.chars().count() < MIN_TERM_LEN => {
                return Err(DomainError::validation(format!(
                    "termo must be at least {MIN_TERM_LEN} characters"
                )));
            }
            Some(raw) => Some(raw.to_lowercase()),
            None => None,
        };

        for (name, bound) in [("preco_min", min_price), ("preco_max", max_price)] {
            if let Some(value) = bound {
                if !value.is_finite() || value < 0.0 {
                    return Err(DomainError::validation(format!(
                        "{name} must be a non-negative number"
                    )));
                }
            }
        }

        Ok(Self {
            category,
            term,
            min_price,
            max_price,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.term.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category {
            if product.category() != category {
                return false;
            }
        }

        if let Some(term) = &self.term {
            if !product.mentions(term) {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if product.price() < min {
                return false;
            }
        }

        if let Some(max) = self.max_price {
            if product.price() > max {
                return false;
            }
        }

        true
    }

    /// Keep the matching products, preserving catalog order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}
