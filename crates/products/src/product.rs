use chrono::{DateTime, Utc};
use serde::Serialize;

use campustrade_core::{DomainError, DomainResult, Entity, ProductId};

use crate::category::Category;

/// Client-supplied fields of a listing (everything except id and creation time).
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub seller: String,
}

impl ProductDraft {
    /// Check field-level rules. The category is already valid by construction.
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("titulo cannot be empty"));
        }

        if self.seller.trim().is_empty() {
            return Err(DomainError::validation("vendedor cannot be empty"));
        }

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::validation("preco must be a non-negative number"));
        }

        Ok(())
    }
}

/// A single marketplace listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    #[serde(rename = "titulo")]
    title: String,
    #[serde(rename = "descricao")]
    description: String,
    #[serde(rename = "preco")]
    price: f64,
    #[serde(rename = "categoria")]
    category: Category,
    #[serde(rename = "vendedor")]
    seller: String,
    #[serde(rename = "data_criacao")]
    created_at: DateTime<Utc>,
}

impl Product {
    /// Build a new listing from a validated draft.
    pub fn new(id: ProductId, draft: ProductDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            seller: draft.seller,
            created_at,
        }
    }

    /// Full replace: every client field comes from `draft`, while the
    /// identifier and creation timestamp are carried over.
    pub fn replaced_with(&self, draft: ProductDraft) -> Self {
        Self::new(self.id, draft, self.created_at)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn seller(&self) -> &str {
        &self.seller
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Case-insensitive substring match against title or description.
    /// `needle` must already be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
