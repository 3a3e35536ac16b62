//! Catalog operations behind the HTTP handlers.
//!
//! Each method is one request's unit of work: inputs are validated first and
//! the store is only written once validation has passed.

use std::sync::Arc;

use chrono::Utc;

use campustrade_core::{DomainResult, Entity, ProductId};
use campustrade_infra::CatalogStore;
use campustrade_products::{CatalogStats, Product};

use crate::app::dto::{ProductRequest, SearchQuery};

pub struct AppServices {
    catalog: Arc<dyn CatalogStore>,
}

impl AppServices {
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self { catalog }
    }

    pub fn products_list(&self) -> Vec<Product> {
        self.catalog.list()
    }

    pub fn products_get(&self, id: ProductId) -> DomainResult<Product> {
        self.catalog.get(id)
    }

    pub fn products_create(&self, body: ProductRequest) -> DomainResult<Product> {
        let draft = body.into_draft()?;
        let product = self.catalog.append(draft, Utc::now());

        tracing::info!(
            product_id = %product.id(),
            category = %product.category(),
            "product created"
        );
        Ok(product)
    }

    /// Full replace. An unknown id is reported before any body validation.
    pub fn products_update(&self, id: ProductId, body: ProductRequest) -> DomainResult<Product> {
        self.catalog.get(id)?;
        let draft = body.into_draft()?;
        let product = self.catalog.replace(id, draft)?;

        tracing::info!(
            product_id = %id,
            category = %product.category(),
            "product updated"
        );
        Ok(product)
    }

    pub fn products_delete(&self, id: ProductId) -> DomainResult<Product> {
        let removed = self.catalog.remove(id)?;
        tracing::info!(product_id = %id, "product deleted");
        Ok(removed)
    }

    pub fn products_search(&self, query: &SearchQuery) -> DomainResult<Vec<Product>> {
        let filter = query.to_filter()?;
        let products = self.catalog.list();
        if filter.is_empty() {
            return Ok(products);
        }
        Ok(filter.apply(&products))
    }

    pub fn products_stats(&self) -> CatalogStats {
        CatalogStats::compute(&self.catalog.list())
    }
}
