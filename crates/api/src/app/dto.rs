use serde::Deserialize;

use campustrade_core::DomainResult;
use campustrade_products::{CatalogStats, Category, ProductDraft, SearchFilter};

// -------------------------
// Request DTOs
// -------------------------

/// Body of create and full-update requests.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub titulo: String,
    #[serde(default)]
    pub descricao: String,
    pub preco: f64,
    pub categoria: String,
    pub vendedor: String,
}

impl ProductRequest {
    /// Parse the category and check field rules.
    pub fn into_draft(self) -> DomainResult<ProductDraft> {
        let category = self.categoria.parse::<Category>()?;
        let draft = ProductDraft {
            title: self.titulo,
            description: self.descricao,
            price: self.preco,
            category,
            seller: self.vendedor,
        };
        draft.validate()?;
        Ok(draft)
    }
}

/// Query string of `GET /produtos/buscar`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub categoria: Option<String>,
    pub termo: Option<String>,
    pub preco_min: Option<f64>,
    pub preco_max: Option<f64>,
}

impl SearchQuery {
    pub fn to_filter(&self) -> DomainResult<SearchFilter> {
        SearchFilter::from_query(
            self.categoria.as_deref(),
            self.termo.as_deref(),
            self.preco_min,
            self.preco_max,
        )
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn message_json(message: &str) -> serde_json::Value {
    serde_json::json!({ "message": message })
}

pub fn categories_to_json() -> serde_json::Value {
    let labels = Category::labels();
    serde_json::json!({
        "total": labels.len(),
        "categorias": labels,
    })
}

pub fn stats_to_json(stats: &CatalogStats) -> serde_json::Value {
    let per_category: serde_json::Map<String, serde_json::Value> = stats
        .products_per_category
        .iter()
        .map(|(category, n)| (category.as_str().to_string(), serde_json::json!(n)))
        .collect();

    serde_json::json!({
        "total_produtos": stats.total_products,
        "preco_medio": stats.average_price,
        "categoria_mais_popular": stats.most_popular_category.map(|c| c.as_str()),
        "produtos_por_categoria": per_category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use campustrade_core::DomainError;

    #[test]
    fn empty_stats_render_null_popular_category() {
        let json = stats_to_json(&CatalogStats::compute(&[]));
        assert_eq!(json["total_produtos"], 0);
        assert_eq!(json["preco_medio"], 0.0);
        assert!(json["categoria_mais_popular"].is_null());
        assert_eq!(json["produtos_por_categoria"], serde_json::json!({}));
    }

    #[test]
    fn categories_json_lists_all_labels() {
        let json = categories_to_json();
        assert_eq!(json["total"], 6);
        assert_eq!(json["categorias"][1], "Eletrônicos");
    }

    #[test]
    fn request_with_unknown_category_is_rejected() {
        let body = ProductRequest {
            titulo: "Mesa".to_string(),
            descricao: String::new(),
            preco: 150.0,
            categoria: "Invalid".to_string(),
            vendedor: "caio".to_string(),
        };
        assert!(matches!(
            body.into_draft().unwrap_err(),
            DomainError::InvalidCategory { .. }
        ));
    }
}
