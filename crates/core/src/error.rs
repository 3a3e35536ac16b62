//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is terminal for the request that produced it: callers check
/// inputs before touching the catalog, so an error never leaves a partial write.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A referenced product does not exist.
    #[error("Produto não encontrado")]
    NotFound,

    /// A category outside the fixed set was submitted or queried.
    #[error("Categoria inválida. Use uma destas: {}", .valid.join(", "))]
    InvalidCategory {
        given: String,
        valid: Vec<&'static str>,
    },

    /// A field failed validation (e.g. negative price, short search term).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_category(given: impl Into<String>, valid: &[&'static str]) -> Self {
        Self::InvalidCategory {
            given: given.into(),
            valid: valid.to_vec(),
        }
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_category_lists_every_option() {
        let err = DomainError::invalid_category("Invalid", &["Livros", "Outros"]);
        assert_eq!(
            err.to_string(),
            "Categoria inválida. Use uma destas: Livros, Outros"
        );
    }

    #[test]
    fn not_found_message_is_human_readable() {
        assert_eq!(DomainError::not_found().to_string(), "Produto não encontrado");
    }
}
