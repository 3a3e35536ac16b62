use core::str::FromStr;

use serde::Serialize;

use campustrade_core::DomainError;

/// Fixed set of listing categories.
///
/// The wire representation is the Portuguese label (see [`Category::as_str`]);
/// matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Livros")]
    Books,
    #[serde(rename = "Eletrônicos")]
    Electronics,
    #[serde(rename = "Roupas")]
    Clothing,
    #[serde(rename = "Móveis")]
    Furniture,
    #[serde(rename = "Esportes")]
    Sports,
    #[serde(rename = "Outros")]
    Other,
}

impl Category {
    /// Every category, in listing order.
    pub const ALL: [Category; 6] = [
        Category::Books,
        Category::Electronics,
        Category::Clothing,
        Category::Furniture,
        Category::Sports,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Books => "Livros",
            Category::Electronics => "Eletrônicos",
            Category::Clothing => "Roupas",
            Category::Furniture => "Móveis",
            Category::Sports => "Esportes",
            Category::Other => "Outros",
        }
    }

    /// Wire labels of every category, in listing order.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(Category::as_str).collect()
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::invalid_category(s, &Self::labels()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_parses_back_to_its_category() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_label_is_rejected_with_valid_options() {
        let err = "Invalid".parse::<Category>().unwrap_err();
        match err {
            DomainError::InvalidCategory { given, valid } => {
                assert_eq!(given, "Invalid");
                assert_eq!(valid, Category::labels());
            }
            _ => panic!("Expected InvalidCategory error"),
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!("livros".parse::<Category>().is_err());
    }

    #[test]
    fn serde_uses_wire_labels() {
        let json = serde_json::to_string(&Category::Electronics).unwrap();
        assert_eq!(json, "\"Eletrônicos\"");
    }
}
