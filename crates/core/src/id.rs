//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product.
///
/// Assigned by the catalog store, starting at 1 and strictly increasing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// The first identifier handed out by an empty store.
    pub const FIRST: ProductId = ProductId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// The identifier that follows this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for u64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

/// Any integer parses; integers no product can carry (zero, negatives, values
/// past `u64::MAX`) are `NotFound` rather than malformed.
impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_id(format!("ProductId: not an integer: {s:?}")));
        }

        match s.parse::<u64>() {
            Ok(0) | Err(_) => Err(DomainError::NotFound),
            Ok(value) => Ok(Self(value)),
        }
    }
}
