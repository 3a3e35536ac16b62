//! Products domain module.
//!
//! Business rules for catalog listings, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod product;
pub mod search;
pub mod stats;

pub use category::Category;
pub use product::{Product, ProductDraft};
pub use search::SearchFilter;
pub use stats::CatalogStats;
