//! Catalog storage abstractions.

pub mod store;

pub use store::{CatalogStore, InMemoryCatalogStore};
