use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};

use campustrade_core::{DomainError, DomainResult, Entity, ProductId};
use campustrade_products::{Product, ProductDraft};

/// Ordered product storage plus the next-identifier counter.
///
/// Implementations keep insertion order and never reuse an identifier, even
/// after the product holding it is removed.
pub trait CatalogStore: Send + Sync {
    /// All products, in insertion order.
    fn list(&self) -> Vec<Product>;
    /// Store a new product under the next identifier.
    fn append(&self, draft: ProductDraft, created_at: DateTime<Utc>) -> Product;
    fn get(&self, id: ProductId) -> DomainResult<Product>;
    /// Full replace in place; id and creation time are kept.
    fn replace(&self, id: ProductId, draft: ProductDraft) -> DomainResult<Product>;
    /// Remove and return the product.
    fn remove(&self, id: ProductId) -> DomainResult<Product>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn list(&self) -> Vec<Product> {
        (**self).list()
    }

    fn append(&self, draft: ProductDraft, created_at: DateTime<Utc>) -> Product {
        (**self).append(draft, created_at)
    }

    fn get(&self, id: ProductId) -> DomainResult<Product> {
        (**self).get(id)
    }

    fn replace(&self, id: ProductId, draft: ProductDraft) -> DomainResult<Product> {
        (**self).replace(id, draft)
    }

    fn remove(&self, id: ProductId) -> DomainResult<Product> {
        (**self).remove(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

#[derive(Debug)]
struct CatalogState {
    products: Vec<Product>,
    next_id: ProductId,
}

impl CatalogState {
    fn position(&self, id: ProductId) -> DomainResult<usize> {
        self.products
            .iter()
            .position(|p| p.id() == id)
            .ok_or(DomainError::NotFound)
    }
}

/// In-memory catalog for dev/tests; state lives for the process lifetime.
#[derive(Debug)]
pub struct InMemoryCatalogStore {
    inner: RwLock<CatalogState>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(CatalogState {
                products: Vec::new(),
                next_id: ProductId::FIRST,
            }),
        }
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

// Lock poisoning only means another handler panicked mid-request; the catalog
// itself is never left half-written, so the guard is recovered.
impl CatalogStore for InMemoryCatalogStore {
    fn list(&self) -> Vec<Product> {
        let state = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        state.products.clone()
    }

    fn append(&self, draft: ProductDraft, created_at: DateTime<Utc>) -> Product {
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let id = state.next_id;
        let product = Product::new(id, draft, created_at);
        state.products.push(product.clone());
        state.next_id = id.next();
        tracing::debug!(product_id = %id, total = state.products.len(), "catalog append");
        product
    }

    fn get(&self, id: ProductId) -> DomainResult<Product> {
        let state = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let idx = state.position(id)?;
        Ok(state.products[idx].clone())
    }

    fn replace(&self, id: ProductId, draft: ProductDraft) -> DomainResult<Product> {
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let idx = state.position(id)?;
        let replaced = state.products[idx].replaced_with(draft);
        state.products[idx] = replaced.clone();
        Ok(replaced)
    }

    fn remove(&self, id: ProductId) -> DomainResult<Product> {
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let idx = state.position(id)?;
        Ok(state.products.remove(idx))
    }

    fn len(&self) -> usize {
        let state = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        state.products.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campustrade_products::Category;
    use chrono::TimeZone;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn draft(title: &str) -> ProductDraft {
        ProductDraft {
            title: title.to_string(),
            description: "Usado".to_string(),
            price: 10.0,
            category: Category::Books,
            seller: "ana".to_string(),
        }
    }

    #[test]
    fn identifiers_start_at_one_and_increase() {
        let store = InMemoryCatalogStore::new();
        let a = store.append(draft("A"), test_time());
        let b = store.append(draft("B"), test_time());
        let c = store.append(draft("C"), test_time());

        assert_eq!(a.id(), ProductId::new(1));
        assert_eq!(b.id(), ProductId::new(2));
        assert_eq!(c.id(), ProductId::new(3));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = InMemoryCatalogStore::new();
        for title in ["A", "B", "C"] {
            store.append(draft(title), test_time());
        }

        let titles: Vec<String> = store.list().iter().map(|p| p.title().to_string()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = InMemoryCatalogStore::new();
        assert_eq!(store.get(ProductId::new(1)).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn replace_keeps_position_id_and_timestamp() {
        let store = InMemoryCatalogStore::new();
        store.append(draft("A"), test_time());
        let b = store.append(draft("B"), test_time());
        store.append(draft("C"), test_time());

        let mut next = draft("B2");
        next.category = Category::Sports;
        let replaced = store.replace(b.id(), next).unwrap();

        assert_eq!(replaced.id(), b.id());
        assert_eq!(replaced.created_at(), b.created_at());
        assert_eq!(store.list()[1], replaced);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn replace_unknown_id_is_not_found() {
        let store = InMemoryCatalogStore::new();
        store.append(draft("A"), test_time());
        let err = store.replace(ProductId::new(9), draft("X")).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
        assert_eq!(store.list()[0].title(), "A");
    }

    #[test]
    fn remove_deletes_exactly_one_record() {
        let store = InMemoryCatalogStore::new();
        store.append(draft("A"), test_time());
        let b = store.append(draft("B"), test_time());
        store.append(draft("C"), test_time());

        let removed = store.remove(b.id()).unwrap();
        assert_eq!(removed.id(), b.id());
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(b.id()).unwrap_err(), DomainError::NotFound);
        assert_eq!(store.remove(b.id()).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn identifiers_are_not_reused_after_remove() {
        let store = InMemoryCatalogStore::new();
        store.append(draft("A"), test_time());
        let b = store.append(draft("B"), test_time());
        store.remove(b.id()).unwrap();

        let c = store.append(draft("C"), test_time());
        assert_eq!(c.id(), ProductId::new(3));
    }

    #[test]
    fn arc_wrapped_store_delegates() {
        let store: Arc<dyn CatalogStore> = Arc::new(InMemoryCatalogStore::new());
        assert!(store.is_empty());
        store.append(draft("A"), test_time());
        assert_eq!(store.len(), 1);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: N appends yield N unique, strictly increasing ids from 1.
            #[test]
            fn ids_are_unique_and_increasing(n in 1usize..60) {
                let store = InMemoryCatalogStore::new();
                let ids: Vec<u64> = (0..n)
                    .map(|i| store.append(draft(&format!("P{i}")), test_time()).id().get())
                    .collect();

                prop_assert_eq!(ids[0], 1);
                for pair in ids.windows(2) {
                    prop_assert!(pair[1] > pair[0]);
                }
                prop_assert_eq!(store.len(), n);
            }
        }
    }
}
