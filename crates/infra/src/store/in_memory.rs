use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use vendorhub_core::VendorId;
use vendorhub_vendors::Vendor;

use super::r#trait::{StoreError, VendorStore};

#[derive(Debug, Default)]
struct Records {
    by_id: HashMap<VendorId, Vendor>,
    /// First-insertion order of ids; `get_all` yields in this order.
    order: Vec<VendorId>,
}

/// In-memory vendor store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryVendorStore {
    records: RwLock<Records>,
}

impl InMemoryVendorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored vendors. Still counts after a writer panicked.
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_id
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl VendorStore for InMemoryVendorStore {
    async fn get_all(&self) -> Result<Vec<Vendor>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;

        Ok(records
            .order
            .iter()
            .filter_map(|id| records.by_id.get(id).cloned())
            .collect())
    }

    async fn get(&self, id: &VendorId) -> Result<Option<Vendor>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.by_id.get(id).cloned())
    }

    async fn put(&self, mut vendor: Vendor) -> Result<Vendor, StoreError> {
        let id = vendor.id.get_or_insert_with(VendorId::generate).clone();

        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        if records.by_id.insert(id.clone(), vendor.clone()).is_none() {
            records.order.push(id);
        }

        Ok(vendor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_assigns_identity_when_absent() {
        let store = InMemoryVendorStore::new();

        let saved = store.put(Vendor::new("Fred", "Flinstone")).await.unwrap();

        let id = saved.id.clone().expect("store must assign an id");
        assert_eq!(store.get(&id).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn put_with_identity_overwrites_in_place() {
        let store = InMemoryVendorStore::new();
        let first = store.put(Vendor::new("Fred", "Flinstone")).await.unwrap();
        let second = store.put(Vendor::new("Barney", "Rubble")).await.unwrap();

        let replacement = Vendor::default()
            .with_id(first.id.clone().unwrap())
            .with_first_name("Wilma");
        store.put(replacement.clone()).await.unwrap();

        assert_eq!(store.len(), 2);
        let all = store.get_all().await.unwrap();
        assert_eq!(all, vec![replacement, second]);
    }

    #[tokio::test]
    async fn put_with_unknown_identity_inserts() {
        let store = InMemoryVendorStore::new();
        let id: VendorId = "chosen-id".parse().unwrap();

        let saved = store
            .put(Vendor::new("Betty", "Rubble").with_id(id.clone()))
            .await
            .unwrap();

        assert_eq!(saved.id, Some(id.clone()));
        assert!(store.get(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let store = InMemoryVendorStore::new();
        let id: VendorId = "missing-id".parse().unwrap();
        assert_eq!(store.get(&id).await.unwrap(), None);
        assert!(store.get_all().await.unwrap().is_empty());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn poisoned_lock_is_reported_by_store_calls() {
        let store = InMemoryVendorStore::new();
        store.put(Vendor::new("Fred", "Flinstone")).await.unwrap();

        std::thread::scope(|s| {
            let writer = s.spawn(|| {
                let _guard = store.records.write().unwrap();
                panic!("writer panicked while holding the lock");
            });
            assert!(writer.join().is_err());
        });

        assert!(matches!(store.get_all().await, Err(StoreError::LockPoisoned)));
        assert!(matches!(
            store.put(Vendor::new("Barney", "Rubble")).await,
            Err(StoreError::LockPoisoned)
        ));
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }
}
