use std::sync::Arc;

use thiserror::Error;

use vendorhub_core::VendorId;
use vendorhub_vendors::Vendor;

/// Record store operation error.
///
/// These are **infrastructure errors**; a missing record is not an error at
/// this layer (`get` returns `Ok(None)`).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),

    #[error("store lock poisoned")]
    LockPoisoned,

    #[error("corrupt record: {0}")]
    Corrupt(String),
}

/// Id-keyed vendor persistence.
///
/// ## Put Semantics
///
/// `put()`:
/// - Assigns a fresh identifier when the vendor has none
/// - Otherwise overwrites (or inserts) the record with the matching identifier
/// - Returns the record exactly as stored
///
/// Each call is atomic from the caller's point of view. Calls are not
/// serialized against each other beyond that; two concurrent writes to the
/// same id resolve as last-write-wins.
#[async_trait::async_trait]
pub trait VendorStore: Send + Sync {
    /// All vendors, in the store's own order.
    async fn get_all(&self) -> Result<Vec<Vendor>, StoreError>;

    /// The vendor with `id`, or `None` if absent.
    async fn get(&self, id: &VendorId) -> Result<Option<Vendor>, StoreError>;

    async fn put(&self, vendor: Vendor) -> Result<Vendor, StoreError>;
}

#[async_trait::async_trait]
impl<S> VendorStore for Arc<S>
where
    S: VendorStore + ?Sized,
{
    async fn get_all(&self) -> Result<Vec<Vendor>, StoreError> {
        (**self).get_all().await
    }

    async fn get(&self, id: &VendorId) -> Result<Option<Vendor>, StoreError> {
        (**self).get(id).await
    }

    async fn put(&self, vendor: Vendor) -> Result<Vendor, StoreError> {
        (**self).put(vendor).await
    }
}
