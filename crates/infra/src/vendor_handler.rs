//! Vendor request handling (application-level orchestration).
//!
//! `VendorHandler` sits between the HTTP routes and a [`VendorStore`]. Each
//! operation is a single request/response; the handler keeps no state of its
//! own and can be shared freely across concurrent requests.
//!
//! ```text
//! list        -> store.get_all
//! get_by_id   -> store.get                         (absent => NotFound)
//! create      -> store.put (id cleared)            => Created
//! replace     -> store.put (id = path id)          => Ok, always one write
//! patch       -> store.get -> detect_changes -> store.put only if changed
//! ```
//!
//! Store failures propagate unchanged as [`HandlerError::Store`]; there are no
//! retries here.

use thiserror::Error;
use tracing::{debug, info, instrument};

use vendorhub_core::VendorId;
use vendorhub_vendors::{Vendor, detect_changes};

use crate::store::{StoreError, VendorStore};

/// Success status attached to a handler reply.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReplyStatus {
    Ok,
    /// A new record was persisted.
    Created,
}

/// A successful handler result: a status plus the response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply<T> {
    pub status: ReplyStatus,
    pub body: T,
}

impl<T> Reply<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status: ReplyStatus::Ok,
            body,
        }
    }

    pub fn created(body: T) -> Self {
        Self {
            status: ReplyStatus::Created,
            body,
        }
    }

    pub fn into_body(self) -> T {
        self.body
    }
}

#[derive(Debug, Error)]
pub enum HandlerError {
    /// No vendor exists with the given id.
    #[error("vendor not found: {0}")]
    NotFound(VendorId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type HandlerResult<T> = Result<Reply<T>, HandlerError>;

/// Vendor CRUD operations over a record store.
#[derive(Debug, Clone)]
pub struct VendorHandler<S> {
    store: S,
}

impl<S> VendorHandler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S> VendorHandler<S>
where
    S: VendorStore,
{
    /// Every vendor, in the store's order. An empty store is not an error.
    #[instrument(skip(self))]
    pub async fn list(&self) -> HandlerResult<Vec<Vendor>> {
        let vendors = self.store.get_all().await?;
        debug!(count = vendors.len(), "listed vendors");
        Ok(Reply::ok(vendors))
    }

    #[instrument(skip(self, id), fields(vendor_id = %id))]
    pub async fn get_by_id(&self, id: &VendorId) -> HandlerResult<Vendor> {
        match self.store.get(id).await? {
            Some(vendor) => Ok(Reply::ok(vendor)),
            None => Err(HandlerError::NotFound(id.clone())),
        }
    }

    /// Persist a new vendor. The store assigns the identity; any id in the
    /// proposal is discarded.
    #[instrument(skip(self, proposal))]
    pub async fn create(&self, mut proposal: Vendor) -> HandlerResult<Vendor> {
        proposal.id = None;
        let saved = self.store.put(proposal).await?;
        info!(vendor_id = ?saved.id, "vendor created");
        Ok(Reply::created(saved))
    }

    /// Persist each proposal in order, as [`create`](Self::create) does for one.
    #[instrument(skip(self, proposals), fields(count = proposals.len()))]
    pub async fn create_many(&self, proposals: Vec<Vendor>) -> HandlerResult<Vec<Vendor>> {
        let mut saved = Vec::with_capacity(proposals.len());
        for mut proposal in proposals {
            proposal.id = None;
            saved.push(self.store.put(proposal).await?);
        }
        info!(count = saved.len(), "vendors created");
        Ok(Reply::created(saved))
    }

    /// Overwrite the vendor at `id` with every field of `proposal`, nulls included.
    ///
    /// Always writes once, whether or not anything differs. The path id wins
    /// over any id in the proposal.
    #[instrument(skip(self, id, proposal), fields(vendor_id = %id))]
    pub async fn replace(&self, id: &VendorId, mut proposal: Vendor) -> HandlerResult<Vendor> {
        proposal.id = Some(id.clone());
        let saved = self.store.put(proposal).await?;
        info!("vendor replaced");
        Ok(Reply::ok(saved))
    }

    /// Apply the differing, supplied fields of `proposal` to the vendor at `id`.
    ///
    /// Nothing is written when no comparable field differs; the current record
    /// is returned as-is.
    #[instrument(skip(self, id, proposal), fields(vendor_id = %id))]
    pub async fn patch(&self, id: &VendorId, proposal: Vendor) -> HandlerResult<Vendor> {
        let base = self.get_by_id(id).await?.into_body();

        let changes = detect_changes(&base, &proposal);
        if changes.is_noop() {
            debug!("no field changed; write suppressed");
            return Ok(Reply::ok(base));
        }

        for field in &changes.changed_fields {
            debug!(field = %field, "field changed");
        }
        let saved = self.store.put(changes.merged).await?;
        Ok(Reply::ok(saved))
    }
}
