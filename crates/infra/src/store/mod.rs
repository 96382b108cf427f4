//! Vendor record store boundary.
//!
//! This module defines the narrow persistence contract the vendor handler
//! consumes, plus the in-memory (tests/dev) and Postgres implementations.

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryVendorStore;
#[cfg(feature = "postgres")]
pub use postgres::PostgresVendorStore;
pub use r#trait::{StoreError, VendorStore};
