//! Infrastructure layer: record stores and the vendor request handler.

pub mod store;
pub mod vendor_handler;

pub use store::{InMemoryVendorStore, StoreError, VendorStore};
#[cfg(feature = "postgres")]
pub use store::PostgresVendorStore;
pub use vendor_handler::{HandlerError, HandlerResult, Reply, ReplyStatus, VendorHandler};
