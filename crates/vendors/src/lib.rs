//! Vendors domain module.
//!
//! This crate contains the vendor record and the patch comparison rules,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod changes;
pub mod vendor;

pub use changes::{Changes, VendorField, detect_changes};
pub use vendor::Vendor;
