//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Identifier of a vendor record.
///
/// Opaque to the domain: stores mint new ids as UUIDv7 strings, but any
/// non-blank string a store hands back is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VendorId(String);

impl VendorId {
    /// Mint a fresh identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for VendorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VendorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Uuid> for VendorId {
    fn from(value: Uuid) -> Self {
        Self(value.to_string())
    }
}

impl From<VendorId> for String {
    fn from(value: VendorId) -> Self {
        value.0
    }
}

impl TryFrom<String> for VendorId {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        if value.trim().is_empty() {
            return Err(DomainError::invalid_id("VendorId: must not be blank"));
        }
        Ok(Self(value))
    }
}

impl FromStr for VendorId {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::try_from(s.to_string())
    }
}
