use serde::{Deserialize, Deserializer, Serialize};

use vendorhub_core::{Entity, VendorId};

/// A vendor record.
///
/// Also used as the request payload for create/replace/patch, where absent
/// fields mean "no value supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    /// Assigned by the store; `None` until the record is persisted.
    ///
    /// A blank id in a payload reads as `None`.
    #[serde(default, deserialize_with = "blank_id_as_none")]
    pub id: Option<VendorId>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl Vendor {
    /// Create an unpersisted vendor with both names set.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }

    pub fn with_id(mut self, id: VendorId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }
}

fn blank_id_as_none<'de, D>(deserializer: D) -> Result<Option<VendorId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|id| VendorId::try_from(id).ok()))
}

impl Entity for Vendor {
    type Id = VendorId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vendor_has_no_identity() {
        let v = Vendor::new("Fred", "Flinstone");
        assert!(!v.is_persisted());
        assert_eq!(v.first_name(), Some("Fred"));
        assert_eq!(v.last_name(), Some("Flinstone"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let v = Vendor::new("Barney", "Rubble").with_id("v1".parse().unwrap());
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "v1", "firstName": "Barney", "lastName": "Rubble"})
        );
    }

    #[test]
    fn missing_keys_deserialize_as_none() {
        let v: Vendor = serde_json::from_str(r#"{"firstName":"Jim"}"#).unwrap();
        assert_eq!(v, Vendor::default().with_first_name("Jim"));

        let empty: Vendor = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Vendor::default());
    }

    #[test]
    fn blank_or_null_id_deserializes_as_none() {
        let blank: Vendor = serde_json::from_str(r#"{"id":"","firstName":"A"}"#).unwrap();
        assert_eq!(blank, Vendor::default().with_first_name("A"));

        let spaces: Vendor = serde_json::from_str(r#"{"id":"  "}"#).unwrap();
        assert_eq!(spaces.id, None);

        let null: Vendor = serde_json::from_str(r#"{"id":null}"#).unwrap();
        assert_eq!(null.id, None);

        let set: Vendor = serde_json::from_str(r#"{"id":"v1"}"#).unwrap();
        assert_eq!(set.id, Some("v1".parse().unwrap()));
    }
}
