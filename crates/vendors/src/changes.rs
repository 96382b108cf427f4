//! Patch comparison: decide whether a proposal actually changes a vendor.
//!
//! The comparable fields are listed explicitly in [`VendorField::ALL`]. A new
//! field on [`Vendor`] is not compared until it is added there.

use crate::vendor::Vendor;

/// A field of [`Vendor`] that takes part in patch comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorField {
    FirstName,
    LastName,
}

impl VendorField {
    /// Every comparable field, in comparison order.
    pub const ALL: [VendorField; 2] = [VendorField::FirstName, VendorField::LastName];

    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            VendorField::FirstName => "firstName",
            VendorField::LastName => "lastName",
        }
    }

    fn get(self, vendor: &Vendor) -> Option<&str> {
        match self {
            VendorField::FirstName => vendor.first_name.as_deref(),
            VendorField::LastName => vendor.last_name.as_deref(),
        }
    }

    fn set(self, vendor: &mut Vendor, value: String) {
        match self {
            VendorField::FirstName => vendor.first_name = Some(value),
            VendorField::LastName => vendor.last_name = Some(value),
        }
    }
}

impl core::fmt::Display for VendorField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of comparing a proposal against a base record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changes {
    /// Whether at least one comparable field differs.
    pub changed: bool,
    /// The base with the proposal's differing values applied.
    ///
    /// Equal to the base when `changed` is false; callers must not persist it then.
    pub merged: Vendor,
    /// Fields that took the proposal's value, in [`VendorField::ALL`] order.
    pub changed_fields: Vec<VendorField>,
}

impl Changes {
    pub fn is_noop(&self) -> bool {
        !self.changed
    }
}

/// Compare `proposal` against `base` field by field.
///
/// A field changes only when the proposal supplies a value that is not equal
/// to the base's value. Absent proposal values keep the base's value. The
/// merged record always keeps the base's identity.
pub fn detect_changes(base: &Vendor, proposal: &Vendor) -> Changes {
    let mut merged = base.clone();
    let mut changed_fields = Vec::new();

    for field in VendorField::ALL {
        let Some(proposed) = field.get(proposal) else {
            continue;
        };
        if field.get(base) != Some(proposed) {
            field.set(&mut merged, proposed.to_string());
            changed_fields.push(field);
        }
    }

    Changes {
        changed: !changed_fields.is_empty(),
        merged,
        changed_fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendorhub_core::VendorId;

    fn base() -> Vendor {
        Vendor::default()
            .with_id("v-1".parse().unwrap())
            .with_first_name("Jimmy")
    }

    #[test]
    fn differing_first_name_is_applied() {
        let proposal = Vendor::default().with_first_name("Jim");

        let changes = detect_changes(&base(), &proposal);

        assert!(changes.changed);
        assert_eq!(changes.changed_fields, vec![VendorField::FirstName]);
        assert_eq!(changes.merged.first_name(), Some("Jim"));
        assert_eq!(changes.merged.last_name(), None);
        assert_eq!(changes.merged.id, base().id);
    }

    #[test]
    fn resubmitting_same_value_is_not_a_change() {
        let proposal = Vendor::default().with_first_name("Jimmy");

        let changes = detect_changes(&base(), &proposal);

        assert!(changes.is_noop());
        assert!(changes.changed_fields.is_empty());
        assert_eq!(changes.merged, base());
    }

    #[test]
    fn empty_proposal_is_not_a_change() {
        let changes = detect_changes(&base(), &Vendor::default());
        assert!(!changes.changed);
        assert_eq!(changes.merged, base());
    }

    #[test]
    fn value_on_previously_absent_field_is_a_change() {
        let proposal = Vendor::default().with_last_name("Johns");

        let changes = detect_changes(&base(), &proposal);

        assert!(changes.changed);
        assert_eq!(changes.changed_fields, vec![VendorField::LastName]);
        assert_eq!(changes.merged.first_name(), Some("Jimmy"));
        assert_eq!(changes.merged.last_name(), Some("Johns"));
    }

    #[test]
    fn proposal_identity_is_ignored() {
        let proposal = Vendor::default()
            .with_id(VendorId::generate())
            .with_first_name("Jimmy");

        let changes = detect_changes(&base(), &proposal);

        assert!(!changes.changed);
        assert_eq!(changes.merged.id, base().id);
    }

    #[test]
    fn comparison_is_exact() {
        let proposal = Vendor::default().with_first_name("jimmy ");
        let changes = detect_changes(&base(), &proposal);
        assert!(changes.changed);
        assert_eq!(changes.merged.first_name(), Some("jimmy "));
    }

    #[test]
    fn both_fields_reported_in_field_order() {
        let proposal = Vendor::new("Fred", "Flinstone");
        let changes = detect_changes(&base(), &proposal);
        assert_eq!(
            changes.changed_fields,
            vec![VendorField::FirstName, VendorField::LastName]
        );
    }

    #[test]
    fn fields_display_as_wire_names() {
        let names: Vec<String> = VendorField::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["firstName", "lastName"]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn name() -> impl Strategy<Value = Option<String>> {
            proptest::option::of("[A-Za-z][A-Za-z '-]{0,19}")
        }

        fn vendor() -> impl Strategy<Value = Vendor> {
            (name(), name()).prop_map(|(first_name, last_name)| Vendor {
                id: Some("v-prop".parse().unwrap()),
                first_name,
                last_name,
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: an all-absent proposal never changes anything.
            #[test]
            fn empty_proposal_never_changes(base in vendor()) {
                let changes = detect_changes(&base, &Vendor::default());
                prop_assert!(!changes.changed);
                prop_assert_eq!(changes.merged, base);
            }

            /// Property: proposing the base's own values never changes anything.
            #[test]
            fn identical_proposal_never_changes(base in vendor()) {
                let proposal = Vendor { id: None, ..base.clone() };
                let changes = detect_changes(&base, &proposal);
                prop_assert!(!changes.changed);
                prop_assert_eq!(changes.merged, base);
            }

            /// Property: differing supplied fields win, everything else keeps the base.
            #[test]
            fn supplied_differences_are_merged(base in vendor(), first in name(), last in name()) {
                let proposal = Vendor { id: None, first_name: first.clone(), last_name: last.clone() };
                let changes = detect_changes(&base, &proposal);

                let first_differs = first.is_some() && first != base.first_name;
                let last_differs = last.is_some() && last != base.last_name;
                prop_assert_eq!(changes.changed, first_differs || last_differs);

                let expected_first = if first.is_some() { first } else { base.first_name.clone() };
                let expected_last = if last.is_some() { last } else { base.last_name.clone() };
                prop_assert_eq!(changes.merged.first_name, expected_first);
                prop_assert_eq!(changes.merged.last_name, expected_last);
                prop_assert_eq!(changes.merged.id, base.id);
            }

            /// Property: merging is idempotent; applying the merge again is a no-op.
            #[test]
            fn merge_then_compare_is_noop(base in vendor(), proposal in vendor()) {
                let first = detect_changes(&base, &proposal);
                let second = detect_changes(&first.merged, &proposal);
                prop_assert!(!second.changed);
            }
        }
    }
}
