//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers instead of copy-pasting record literals across tests.
#![allow(dead_code)]

use crate::domain::{AllocatorRecord, AllowanceEvent};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct AllocatorMother;

impl AllocatorMother {
    /// The documented sample row: two grants, 3 GiB received in total.
    #[must_use]
    pub fn acme() -> AllocatorRecord {
        AllocatorRecord {
            address_id: "f01".to_string(),
            name: Some("Acme".to_string()),
            org_name: None,
            verified_clients_count: "3".to_string(),
            address: "f0123456789abcdef".to_string(),
            created_at_height: "100".to_string(),
            allowance: "2147483648".to_string(),
            remaining_datacap: "1073741824".to_string(),
            initial_allowance: "3221225472".to_string(),
            allowance_array: vec![
                AllowanceEvent {
                    allowance: "1073741824".to_string(),
                    height: "50".to_string(),
                },
                AllowanceEvent {
                    allowance: "2147483648".to_string(),
                    height: "100".to_string(),
                },
            ],
        }
    }

    /// `len` hourly grants of 1 KiB, 2 KiB, ... from genesis plus one hour.
    #[must_use]
    pub fn long_history(len: u64) -> AllocatorRecord {
        AllocatorRecord {
            allowance_array: (1..=len)
                .map(|i| AllowanceEvent {
                    allowance: (i * 1024).to_string(),
                    height: (i * 120).to_string(),
                })
                .collect(),
            ..Self::acme()
        }
    }

    #[must_use]
    pub fn without_history(address_id: &str) -> AllocatorRecord {
        AllocatorRecord {
            address_id: address_id.to_string(),
            allowance_array: Vec::new(),
            ..Self::acme()
        }
    }

    #[must_use]
    pub fn unnamed(address_id: &str) -> AllocatorRecord {
        AllocatorRecord {
            name: None,
            org_name: None,
            ..Self::without_history(address_id)
        }
    }

    /// A row with the fields the grid sorts on set explicitly.
    #[must_use]
    pub fn sortable(address_id: &str, name: &str, allowance: &str, height: &str) -> AllocatorRecord {
        AllocatorRecord {
            address_id: address_id.to_string(),
            name: Some(name.to_string()),
            allowance: allowance.to_string(),
            created_at_height: height.to_string(),
            ..Self::without_history(address_id)
        }
    }

    /// Three rows whose orderings differ per column.
    #[must_use]
    pub fn trio() -> Vec<AllocatorRecord> {
        vec![
            Self::sortable("f01", "beta", "1073741824", "300"),
            Self::sortable("f02", "Alpha", "18446744073709551616", "100"),
            Self::sortable("f03", "gamma", "2048", "200"),
        ]
    }
}
