//! Allocator records.
//!
//! An allocator is a Filecoin Plus notary address that receives DataCap and
//! grants it onward to clients. Byte counts and heights are kept as decimal
//! strings: DataCap totals routinely exceed what a 64-bit float represents
//! exactly, so conversion happens in the formatters.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::DomainError;

// ============================================================================
// Records
// ============================================================================

/// One historical DataCap grant made to an allocator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceEvent {
    /// Granted amount in bytes.
    #[serde(deserialize_with = "string_or_number")]
    pub allowance: String,
    /// Chain height at which the grant happened.
    #[serde(deserialize_with = "string_or_number")]
    pub height: String,
}

/// One row of the allocators grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocatorRecord {
    /// Short ID address (`f0...`), the row's identity.
    pub address_id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Organization behind the allocator.
    #[serde(default)]
    pub org_name: Option<String>,
    /// Number of verified clients served.
    #[serde(deserialize_with = "string_or_number")]
    pub verified_clients_count: String,
    /// Full robust address.
    pub address: String,
    /// Height at which the allocator was created.
    #[serde(deserialize_with = "string_or_number")]
    pub created_at_height: String,
    /// DataCap currently available, in bytes.
    #[serde(deserialize_with = "string_or_number")]
    pub allowance: String,
    /// Used (remaining) DataCap, in bytes.
    #[serde(deserialize_with = "string_or_number")]
    pub remaining_datacap: String,
    /// DataCap ever granted, in bytes.
    #[serde(deserialize_with = "string_or_number")]
    pub initial_allowance: String,
    /// Grant history in chronological order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub allowance_array: Vec<AllowanceEvent>,
}

impl AllocatorRecord {
    /// Display name, empty when absent.
    #[must_use]
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Organization name, empty when absent.
    #[must_use]
    pub fn org_name_or_empty(&self) -> &str {
        self.org_name.as_deref().unwrap_or_default()
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Accepted dataset shapes: a bare array or a paged API response.
#[derive(Deserialize)]
#[serde(untagged)]
enum Dataset {
    List(Vec<AllocatorRecord>),
    Page { data: Vec<AllocatorRecord> },
}

/// Parses and validates a JSON dataset.
///
/// # Errors
///
/// Returns an error if the JSON is malformed, or if any `addressId` is empty
/// or appears twice.
pub fn parse_allocators(json: &str) -> Result<Vec<AllocatorRecord>, DomainError> {
    let records = match serde_json::from_str::<Dataset>(json)? {
        Dataset::List(records) | Dataset::Page { data: records } => records,
    };
    validate(&records)?;
    tracing::debug!(count = records.len(), "parsed allocator dataset");
    Ok(records)
}

/// Reads a dataset file from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails [`parse_allocators`].
pub fn load_allocators(path: &Path) -> Result<Vec<AllocatorRecord>, DomainError> {
    let content = fs::read_to_string(path)?;
    parse_allocators(&content)
}

fn validate(records: &[AllocatorRecord]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if record.address_id.trim().is_empty() {
            return Err(DomainError::EmptyAddressId { index });
        }
        if !seen.insert(record.address_id.as_str()) {
            return Err(DomainError::DuplicateAddressId(record.address_id.clone()));
        }
    }
    Ok(())
}

// ============================================================================
// Serde Helpers
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

/// Some upstream encoders emit small counts as JSON numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<AllowanceEvent>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<AllowanceEvent>>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Tests
// ============================================================================
