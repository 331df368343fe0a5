//! Per-field cell renderers.
//!
//! Each renderer is a plain function of the row and chain constants. A
//! malformed numeric field renders as [`SENTINEL`] and is logged; it never
//! takes the rest of the row (or the grid) down with it.

use crate::constants::NAME_MAX_LEN;
use crate::domain::{AllocatorRecord, AllowanceEvent, ChainParams};
use crate::format::{
    SENTINEL, bytes_to_human, height_to_date, parse_height, shorten, shorten_address,
};

use super::{CellAction, CellContent, CellRenderer, ColumnKey, Disclosure, DisclosureEntry, Link};

/// Picks the renderer for a column.
pub(super) fn renderer_for(key: ColumnKey) -> CellRenderer {
    match key {
        ColumnKey::AddressId => address_id,
        ColumnKey::Name => name,
        ColumnKey::OrgName => org_name,
        ColumnKey::VerifiedClientsCount => verified_clients_count,
        ColumnKey::Address => address,
        ColumnKey::CreatedAtHeight => created_at,
        ColumnKey::Allowance => allowance,
        ColumnKey::RemainingDatacap => remaining_datacap,
        ColumnKey::InitialAllowance => initial_allowance,
    }
}

// ============================================================================
// Formatting With Fallback
// ============================================================================

fn capacity(row: &AllocatorRecord, field: &'static str, raw: &str) -> String {
    bytes_to_human(raw).unwrap_or_else(|err| {
        tracing::warn!(address_id = %row.address_id, field, %err, "malformed byte count");
        SENTINEL.to_string()
    })
}

fn date(row: &AllocatorRecord, field: &'static str, raw: &str, chain: ChainParams) -> String {
    match parse_height(raw) {
        Ok(height) => height_to_date(height, chain),
        Err(err) => {
            tracing::warn!(address_id = %row.address_id, field, %err, "malformed height");
            SENTINEL.to_string()
        }
    }
}

// ============================================================================
// Renderers
// ============================================================================

fn address_id(row: &AllocatorRecord, _: ChainParams) -> CellContent {
    CellContent::text(&row.address_id).with_link(Link::allocator(&row.address_id))
}

fn name(row: &AllocatorRecord, _: ChainParams) -> CellContent {
    CellContent::text(shorten(row.name.as_deref(), NAME_MAX_LEN))
        .with_link(Link::allocator(&row.address_id))
}

fn org_name(row: &AllocatorRecord, _: ChainParams) -> CellContent {
    CellContent::text(shorten(row.org_name.as_deref(), NAME_MAX_LEN))
}

fn verified_clients_count(row: &AllocatorRecord, _: ChainParams) -> CellContent {
    CellContent::text(&row.verified_clients_count)
}

fn address(row: &AllocatorRecord, _: ChainParams) -> CellContent {
    CellContent::text(shorten_address(&row.address))
        .with_action(CellAction::CopyToClipboard(row.address.clone()))
}

/// The formatted date is lossy, so the raw height stays one step away.
fn created_at(row: &AllocatorRecord, chain: ChainParams) -> CellContent {
    let raw = &row.created_at_height;
    CellContent::text(date(row, "createdAtHeight", raw, chain)).with_disclosure(Disclosure {
        title: "Block height".to_string(),
        entries: vec![DisclosureEntry {
            primary: raw.clone(),
            secondary: None,
        }],
    })
}

fn allowance(row: &AllocatorRecord, _: ChainParams) -> CellContent {
    CellContent::text(capacity(row, "allowance", &row.allowance))
}

fn remaining_datacap(row: &AllocatorRecord, _: ChainParams) -> CellContent {
    CellContent::text(capacity(row, "remainingDatacap", &row.remaining_datacap))
}

fn initial_allowance(row: &AllocatorRecord, chain: ChainParams) -> CellContent {
    let cell = CellContent::text(capacity(row, "initialAllowance", &row.initial_allowance));
    if row.allowance_array.is_empty() {
        return cell;
    }

    let entries = row
        .allowance_array
        .iter()
        .map(|event: &AllowanceEvent| DisclosureEntry {
            primary: capacity(row, "allowanceArray.allowance", &event.allowance),
            secondary: Some(date(row, "allowanceArray.height", &event.height, chain)),
        })
        .collect();

    cell.with_disclosure(Disclosure {
        title: "Allowance history".to_string(),
        entries,
    })
}

// ============================================================================
// Tests
// ============================================================================
