//! Column model for the allocators grid.
//!
//! [`build_columns`] turns the current sort state, a sort-request handler and
//! the chain constants into nine [`ColumnSpec`] values in display order. A
//! spec is a pure projection: its header reflects the sort state it was built
//! with, and its cells depend only on the row they are given. Specs are
//! rebuilt whenever the sort state changes rather than patched.
//!
//! ```text
//! ┌─────────────┬──────┬───────┬──────────┬─────────────┬──────────────────┬────
//! │ Allocator ID│ Name │ Org   │ Verified │ Address     │ Create date    ▲ │ ...
//! ├─────────────┼──────┼───────┼──────────┼─────────────┼──────────────────┼────
//! │ f01         │ Acme │       │ 3        │ f012...cdef │ 2020-08-24 22:50 │ ...
//! ```

use std::fmt;
use std::str::FromStr;

use crate::domain::{AllocatorRecord, ChainParams, DomainError};

mod cells;
pub mod sort;

pub use sort::{
    SortDirection, SortRequest, SortRequestHandler, SortState, resolve_direction,
};

// ============================================================================
// Column Keys
// ============================================================================

/// Identifies one field of an [`AllocatorRecord`] shown in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    AddressId,
    Name,
    OrgName,
    VerifiedClientsCount,
    Address,
    CreatedAtHeight,
    Allowance,
    RemainingDatacap,
    InitialAllowance,
}

impl ColumnKey {
    /// Every column, in display order.
    pub const ALL: [Self; 9] = [
        Self::AddressId,
        Self::Name,
        Self::OrgName,
        Self::VerifiedClientsCount,
        Self::Address,
        Self::CreatedAtHeight,
        Self::Allowance,
        Self::RemainingDatacap,
        Self::InitialAllowance,
    ];

    /// Field name as it appears in the dataset JSON.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AddressId => "addressId",
            Self::Name => "name",
            Self::OrgName => "orgName",
            Self::VerifiedClientsCount => "verifiedClientsCount",
            Self::Address => "address",
            Self::CreatedAtHeight => "createdAtHeight",
            Self::Allowance => "allowance",
            Self::RemainingDatacap => "remainingDatacap",
            Self::InitialAllowance => "initialAllowance",
        }
    }

    /// Header label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AddressId => "Allocator ID",
            Self::Name => "Name",
            Self::OrgName => "Organization Name",
            Self::VerifiedClientsCount => "Verified Clients",
            Self::Address => "Address",
            Self::CreatedAtHeight => "Create date",
            Self::Allowance => "DataCap Available",
            Self::RemainingDatacap => "Used DataCap",
            Self::InitialAllowance => "Total DataCap received",
        }
    }

    /// Whether the raw value is a decimal integer.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::VerifiedClientsCount
                | Self::CreatedAtHeight
                | Self::Allowance
                | Self::RemainingDatacap
                | Self::InitialAllowance
        )
    }

    /// Raw accessor: the row's untransformed value for this column.
    ///
    /// Absent optional fields read as the empty string.
    #[must_use]
    pub fn raw_value<'r>(&self, row: &'r AllocatorRecord) -> &'r str {
        match self {
            Self::AddressId => &row.address_id,
            Self::Name => row.name_or_empty(),
            Self::OrgName => row.org_name_or_empty(),
            Self::VerifiedClientsCount => &row.verified_clients_count,
            Self::Address => &row.address,
            Self::CreatedAtHeight => &row.created_at_height,
            Self::Allowance => &row.allowance,
            Self::RemainingDatacap => &row.remaining_datacap,
            Self::InitialAllowance => &row.initial_allowance,
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::invalid_input(format!("unknown column '{wanted}'")))
    }
}

// ============================================================================
// Rendered Values
// ============================================================================

/// Navigation target of a cell, keyed by the row identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Allocator the link points at.
    pub address_id: String,
}

impl Link {
    /// Creates a link to an allocator's page.
    #[must_use]
    pub fn allocator(address_id: &str) -> Self {
        Self {
            address_id: address_id.to_string(),
        }
    }

    /// Route of the allocator page, `/allocators/{addressId}`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/allocators/{}", self.address_id)
    }

    /// Absolute URL under `base`.
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

/// One line of a disclosure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureEntry {
    /// Main value.
    pub primary: String,
    /// Muted annotation shown after the value.
    pub secondary: Option<String>,
}

/// Auxiliary detail a cell exposes on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disclosure {
    /// Heading of the detail view.
    pub title: String,
    /// Lines in display order.
    pub entries: Vec<DisclosureEntry>,
}

/// Side effect a cell offers to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellAction {
    /// Write the text to the system clipboard.
    CopyToClipboard(String),
}

/// A rendered cell: formatted text plus optional affordances.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellContent {
    /// Formatted value.
    pub text: String,
    /// Navigation target, if the cell is a link.
    pub link: Option<Link>,
    /// On-demand detail, if any.
    pub disclosure: Option<Disclosure>,
    /// User-triggered side effect, if any.
    pub action: Option<CellAction>,
}

impl CellContent {
    /// A plain text cell.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_link(mut self, link: Link) -> Self {
        self.link = Some(link);
        self
    }

    #[must_use]
    pub fn with_disclosure(mut self, disclosure: Disclosure) -> Self {
        self.disclosure = Some(disclosure);
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: CellAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// A rendered header: label plus the resolved sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column this header belongs to.
    pub key: ColumnKey,
    /// Header text.
    pub label: &'static str,
    /// Active direction, `None` when this column is not sorted.
    pub direction: Option<SortDirection>,
}

// ============================================================================
// Column Specs
// ============================================================================

type CellRenderer = fn(&AllocatorRecord, ChainParams) -> CellContent;

/// Inputs of [`build_columns`].
#[derive(Clone, Copy)]
pub struct ColumnOptions<'a> {
    /// Active sort, `None` for default order.
    pub sort_state: Option<SortState>,
    /// Receives header activations.
    pub on_sort: &'a dyn SortRequestHandler,
    /// Height-to-date constants.
    pub chain: ChainParams,
}

/// Specification of one grid column.
#[derive(Clone, Copy)]
pub struct ColumnSpec<'a> {
    key: ColumnKey,
    direction: Option<SortDirection>,
    chain: ChainParams,
    on_sort: &'a dyn SortRequestHandler,
    render: CellRenderer,
}

impl ColumnSpec<'_> {
    #[must_use]
    pub const fn key(&self) -> ColumnKey {
        self.key
    }

    /// Header label with the direction resolved at build time.
    #[must_use]
    pub const fn render_header(&self) -> HeaderCell {
        HeaderCell {
            key: self.key,
            label: self.key.label(),
            direction: self.direction,
        }
    }

    /// Formats `row` for this column.
    #[must_use]
    pub fn render_cell(&self, row: &AllocatorRecord) -> CellContent {
        (self.render)(row, self.chain)
    }

    /// Requests the next sort direction for this column.
    pub fn request_sort(&self) {
        let request = SortRequest {
            key: self.key,
            direction: SortDirection::next(self.direction),
        };
        tracing::debug!(key = %request.key, direction = %request.direction, "sort requested");
        self.on_sort.request_sort(request);
    }
}

impl fmt::Debug for ColumnSpec<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("direction", &self.direction)
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}

/// Builds the column specifications, in display order.
///
/// Deterministic in its inputs: the same options always produce the same
/// headers and the same cell output for a given row.
#[must_use]
pub fn build_columns<'a>(options: &ColumnOptions<'a>) -> Vec<ColumnSpec<'a>> {
    let sort_state = options.sort_state.as_ref();
    ColumnKey::ALL
        .into_iter()
        .map(|key| ColumnSpec {
            key,
            direction: resolve_direction(sort_state, key),
            chain: options.chain,
            on_sort: options.on_sort,
            render: cells::renderer_for(key),
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
