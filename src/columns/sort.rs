//! Sort-state adapter.
//!
//! The grid controller owns the active [`SortState`]. Columns only read it to
//! decide which arrow to draw, and hand user sort requests back through a
//! [`SortRequestHandler`]. Ordering semantics live with the controller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

use super::ColumnKey;

// ============================================================================
// Direction
// ============================================================================

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Direction requested when a header is activated.
    ///
    /// An unsorted or descending column becomes ascending; an ascending one
    /// flips to descending.
    #[must_use]
    pub const fn next(current: Option<Self>) -> Self {
        match current {
            Some(Self::Ascending) => Self::Descending,
            Some(Self::Descending) | None => Self::Ascending,
        }
    }

    /// Arrow drawn next to a sorted header.
    #[must_use]
    pub const fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }

    /// Short wire name (`asc`/`desc`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(DomainError::invalid_input(format!(
                "unknown sort direction '{other}' (expected asc or desc)"
            ))),
        }
    }
}

// ============================================================================
// Sort State
// ============================================================================

/// The single active sort of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortState {
    /// Sorted column.
    pub key: ColumnKey,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortState {
    /// Creates a new sort state.
    #[must_use]
    pub const fn new(key: ColumnKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.direction)
    }
}

/// Parses `key` or `key:direction`; a bare key sorts ascending.
impl FromStr for SortState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, direction) = match s.split_once(':') {
            Some((key, direction)) => (key.parse()?, direction.parse()?),
            None => (s.parse()?, SortDirection::Ascending),
        };
        Ok(Self::new(key, direction))
    }
}

/// Resolves the direction a column should display.
///
/// Returns the active direction only for the column named by `state`, and
/// `None` for every other column or when nothing is sorted.
#[must_use]
pub fn resolve_direction(state: Option<&SortState>, key: ColumnKey) -> Option<SortDirection> {
    state.filter(|s| s.key == key).map(|s| s.direction)
}

// ============================================================================
// Requests
// ============================================================================

/// A user request to sort by `key` in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortRequest {
    /// Column to sort by.
    pub key: ColumnKey,
    /// Requested direction.
    pub direction: SortDirection,
}

impl From<SortRequest> for SortState {
    fn from(request: SortRequest) -> Self {
        Self::new(request.key, request.direction)
    }
}

/// Receives sort requests on behalf of whoever owns the [`SortState`].
pub trait SortRequestHandler {
    /// Routes a request to the owner; no return value is observed.
    fn request_sort(&self, request: SortRequest);
}

impl<F> SortRequestHandler for F
where
    F: Fn(SortRequest),
{
    fn request_sort(&self, request: SortRequest) {
        self(request);
    }
}

// ============================================================================
// Tests
// ============================================================================
