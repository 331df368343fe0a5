//! Grid controller: the owner of row order and sort state.
//!
//! The column model never orders anything itself. It routes sort requests
//! here, where [`AllocatorGrid::apply_sort`] swaps the state and reorders the
//! rows in one step, so a render never sees a new key with an old order.

use std::cmp::Ordering;

use ratatui::widgets::TableState;

use crate::columns::{ColumnKey, SortDirection, SortRequest, SortState};
use crate::domain::AllocatorRecord;
use crate::format::cmp_decimal;

/// Rows, the active sort and the cursor (row and column).
#[derive(Debug, Default)]
pub struct AllocatorGrid {
    rows: Vec<AllocatorRecord>,
    sort_state: Option<SortState>,
    selected_column: usize,
    /// Selection and scroll offset, kept across frames.
    pub(crate) table_state: TableState,
}

impl AllocatorGrid {
    /// Creates a grid in the dataset's own order.
    #[must_use]
    pub fn new(rows: Vec<AllocatorRecord>) -> Self {
        let mut table_state = TableState::default();
        if !rows.is_empty() {
            table_state.select(Some(0));
        }
        Self {
            rows,
            sort_state: None,
            selected_column: 0,
            table_state,
        }
    }

    /// Creates a grid already sorted by `state`.
    #[must_use]
    pub fn with_sort(rows: Vec<AllocatorRecord>, state: Option<SortState>) -> Self {
        let mut grid = Self::new(rows);
        if let Some(state) = state {
            grid.apply_sort(SortRequest {
                key: state.key,
                direction: state.direction,
            });
        }
        grid
    }

    #[must_use]
    pub fn rows(&self) -> &[AllocatorRecord] {
        &self.rows
    }

    #[must_use]
    pub const fn sort_state(&self) -> Option<SortState> {
        self.sort_state
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // ========================================================================
    // Sorting
    // ========================================================================

    /// Applies a sort request: new state and new row order together.
    ///
    /// The selection follows the previously selected allocator.
    pub fn apply_sort(&mut self, request: SortRequest) {
        let selected_id = self.selected_row().map(|row| row.address_id.clone());

        let state = SortState::from(request);
        self.rows.sort_by(|a, b| compare_rows(a, b, state));
        self.sort_state = Some(state);

        if let Some(id) = selected_id {
            let index = self.rows.iter().position(|row| row.address_id == id);
            self.table_state.select(index);
        }
        tracing::debug!(sort = %state, rows = self.rows.len(), "grid re-sorted");
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.table_state.selected()
    }

    #[must_use]
    pub fn selected_row(&self) -> Option<&AllocatorRecord> {
        self.selected_index().and_then(|i| self.rows.get(i))
    }

    #[must_use]
    pub fn selected_column(&self) -> ColumnKey {
        ColumnKey::ALL[self.selected_column]
    }

    pub fn move_up(&mut self) {
        self.move_by(-1);
    }

    pub fn move_down(&mut self) {
        self.move_by(1);
    }

    pub fn page_up(&mut self, page: usize) {
        self.move_by(-isize::try_from(page).unwrap_or(isize::MAX));
    }

    pub fn page_down(&mut self, page: usize) {
        self.move_by(isize::try_from(page).unwrap_or(isize::MAX));
    }

    pub fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if let Some(last) = self.rows.len().checked_sub(1) {
            self.table_state.select(Some(last));
        }
    }

    pub fn column_left(&mut self) {
        self.selected_column = self.selected_column.saturating_sub(1);
    }

    pub fn column_right(&mut self) {
        self.selected_column = (self.selected_column + 1).min(ColumnKey::ALL.len() - 1);
    }

    fn move_by(&mut self, delta: isize) {
        let Some(last) = self.rows.len().checked_sub(1) else {
            return;
        };
        let current = self.selected_index().unwrap_or(0);
        let target = current.saturating_add_signed(delta).min(last);
        self.table_state.select(Some(target));
    }
}

// ============================================================================
// Ordering
// ============================================================================

/// Orders two rows by the state's column, ties broken by `addressId`.
///
/// Numeric columns compare as arbitrary-size integers; malformed values go
/// after all well-formed ones whatever the direction. Text columns compare
/// case-insensitively.
fn compare_rows(a: &AllocatorRecord, b: &AllocatorRecord, state: SortState) -> Ordering {
    let key = state.key;
    let (raw_a, raw_b) = (key.raw_value(a), key.raw_value(b));
    let by_key = if key.is_numeric() {
        match cmp_decimal(raw_a, raw_b) {
            Ok(ordering) => directed(ordering, state.direction),
            Err(_) => malformed_last(raw_a, raw_b),
        }
    } else {
        directed(
            raw_a.to_lowercase().cmp(&raw_b.to_lowercase()),
            state.direction,
        )
    };
    by_key.then_with(|| a.address_id.cmp(&b.address_id))
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// At least one side is malformed: well-formed first, two malformed tie.
fn malformed_last(a: &str, b: &str) -> Ordering {
    let a_ok = cmp_decimal(a, "0").is_ok();
    let b_ok = cmp_decimal(b, "0").is_ok();
    b_ok.cmp(&a_ok)
}

// ============================================================================
// Tests
// ============================================================================
