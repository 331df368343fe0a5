//! Application constants for the lazycap TUI.
//!
//! UI dimensions, display budgets and timing values shared across modules.

use std::time::Duration;

// ============================================================================
// Display Budgets
// ============================================================================

/// Maximum characters shown for allocator and organization names.
pub const NAME_MAX_LEN: usize = 20;

// ============================================================================
// UI Dimensions
// ============================================================================

/// Height of the application header area (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer with key hints (in rows).
pub const FOOTER_HEIGHT: u16 = 1;

/// Rows taken by the table header line and its bottom margin.
pub const TABLE_HEADER_ROWS: u16 = 2;

/// Column widths in display order.
///
/// Wide enough for each header label plus its sort arrow; dates are 16
/// chars, shortened names at most 23, shortened addresses 11.
pub const COLUMN_WIDTHS: [u16; 9] = [14, 24, 24, 18, 13, 18, 19, 14, 24];

// ============================================================================
// Timing
// ============================================================================

/// UI refresh tick.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Ticks a transient toast stays visible.
pub const TOAST_TICKS: u8 = 20;

// ============================================================================
// Defaults
// ============================================================================

/// Web explorer used to open allocator links.
pub const DEFAULT_EXPLORER_URL: &str = "https://datacapstats.io";
