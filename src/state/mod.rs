//! State management module for the lazycap TUI application.
//!
//! - [`AllocatorGrid`] - Rows, authoritative sort state and the cursor
//! - [`UiState`] - UI presentation concerns (popups, toasts)
//! - [`AppConfig`] - Persistent configuration with load/save capabilities
//!
//! # Sort Flow
//!
//! ```text
//!  header activation          message channel            grid
//! ┌──────────────────┐  SortRequested  ┌──────────┐  apply_sort  ┌────────────┐
//! │ ColumnSpec       │ ──────────────▶ │   App    │ ───────────▶ │ rows+state │
//! │  .request_sort() │                 │ messages │              │  swapped   │
//! └──────────────────┘                 └──────────┘              └────────────┘
//! ```
//!
//! Column specs are rebuilt from the grid's state on every use, so the next
//! frame always renders headers and rows from the same state.

use tokio::sync::mpsc;

use crate::columns::{
    ColumnOptions, ColumnSpec, SortRequest, SortRequestHandler, SortState, build_columns,
};
use crate::domain::{AllocatorRecord, ChainParams, Network};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_commands;
mod app_lifecycle;

pub mod config;
pub mod grid;
pub mod platform;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use grid::AllocatorGrid;
pub use ui_state::{DisclosureView, PopupState, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages delivered to the main app loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    /// A column header asked for a new sort.
    SortRequested(SortRequest),
}

/// Forwards header activations into the app's message channel.
#[derive(Debug, Clone)]
pub(crate) struct SortChannel {
    tx: mpsc::UnboundedSender<AppMessage>,
}

impl SortRequestHandler for SortChannel {
    fn request_sort(&self, request: SortRequest) {
        // Receiver may be dropped during shutdown - safe to ignore
        let _ = self.tx.send(AppMessage::SortRequested(request));
    }
}

// ============================================================================
// Startup Options
// ============================================================================

/// Command-line overrides applied on top of the persisted configuration.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Network to use instead of the configured one.
    pub network: Option<Network>,
    /// Initial sort applied before the first frame.
    pub sort: Option<SortState>,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// Rows, sort state and cursor.
    pub grid: AllocatorGrid,

    /// UI state - popups, toasts.
    pub ui: UiState,

    /// Persisted settings.
    pub config: AppConfig,

    /// Network anchoring height-to-date conversion.
    pub network: Network,

    /// Whether the application should exit.
    pub exit: bool,

    /// Rows visible in the table body, refreshed on every draw.
    pub(crate) page_size: usize,

    // NOTE: Channel sends use `let _ = tx.send(...)`. Receivers may be
    // dropped during shutdown and those errors are not propagated.
    pub(crate) sort_channel: SortChannel,
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,
}

impl App {
    /// Height-to-date constants of the active network.
    #[must_use]
    pub const fn chain(&self) -> ChainParams {
        self.network.chain_params()
    }

    /// Builds the column model for the current sort state.
    ///
    /// Header activations on the returned specs are queued on the message
    /// channel and applied by [`App::process_messages`].
    #[must_use]
    pub fn columns(&self) -> Vec<ColumnSpec<'_>> {
        build_columns(&ColumnOptions {
            sort_state: self.grid.sort_state(),
            on_sort: &self.sort_channel,
            chain: self.chain(),
        })
    }

    /// The allocator rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[AllocatorRecord] {
        self.grid.rows()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
