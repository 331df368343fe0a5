//! Command execution and input handling for the lazycap application.
//!
//! Keyboard input is mapped to an [`AppCommand`] and executed against the
//! grid, the column model and the popups.

use crossterm::event::KeyEvent;

use super::platform::clipboard;
use super::{App, PopupState};
use crate::columns::{CellAction, CellContent, ColumnKey};
use crate::commands::{AppCommand, InputContext, KeyMapper};
use crate::constants::TOAST_TICKS;

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.input_context();
        let command = KeyMapper::map_key(key_event, &context);
        if command.is_exit() {
            tracing::debug!(?context, "quit requested");
        }
        self.execute(command);
    }

    /// Determines the current input context from the popup state.
    #[must_use]
    pub fn input_context(&self) -> InputContext {
        match &self.ui.popup_state {
            PopupState::None => InputContext::Main,
            PopupState::Disclosure(_) => InputContext::Disclosure,
            PopupState::Help => InputContext::Help,
            PopupState::Message(_) => InputContext::MessagePopup,
        }
    }

    /// Executes an application command.
    pub fn execute(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::ToggleNetwork => {
                self.toggle_network();
            }
            AppCommand::ShowHelp => {
                self.ui.show_help();
            }
            AppCommand::Dismiss => {
                self.ui.dismiss_popup();
            }

            // === Navigation ===
            AppCommand::MoveUp
            | AppCommand::MoveDown
            | AppCommand::PageUp
            | AppCommand::PageDown
            | AppCommand::First
            | AppCommand::Last => self.navigate(command),
            AppCommand::ColumnLeft => self.grid.column_left(),
            AppCommand::ColumnRight => self.grid.column_right(),

            // === Sorting ===
            AppCommand::SortSelectedColumn => {
                let key = self.grid.selected_column();
                self.activate_header(key);
            }
            AppCommand::SortBy(key) => {
                self.activate_header(key);
            }

            // === Cell Affordances ===
            AppCommand::Reveal => {
                self.reveal_selected_cell();
            }
            AppCommand::CopyAddress => {
                self.copy_selected_address();
            }
            AppCommand::OpenLink => {
                self.open_selected_link();
            }

            AppCommand::Noop => {}
        }
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Scrolls an open disclosure, otherwise moves the grid cursor.
    fn navigate(&mut self, command: AppCommand) {
        if let Some(view) = self.ui.disclosure_view_mut() {
            let page = isize::try_from(view.viewport).unwrap_or(isize::MAX);
            match command {
                AppCommand::MoveUp => view.scroll_by(-1),
                AppCommand::MoveDown => view.scroll_by(1),
                AppCommand::PageUp => view.scroll_by(-page),
                AppCommand::PageDown => view.scroll_by(page),
                AppCommand::First => view.scroll_to_top(),
                AppCommand::Last => view.scroll_to_bottom(),
                _ => {}
            }
            return;
        }
        match command {
            AppCommand::MoveUp => self.grid.move_up(),
            AppCommand::MoveDown => self.grid.move_down(),
            AppCommand::PageUp => self.grid.page_up(self.page_size),
            AppCommand::PageDown => self.grid.page_down(self.page_size),
            AppCommand::First => self.grid.select_first(),
            AppCommand::Last => self.grid.select_last(),
            _ => {}
        }
    }

    /// Activates a column header; the request lands on the message channel.
    fn activate_header(&self, key: ColumnKey) {
        if let Some(spec) = self.columns().into_iter().find(|spec| spec.key() == key) {
            spec.request_sort();
        }
    }

    /// Renders `key`'s cell for the selected row.
    fn selected_cell(&self, key: ColumnKey) -> Option<CellContent> {
        let row = self.grid.selected_row()?;
        self.columns()
            .into_iter()
            .find(|spec| spec.key() == key)
            .map(|spec| spec.render_cell(row))
    }

    fn reveal_selected_cell(&mut self) {
        let key = self.grid.selected_column();
        match self.selected_cell(key).and_then(|cell| cell.disclosure) {
            Some(disclosure) => self.ui.show_disclosure(disclosure),
            None => self
                .ui
                .show_toast(format!("No details for {}", key.label()), TOAST_TICKS),
        }
    }

    fn copy_selected_address(&mut self) {
        let action = self
            .selected_cell(ColumnKey::Address)
            .and_then(|cell| cell.action);
        match action {
            Some(CellAction::CopyToClipboard(text)) => {
                clipboard::copy_in_background(text);
                self.ui.show_toast("[+] Address sent to clipboard", TOAST_TICKS);
            }
            None => self.ui.show_toast("[x] Nothing to copy", TOAST_TICKS),
        }
    }

    /// Opens the selected cell's link, or the row's allocator page when the
    /// selected cell is not a link.
    fn open_selected_link(&mut self) {
        let key = self.grid.selected_column();
        let link = self
            .selected_cell(key)
            .and_then(|cell| cell.link)
            .or_else(|| {
                self.selected_cell(ColumnKey::AddressId)
                    .and_then(|cell| cell.link)
            });

        let Some(link) = link else {
            self.ui.show_toast("[x] No allocator selected", TOAST_TICKS);
            return;
        };

        let url = link.url(&self.config.explorer_url);
        tracing::debug!(%url, "opening allocator page");
        match open::that(&url) {
            Ok(()) => self.ui.show_toast("[+] Opened in browser", TOAST_TICKS),
            Err(e) => {
                tracing::warn!(%url, error = %e, "failed to open browser");
                self.ui.show_message(format!("Failed to open browser: {e}"));
            }
        }
    }

    fn toggle_network(&mut self) {
        self.network = self.network.toggle();
        self.config.network = self.network;
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "failed to save configuration");
        }
        self.ui
            .show_toast(format!("Dates anchored to {}", self.network), TOAST_TICKS);
    }
}
