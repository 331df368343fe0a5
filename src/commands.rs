//! Command pattern for key event handling in the TUI application.
//!
//! Key input is mapped to an [`AppCommand`] by a pure function of the key and
//! the current [`InputContext`]; the app then executes the command. Keeping the
//! mapping free of state makes every binding testable in isolation.
//!
//! # Example
//!
//! ```ignore
//! let context = app.input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//! app.execute(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::columns::ColumnKey;

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the allocators grid.
    Main,
    /// A cell's disclosure popup is open.
    Disclosure,
    /// The key help popup is open.
    Help,
    /// A message popup is open.
    MessagePopup,
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Switch height-to-date constants to the other network.
    ToggleNetwork,
    /// Open the key help popup.
    ShowHelp,
    /// Dismiss the current popup.
    Dismiss,

    // === Navigation ===
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    First,
    Last,
    ColumnLeft,
    ColumnRight,

    // === Sorting ===
    /// Activate the header of the selected column.
    SortSelectedColumn,
    /// Activate the header of a specific column.
    SortBy(ColumnKey),

    // === Cell Affordances ===
    /// Show the selected cell's disclosure.
    Reveal,
    /// Copy the selected row's full address.
    CopyAddress,
    /// Open the selected row's allocator page.
    OpenLink,

    // === No Operation ===
    /// No action to perform (unhandled key).
    Noop,
}

impl AppCommand {
    /// Returns `true` if this command would exit the application.
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command.
    ///
    /// Ctrl+C quits from every context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }
        match context {
            InputContext::Main => Self::map_main_keys(key),
            InputContext::Disclosure => Self::map_disclosure_keys(key),
            InputContext::Help => Self::map_overlay_keys(key),
            InputContext::MessagePopup => Self::map_message_popup_keys(key),
        }
    }

    fn map_main_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('n') => AppCommand::ToggleNetwork,
            KeyCode::Char('?') => AppCommand::ShowHelp,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Left | KeyCode::Char('h') => AppCommand::ColumnLeft,
            KeyCode::Right | KeyCode::Char('l') => AppCommand::ColumnRight,
            KeyCode::PageUp => AppCommand::PageUp,
            KeyCode::PageDown => AppCommand::PageDown,
            KeyCode::Home | KeyCode::Char('g') => AppCommand::First,
            KeyCode::End | KeyCode::Char('G') => AppCommand::Last,
            KeyCode::Char('s') => AppCommand::SortSelectedColumn,
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                AppCommand::SortBy(ColumnKey::ALL[index])
            }
            KeyCode::Char('i') | KeyCode::Char(' ') => AppCommand::Reveal,
            KeyCode::Char('c') => AppCommand::CopyAddress,
            KeyCode::Enter | KeyCode::Char('o') => AppCommand::OpenLink,
            KeyCode::Esc => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }

    /// Navigation keys scroll the history instead of moving the grid cursor.
    fn map_disclosure_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::PageUp => AppCommand::PageUp,
            KeyCode::PageDown => AppCommand::PageDown,
            KeyCode::Home | KeyCode::Char('g') => AppCommand::First,
            KeyCode::End | KeyCode::Char('G') => AppCommand::Last,
            _ => Self::map_overlay_keys(key),
        }
    }

    fn map_overlay_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ' | 'i' | '?') => AppCommand::Dismiss,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }

    fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Dismiss,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
