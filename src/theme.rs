//! Theme and styling constants for the lazycap TUI.

use ratatui::style::{Color, Modifier, Style};

// Colors

/// Focused borders, disclosure values.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Allocator links.
pub const SECONDARY_COLOR: Color = Color::Blue;

/// `[+]` toasts and the title.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Column headers.
pub const WARNING_COLOR: Color = Color::Yellow;

/// `[x]` toasts.
pub const ERROR_COLOR: Color = Color::Red;

/// Hints, annotations, separators.
pub const MUTED_COLOR: Color = Color::Gray;

/// Network badge and help popup.
pub const ACCENT_COLOR: Color = Color::Magenta;

// Styles

/// Unfocused borders.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Title of the focused block.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Column header labels.
pub const HEADER_STYLE: Style = Style::new().fg(WARNING_COLOR).add_modifier(Modifier::BOLD);

/// Header of the column under the cursor.
pub const SELECTED_HEADER_STYLE: Style = Style::new()
    .fg(PRIMARY_COLOR)
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::UNDERLINED);

/// Cells that navigate to an allocator page.
pub const LINK_STYLE: Style = Style::new().fg(SECONDARY_COLOR).add_modifier(Modifier::UNDERLINED);

/// Cells that expose a disclosure.
pub const DISCLOSURE_STYLE: Style = Style::new().add_modifier(Modifier::ITALIC);

/// The selected allocator row.
pub const SELECTED_STYLE: Style = Style::new().bg(Color::DarkGray);

/// The cell under the column cursor.
pub const HIGHLIGHT_STYLE: Style = Style::new()
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);
