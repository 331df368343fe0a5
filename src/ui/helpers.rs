//! Shared block and layout helpers.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, FOCUSED_TITLE_STYLE, PRIMARY_COLOR};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered block, double-lined and accented when focused.
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'static> {
    let display_title = if title.is_empty() {
        String::new()
    } else {
        format!(" {title} ")
    };
    let (border_style, border_set, title_style) = if focused {
        (
            Style::new().fg(PRIMARY_COLOR),
            border::DOUBLE,
            FOCUSED_TITLE_STYLE,
        )
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// Creates a popup-style block with centered title and rounded borders.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
}

// ============================================================================
// Layout
// ============================================================================

/// Centers a `width` x `height` popup in `parent`, keeping a 2-cell margin.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_centered_popup_area() {
        let area = Rect::new(0, 0, 100, 50);
        assert_eq!(centered_popup_area(area, 40, 20), Rect::new(30, 15, 40, 20));

        // Clamped to the parent minus margins
        let small = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_popup_area(small, 100, 100), Rect::new(2, 2, 16, 6));
    }

    #[test]
    fn test_block_states() {
        let backend = TestBackend::new(20, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(create_border_block("Grid", false), Rect::new(0, 0, 20, 3));
                frame.render_widget(create_border_block("Grid", true), Rect::new(0, 3, 20, 3));
            })
            .unwrap();

        assert_snapshot!(terminal.backend(), @r#"
        "╭ Grid ────────────╮"
        "│                  │"
        "╰──────────────────╯"
        "╔ Grid ════════════╗"
        "║                  ║"
        "╚══════════════════╝"
        "#);
    }
}
