//! UI rendering module for the lazycap TUI.
//!
//! # Module Structure
//!
//! - `table` - The allocators grid built from the column model
//! - `popups` - Modal dialogs (cell disclosure, help, messages)
//! - `header` / `footer` - Title bar and key hints
//! - `toast` - Transient notifications
//! - `helpers` - Shared block and layout helpers

pub mod footer;
pub mod header;
pub mod helpers;
pub mod popups;
pub mod table;
pub mod toast;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::state::{App, PopupState};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Renders one frame.
///
/// Takes the app mutably: the table keeps its scroll offset in the grid and
/// reports the visible page size back for paging commands.
pub fn render(app: &mut App, frame: &mut Frame) {
    let size = frame.area();

    let [header_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(size);

    header::render(frame, header_area, app);
    table::render(frame, table_area, app);
    footer::render(frame, footer_area);

    render_popups(app, frame, size);

    // Toast on top of everything (non-blocking overlay)
    if let Some(message) = app.ui.toast_message() {
        toast::render(frame, size, message);
    }
}

fn render_popups(app: &mut App, frame: &mut Frame, area: Rect) {
    match &mut app.ui.popup_state {
        PopupState::Disclosure(view) => popups::disclosure::render(frame, area, view),
        PopupState::Help => popups::help::render(frame, area),
        PopupState::Message(message) => popups::message::render(frame, area, message),
        PopupState::None => {}
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::AppCommand;
    use crate::columns::ColumnKey;
    use crate::state::{AppConfig, StartupOptions};
    use crate::test_utils::AllocatorMother;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &mut App) -> String {
        screen_with_rows(app, 20)
    }

    fn screen_with_rows(app: &mut App, rows: u16) -> String {
        let backend = TestBackend::new(200, rows);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..rows)
            .map(|y| (0..200u16).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_full_frame_with_sorted_header() {
        let mut app = App::new(
            AllocatorMother::trio(),
            AppConfig::default(),
            StartupOptions::default(),
        );
        app.execute(AppCommand::SortBy(ColumnKey::Allowance));
        app.process_messages();

        let text = screen(&mut app);
        assert!(text.contains("lazycap"));
        assert!(text.contains("DataCap Available ▲"));
        assert!(text.contains("16 EiB"));
        assert!(text.contains("q:Quit"));

        // Rows appear in sorted order: 2 KiB, 1 GiB, 16 EiB
        let small = text.find("2 KiB").unwrap();
        let large = text.find("16 EiB").unwrap();
        assert!(small < large);
    }

    #[test]
    fn test_disclosure_popup_and_toast_overlay() {
        let mut app = App::new(
            vec![AllocatorMother::acme()],
            AppConfig::default(),
            StartupOptions::default(),
        );
        for _ in 0..8 {
            app.execute(AppCommand::ColumnRight);
        }
        app.execute(AppCommand::Reveal);
        app.ui.show_toast("[+] Opened in browser", 5);

        let text = screen(&mut app);
        assert!(text.contains(" Allowance history "));
        assert!(text.contains("2 GiB  2020-08-24 22:50"));
        assert!(text.contains("[+] Opened in browser"));
    }

    #[test]
    fn test_long_history_scrolls_to_its_last_grant() {
        let mut app = App::new(
            vec![AllocatorMother::long_history(30)],
            AppConfig::default(),
            StartupOptions::default(),
        );
        for _ in 0..8 {
            app.execute(AppCommand::ColumnRight);
        }
        app.execute(AppCommand::Reveal);

        let text = screen_with_rows(&mut app, 24);
        assert!(text.contains("1 KiB  2020-08-24 23:00"), "{text}");
        assert!(!text.contains("30 KiB"), "{text}");
        assert!(text.contains(" Allowance history 16/30 "), "{text}");

        app.execute(AppCommand::MoveDown);
        let text = screen_with_rows(&mut app, 24);
        assert!(!text.contains("1 KiB  2020-08-24 23:00"), "{text}");
        assert!(text.contains("17 KiB"), "{text}");

        app.execute(AppCommand::Last);
        let text = screen_with_rows(&mut app, 24);
        assert!(text.contains("30 KiB  2020-08-26 04:00"), "{text}");
        assert!(text.contains(" Allowance history 30/30 "), "{text}");
        assert!(text.contains("Esc:Close"), "{text}");
        assert_eq!(app.input_context(), crate::commands::InputContext::Disclosure);
    }
}
