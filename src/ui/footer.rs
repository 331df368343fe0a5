//! Footer bar with keyboard shortcuts.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::theme::MUTED_COLOR;

const FOOTER_TEXT: &str =
    "q:Quit  ←→:Column  s:Sort  1-9:Sort by  i:Details  c:Copy  o:Open  n:Network  ?:Help";

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(FOOTER_TEXT)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_footer_displays_all_shortcuts() {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = (0..100u16).map(|x| buffer[(x, 0)].symbol()).collect();
        for shortcut in ["q:Quit", "s:Sort", "i:Details", "c:Copy", "o:Open", "?:Help"] {
            assert!(
                content.contains(shortcut),
                "Footer should contain '{shortcut}', got: {content}"
            );
        }
    }

    #[test]
    fn test_zero_height_does_not_panic() {
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 40, 0)))
            .unwrap();
    }
}
