//! Message popup for errors surfaced to the user.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::MUTED_COLOR;
use crate::ui::helpers::{centered_popup_area, create_popup_block};

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 6;

/// Borders, a blank spacer and the key hint.
const CHROME_HEIGHT: u16 = 4;

/// Renders `message` in a popup sized to its widest line.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let (line_count, widest) = message.lines().fold((0usize, 0usize), |(n, w), line| {
        (n + 1, w.max(line.chars().count()))
    });
    let line_count = u16::try_from(line_count.max(1)).unwrap_or(u16::MAX);
    let widest = u16::try_from(widest).unwrap_or(u16::MAX);

    let width = widest
        .saturating_add(6)
        .max(MIN_WIDTH)
        .min(area.width * 8 / 10);
    let height = line_count.saturating_add(CHROME_HEIGHT).max(MIN_HEIGHT);
    let popup_area = centered_popup_area(area, width, height);

    let block = create_popup_block("Message");
    let inner = block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    let [text_area, _, hint_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        text_area,
    );
    frame.render_widget(
        Paragraph::new("Esc:Close  Enter:Close")
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center),
        hint_area,
    );
}
