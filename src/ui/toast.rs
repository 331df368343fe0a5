//! Toast notification in the bottom-right corner.
//!
//! The text color follows the message prefix: `[+]` success, `[x]` error,
//! anything else white.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

const MIN_TOAST_WIDTH: u16 = 20;
const TOAST_HEIGHT: u16 = 3;
const TOAST_PADDING: u16 = 2;

/// Renders `message` as a non-blocking overlay.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_area(area, message);
    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(text_color(message)))
            .alignment(Alignment::Center),
        inner,
    );
}

fn toast_area(area: Rect, message: &str) -> Rect {
    let message_len = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let width = message_len
        .saturating_add(4)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let height = TOAST_HEIGHT.min(area.height);

    let x = area.x + area.width.saturating_sub(width + TOAST_PADDING);
    let y = area.y + area.height.saturating_sub(height + TOAST_PADDING);
    Rect::new(x, y, width, height)
}

fn text_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        Color::White
    }
}
