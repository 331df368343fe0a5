//! Header rendering: title, active sort and network.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{ACCENT_COLOR, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR};

use super::helpers::create_border_block;

const TITLE_WIDTH: u16 = 28;

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    let title = Line::from(vec![
        Span::styled(
            "lazy",
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "cap",
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  DataCap allocators", Style::default().fg(MUTED_COLOR)),
    ]);
    let [title_area, status_area] =
        Layout::horizontal([Constraint::Length(TITLE_WIDTH), Constraint::Min(0)]).areas(inner);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Left), title_area);
    frame.render_widget(
        Paragraph::new(status_line(app)).alignment(Alignment::Right),
        status_area,
    );
}

fn status_line(app: &App) -> Line<'static> {
    let sort = app
        .grid
        .sort_state()
        .map_or_else(|| "default order".to_string(), |state| {
            format!("{} {}", state.key.label(), state.direction.arrow())
        });

    Line::from(vec![
        Span::styled("sort: ", Style::default().fg(MUTED_COLOR)),
        Span::raw(sort),
        Span::styled("  │  ", Style::default().fg(MUTED_COLOR)),
        Span::styled(
            format!("● {}", app.network),
            Style::default().fg(ACCENT_COLOR),
        ),
    ])
}
