//! Help popup listing the key bindings.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::ACCENT_COLOR;
use crate::ui::helpers::centered_popup_area;

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Grid",
        &[
            ("↑ / k", "Previous allocator"),
            ("↓ / j", "Next allocator"),
            ("← / h", "Previous column"),
            ("→ / l", "Next column"),
            ("PgUp/PgDn", "Scroll a page"),
            ("g / G", "First / last allocator"),
        ],
    ),
    (
        "Sorting",
        &[
            ("s", "Sort by selected column"),
            ("1-9", "Sort by column number"),
        ],
    ),
    (
        "Cell",
        &[
            ("i / Space", "Show details (↑↓ scroll them)"),
            ("c", "Copy full address"),
            ("o / Enter", "Open allocator page"),
        ],
    ),
    (
        "Global",
        &[
            ("n", "Switch network"),
            ("?", "Toggle help"),
            ("Esc", "Close popup"),
            ("q", "Quit"),
        ],
    ),
];

pub fn render(frame: &mut Frame, area: Rect) {
    let lines = help_lines();
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup_area = centered_popup_area(area, 48, height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help (? to close) ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT_COLOR));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (section_title, bindings) in HELP_SECTIONS {
        lines.push(Line::from(Span::styled(
            *section_title,
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<12}"), Style::default().fg(ACCENT_COLOR)),
                Span::raw(*description),
            ]));
        }
    }
    lines
}
