//! Disclosure popup: the on-demand detail of a single cell.
//!
//! Entries are listed in the order the cell produced them, each with its
//! muted annotation (the date of an allowance grant, for instance).

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::columns::DisclosureEntry;
use crate::state::DisclosureView;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::{centered_popup_area, create_popup_block};

const MIN_WIDTH: u16 = 30;

/// Borders, blank line and the key hint.
const CHROME_HEIGHT: u16 = 4;

/// Room for the ` n/total` position after the title.
const POSITION_WIDTH: usize = 10;

/// Renders the visible window of `view` and records how many entries fit.
pub fn render(frame: &mut Frame, area: Rect, view: &mut DisclosureView) {
    let lines: Vec<Line> = view.disclosure.entries.iter().map(entry_line).collect();

    let widest = lines
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or(0)
        .max(view.disclosure.title.chars().count() + POSITION_WIDTH);
    let width = u16::try_from(widest + 4).unwrap_or(u16::MAX).max(MIN_WIDTH);
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(CHROME_HEIGHT);
    let popup_area = centered_popup_area(area, width, height);

    let [entries_area, _, hint_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(popup_area.inner(Margin::new(1, 1)));
    view.set_viewport(usize::from(entries_area.height));

    let (title, hint) = if view.is_scrollable() {
        (
            format!(
                "{} {}/{}",
                view.disclosure.title,
                view.last_visible(),
                view.total()
            ),
            "\u{2191}\u{2193}:Scroll  Esc:Close",
        )
    } else {
        (view.disclosure.title.clone(), "Esc:Close")
    };

    frame.render_widget(Clear, popup_area);
    frame.render_widget(create_popup_block(&title), popup_area);

    let offset = u16::try_from(view.offset).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), entries_area);
    frame.render_widget(
        Paragraph::new(hint)
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center),
        hint_area,
    );
}

fn entry_line(entry: &DisclosureEntry) -> Line<'static> {
    let mut spans = vec![Span::styled(
        entry.primary.clone(),
        Style::default().fg(PRIMARY_COLOR),
    )];
    if let Some(secondary) = &entry.secondary {
        spans.push(Span::styled(
            format!("  {secondary}"),
            Style::default().fg(MUTED_COLOR),
        ));
    }
    Line::from(spans)
}
