//! Allocators table: the column model rendered as a ratatui [`Table`].
//!
//! Headers carry the sort arrow of the active column; cells are styled by the
//! affordance they offer (link, disclosure). The cell under the cursor is
//! highlighted on top of the selected row.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Row, Table},
};

use crate::columns::{CellContent, ColumnKey, ColumnSpec, HeaderCell};
use crate::constants::{COLUMN_WIDTHS, TABLE_HEADER_ROWS};
use crate::domain::AllocatorRecord;
use crate::state::App;
use crate::theme::{
    DISCLOSURE_STYLE, HEADER_STYLE, HIGHLIGHT_STYLE, LINK_STYLE, SELECTED_HEADER_STYLE,
    SELECTED_STYLE,
};

use super::helpers::create_border_block;

const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Renders the allocators table and records the visible page size.
pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let cursor = Cursor {
        row: app.grid.selected_index(),
        column: app.grid.selected_column(),
    };

    let (header, rows) = {
        let columns = app.columns();
        let header = header_row(&columns, cursor.column);
        let rows: Vec<Row<'static>> = app
            .rows()
            .iter()
            .enumerate()
            .map(|(index, record)| body_row(&columns, record, cursor.at_row(index)))
            .collect();
        (header, rows)
    };

    let title = format!("Allocators ({})", app.grid.len());
    let block = create_border_block(&title, !app.ui.has_active_popup());
    let body_height = block.inner(area).height.saturating_sub(TABLE_HEADER_ROWS);
    app.page_size = usize::from(body_height.max(1));

    let table = Table::new(rows, COLUMN_WIDTHS.map(Constraint::Length))
        .header(header)
        .block(block)
        .row_highlight_style(SELECTED_STYLE)
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    frame.render_stateful_widget(table, area, &mut app.grid.table_state);
}

#[derive(Debug, Clone, Copy)]
struct Cursor {
    row: Option<usize>,
    column: ColumnKey,
}

impl Cursor {
    /// The highlighted column when `index` is the selected row.
    fn at_row(self, index: usize) -> Option<ColumnKey> {
        (self.row == Some(index)).then_some(self.column)
    }
}

// ============================================================================
// Header
// ============================================================================

fn header_row(columns: &[ColumnSpec<'_>], selected: ColumnKey) -> Row<'static> {
    let cells = columns.iter().map(|spec| {
        let header = spec.render_header();
        let style = if header.key == selected {
            SELECTED_HEADER_STYLE
        } else {
            HEADER_STYLE
        };
        Cell::from(header_text(&header)).style(style)
    });
    Row::new(cells).bottom_margin(TABLE_HEADER_ROWS - 1)
}

/// Header label, followed by the direction arrow on the sorted column.
fn header_text(header: &HeaderCell) -> String {
    match header.direction {
        Some(direction) => format!("{} {}", header.label, direction.arrow()),
        None => header.label.to_string(),
    }
}

// ============================================================================
// Body
// ============================================================================

fn body_row(
    columns: &[ColumnSpec<'_>],
    record: &AllocatorRecord,
    highlighted: Option<ColumnKey>,
) -> Row<'static> {
    let cells = columns.iter().map(|spec| {
        let content = spec.render_cell(record);
        let style = cell_style(&content);
        let style = if highlighted == Some(spec.key()) {
            style.patch(HIGHLIGHT_STYLE)
        } else {
            style
        };
        Cell::from(Line::from(Span::styled(content.text, style)))
    });
    Row::new(cells)
}

fn cell_style(content: &CellContent) -> Style {
    if content.link.is_some() {
        LINK_STYLE
    } else if content.disclosure.is_some() {
        DISCLOSURE_STYLE
    } else {
        Style::default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{SortDirection, SortState};
    use crate::state::{AppConfig, StartupOptions};
    use crate::test_utils::AllocatorMother;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Modifier};

    fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn line(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    /// Column of the first cell where `needle` starts on line `y`.
    fn column_of(buffer: &Buffer, y: u16, needle: &str) -> Option<u16> {
        let symbols: Vec<&str> = (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        let len = needle.chars().count();
        (0..symbols.len().saturating_sub(len))
            .find(|&x| symbols[x..x + len].concat() == needle)
            .and_then(|x| u16::try_from(x).ok())
    }

    #[test]
    fn test_header_text_shows_arrow_only_when_sorted() {
        let header = HeaderCell {
            key: ColumnKey::Name,
            label: "Name",
            direction: None,
        };
        assert_eq!(header_text(&header), "Name");

        let sorted = HeaderCell {
            direction: Some(SortDirection::Descending),
            ..header
        };
        assert_eq!(header_text(&sorted), "Name ▼");
    }

    #[test]
    fn test_renders_headers_and_formatted_cells() {
        let mut app = App::new(
            vec![AllocatorMother::acme()],
            AppConfig::default(),
            StartupOptions {
                network: None,
                sort: Some(SortState::new(ColumnKey::AddressId, SortDirection::Ascending)),
            },
        );
        let buffer = draw(&mut app, 200, 8);

        let header = line(&buffer, 1);
        assert!(header.contains("Allocator ID ▲"), "{header}");
        assert!(header.contains("Total DataCap received"), "{header}");

        let row = line(&buffer, 3);
        for expected in ["f01", "Acme", "f012...cdef", "2020-08-24 22:50", "2 GiB", "3 GiB"] {
            assert!(row.contains(expected), "missing {expected} in {row}");
        }
    }

    #[test]
    fn test_link_cells_are_styled() {
        let mut app = App::new(
            vec![AllocatorMother::acme()],
            AppConfig::default(),
            StartupOptions::default(),
        );
        // Cursor off the link column so the cell only carries link styling.
        app.grid.column_right();
        app.grid.column_right();
        let buffer = draw(&mut app, 200, 8);

        let x = column_of(&buffer, 3, "f01").unwrap();
        assert!(buffer[(x, 3)].modifier.contains(Modifier::UNDERLINED));

        let x = column_of(&buffer, 3, "Acme").unwrap();
        assert!(buffer[(x, 3)].modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_page_size_tracks_body_height() {
        let mut app = App::new(
            AllocatorMother::trio(),
            AppConfig::default(),
            StartupOptions::default(),
        );
        draw(&mut app, 120, 12);
        // 12 rows minus 2 borders minus header and margin
        assert_eq!(app.page_size, 8);
    }

    #[test]
    fn test_empty_grid_renders_headers_only() {
        let mut app = App::new(Vec::new(), AppConfig::default(), StartupOptions::default());
        let buffer = draw(&mut app, 200, 6);
        assert!(line(&buffer, 0).contains("Allocators (0)"));
        assert!(line(&buffer, 1).contains("Verified Clients"));
    }
}
