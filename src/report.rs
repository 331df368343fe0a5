//! Plain-text rendering of the column model, for `lazycap columns`.
//!
//! Uses the same [`build_columns`] output as the TUI, so the printed table and
//! the interactive grid never disagree on a formatted value.

use crate::columns::{ColumnOptions, HeaderCell, SortRequest, SortState, build_columns};
use crate::domain::{AllocatorRecord, ChainParams};

const COLUMN_GAP: &str = "  ";

/// Formats `rows` (already in display order) as an aligned text table.
#[must_use]
pub fn render_plain(
    rows: &[AllocatorRecord],
    sort_state: Option<SortState>,
    chain: ChainParams,
) -> String {
    // Nothing to re-sort in a one-shot print.
    let ignore = |_: SortRequest| {};
    let columns = build_columns(&ColumnOptions {
        sort_state,
        on_sort: &ignore,
        chain,
    });

    let header: Vec<String> = columns
        .iter()
        .map(|spec| header_label(&spec.render_header()))
        .collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|spec| spec.render_cell(row).text)
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..columns.len())
        .map(|i| {
            std::iter::once(&header)
                .chain(&body)
                .map(|line| line[i].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    std::iter::once(&header)
        .chain(&body)
        .map(|line| format_line(line, &widths))
        .collect::<Vec<_>>()
        .join("\n")
}

fn header_label(header: &HeaderCell) -> String {
    match header.direction {
        Some(direction) => format!("{} {}", header.label, direction.arrow()),
        None => header.label.to_string(),
    }
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}
