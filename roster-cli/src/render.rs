//! Plain-text table rendering.

use std::fmt::Write;

use roster_lib::Snapshot;
use roster_lib::model::Column;

/// Longest cell shown before truncation.
const MAX_WIDTH: usize = 32;

/// Renders a page as an aligned text table followed by a pager line.
pub fn table(columns: &[Column], snapshot: &Snapshot) -> String {
    let header: Vec<String> = columns
        .iter()
        .map(|c| {
            let label = if c.label.is_empty() { &c.key } else { &c.label };
            match snapshot.sort_state.direction_of(&c.key) {
                Some(direction) => format!("{} ({})", label, direction),
                None => label.clone(),
            }
        })
        .collect();

    let cells: Vec<Vec<String>> = snapshot
        .page_rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|c| truncate(&row.display(&c.key).unwrap_or_default()))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..columns.len())
        .map(|i| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    if cells.is_empty() {
        out.push_str("(no matching rows)\n");
    }

    let _ = writeln!(
        out,
        "\nPage {} of {} | {} row(s) | {} per page{}{}",
        snapshot.page_index + 1,
        snapshot.page_count,
        snapshot.total_filtered_count,
        snapshot.page_size,
        if snapshot.can_go_prev { " | prev" } else { "" },
        if snapshot.can_go_next { " | next" } else { "" },
    );
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

fn truncate(value: &str) -> String {
    if value.chars().count() <= MAX_WIDTH {
        return value.to_string();
    }
    let mut short: String = value.chars().take(MAX_WIDTH - 3).collect();
    short.push_str("...");
    short
}
