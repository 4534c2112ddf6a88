use crate::rate::ReportRow;

pub const HEADERS: [&str; 7] = [
    "target",
    "speed(MB/sec)",
    "rate",
    "ratio(%)",
    "min(sec)",
    "max(sec)",
    "mean(sec)",
];

/// Rendering strategy for a comparison table. Both variants share the same
/// cell contents; only delimiters and alignment differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    Plain,
    Markup,
}

pub fn render_table(rows: &[ReportRow], format: TableFormat) -> String {
    let widths = column_widths(rows);
    match format {
        TableFormat::Plain => render_plain(rows, &widths),
        TableFormat::Markup => render_markup(rows, &widths),
    }
}

fn column_widths(rows: &[ReportRow]) -> [usize; 7] {
    let mut widths = [0usize; 7];
    for (idx, header) in HEADERS.iter().enumerate() {
        widths[idx] = header.len();
    }
    for row in rows {
        for (idx, cell) in row.cells().iter().enumerate() {
            widths[idx] = widths[idx].max(cell.len());
        }
    }
    widths
}

// Fixed-width text table: two-space column gap, header underlined with
// dashes, target column left aligned, numeric columns right aligned.
fn render_plain(rows: &[ReportRow], widths: &[usize; 7]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(plain_line(&HEADERS, widths));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    lines.push(rule.join("  "));
    for row in rows {
        lines.push(plain_line(&row.cells(), widths));
    }
    lines.join("\n")
}

fn plain_line(cells: &[&str; 7], widths: &[usize; 7]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .enumerate()
        .map(|(idx, (cell, &width))| {
            if idx == 0 {
                format!("{cell:<width$}")
            } else {
                format!("{cell:>width$}")
            }
        })
        .collect();
    padded.join("  ").trim_end().to_string()
}

// Pipe-delimited table for markup-aware viewers.
fn render_markup(rows: &[ReportRow], widths: &[usize; 7]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(markup_line(&HEADERS, widths));
    // Alignment colons on the numeric columns keep markup viewers in step
    // with the plain renderer.
    let rule: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(idx, w)| {
            if idx == 0 {
                "-".repeat(*w + 2)
            } else {
                format!("{}:", "-".repeat(*w + 1))
            }
        })
        .collect();
    lines.push(format!("|{}|", rule.join("|")));
    for row in rows {
        lines.push(markup_line(&row.cells(), widths));
    }
    lines.join("\n")
}

fn markup_line(cells: &[&str; 7], widths: &[usize; 7]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .enumerate()
        .map(|(idx, (cell, &width))| {
            if idx == 0 {
                format!("{cell:<width$}")
            } else {
                format!("{cell:>width$}")
            }
        })
        .collect();
    format!("| {} |", padded.join(" | "))
}
