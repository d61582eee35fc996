//! Rendering of report tables for CLI output

use console::{measure_text_width, pad_str, Alignment, Style};
use toporderslib::ReportTable;

/// How the report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Aligned text, styled only when stdout is a terminal
    #[default]
    Auto,
    /// Aligned text, always styled
    Term,
    /// Aligned text, never styled
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputMode {
    /// Parse a `--output` value
    pub fn from_arg(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(OutputMode::Auto),
            "term" => Some(OutputMode::Term),
            "text" => Some(OutputMode::Text),
            "json" => Some(OutputMode::Json),
            _ => None,
        }
    }
}

/// Create the style for the title line
fn title_style(mode: OutputMode) -> Style {
    let style = Style::new().bold();
    match mode {
        OutputMode::Term => style.force_styling(true),
        OutputMode::Text | OutputMode::Json => style.force_styling(false),
        OutputMode::Auto => style,
    }
}

/// Render a report table to a string, ending with a newline
pub fn render_report(table: &ReportTable, mode: OutputMode) -> anyhow::Result<String> {
    match mode {
        OutputMode::Json => {
            let mut json = serde_json::to_string_pretty(table)?;
            json.push('\n');
            Ok(json)
        }
        _ => Ok(render_text(table, mode)),
    }
}

/// Title line, then (when there are rows) the header line and one line per row.
///
/// Every column is right-aligned to its widest cell, header included.
fn render_text(table: &ReportTable, mode: OutputMode) -> String {
    let mut out = format!("{}\n", title_style(mode).apply_to(&table.title));
    if table.rows.is_empty() {
        return out;
    }

    let widths = column_widths(table);
    out.push_str(&format_line(&table.headers, &widths));
    out.push('\n');
    for row in &table.rows {
        out.push_str(&format_line(&row.values, &widths));
        out.push('\n');
    }
    out
}

/// Display width of each column
fn column_widths(table: &ReportTable) -> Vec<usize> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.values.get(i))
                .map(|v| measure_text_width(v))
                .fold(measure_text_width(header), usize::max)
        })
        .collect()
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_str(cell, *width, Alignment::Right, None))
        .collect::<Vec<_>>()
        .join(" ")
}
