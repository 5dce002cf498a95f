//! Tabular export model. Rendered as a `;`-separated CSV with a UTF-8 BOM so
//! Excel opens Vietnamese text correctly; the browser side only downloads it.

/// Column headers plus pre-stringified rows, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableExport {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableExport {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push('\u{FEFF}');
        push_line(&mut out, &self.headers);
        for row in &self.rows {
            push_line(&mut out, row);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String]) {
    let line = cells
        .iter()
        .map(|cell| escape_csv_cell(cell))
        .collect::<Vec<_>>()
        .join(";");
    out.push_str(&line);
    out.push('\n');
}

/// Quote a cell containing the separator, quotes or line breaks.
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// `<prefix>_<timestamp>.csv`
pub fn export_filename(prefix: &str, timestamp_ms: i64) -> String {
    format!("{}_{}.csv", prefix, timestamp_ms)
}
