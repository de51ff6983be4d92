//! Markdown table rendering

/// Render a header and rows as a Markdown table block.
///
/// Rows shorter than the header are right-padded with empty cells. Rows
/// longer than the header are NOT truncated: every cell is joined in,
/// producing a row wider than the header. Cell text is inserted verbatim;
/// `|` and newlines inside cells are not escaped. Known limitation.
pub fn render_table<S: AsRef<str>>(header: &[S], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);

    let header_cells: Vec<&str> = header.iter().map(AsRef::as_ref).collect();
    lines.push(format!("| {} |", header_cells.join(" | ")));
    lines.push(format!("| {} |", vec!["---"; header.len()].join(" | ")));

    for row in rows {
        let mut cells: Vec<&str> = row.iter().map(String::as_str).collect();
        while cells.len() < header.len() {
            cells.push("");
        }
        lines.push(format!("| {} |", cells.join(" | ")));
    }

    lines.join("\n")
}
