use crate::config::Columns;
use crate::model::{self, ModDiff};

/// Renders the diff as a static HTML document with a single bordered table.
pub fn render(diff: &ModDiff, columns: &Columns) -> String {
    let headers = model::enabled_headers(columns);

    let mut html = String::new();
    html.push_str("<html>\n<head>\n    <title>Mod List</title>\n</head>\n<body>\n");
    html.push_str("    <h1>Mod List</h1>\n    <table border=\"1\">\n        <tr>\n");
    for header in &headers {
        html.push_str("            <th>");
        html.push_str(&escape(header));
        html.push_str("</th>\n");
    }
    html.push_str("        </tr>\n");

    for row in diff.rows() {
        html.push_str("        <tr>\n");
        for cell in model::row_cells(row, columns) {
            html.push_str("            <td>");
            html.push_str(&escape(&cell));
            html.push_str("</td>\n");
        }
        html.push_str("        </tr>\n");
    }

    html.push_str("    </table>\n</body>\n</html>\n");
    html
}

/// Escapes the characters with markup meaning; mod names come verbatim from
/// directory names and may contain any of them.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
