use crate::config::Columns;
use crate::model::{self, ModDiff};

/// Renders the diff as a Markdown document with a pipe-delimited table.
pub fn render(diff: &ModDiff, columns: &Columns) -> String {
    let headers = model::enabled_headers(columns);

    let mut markdown = String::from("# Mod List\n\n");
    push_row(&mut markdown, headers.iter().map(|header| (*header).to_string()));
    push_row(&mut markdown, headers.iter().map(|_| "---".to_string()));

    for row in diff.rows() {
        push_row(&mut markdown, model::row_cells(row, columns).into_iter());
    }

    markdown
}

fn push_row(markdown: &mut String, cells: impl Iterator<Item = String>) {
    markdown.push('|');
    for cell in cells {
        markdown.push(' ');
        markdown.push_str(&cell);
        markdown.push_str(" |");
    }
    markdown.push('\n');
}
