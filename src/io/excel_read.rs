use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};
use tracing::warn;

use crate::error::{ReportError, Result};
use crate::report::EXCEL_FILE_NAME;

/// Loads the mod names recorded by a previous run, reading column 1 of every
/// row after the header in `<output_folder>/mod_list.xlsx`.
///
/// This is the single source of "previous" data for all three report
/// formats. Any failure (missing file, corrupt workbook, no sheets) is
/// logged and yields an empty list, so every current mod classifies as New.
pub fn load_previous_mods(output_folder: &Path) -> Vec<String> {
    let path = output_folder.join(EXCEL_FILE_NAME);
    match read_first_column(&path) {
        Ok(names) => names,
        Err(error) => {
            warn!(
                "could not load previous mod list from {}: {error}",
                path.display()
            );
            Vec::new()
        }
    }
}

fn read_first_column(path: &Path) -> Result<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ReportError::InvalidWorkbook("workbook has no sheets".into()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .ok_or_else(|| ReportError::InvalidWorkbook(format!("missing sheet '{sheet_name}'")))?
        .map_err(ReportError::from)?;

    let mut names = Vec::new();
    for row in range.rows().skip(1) {
        let name = cell_to_string(row.first());
        if !name.is_empty() {
            names.push(name);
        }
    }
    Ok(names)
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
