use rust_xlsxwriter::{Color, Format, Workbook};

use crate::config::Columns;
use crate::error::Result;
use crate::model::{self, ModDiff, ModStatus};
use crate::report::MODS_SHEET;

const NEW_FILL: Color = Color::RGB(0xAAFFAA);
const UNCHANGED_FILL: Color = Color::RGB(0xDDDDDD);

/// Renders the diff as an Excel workbook with a single "Mods" sheet.
///
/// Column widths are sized to the longest value in each column (header
/// included) plus two characters. With `use_color` enabled, status cells get
/// a green fill for New and a light-gray fill for Unchanged.
pub fn render(diff: &ModDiff, columns: &Columns, use_color: bool) -> Result<Vec<u8>> {
    let headers = model::enabled_headers(columns);
    let status_column = model::status_column(columns);

    let new_format = Format::new().set_background_color(NEW_FILL);
    let unchanged_format = Format::new().set_background_color(UNCHANGED_FILL);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(MODS_SHEET)?;

    let mut widths: Vec<usize> = headers.iter().map(|header| header.len()).collect();

    for (col_idx, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col_idx as u16, *header)?;
    }

    for (row_idx, row) in diff.rows().iter().enumerate() {
        let cells = model::row_cells(row, columns);
        for (col_idx, cell) in cells.iter().enumerate() {
            if cell.len() > widths[col_idx] {
                widths[col_idx] = cell.len();
            }

            let excel_row = (row_idx + 1) as u32;
            let excel_col = col_idx as u16;
            if use_color && status_column == Some(col_idx) {
                let format = match row.status {
                    ModStatus::New => &new_format,
                    ModStatus::Unchanged => &unchanged_format,
                };
                worksheet.write_string_with_format(excel_row, excel_col, cell, format)?;
            } else {
                worksheet.write_string(excel_row, excel_col, cell)?;
            }
        }
    }

    for (col_idx, width) in widths.iter().enumerate() {
        worksheet.set_column_width(col_idx as u16, (width + 2) as f64)?;
    }

    Ok(workbook.save_to_buffer()?)
}
