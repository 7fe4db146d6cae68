use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::io::{excel_read, excel_write, html_write, markdown_write};
use crate::model::ModDiff;
use crate::scan;

/// Name of the worksheet inside the Excel report.
pub const MODS_SHEET: &str = "Mods";
/// File name of the Excel report inside the output folder.
pub const EXCEL_FILE_NAME: &str = "mod_list.xlsx";
/// File name of the HTML report inside the output folder.
pub const HTML_FILE_NAME: &str = "mod_list.html";
/// File name of the Markdown report inside the output folder.
pub const MARKDOWN_FILE_NAME: &str = "mod_list.md";

/// The closed set of report documents the tool can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Excel,
    Html,
    Markdown,
}

impl ExportFormat {
    /// Emission order is fixed regardless of which subset is enabled.
    pub const ALL: [ExportFormat; 3] = [
        ExportFormat::Excel,
        ExportFormat::Html,
        ExportFormat::Markdown,
    ];

    /// File name of this report inside the output folder.
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Excel => EXCEL_FILE_NAME,
            ExportFormat::Html => HTML_FILE_NAME,
            ExportFormat::Markdown => MARKDOWN_FILE_NAME,
        }
    }

    /// Human-readable label used in the console summary.
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Excel => "Excel",
            ExportFormat::Html => "HTML",
            ExportFormat::Markdown => "Markdown",
        }
    }

    fn enabled(self, config: &Config) -> bool {
        match self {
            ExportFormat::Excel => config.export_formats.excel,
            ExportFormat::Html => config.export_formats.html,
            ExportFormat::Markdown => config.export_formats.markdown,
        }
    }
}

/// Runs one report pass: enumerate mods, diff against the previous report,
/// then render and overwrite each enabled report document in fixed order.
///
/// A missing or unreadable previous report degrades to an empty previous
/// list; every other failure aborts the run. Documents already written are
/// not cleaned up when a later one fails.
pub fn run(config: &Config) -> Result<ModDiff> {
    let current = scan::mod_names(&config.mods_folder)?;
    let previous = excel_read::load_previous_mods(&config.output_folder);
    let diff = ModDiff::compute(&current, &previous);

    for format in ExportFormat::ALL {
        if !format.enabled(config) {
            continue;
        }
        let bytes = match format {
            ExportFormat::Excel => {
                excel_write::render(&diff, &config.columns, config.use_color)?
            }
            ExportFormat::Html => html_write::render(&diff, &config.columns).into_bytes(),
            ExportFormat::Markdown => {
                markdown_write::render(&diff, &config.columns).into_bytes()
            }
        };

        let path = output_path(config, format);
        fs::write(&path, bytes)?;
        println!("{} file saved: {}", format.label(), path.display());
        println!(
            "Added: {}, Removed: {}, Unchanged: {}",
            diff.added_count(),
            diff.removed_count(),
            diff.unchanged_count()
        );
    }

    Ok(diff)
}

fn output_path(config: &Config, format: ExportFormat) -> PathBuf {
    config.output_folder.join(format.file_name())
}
