use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ReportError, Result};

/// Runtime configuration loaded from a JSON document.
///
/// Every field is fixed after loading; the tool never writes the
/// configuration back. A missing or malformed document aborts the run.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Folder whose immediate subdirectories form the mod inventory.
    pub mods_folder: PathBuf,
    /// Folder the report documents are written into.
    pub output_folder: PathBuf,
    /// Per-format enable flags. Formats absent from the document stay off.
    #[serde(default)]
    pub export_formats: ExportFormats,
    /// Per-column enable flags. Columns absent from the document stay off.
    #[serde(default)]
    pub columns: Columns,
    /// Whether the Excel report colours status cells.
    #[serde(default)]
    pub use_color: bool,
}

/// Enable flags for the three report documents.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ExportFormats {
    #[serde(default)]
    pub excel: bool,
    #[serde(default)]
    pub html: bool,
    #[serde(default)]
    pub markdown: bool,
}

/// Enable flags for the report columns.
///
/// A disabled column is absent from every output format, header and rows
/// alike.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Columns {
    #[serde(default)]
    pub mod_name: bool,
    #[serde(default)]
    pub mod_version: bool,
    #[serde(default)]
    pub status: bool,
}

impl Config {
    /// Loads the configuration from the given JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ReportError::MissingConfig(path.to_path_buf()));
        }
        let source = fs::read_to_string(path)?;
        let config = serde_json::from_str(&source)?;
        Ok(config)
    }
}
