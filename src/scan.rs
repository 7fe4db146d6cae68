use std::fs;
use std::path::Path;

use crate::error::{ReportError, Result};

/// Lists the immediate subdirectories of the mods folder and returns their
/// bare names as the mod inventory.
///
/// Names come back in whatever order the filesystem enumerates entries; the
/// tool never sorts them. Plain files are silently skipped.
pub fn mod_names(mods_folder: &Path) -> Result<Vec<String>> {
    if !mods_folder.exists() {
        return Err(ReportError::MissingModsFolder(mods_folder.to_path_buf()));
    }
    if !mods_folder.is_dir() {
        return Err(ReportError::NotADirectory(mods_folder.to_path_buf()));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(mods_folder)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}
