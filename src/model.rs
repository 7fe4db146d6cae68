use std::collections::HashSet;
use std::fmt;

use crate::config::Columns;

/// Placeholder emitted for the version column; no extraction logic exists.
pub const UNKNOWN_VERSION: &str = "Unknown Version";

/// Derived classification of a mod relative to the previous report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModStatus {
    /// The mod name was absent from the previous report.
    New,
    /// The mod name was present in the previous report.
    Unchanged,
}

impl fmt::Display for ModStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModStatus::New => write!(f, "New"),
            ModStatus::Unchanged => write!(f, "Unchanged"),
        }
    }
}

/// One report row: a mod name in enumeration order plus its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModRow {
    pub name: String,
    pub status: ModStatus,
}

/// The diff between the current mod listing and the previous report.
///
/// Computed once per run and shared read-only by every renderer, so the
/// three output documents always agree on statuses and counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModDiff {
    rows: Vec<ModRow>,
    removed: Vec<String>,
    added: usize,
    unchanged: usize,
}

impl ModDiff {
    /// Classifies every current mod against the previous name set and
    /// collects the previous names that no longer exist.
    ///
    /// Current-list order is preserved, duplicates included. Removed names
    /// keep their first-occurrence order from the previous list.
    pub fn compute(current: &[String], previous: &[String]) -> Self {
        let previous_set: HashSet<&str> = previous.iter().map(String::as_str).collect();
        let current_set: HashSet<&str> = current.iter().map(String::as_str).collect();

        let mut added = 0;
        let mut unchanged = 0;
        let rows = current
            .iter()
            .map(|name| {
                let status = if previous_set.contains(name.as_str()) {
                    unchanged += 1;
                    ModStatus::Unchanged
                } else {
                    added += 1;
                    ModStatus::New
                };
                ModRow {
                    name: name.clone(),
                    status,
                }
            })
            .collect();

        let mut seen: HashSet<&str> = HashSet::new();
        let removed = previous
            .iter()
            .filter(|name| !current_set.contains(name.as_str()) && seen.insert(name.as_str()))
            .cloned()
            .collect();

        Self {
            rows,
            removed,
            added,
            unchanged,
        }
    }

    /// Report rows in current-listing order.
    pub fn rows(&self) -> &[ModRow] {
        &self.rows
    }

    /// Previous mod names absent from the current listing.
    pub fn removed(&self) -> &[String] {
        &self.removed
    }

    /// Number of mods classified [`ModStatus::New`].
    pub fn added_count(&self) -> usize {
        self.added
    }

    /// Number of previous mods absent from the current listing.
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    /// Number of mods classified [`ModStatus::Unchanged`].
    pub fn unchanged_count(&self) -> usize {
        self.unchanged
    }
}

/// Header labels for the columns enabled in the configuration, in the fixed
/// report order.
pub fn enabled_headers(columns: &Columns) -> Vec<&'static str> {
    let mut headers = Vec::with_capacity(3);
    if columns.mod_name {
        headers.push("Mod Name");
    }
    if columns.mod_version {
        headers.push("Version");
    }
    if columns.status {
        headers.push("Status");
    }
    headers
}

/// Cell values for one report row, restricted to the enabled columns and in
/// the same order as [`enabled_headers`].
pub fn row_cells(row: &ModRow, columns: &Columns) -> Vec<String> {
    let mut cells = Vec::with_capacity(3);
    if columns.mod_name {
        cells.push(row.name.clone());
    }
    if columns.mod_version {
        cells.push(UNKNOWN_VERSION.to_string());
    }
    if columns.status {
        cells.push(row.status.to_string());
    }
    cells
}

/// Index of the status column within the enabled-column order, if enabled.
pub fn status_column(columns: &Columns) -> Option<usize> {
    if !columns.status {
        return None;
    }
    Some(usize::from(columns.mod_name) + usize::from(columns.mod_version))
}
