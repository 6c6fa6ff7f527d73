//! CSV export and import operations.
//!
//! These are the only operations that touch the filesystem outside the
//! data directory. The codec itself works on in-memory text; reading the
//! import file and writing the export file happen here.

use crate::csv;
use crate::errors::AppResult;
use crate::store::EntryStore;
use std::fs;
use std::path::Path;
use tracing::info;

/// Serializes the journal to CSV, writing to `output` or returning the
/// text for stdout.
pub fn export_csv(store: &EntryStore<'_>, output: Option<&Path>) -> AppResult<String> {
    let entries = store.get_all()?;
    let text = csv::serialize(&entries);
    if text.is_empty() {
        return Ok("Nothing to export.".to_string());
    }

    match output {
        Some(path) => {
            fs::write(path, &text)?;
            info!("Exported {} entries to {:?}", entries.len(), path);
            Ok(format!(
                "Exported {} entries to {}.",
                entries.len(),
                path.display()
            ))
        }
        None => Ok(text),
    }
}

/// Reads a CSV file and merges its rows into the journal.
pub fn import_csv(store: &EntryStore<'_>, file: &Path) -> AppResult<String> {
    let text = fs::read_to_string(file)?;
    let imported = csv::import(store, &text)?;
    Ok(format!("Imported {} entries.", imported))
}
