use crate::types::AppRecord;
use std::fs;
use std::path::Path;

/// Write the catalog as pretty-printed JSON, creating parent
/// directories as needed. Records keep enumeration order; sorting is
/// the renderer's job.
pub fn save(records: &[AppRecord], path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("can't create {}: {}", parent.display(), e))?;
        }
    }
    let contents = serde_json::to_string_pretty(records)
        .map_err(|e| format!("can't serialize catalog: {}", e))?;
    fs::write(path, contents).map_err(|e| format!("can't write {}: {}", path.display(), e))
}

/// Read the catalog back. A missing file is a precondition failure,
/// not an empty catalog.
pub fn load(path: &Path) -> Result<Vec<AppRecord>, String> {
    if !path.exists() {
        return Err(format!(
            "{} not found. Run `catalog fetch` first.",
            path.display()
        ));
    }
    let contents =
        fs::read_to_string(path).map_err(|e| format!("can't read {}: {}", path.display(), e))?;
    serde_json::from_str(&contents).map_err(|e| format!("invalid catalog JSON: {}", e))
}
