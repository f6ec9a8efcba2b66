//! Local icon catalog file (`devicon_tools.json`).

use std::path::Path;

use tracing::{debug, instrument};

use profilegen_shared::{ProfileGenError, Result, ToolCatalog};

/// Read a catalog from its JSON file.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_catalog(path: &Path) -> Result<ToolCatalog> {
    let content = std::fs::read_to_string(path).map_err(|e| ProfileGenError::io(path, e))?;
    let catalog: ToolCatalog = serde_json::from_str(&content)
        .map_err(|e| ProfileGenError::parse(format!("invalid catalog {}: {e}", path.display())))?;

    debug!(tools = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Write a catalog as pretty JSON, replacing any previous file atomically.
#[instrument(skip_all, fields(path = %path.display(), tools = catalog.len()))]
pub fn save_catalog(path: &Path, catalog: &ToolCatalog) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ProfileGenError::io(parent, e))?;
    }

    let json = serde_json::to_string_pretty(catalog)
        .map_err(|e| ProfileGenError::parse(format!("catalog serialization failed: {e}")))?;

    let temp = path.with_extension("json.tmp");
    std::fs::write(&temp, json).map_err(|e| ProfileGenError::io(&temp, e))?;
    std::fs::rename(&temp, path).map_err(|e| ProfileGenError::io(path, e))?;

    debug!("catalog saved");
    Ok(())
}
