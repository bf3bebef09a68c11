// File: src/persistence.rs
use crate::error::Result;
use crate::tree::RootTree;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Json,
    Binary,
}

impl ExportFormat {
    /// `.bin` files are binary, anything else JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("bin") => ExportFormat::Binary,
            _ => ExportFormat::Json,
        }
    }
}

/// Writes the tree next to `path` first, then renames it into place so a
/// crash never leaves a half-written export.
pub fn save_to_disk(tree: &RootTree, path: &Path, format: ExportFormat) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        match format {
            ExportFormat::Json => serde_json::to_writer_pretty(&mut writer, tree)?,
            ExportFormat::Binary => bincode::serialize_into(&mut writer, tree)?,
        }
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn load_from_disk(path: &Path, format: ExportFormat) -> Result<RootTree> {
    let reader = BufReader::new(File::open(path)?);
    let tree: RootTree = match format {
        ExportFormat::Json => serde_json::from_reader(reader)?,
        ExportFormat::Binary => bincode::deserialize_from(reader)?,
    };
    Ok(tree)
}
