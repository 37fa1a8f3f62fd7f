//! Writing generated documents to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use qti_core::ExportedFile;

/// `<stem>_qti` beside `input`.
pub fn default_output_dir(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "questions".to_string(), |s| s.to_string_lossy().into_owned());
    input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(format!("{stem}_qti"))
}

/// Writes every file into `dir`, creating it first. Existing files with the
/// same names are overwritten.
pub fn write_files(dir: &Path, files: &[ExportedFile]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("create output dir: {}", dir.display()))?;
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.name);
        fs::write(&path, &file.contents)
            .with_context(|| format!("write {}", path.display()))?;
        written.push(path);
    }
    tracing::info!(dir = %dir.display(), files = written.len(), "outputs written");
    Ok(written)
}
