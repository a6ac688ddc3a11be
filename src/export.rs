//! Writing a generated document to disk

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("failed to create {}: {source}", dir.display())]
    CreateDir { dir: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// `<product>-<suffix>.txt`, with path-hostile characters replaced by `_`
pub fn download_file_name(product_name: &str, suffix: &str) -> String {
    let cleaned: String = product_name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let stem = cleaned.trim_matches('.');
    let stem = if stem.is_empty() { "document" } else { stem };
    format!("{stem}-{suffix}.txt")
}

/// Save `content` into `dir`, creating the directory if needed
pub fn save_document(
    dir: &Path,
    product_name: &str,
    suffix: &str,
    content: &str,
) -> Result<PathBuf, DownloadError> {
    fs::create_dir_all(dir).map_err(|source| DownloadError::CreateDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(download_file_name(product_name, suffix));
    fs::write(&path, content).map_err(|source| DownloadError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = content.len(), "Document saved");
    Ok(path)
}
