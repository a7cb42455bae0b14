use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// A loaded input file: engine source, helper script or documentation corpus.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Display name used for provenance in reports (the file name).
    pub label: String,
    pub text: String,
}

impl SourceFile {
    /// Read a file into memory. Invalid UTF-8 is replaced rather than rejected;
    /// the helper scripts are historically Latin-1 encoded.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        tracing::info!(path = %path.display(), bytes = bytes.len(), "loaded source");
        Ok(Self {
            path: path.to_path_buf(),
            label: label_for(path),
            text,
        })
    }

    /// Create a SourceFile from a string, using `label` for display purposes.
    pub fn from_string(label: &str, text: impl Into<String>) -> Self {
        Self {
            path: PathBuf::from(label),
            label: label.to_string(),
            text: text.into(),
        }
    }
}

fn label_for(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
