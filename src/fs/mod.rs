use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ignore::WalkBuilder;

/// List the helper scripts directly inside `dir` whose extension is `extension`.
///
/// The walk is not recursive and ignores .gitignore/hidden-file rules, matching
/// a plain directory listing. Results are sorted by path so report order is
/// reproducible across platforms.
pub fn discover_helper_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("helper directory does not exist: {}", dir.display());
    }
    let extension = extension.trim_start_matches('.');

    let mut builder = WalkBuilder::new(dir);
    builder.standard_filters(false).max_depth(Some(1));

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry.context("error listing helper directory")?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    tracing::debug!(dir = %dir.display(), count = files.len(), "discovered helper files");
    Ok(files)
}
