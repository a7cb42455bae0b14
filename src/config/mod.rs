use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = ".c4docdrift.yml";
pub const DEFAULT_ENGINE_SOURCE: &str = "src/C4Script.cpp";
pub const DEFAULT_HELPER_DIR: &str = "planet/System.c4g";
pub const DEFAULT_HELPER_EXTENSION: &str = "c";
pub const DEFAULT_DOCS: &str = ".github/workflows/C4ScriptDocAnalyzer/lcdocs_functions.txt";

/// Contents of `.c4docdrift.yml`. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub engine_source: Option<PathBuf>,
    pub helper_dir: Option<PathBuf>,
    pub helper_extension: Option<String>,
    pub docs: Option<PathBuf>,
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub engine_source: Option<PathBuf>,
    pub helper_dir: Option<PathBuf>,
    pub helper_extension: Option<String>,
    pub docs: Option<PathBuf>,
}

/// Input locations for one run, with relative paths resolved against the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub engine_source: PathBuf,
    pub helper_dir: PathBuf,
    pub helper_extension: String,
    pub docs: PathBuf,
}

/// Read the config file at `path`, or `.c4docdrift.yml` under `root`.
///
/// A missing default file yields an empty config; a missing explicit file
/// is an error.
pub fn read_config_file(path: Option<&Path>, root: &Path) -> Result<FileConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("config file does not exist: {}", p.display());
            }
            p.to_path_buf()
        }
        None => {
            let p = root.join(DEFAULT_CONFIG_FILE);
            if !p.exists() {
                return Ok(FileConfig::default());
            }
            p
        }
    };

    let contents = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config {}", config_path.display()))?;
    if contents.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    let config: FileConfig = serde_yml::from_str(&contents)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;
    tracing::debug!(path = %config_path.display(), "config loaded");
    Ok(config)
}

/// Layer CLI overrides over the config file over the built-in defaults.
pub fn load_config(path: Option<&Path>, root: &Path, overrides: Overrides) -> Result<ResolvedConfig> {
    let file = read_config_file(path, root)?;
    let pick = |cli: Option<PathBuf>, file: Option<PathBuf>, default: &str| {
        root.join(cli.or(file).unwrap_or_else(|| PathBuf::from(default)))
    };

    let helper_extension = overrides
        .helper_extension
        .or(file.helper_extension)
        .unwrap_or_else(|| DEFAULT_HELPER_EXTENSION.to_string());

    Ok(ResolvedConfig {
        engine_source: pick(overrides.engine_source, file.engine_source, DEFAULT_ENGINE_SOURCE),
        helper_dir: pick(overrides.helper_dir, file.helper_dir, DEFAULT_HELPER_DIR),
        helper_extension,
        docs: pick(overrides.docs, file.docs, DEFAULT_DOCS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(None, dir.path(), Overrides::default()).unwrap();
        assert_eq!(config.engine_source, dir.path().join("src/C4Script.cpp"));
        assert_eq!(config.helper_dir, dir.path().join("planet/System.c4g"));
        assert_eq!(config.helper_extension, "c");
        assert_eq!(
            config.docs,
            dir.path().join(".github/workflows/C4ScriptDocAnalyzer/lcdocs_functions.txt")
        );
    }

    #[test]
    fn default_config_file_is_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "engine_source: engine/Script.cpp\nhelper_extension: c4s\n",
        )
        .unwrap();
        let config = load_config(None, dir.path(), Overrides::default()).unwrap();
        assert_eq!(config.engine_source, dir.path().join("engine/Script.cpp"));
        assert_eq!(config.helper_extension, "c4s");
        assert_eq!(config.helper_dir, dir.path().join(DEFAULT_HELPER_DIR));
    }

    #[test]
    fn cli_overrides_win() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "docs: from_file.txt\n").unwrap();
        let overrides = Overrides {
            docs: Some(PathBuf::from("from_cli.txt")),
            ..Overrides::default()
        };
        let config = load_config(None, dir.path(), overrides).unwrap();
        assert_eq!(config.docs, dir.path().join("from_cli.txt"));
    }

    #[test]
    fn absolute_paths_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = Overrides {
            engine_source: Some(PathBuf::from("/abs/C4Script.cpp")),
            ..Overrides::default()
        };
        let config = load_config(None, dir.path(), overrides).unwrap();
        assert_eq!(config.engine_source, PathBuf::from("/abs/C4Script.cpp"));
    }

    #[test]
    fn missing_explicit_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yml");
        assert!(load_config(Some(missing.as_path()), dir.path(), Overrides::default()).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yml");
        fs::write(&path, "engine_sauce: typo.cpp\n").unwrap();
        let err = load_config(Some(path.as_path()), dir.path(), Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse"));
    }

    #[test]
    fn empty_config_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yml");
        fs::write(&path, "\n").unwrap();
        assert_eq!(read_config_file(Some(path.as_path()), dir.path()).unwrap(), FileConfig::default());
    }
}
