use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub corpus_path: Option<String>,
    pub encoding: Option<String>,
    pub separator: Option<String>,
    pub strict: Option<bool>,

    pub files: Option<FilesConfig>,
}

/// Names of the corpus files, relative to the corpus directory or archive.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct FilesConfig {
    pub movies: Option<String>,
    pub characters: Option<String>,
    pub lines: Option<String>,
    pub conversations: Option<String>,
    /// Directory prefix of the files inside the zip archive.
    pub archive_dir: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
