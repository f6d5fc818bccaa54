mod file_config;

pub use file_config::{FileConfig, FilesConfig};

use crate::corpus::{ErrorPolicy, FIELD_SEPARATOR};
use anyhow::{anyhow, bail, Result};
use encoding_rs::Encoding;
use std::path::PathBuf;

pub const DEFAULT_ENCODING: &str = "windows-1252";

/// CLI arguments that can be used for config resolution.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub corpus_path: Option<PathBuf>,
    pub encoding: Option<String>,
    pub strict: bool,
}

/// Where the four corpus files live inside the corpus directory or archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusFiles {
    pub movies: String,
    pub characters: String,
    pub lines: String,
    pub conversations: String,
    pub archive_dir: String,
}

impl Default for CorpusFiles {
    fn default() -> Self {
        Self {
            movies: "movie_titles_metadata.txt".to_owned(),
            characters: "movie_characters_metadata.txt".to_owned(),
            lines: "movie_lines.txt".to_owned(),
            conversations: "movie_conversations.txt".to_owned(),
            archive_dir: "cornell movie-dialogs corpus/".to_owned(),
        }
    }
}

impl CorpusFiles {
    fn merge(file: FilesConfig) -> Self {
        let defaults = Self::default();
        Self {
            movies: file.movies.unwrap_or(defaults.movies),
            characters: file.characters.unwrap_or(defaults.characters),
            lines: file.lines.unwrap_or(defaults.lines),
            conversations: file.conversations.unwrap_or(defaults.conversations),
            archive_dir: file.archive_dir.unwrap_or(defaults.archive_dir),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CorpusConfig {
    /// An extracted corpus directory or the corpus zip archive.
    pub corpus_path: PathBuf,
    pub files: CorpusFiles,
    pub encoding: &'static Encoding,
    pub separator: String,
    pub policy: ErrorPolicy,
}

impl CorpusConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let corpus_path = file
            .corpus_path
            .map(PathBuf::from)
            .or_else(|| cli.corpus_path.clone())
            .ok_or_else(|| {
                anyhow!("corpus_path must be specified on the command line or in config file")
            })?;

        if !corpus_path.exists() {
            bail!("Corpus path does not exist: {:?}", corpus_path);
        }

        let encoding_label = file
            .encoding
            .or_else(|| cli.encoding.clone())
            .unwrap_or_else(|| DEFAULT_ENCODING.to_owned());
        let encoding = Encoding::for_label(encoding_label.as_bytes())
            .ok_or_else(|| anyhow!("Unknown encoding: {}", encoding_label))?;

        let separator = file
            .separator
            .unwrap_or_else(|| FIELD_SEPARATOR.to_owned());
        if separator.is_empty() {
            bail!("Field separator cannot be empty");
        }

        let policy = if file.strict.unwrap_or(cli.strict) {
            ErrorPolicy::Strict
        } else {
            ErrorPolicy::Tolerant
        };

        let files = CorpusFiles::merge(file.files.unwrap_or_default());

        Ok(Self {
            corpus_path,
            files,
            encoding,
            separator,
            policy,
        })
    }
}
