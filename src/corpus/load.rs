//! Corpus loading functionality

use super::corpus::{Corpus, ParseOptions};
use super::error::{CorpusError, Result};
use crate::config::{CorpusConfig, CorpusFiles};
use anyhow::Context;
use encoding_rs::Encoding;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// The four raw blobs a corpus is assembled from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorpusSources {
    pub movies: String,
    pub characters: String,
    pub lines: String,
    pub conversations: String,
}

fn decode_text(name: &str, bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, used_encoding, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!(
            "{} contains bytes that are not valid {}, they were replaced",
            name,
            used_encoding.name()
        );
    }
    text.into_owned()
}

impl CorpusSources {
    /// Reads the four files from an extracted corpus directory.
    pub fn from_dir(dir: &Path, files: &CorpusFiles, encoding: &'static Encoding) -> Result<Self> {
        let read = |name: &str| -> Result<String> {
            let path = dir.join(name);
            if !path.is_file() {
                return Err(CorpusError::MissingSource {
                    name: path.display().to_string(),
                });
            }
            debug!("Reading {}", path.display());
            let bytes = std::fs::read(&path)?;
            Ok(decode_text(name, &bytes, encoding))
        };
        Ok(Self {
            movies: read(&files.movies)?,
            characters: read(&files.characters)?,
            lines: read(&files.lines)?,
            conversations: read(&files.conversations)?,
        })
    }

    /// Reads the four files straight out of the corpus zip archive.
    pub fn from_zip(path: &Path, files: &CorpusFiles, encoding: &'static Encoding) -> Result<Self> {
        let mut archive = zip::ZipArchive::new(File::open(path)?)?;
        let mut read = |name: &str| -> Result<String> {
            let entry_name = format!("{}{}", files.archive_dir, name);
            let mut entry = match archive.by_name(&entry_name) {
                Ok(entry) => entry,
                Err(zip::result::ZipError::FileNotFound) => {
                    return Err(CorpusError::MissingSource { name: entry_name })
                }
                Err(err) => return Err(err.into()),
            };
            debug!("Reading {} from archive", entry_name);
            let mut bytes = Vec::new();
            entry.read_to_end(&mut bytes)?;
            Ok(decode_text(name, &bytes, encoding))
        };
        Ok(Self {
            movies: read(&files.movies)?,
            characters: read(&files.characters)?,
            lines: read(&files.lines)?,
            conversations: read(&files.conversations)?,
        })
    }

    /// Reads from a zip archive or a directory, depending on what `path` is.
    pub fn read(path: &Path, files: &CorpusFiles, encoding: &'static Encoding) -> Result<Self> {
        if path.is_dir() {
            Self::from_dir(path, files, encoding)
        } else {
            Self::from_zip(path, files, encoding)
        }
    }
}

pub fn load_corpus(config: &CorpusConfig) -> anyhow::Result<Corpus> {
    info!("Reading corpus from {}...", config.corpus_path.display());
    let sources = CorpusSources::read(&config.corpus_path, &config.files, config.encoding)
        .with_context(|| format!("Could not read corpus at {}", config.corpus_path.display()))?;

    let options = ParseOptions {
        separator: config.separator.clone(),
        policy: config.policy,
    };
    let corpus = Corpus::assemble(&sources, options).context("Could not assemble corpus")?;

    let problems: Vec<_> = corpus.problems().collect();
    if !problems.is_empty() {
        info!("Found {} problems:", problems.len());
        for problem in problems.iter() {
            info!("- {}", problem);
        }
        info!("");
    }
    let hard_failures = problems.iter().filter(|p| p.is_hard()).count();
    match (problems.is_empty(), hard_failures) {
        (true, _) => info!("Corpus checked, no issues found."),
        (false, 0) => info!(
            "Corpus was built, but check the {} skipped records above.",
            problems.len()
        ),
        (false, hard) => warn!(
            "Corpus was built, but {} conversations could not be reconstructed and {} records were skipped.",
            hard,
            problems.len() - hard
        ),
    }
    info!("Corpus has:\n{}", corpus.stats());

    Ok(corpus)
}
