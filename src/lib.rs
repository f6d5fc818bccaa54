//! Spamplay corpus library
//!
//! Parses the Cornell movie-dialogs corpus into a cross-referenced graph of
//! movies, characters, dialog lines and conversations.

pub mod config;
pub mod corpus;

pub use config::{CliConfig, CorpusConfig, FileConfig};
pub use corpus::{load_corpus, Corpus, CorpusError, CorpusSources, ErrorPolicy, ParseOptions};
