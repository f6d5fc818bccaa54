//! Error types for corpus assembly.
//!
//! Two layers: [`RecordError`] describes why a single record could not be
//! decoded (recovered by the pass, see [`super::Problem`]), [`CorpusError`]
//! stops an assembly or a query altogether.

use super::problem::Problem;
use std::fmt;
use thiserror::Error;

/// The four entity types of the corpus, which double as the four passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Movie,
    Character,
    DialogLine,
    Conversation,
}

impl EntityKind {
    /// Fields a record of this kind must split into.
    pub fn field_count(&self) -> usize {
        match self {
            EntityKind::Movie => 6,
            EntityKind::Character => 6,
            EntityKind::DialogLine => 5,
            EntityKind::Conversation => 4,
        }
    }

    /// The pass that has to be complete before this one may run.
    pub fn requires(&self) -> Option<EntityKind> {
        match self {
            EntityKind::Movie => None,
            EntityKind::Character => Some(EntityKind::Movie),
            EntityKind::DialogLine => Some(EntityKind::Character),
            EntityKind::Conversation => Some(EntityKind::DialogLine),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Movie => "movie",
            EntityKind::Character => "character",
            EntityKind::DialogLine => "line",
            EntityKind::Conversation => "conversation",
        };
        f.write_str(name)
    }
}

/// Why one record was not turned into an entity.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid {field} '{value}': {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("referenced {kind} {id} does not exist")]
    UnresolvedReference { kind: EntityKind, id: u32 },

    #[error("{kind} with id {id} already exists")]
    DuplicateId { kind: EntityKind, id: u32 },

    #[error("character {character_id} belongs to movie {character_movie_id}, not {movie_id}")]
    MovieMismatch {
        character_id: u32,
        character_movie_id: u32,
        movie_id: u32,
    },

    /// The line list of a conversation holds no `L<digits>` token at all.
    #[error("no line ids could be extracted from '{raw}'")]
    NoLineIds { raw: String },
}

impl RecordError {
    pub(crate) fn invalid_field(
        field: &'static str,
        value: &str,
        reason: impl ToString,
    ) -> RecordError {
        RecordError::InvalidField {
            field,
            value: value.to_owned(),
            reason: reason.to_string(),
        }
    }
}

/// Errors that abort an assembly pass, a query, or loading.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("cannot parse {pass}s before all {requires}s are parsed")]
    PassOutOfOrder {
        pass: EntityKind,
        requires: EntityKind,
    },

    #[error("the {0} pass already completed")]
    PassAlreadyCompleted(EntityKind),

    #[error("the {0} pass failed, the corpus cannot be completed")]
    PassFailed(EntityKind),

    #[error("the corpus is not fully parsed yet")]
    NotFullyParsed,

    #[error("the corpus contains no conversations")]
    NoConversations,

    #[error("strict parsing rejected {0}")]
    StrictPolicyViolation(Problem),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("missing corpus file '{name}'")]
    MissingSource { name: String },
}

pub type Result<T> = std::result::Result<T, CorpusError>;
