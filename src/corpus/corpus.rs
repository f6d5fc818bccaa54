use super::character::{decode_character, Character};
use super::conversation::{decode_conversation, Conversation};
use super::dialog_line::{decode_dialog_line, DialogLine};
use super::error::{CorpusError, EntityKind, RecordError, Result};
use super::load::CorpusSources;
use super::movie::{decode_movie, Movie};
use super::problem::{PassReport, Problem};
use super::records::{split_records, FIELD_SEPARATOR};
use super::table::EntityTable;
use rand::Rng;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info, warn};

/// What a pass does with a record it cannot decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Skip the record, remember the problem, keep going.
    #[default]
    Tolerant,
    /// Abort the pass on the first problem.
    Strict,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub separator: String,
    pub policy: ErrorPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            separator: FIELD_SEPARATOR.to_owned(),
            policy: ErrorPolicy::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CorpusStats {
    pub movies: usize,
    pub characters: usize,
    pub lines: usize,
    pub conversations: usize,
}

impl fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} movies\n{} characters\n{} lines\n{} conversations",
            self.movies, self.characters, self.lines, self.conversations
        )
    }
}

/// Bookkeeping for a pass in progress.
struct PassRun {
    report: PassReport,
    policy: ErrorPolicy,
}

impl PassRun {
    fn new(pass: EntityKind, policy: ErrorPolicy) -> Self {
        Self {
            report: PassReport::new(pass),
            policy,
        }
    }

    fn track<T>(
        &mut self,
        line_number: usize,
        outcome: std::result::Result<T, RecordError>,
    ) -> Result<()> {
        match outcome {
            Ok(_) => {
                self.report.decoded += 1;
                Ok(())
            }
            Err(err) => self.reject(line_number, err),
        }
    }

    fn reject(&mut self, line_number: usize, err: RecordError) -> Result<()> {
        let problem = Problem::new(self.report.pass, line_number, err);
        if problem.is_hard() {
            error!("Could not reconstruct {}", problem);
        } else {
            warn!("Skipping {}", problem);
        }
        if self.policy == ErrorPolicy::Strict {
            return Err(CorpusError::StrictPolicyViolation(problem));
        }
        self.report.problems.push(problem);
        Ok(())
    }

    fn finish(self) -> PassReport {
        let report = self.report;
        info!(
            "Parsed {} {}s, skipped {}, {} unrecoverable",
            report.decoded,
            report.pass,
            report.skipped(),
            report.hard_failures()
        );
        report
    }
}

/// The cross-referenced movie dialogs corpus.
///
/// Built by four passes that must run in order: movies, characters, lines,
/// then conversations. Each pass resolves references into the tables filled
/// by the previous ones. Once [`Corpus::is_fully_parsed`] is true the corpus
/// is read-only.
///
/// Under [`ErrorPolicy::Strict`] a failed pass leaves its table partially
/// filled and never marked as parsed. Every later pass is refused with
/// [`CorpusError::PassFailed`], so such a corpus can never become complete.
#[derive(Debug, Default)]
pub struct Corpus {
    options: ParseOptions,
    movies: EntityTable<Movie>,
    characters: EntityTable<Character>,
    lines: EntityTable<DialogLine>,
    conversations: Vec<Conversation>,
    reports: Vec<PassReport>,
    failed: Option<EntityKind>,
}

impl Corpus {
    pub fn new(options: ParseOptions) -> Corpus {
        Corpus {
            options,
            ..Default::default()
        }
    }

    /// Runs all four passes over the given blobs.
    pub fn assemble(sources: &CorpusSources, options: ParseOptions) -> Result<Corpus> {
        let mut corpus = Corpus::new(options);
        corpus.parse_movies(&sources.movies)?;
        corpus.parse_characters(&sources.characters)?;
        corpus.parse_lines(&sources.lines)?;
        corpus.parse_conversations(&sources.conversations)?;
        Ok(corpus)
    }

    fn begin_pass(&self, pass: EntityKind) -> Result<PassRun> {
        if let Some(failed) = self.failed {
            return Err(CorpusError::PassFailed(failed));
        }
        if self.is_parsed(pass) {
            return Err(CorpusError::PassAlreadyCompleted(pass));
        }
        if let Some(requires) = pass.requires() {
            if !self.is_parsed(requires) {
                return Err(CorpusError::PassOutOfOrder { pass, requires });
            }
        }
        info!("Parsing {}s...", pass);
        Ok(PassRun::new(pass, self.options.policy))
    }

    fn end_pass(&mut self, run: PassRun) -> &PassReport {
        self.reports.push(run.finish());
        &self.reports[self.reports.len() - 1]
    }

    pub fn parse_movies(&mut self, raw: &str) -> Result<&PassReport> {
        let pass = EntityKind::Movie;
        let mut run = self.begin_pass(pass)?;
        for record in split_records(raw, &self.options.separator, pass.field_count()) {
            let outcome = match record {
                Ok(record) => {
                    run.track(record.line_number, decode_movie(&record, &mut self.movies))
                }
                Err(malformed) => run.reject(malformed.line_number, malformed.into()),
            };
            if let Err(err) = outcome {
                self.failed = Some(pass);
                return Err(err);
            }
        }
        Ok(self.end_pass(run))
    }

    pub fn parse_characters(&mut self, raw: &str) -> Result<&PassReport> {
        let pass = EntityKind::Character;
        let mut run = self.begin_pass(pass)?;
        for record in split_records(raw, &self.options.separator, pass.field_count()) {
            let outcome = match record {
                Ok(record) => run.track(
                    record.line_number,
                    decode_character(&record, &self.movies, &mut self.characters),
                ),
                Err(malformed) => run.reject(malformed.line_number, malformed.into()),
            };
            if let Err(err) = outcome {
                self.failed = Some(pass);
                return Err(err);
            }
        }
        Ok(self.end_pass(run))
    }

    pub fn parse_lines(&mut self, raw: &str) -> Result<&PassReport> {
        let pass = EntityKind::DialogLine;
        let mut run = self.begin_pass(pass)?;
        for record in split_records(raw, &self.options.separator, pass.field_count()) {
            let outcome = match record {
                Ok(record) => run.track(
                    record.line_number,
                    decode_dialog_line(&record, &self.movies, &self.characters, &mut self.lines),
                ),
                Err(malformed) => run.reject(malformed.line_number, malformed.into()),
            };
            if let Err(err) = outcome {
                self.failed = Some(pass);
                return Err(err);
            }
        }
        Ok(self.end_pass(run))
    }

    pub fn parse_conversations(&mut self, raw: &str) -> Result<&PassReport> {
        let pass = EntityKind::Conversation;
        let mut run = self.begin_pass(pass)?;
        for record in split_records(raw, &self.options.separator, pass.field_count()) {
            let outcome = match record {
                Ok(record) => {
                    let decoded =
                        decode_conversation(&record, &self.movies, &self.characters, &self.lines);
                    run.track(
                        record.line_number,
                        decoded.map(|conversation| self.conversations.push(conversation)),
                    )
                }
                Err(malformed) => run.reject(malformed.line_number, malformed.into()),
            };
            if let Err(err) = outcome {
                self.failed = Some(pass);
                return Err(err);
            }
        }
        Ok(self.end_pass(run))
    }

    pub fn is_parsed(&self, pass: EntityKind) -> bool {
        self.reports.iter().any(|report| report.pass == pass)
    }

    pub fn movies_parsed(&self) -> bool {
        self.is_parsed(EntityKind::Movie)
    }

    pub fn characters_parsed(&self) -> bool {
        self.is_parsed(EntityKind::Character)
    }

    pub fn lines_parsed(&self) -> bool {
        self.is_parsed(EntityKind::DialogLine)
    }

    pub fn conversations_parsed(&self) -> bool {
        self.is_parsed(EntityKind::Conversation)
    }

    /// The pass that aborted under the strict policy, if any.
    pub fn failed_pass(&self) -> Option<EntityKind> {
        self.failed
    }

    pub fn is_fully_parsed(&self) -> bool {
        self.movies_parsed()
            && self.characters_parsed()
            && self.lines_parsed()
            && self.conversations_parsed()
    }

    pub fn movies(&self) -> &EntityTable<Movie> {
        &self.movies
    }

    pub fn characters(&self) -> &EntityTable<Character> {
        &self.characters
    }

    pub fn lines(&self) -> &EntityTable<DialogLine> {
        &self.lines
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn movie(&self, id: u32) -> Option<&Arc<Movie>> {
        self.movies.get(id)
    }

    pub fn character(&self, id: u32) -> Option<&Arc<Character>> {
        self.characters.get(id)
    }

    pub fn line(&self, id: u32) -> Option<&Arc<DialogLine>> {
        self.lines.get(id)
    }

    /// Reports of the completed passes, in the order they ran.
    pub fn reports(&self) -> &[PassReport] {
        &self.reports
    }

    pub fn problems(&self) -> impl Iterator<Item = &Problem> {
        self.reports.iter().flat_map(|report| report.problems.iter())
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            movies: self.movies.len(),
            characters: self.characters.len(),
            lines: self.lines.len(),
            conversations: self.conversations.len(),
        }
    }

    pub fn random_conversation(&self) -> Result<&Conversation> {
        self.random_conversation_with(&mut rand::rng())
    }

    /// Picks a conversation uniformly at random using the given generator.
    pub fn random_conversation_with<R: Rng>(&self, rng: &mut R) -> Result<&Conversation> {
        if !self.is_fully_parsed() {
            return Err(CorpusError::NotFullyParsed);
        }
        let last = self
            .conversations
            .len()
            .checked_sub(1)
            .ok_or(CorpusError::NoConversations)?;
        Ok(&self.conversations[rng.random_range(0..=last)])
    }
}
