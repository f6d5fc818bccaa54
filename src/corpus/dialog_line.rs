use super::character::Character;
use super::error::{EntityKind, RecordError};
use super::ids::{parse_prefixed_id, CHARACTER_PREFIX, LINE_PREFIX, MOVIE_PREFIX};
use super::movie::Movie;
use super::records::Record;
use super::table::{EntityTable, Keyed};
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub struct DialogLine {
    pub id: u32,
    pub character: Arc<Character>,
    pub movie: Arc<Movie>,
    /// Kept exactly as in the corpus, may be empty.
    pub text: String,
}

impl Keyed for DialogLine {
    const KIND: EntityKind = EntityKind::DialogLine;

    fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for DialogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<DialogLine - {}: \"{}\">", self.character.name, self.text)
    }
}

// line_id, character_id, movie_id, character name (unused), text
pub fn decode_dialog_line(
    record: &Record<'_>,
    movies: &EntityTable<Movie>,
    characters: &EntityTable<Character>,
    lines: &mut EntityTable<DialogLine>,
) -> Result<Arc<DialogLine>, RecordError> {
    let id = parse_prefixed_id("line id", record.field(0), LINE_PREFIX)?;
    let character_id = parse_prefixed_id("character id", record.field(1), CHARACTER_PREFIX)?;
    let movie_id = parse_prefixed_id("movie id", record.field(2), MOVIE_PREFIX)?;

    lines.insert(DialogLine {
        id,
        character: characters.resolve(character_id)?,
        movie: movies.resolve(movie_id)?,
        text: record.field(4).to_owned(),
    })
}
