use super::character::Character;
use super::dialog_line::DialogLine;
use super::error::RecordError;
use super::ids::{line_ids, parse_prefixed_id, CHARACTER_PREFIX, MOVIE_PREFIX};
use super::movie::Movie;
use super::records::Record;
use super::table::EntityTable;
use std::fmt;
use std::sync::Arc;

/// An exchange between two characters of the same movie.
///
/// Conversations have no identifier of their own; the corpus keeps them in
/// source order.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversation {
    pub characters: (Arc<Character>, Arc<Character>),
    pub movie: Arc<Movie>,
    pub lines: Vec<Arc<DialogLine>>,
}

impl fmt::Display for Conversation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Conversation between '{}' and '{}' from {} ({})",
            self.characters.0.name, self.characters.1.name, self.movie.title, self.movie.year
        )
    }
}

fn resolve_participant(
    characters: &EntityTable<Character>,
    character_id: u32,
    movie_id: u32,
) -> Result<Arc<Character>, RecordError> {
    let character = characters.resolve(character_id)?;
    if character.movie.id != movie_id {
        return Err(RecordError::MovieMismatch {
            character_id,
            character_movie_id: character.movie.id,
            movie_id,
        });
    }
    Ok(character)
}

// first character_id, second character_id, movie_id, line id list literal
pub fn decode_conversation(
    record: &Record<'_>,
    movies: &EntityTable<Movie>,
    characters: &EntityTable<Character>,
    lines: &EntityTable<DialogLine>,
) -> Result<Conversation, RecordError> {
    let first_id = parse_prefixed_id("character id", record.field(0), CHARACTER_PREFIX)?;
    let second_id = parse_prefixed_id("character id", record.field(1), CHARACTER_PREFIX)?;
    let movie_id = parse_prefixed_id("movie id", record.field(2), MOVIE_PREFIX)?;
    let line_ids = line_ids(record.field(3))?;

    let movie = movies.resolve(movie_id)?;
    let first = resolve_participant(characters, first_id, movie_id)?;
    let second = resolve_participant(characters, second_id, movie_id)?;
    let lines = line_ids
        .into_iter()
        .map(|line_id| lines.resolve(line_id))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Conversation {
        characters: (first, second),
        movie,
        lines,
    })
}
