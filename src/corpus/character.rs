use super::error::{EntityKind, RecordError};
use super::ids::{parse_number, parse_prefixed_id, title_case, CHARACTER_PREFIX, MOVIE_PREFIX};
use super::movie::Movie;
use super::records::Record;
use super::table::{EntityTable, Keyed};
use std::fmt;
use std::sync::Arc;

/// Token the corpus uses for "not known", both for gender and credit position.
const UNKNOWN_TOKEN: &str = "?";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    Other(String),
    Unknown,
}

impl Gender {
    pub fn from_token(token: &str) -> Gender {
        match token.trim() {
            UNKNOWN_TOKEN | "" => Gender::Unknown,
            t if t.eq_ignore_ascii_case("f") => Gender::Female,
            t if t.eq_ignore_ascii_case("m") => Gender::Male,
            t => Gender::Other(t.to_owned()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Gender::Unknown)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Female => f.write_str("f"),
            Gender::Male => f.write_str("m"),
            Gender::Other(token) => f.write_str(token),
            Gender::Unknown => f.write_str(UNKNOWN_TOKEN),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub movie: Arc<Movie>,
    pub gender: Gender,
    pub credit_position: Option<u32>,
}

impl Keyed for Character {
    const KIND: EntityKind = EntityKind::Character;

    fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{} ({})]",
            self.name, self.movie.title, self.movie.year
        )?;
        if self.gender.is_known() {
            write!(f, " - {}", self.gender)?;
        }
        Ok(())
    }
}

// character_id, name, movie_id, movie title (unused), gender, credit position
pub fn decode_character(
    record: &Record<'_>,
    movies: &EntityTable<Movie>,
    characters: &mut EntityTable<Character>,
) -> Result<Arc<Character>, RecordError> {
    let id = parse_prefixed_id("character id", record.field(0), CHARACTER_PREFIX)?;
    let movie_id = parse_prefixed_id("movie id", record.field(2), MOVIE_PREFIX)?;
    let movie = movies.resolve(movie_id)?;

    let credit_position = match record.field(5).trim() {
        UNKNOWN_TOKEN | "" => None,
        position => Some(parse_number("credit position", position)?),
    };

    characters.insert(Character {
        id,
        name: title_case(record.field(1)),
        movie,
        gender: Gender::from_token(record.field(4)),
        credit_position,
    })
}
