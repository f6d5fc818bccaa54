use super::error::{EntityKind, RecordError};
use super::ids::{
    list_tokens, parse_finite, parse_leading_number, parse_number, parse_prefixed_id, title_case,
    MOVIE_PREFIX,
};
use super::records::Record;
use super::table::{EntityTable, Keyed};
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub year: u32,
    pub imdb_rating: f64,
    pub imdb_vote_count: u32,
    /// Empty when the record lists no genres.
    pub genres: Vec<String>,
}

impl Keyed for Movie {
    const KIND: EntityKind = EntityKind::Movie;

    fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {:.2}/10", self.title, self.year, self.imdb_rating)
    }
}

// movie_id, title, year, rating, votes, genres
pub fn decode_movie(
    record: &Record<'_>,
    movies: &mut EntityTable<Movie>,
) -> Result<Arc<Movie>, RecordError> {
    let movie = Movie {
        id: parse_prefixed_id("movie id", record.field(0), MOVIE_PREFIX)?,
        title: title_case(record.field(1)),
        year: parse_leading_number("year", record.field(2))?,
        imdb_rating: parse_finite("rating", record.field(3))?,
        imdb_vote_count: parse_number("vote count", record.field(4))?,
        genres: list_tokens(record.field(5)),
    };
    movies.insert(movie)
}
