mod character;
mod conversation;
mod corpus;
mod dialog_line;
mod error;
mod ids;
mod load;
mod movie;
mod problem;
mod records;
mod table;

pub use character::{decode_character, Character, Gender};
pub use conversation::{decode_conversation, Conversation};
pub use corpus::{Corpus, CorpusStats, ErrorPolicy, ParseOptions};
pub use dialog_line::{decode_dialog_line, DialogLine};
pub use error::{CorpusError, EntityKind, RecordError, Result};
pub use load::{load_corpus, CorpusSources};
pub use movie::{decode_movie, Movie};
pub use problem::{PassReport, Problem};
pub use records::{split_records, MalformedRecord, Record, Records, FIELD_SEPARATOR};
pub use table::{EntityTable, Keyed};
