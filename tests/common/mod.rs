//! Shared fixtures for the corpus integration tests.
#![allow(dead_code)]

use spamplay::config::CorpusFiles;
use spamplay::CorpusSources;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;

pub const MOVIES: &str = "\
m0 +++$+++ 10 things i hate about you +++$+++ 1999 +++$+++ 6.90 +++$+++ 62847 +++$+++ ['comedy', 'romance']
m1 +++$+++ 1492: conquest of paradise +++$+++ 1992 +++$+++ 6.20 +++$+++ 10421 +++$+++ ['adventure', 'biography', 'drama', 'history']
m2 +++$+++ 15 minutes +++$+++ 2001 +++$+++ 6.10 +++$+++ 25854 +++$+++ ['action', 'crime', 'drama', 'thriller']
";

pub const CHARACTERS: &str = "\
u0 +++$+++ BIANCA +++$+++ m0 +++$+++ 10 things i hate about you +++$+++ f +++$+++ 4
u1 +++$+++ BRUCE +++$+++ m0 +++$+++ 10 things i hate about you +++$+++ ? +++$+++ ?
u2 +++$+++ CAMERON +++$+++ m0 +++$+++ 10 things i hate about you +++$+++ m +++$+++ 3
u13 +++$+++ COLUMBUS +++$+++ m1 +++$+++ 1492: conquest of paradise +++$+++ M +++$+++ 1
u14 +++$+++ DIEGO +++$+++ m1 +++$+++ 1492: conquest of paradise +++$+++ ? +++$+++ ?
u25 +++$+++ EMIL +++$+++ m2 +++$+++ 15 minutes +++$+++ m +++$+++ 2
u26 +++$+++ EDDIE +++$+++ m2 +++$+++ 15 minutes +++$+++ m +++$+++ 1
";

pub const LINES: &str = "\
L194 +++$+++ u0 +++$+++ m0 +++$+++ BIANCA +++$+++ Can we make this quick?
L195 +++$+++ u2 +++$+++ m0 +++$+++ CAMERON +++$+++ Well, I thought we'd start with pronunciation, if that's okay with you.
L196 +++$+++ u0 +++$+++ m0 +++$+++ BIANCA +++$+++ Not the hacking and gagging and spitting part.  Please.
L197 +++$+++ u2 +++$+++ m0 +++$+++ CAMERON +++$+++ Okay... then how 'bout we try out some French cuisine.  Saturday?  Night?
L200 +++$+++ u1 +++$+++ m0 +++$+++ BRUCE +++$+++ 
L3000 +++$+++ u13 +++$+++ m1 +++$+++ COLUMBUS +++$+++ Land!
L3001 +++$+++ u14 +++$+++ m1 +++$+++ DIEGO +++$+++ Where?
L5000 +++$+++ u25 +++$+++ m2 +++$+++ EMIL +++$+++ We are famous now.
L5001 +++$+++ u26 +++$+++ m2 +++$+++ EDDIE +++$+++ You are under arrest.
";

pub const CONVERSATIONS: &str = "\
u0 +++$+++ u2 +++$+++ m0 +++$+++ ['L194', 'L195', 'L196', 'L197']
u1 +++$+++ u0 +++$+++ m0 +++$+++ ['L200']
u13 +++$+++ u14 +++$+++ m1 +++$+++ ['L3000', 'L3001']
u25 +++$+++ u26 +++$+++ m2 +++$+++ ['L5000', 'L5001']
u26 +++$+++ u25 +++$+++ m2 +++$+++ ['L5001', 'L5000']
";

pub const CONVERSATION_COUNT: usize = 5;

pub fn sources() -> CorpusSources {
    CorpusSources {
        movies: MOVIES.to_owned(),
        characters: CHARACTERS.to_owned(),
        lines: LINES.to_owned(),
        conversations: CONVERSATIONS.to_owned(),
    }
}

fn file_contents(sources: &CorpusSources, files: &CorpusFiles) -> Vec<(String, Vec<u8>)> {
    vec![
        (files.movies.clone(), sources.movies.as_bytes().to_vec()),
        (files.characters.clone(), sources.characters.as_bytes().to_vec()),
        (files.lines.clone(), sources.lines.as_bytes().to_vec()),
        (
            files.conversations.clone(),
            sources.conversations.as_bytes().to_vec(),
        ),
    ]
}

/// Writes the corpus files into `dir`, the way an extracted archive looks.
pub fn write_corpus_dir(dir: &Path, sources: &CorpusSources) {
    for (name, bytes) in file_contents(sources, &CorpusFiles::default()) {
        std::fs::write(dir.join(name), bytes).unwrap();
    }
}

/// Writes a zip archive laid out like the published Cornell archive.
pub fn write_corpus_zip(dir: &Path, sources: &CorpusSources) -> PathBuf {
    let files = CorpusFiles::default();
    let path = dir.join("cornell_movie_dialogs_corpus.zip");
    let mut writer = zip::ZipWriter::new(File::create(&path).unwrap());
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, bytes) in file_contents(sources, &files) {
        writer
            .start_file(format!("{}{}", files.archive_dir, name), options)
            .unwrap();
        writer.write_all(&bytes).unwrap();
    }
    writer.finish().unwrap();
    path
}
