//! Flat fact lists on disk: one fact per line, each terminated by `.`.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;
use thiserror::Error;

use crate::ast::{Document, Fact};
use crate::parser::{parse_document, ParseError};

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Write facts sorted, so the same working memory always gives the same file.
pub fn write_facts<'a, W, I>(mut out: W, facts: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Fact>,
{
    let mut sorted: Vec<&Fact> = facts.into_iter().collect();
    sorted.sort();
    for f in sorted {
        writeln!(out, "{f}.")?;
    }
    out.flush()
}

pub fn save_facts<'a, I>(path: impl AsRef<Path>, facts: I) -> Result<(), PersistError>
where
    I: IntoIterator<Item = &'a Fact>,
{
    let path = path.as_ref();
    let file = fs::File::create(path)?;
    write_facts(BufWriter::new(file), facts)?;
    info!("facts saved to {}", path.display());
    Ok(())
}

pub fn read_document(path: impl AsRef<Path>) -> Result<Document, PersistError> {
    let input = fs::read_to_string(path)?;
    Ok(parse_document(&input)?)
}
