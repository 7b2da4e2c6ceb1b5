//! Streaming parser for the `taxonomy.dat` record format
//!
//! Records are separated by `//` lines; the first field line of a record
//! carries the taxon ID. Malformed records are logged and skipped, with
//! parsing resuming at the next delimiter. Only I/O failures are errors.

use super::entry::TaxonEntry;
use super::fields::FieldName;
use crate::error::DictError;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::mem;
use std::path::Path;

lazy_static! {
    // Alternation order does not matter: no field name is a prefix of
    // another, and the separator must follow the name anyway.
    static ref FIELD_LINE: Regex = {
        let names: Vec<&str> = FieldName::ALL.iter().map(|f| f.as_str()).collect();
        Regex::new(&format!(r"^({})\s+:\s", names.join("|"))).unwrap()
    };
}

/// A record delimiter line.
fn is_delimiter(line: &str) -> bool {
    line.starts_with("//")
}

/// Split a line into its field name and value, trailing whitespace stripped.
fn match_field(line: &str) -> Option<(FieldName, &str)> {
    let caps = FIELD_LINE.captures(line)?;
    let field = FieldName::from_str(caps.get(1)?.as_str())?;
    let value = &line[caps.get(0)?.end()..];
    Some((field, value.trim_end()))
}

enum ParserState {
    /// Between records; the next field line starts a new entry.
    AwaitingId,
    /// Inside a record, accumulating fields.
    InEntry(TaxonEntry),
    /// Skipping the remainder of a malformed record.
    Erroring,
}

/// Lazy, forward-only stream of taxonomy entries.
///
/// Consuming the iterator fully reads the whole input once. A read error
/// is yielded as the final item; malformed records are logged via
/// `tracing::warn!` and never yielded.
pub struct Entries<R> {
    lines: Lines<R>,
    state: ParserState,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> Entries<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            state: ParserState::AwaitingId,
            line_no: 0,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Entries<R> {
    type Item = Result<TaxonEntry, DictError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                None => {
                    self.done = true;
                    if let ParserState::InEntry(entry) =
                        mem::replace(&mut self.state, ParserState::AwaitingId)
                    {
                        tracing::warn!(
                            "Unterminated entry {} at end of input, skipped",
                            entry.id()
                        );
                    }
                    return None;
                }
            };
            self.line_no += 1;

            self.state = match mem::replace(&mut self.state, ParserState::AwaitingId) {
                ParserState::AwaitingId => {
                    if is_delimiter(&line) {
                        ParserState::AwaitingId
                    } else {
                        match match_field(&line) {
                            // The first field line names the record; its value
                            // becomes the ID no matter which field it is.
                            Some((_, value)) => ParserState::InEntry(TaxonEntry::new(value)),
                            None => {
                                tracing::warn!("Missing ID on line {}", self.line_no);
                                ParserState::Erroring
                            }
                        }
                    }
                }
                ParserState::InEntry(mut entry) => {
                    if is_delimiter(&line) {
                        return Some(Ok(entry));
                    }
                    match match_field(&line) {
                        Some((field, value)) => {
                            entry.add_field(field, value);
                            ParserState::InEntry(entry)
                        }
                        None => {
                            tracing::warn!(
                                "Unknown format on line {}: {:?}, skipping entry {}",
                                self.line_no,
                                line,
                                entry.id()
                            );
                            ParserState::Erroring
                        }
                    }
                }
                ParserState::Erroring => {
                    if is_delimiter(&line) {
                        ParserState::AwaitingId
                    } else {
                        ParserState::Erroring
                    }
                }
            };
        }
    }
}

/// Open a taxonomy file and stream its entries.
pub fn parse_file(path: impl AsRef<Path>) -> io::Result<Entries<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(Entries::new(BufReader::new(file)))
}
