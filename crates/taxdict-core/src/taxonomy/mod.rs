//! NCBI Taxonomy record model and parser
//!
//! The EBI-processed `taxonomy.dat` file is a line-oriented text format:
//! records are separated by `//` lines, every other line is
//! `<FIELD NAME>  : <value>` with the field name drawn from a fixed set.

mod entry;
mod fields;
mod parser;
mod rank;

pub use entry::TaxonEntry;
pub use fields::FieldName;
pub use parser::{parse_file, Entries};
pub use rank::{ParseRankError, Rank};
