//! taxdict-core: turn the NCBI Taxonomy into a species dictionary
//!
//! This library provides pure Rust implementations of:
//! - Streaming parsing of the EBI-processed `taxonomy.dat` record format
//! - Spelling/abbreviation variant generation for taxon names
//! - Subtree filtering by upward parent-chain walks
//! - Dictionary serialization for the LINNAEUS named-entity recognizer
//!
//! The binary in the `taxdict-cli` crate is a thin shell over `dict::write_dict`.

pub mod dict;
pub mod error;
pub mod subtree;
pub mod taxonomy;
pub mod variants;

// Re-export main types for convenience
pub use dict::{write_dict, write_entry, DICT_PREFIX};
pub use error::DictError;
pub use subtree::{build_index, filter_by_root, TaxonomyIndex};
pub use taxonomy::{parse_file, Entries, FieldName, ParseRankError, Rank, TaxonEntry};
pub use variants::make_variants;
