//! Dictionary serialization
//!
//! One output line per selected taxon:
//! `species:ncbi:<ID>\t<variant1>|<variant2>|...|<variantN>`
//! with the variants in lexicographic order.

use crate::error::DictError;
use crate::subtree::{build_index, filter_by_root};
use crate::taxonomy::{parse_file, Rank, TaxonEntry};
use crate::variants::make_variants;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Prefix of every dictionary line, ahead of the taxon ID.
pub const DICT_PREFIX: &str = "species:ncbi:";

/// Serialize one entry as a dictionary line.
pub fn write_entry<W: Write>(out: &mut W, entry: &TaxonEntry) -> io::Result<()> {
    let variants: Vec<String> = make_variants(entry).into_iter().collect();
    writeln!(out, "{}{}\t{}", DICT_PREFIX, entry.id(), variants.join("|"))
}

/// Run the full pipeline: parse `input`, select entries of `rank`
/// (restricted to the subtree below `root` when one is given), and write
/// one dictionary line per selected entry to `output`.
///
/// Returns the number of lines written. Checking that `output` does not
/// already exist is the caller's concern; an existing file is truncated.
pub fn write_dict(
    input: &Path,
    output: &Path,
    rank: Rank,
    root: Option<&str>,
) -> Result<usize, DictError> {
    let entries = parse_file(input)?;
    let mut count = 0;
    match root {
        Some(root) => {
            // Subtree selection needs the whole file in memory before the
            // first line can be written.
            let index = build_index(entries)?;
            let mut out = BufWriter::new(File::create(output)?);
            for entry in filter_by_root(&index, root, rank) {
                write_entry(&mut out, entry)?;
                count += 1;
            }
            out.flush()?;
        }
        None => {
            let mut out = BufWriter::new(File::create(output)?);
            for entry in entries {
                let entry = entry?;
                if entry.rank() != Some(rank.as_str()) {
                    continue;
                }
                write_entry(&mut out, &entry)?;
                count += 1;
            }
            out.flush()?;
        }
    }
    Ok(count)
}
