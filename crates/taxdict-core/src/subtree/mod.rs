//! Subtree filtering over the parsed taxonomy
//!
//! Filtering walks each entry's parent chain upward through an in-memory
//! index; an entry is selected when the chain reaches the requested root
//! and the entry has the requested rank.

use crate::error::DictError;
use crate::taxonomy::{Rank, TaxonEntry};
use std::collections::BTreeMap;

/// All entries of one taxonomy file, keyed by taxon ID.
///
/// Read-only once built; only materialized when subtree filtering is
/// requested. Ordered by ID so the dictionary output is stable across
/// runs.
pub type TaxonomyIndex = BTreeMap<String, TaxonEntry>;

/// Materialize a parsed entry stream into an index.
///
/// A later entry with the same ID replaces the earlier one, mirroring the
/// last-write-wins behavior of unique fields.
pub fn build_index<I>(entries: I) -> Result<TaxonomyIndex, DictError>
where
    I: IntoIterator<Item = Result<TaxonEntry, DictError>>,
{
    let mut index = TaxonomyIndex::new();
    for entry in entries {
        let entry = entry?;
        index.insert(entry.id().to_string(), entry);
    }
    Ok(index)
}

/// Select the entries of the given rank inside the subtree below `root`.
///
/// The root entry itself is included when its rank matches. Every entry
/// is yielded at most once; entries whose parent chain leaves the index
/// (or never reaches the root) are excluded.
pub fn filter_by_root<'a>(
    index: &'a TaxonomyIndex,
    root: &'a str,
    rank: Rank,
) -> impl Iterator<Item = &'a TaxonEntry> + 'a {
    index
        .values()
        .filter(move |entry| entry.rank() == Some(rank.as_str()) && in_subtree(index, entry, root))
}

/// Walk the parent chain of `entry` upward and report whether it reaches
/// `root`. O(depth), no memoization across entries.
fn in_subtree(index: &TaxonomyIndex, entry: &TaxonEntry, root: &str) -> bool {
    if entry.id() == root {
        return true;
    }
    let mut current = entry;
    while let Some(parent_id) = current.parent_id() {
        if parent_id == root {
            return true;
        }
        // The root of the full taxonomy lists itself as its parent.
        if parent_id == current.id() {
            return false;
        }
        match index.get(parent_id) {
            Some(parent) => current = parent,
            None => return false,
        }
    }
    false
}
