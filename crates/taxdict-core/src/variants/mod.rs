//! Spelling variant generation
//!
//! Expands a taxon's names into the variant set described in the LINNAEUS
//! paper: abbreviation and case variants for binomial-style names, a
//! capitalized copy for common names.

use crate::taxonomy::{FieldName, TaxonEntry};
use std::collections::BTreeSet;

/// Name fields expanded with the taxonomic (abbreviation) rules.
pub const TAXONOMIC_FIELDS: [FieldName; 10] = [
    FieldName::ScientificName,
    FieldName::Synonym,
    FieldName::GenbankSynonym,
    FieldName::EquivalentName,
    FieldName::Misspelling,
    FieldName::Teleomorph,
    FieldName::Anamorph,
    FieldName::GenbankAnamorph,
    FieldName::Misnomer,
    FieldName::InPart,
];

/// Name fields expanded with the common-name rules.
pub const COMMON_NAME_FIELDS: [FieldName; 3] = [
    FieldName::GenbankCommonName,
    FieldName::CommonName,
    FieldName::BlastName,
];

/// Generate all spelling variants for one entry.
///
/// Pure and deterministic; the returned set is deduplicated and iterates
/// in lexicographic order, which is also the serialization order of the
/// dictionary.
pub fn make_variants(entry: &TaxonEntry) -> BTreeSet<String> {
    let mut variants = BTreeSet::new();
    for field in TAXONOMIC_FIELDS {
        for value in entry.names(field) {
            expand_taxonomic(value, &mut variants);
        }
    }
    for field in COMMON_NAME_FIELDS {
        for value in entry.names(field) {
            expand_common(value, &mut variants);
        }
    }
    variants
}

/// Expand one taxonomic name.
///
/// Multi-token names whose first two tokens are purely alphabetic get six
/// variants: the original, the genus abbreviated to its initial plus a
/// dot (with and without the following space), each in original and
/// all-lowercase spelling. Anything else (including names with markers
/// such as "sp.") is kept verbatim.
fn expand_taxonomic(value: &str, variants: &mut BTreeSet<String>) {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    match tokens.as_slice() {
        [] => {}
        [_] => {
            variants.insert(value.to_string());
        }
        [genus, epithet, ..] if is_alphabetic(genus) && is_alphabetic(epithet) => {
            variants.insert(value.to_string());
            variants.insert(value.to_lowercase());

            let mut abbreviated: String = genus.chars().take(1).collect();
            abbreviated.push('.');
            let rest = tokens[1..].join(" ");

            let spaced = format!("{} {}", abbreviated, rest);
            variants.insert(spaced.to_lowercase());
            variants.insert(spaced);

            let fused = format!("{}{}", abbreviated, rest);
            variants.insert(fused.to_lowercase());
            variants.insert(fused);
        }
        _ => {
            variants.insert(value.to_string());
        }
    }
}

/// Expand one common name: the value itself plus a copy with the first
/// character upper-cased. Empty values contribute nothing.
fn expand_common(value: &str, variants: &mut BTreeSet<String>) {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return;
    };
    variants.insert(value.to_string());
    let capitalized: String = first.to_uppercase().chain(chars).collect();
    variants.insert(capitalized);
}

fn is_alphabetic(token: &str) -> bool {
    token.chars().all(char::is_alphabetic)
}
