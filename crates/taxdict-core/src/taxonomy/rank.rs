//! Taxonomic ranks

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A taxonomic rank, as used by the NCBI Taxonomy.
///
/// Parsed entries keep the rank text exactly as read from the file; this
/// enumeration is the set of ranks the dictionary writer accepts for
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Class,
    Cohort,
    Family,
    Forma,
    Genus,
    Infraclass,
    Infraorder,
    Kingdom,
    NoRank,
    Order,
    Parvorder,
    Phylum,
    Species,
    SpeciesGroup,
    SpeciesSubgroup,
    Subclass,
    Subcohort,
    Subfamily,
    Subgenus,
    Subkingdom,
    Suborder,
    Subphylum,
    Subspecies,
    Subtribe,
    Superclass,
    Superfamily,
    Superkingdom,
    Superorder,
    Superphylum,
    Tribe,
    Varietas,
}

/// Error returned when a rank string is not in the accepted set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown taxonomic rank: {0}")]
pub struct ParseRankError(pub String);

impl Rank {
    /// Every accepted rank, alphabetically.
    pub const ALL: [Rank; 31] = [
        Rank::Class,
        Rank::Cohort,
        Rank::Family,
        Rank::Forma,
        Rank::Genus,
        Rank::Infraclass,
        Rank::Infraorder,
        Rank::Kingdom,
        Rank::NoRank,
        Rank::Order,
        Rank::Parvorder,
        Rank::Phylum,
        Rank::Species,
        Rank::SpeciesGroup,
        Rank::SpeciesSubgroup,
        Rank::Subclass,
        Rank::Subcohort,
        Rank::Subfamily,
        Rank::Subgenus,
        Rank::Subkingdom,
        Rank::Suborder,
        Rank::Subphylum,
        Rank::Subspecies,
        Rank::Subtribe,
        Rank::Superclass,
        Rank::Superfamily,
        Rank::Superkingdom,
        Rank::Superorder,
        Rank::Superphylum,
        Rank::Tribe,
        Rank::Varietas,
    ];

    /// Canonical rendering, as written in `taxonomy.dat` RANK lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Cohort => "cohort",
            Self::Family => "family",
            Self::Forma => "forma",
            Self::Genus => "genus",
            Self::Infraclass => "infraclass",
            Self::Infraorder => "infraorder",
            Self::Kingdom => "kingdom",
            Self::NoRank => "no rank",
            Self::Order => "order",
            Self::Parvorder => "parvorder",
            Self::Phylum => "phylum",
            Self::Species => "species",
            Self::SpeciesGroup => "species group",
            Self::SpeciesSubgroup => "species subgroup",
            Self::Subclass => "subclass",
            Self::Subcohort => "subcohort",
            Self::Subfamily => "subfamily",
            Self::Subgenus => "subgenus",
            Self::Subkingdom => "subkingdom",
            Self::Suborder => "suborder",
            Self::Subphylum => "subphylum",
            Self::Subspecies => "subspecies",
            Self::Subtribe => "subtribe",
            Self::Superclass => "superclass",
            Self::Superfamily => "superfamily",
            Self::Superkingdom => "superkingdom",
            Self::Superorder => "superorder",
            Self::Superphylum => "superphylum",
            Self::Tribe => "tribe",
            Self::Varietas => "varietas",
        }
    }
}

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class" => Ok(Self::Class),
            "cohort" => Ok(Self::Cohort),
            "family" => Ok(Self::Family),
            "forma" => Ok(Self::Forma),
            "genus" => Ok(Self::Genus),
            "infraclass" => Ok(Self::Infraclass),
            "infraorder" => Ok(Self::Infraorder),
            "kingdom" => Ok(Self::Kingdom),
            "no rank" => Ok(Self::NoRank),
            "order" => Ok(Self::Order),
            "parvorder" => Ok(Self::Parvorder),
            "phylum" => Ok(Self::Phylum),
            "species" => Ok(Self::Species),
            "species group" => Ok(Self::SpeciesGroup),
            "species subgroup" => Ok(Self::SpeciesSubgroup),
            "subclass" => Ok(Self::Subclass),
            "subcohort" => Ok(Self::Subcohort),
            "subfamily" => Ok(Self::Subfamily),
            "subgenus" => Ok(Self::Subgenus),
            "subkingdom" => Ok(Self::Subkingdom),
            "suborder" => Ok(Self::Suborder),
            "subphylum" => Ok(Self::Subphylum),
            "subspecies" => Ok(Self::Subspecies),
            "subtribe" => Ok(Self::Subtribe),
            "superclass" => Ok(Self::Superclass),
            "superfamily" => Ok(Self::Superfamily),
            "superkingdom" => Ok(Self::Superkingdom),
            "superorder" => Ok(Self::Superorder),
            "superphylum" => Ok(Self::Superphylum),
            "tribe" => Ok(Self::Tribe),
            "varietas" => Ok(Self::Varietas),
            _ => Err(ParseRankError(s.to_string())),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all() {
        for rank in Rank::ALL {
            assert_eq!(rank.as_str().parse::<Rank>(), Ok(rank));
        }
    }

    #[test]
    fn test_multi_word_ranks() {
        assert_eq!("no rank".parse::<Rank>(), Ok(Rank::NoRank));
        assert_eq!("species group".parse::<Rank>(), Ok(Rank::SpeciesGroup));
    }

    #[test]
    fn test_unknown_rank() {
        let err = "strain".parse::<Rank>().unwrap_err();
        assert_eq!(err, ParseRankError("strain".to_string()));
        assert!(err.to_string().contains("strain"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!("Species".parse::<Rank>().is_err());
    }
}
