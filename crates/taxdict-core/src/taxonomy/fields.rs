//! Field names of a taxonomy record

use serde::{Deserialize, Serialize};

/// A field name of the `taxonomy.dat` format.
///
/// Lines with any other name are format errors and cause the enclosing
/// record to be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldName {
    Id,
    ParentId,
    Rank,
    GcId,
    MgcId,
    ScientificName,
    Anamorph,
    BlastName,
    CommonName,
    EquivalentName,
    GenbankAcronym,
    GenbankAnamorph,
    GenbankCommonName,
    GenbankSynonym,
    InPart,
    Misnomer,
    Misspelling,
    Synonym,
    Teleomorph,
    Includes,
    Acronym,
}

impl FieldName {
    /// Every known field name, in the order the format documentation lists them.
    pub const ALL: [FieldName; 21] = [
        FieldName::Id,
        FieldName::ParentId,
        FieldName::Rank,
        FieldName::GcId,
        FieldName::MgcId,
        FieldName::ScientificName,
        FieldName::Anamorph,
        FieldName::BlastName,
        FieldName::CommonName,
        FieldName::EquivalentName,
        FieldName::GenbankAcronym,
        FieldName::GenbankAnamorph,
        FieldName::GenbankCommonName,
        FieldName::GenbankSynonym,
        FieldName::InPart,
        FieldName::Misnomer,
        FieldName::Misspelling,
        FieldName::Synonym,
        FieldName::Teleomorph,
        FieldName::Includes,
        FieldName::Acronym,
    ];

    /// Look up a field name as it appears in the file.
    ///
    /// Field names are case-sensitive; `taxonomy.dat` writes them in
    /// upper case.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ID" => Some(Self::Id),
            "PARENT ID" => Some(Self::ParentId),
            "RANK" => Some(Self::Rank),
            "GC ID" => Some(Self::GcId),
            "MGC ID" => Some(Self::MgcId),
            "SCIENTIFIC NAME" => Some(Self::ScientificName),
            "ANAMORPH" => Some(Self::Anamorph),
            "BLAST NAME" => Some(Self::BlastName),
            "COMMON NAME" => Some(Self::CommonName),
            "EQUIVALENT NAME" => Some(Self::EquivalentName),
            "GENBANK ACRONYM" => Some(Self::GenbankAcronym),
            "GENBANK ANAMORPH" => Some(Self::GenbankAnamorph),
            "GENBANK COMMON NAME" => Some(Self::GenbankCommonName),
            "GENBANK SYNONYM" => Some(Self::GenbankSynonym),
            "IN-PART" => Some(Self::InPart),
            "MISNOMER" => Some(Self::Misnomer),
            "MISSPELLING" => Some(Self::Misspelling),
            "SYNONYM" => Some(Self::Synonym),
            "TELEOMORPH" => Some(Self::Teleomorph),
            "INCLUDES" => Some(Self::Includes),
            "ACRONYM" => Some(Self::Acronym),
            _ => None,
        }
    }

    /// Canonical rendering, as written in the file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::ParentId => "PARENT ID",
            Self::Rank => "RANK",
            Self::GcId => "GC ID",
            Self::MgcId => "MGC ID",
            Self::ScientificName => "SCIENTIFIC NAME",
            Self::Anamorph => "ANAMORPH",
            Self::BlastName => "BLAST NAME",
            Self::CommonName => "COMMON NAME",
            Self::EquivalentName => "EQUIVALENT NAME",
            Self::GenbankAcronym => "GENBANK ACRONYM",
            Self::GenbankAnamorph => "GENBANK ANAMORPH",
            Self::GenbankCommonName => "GENBANK COMMON NAME",
            Self::GenbankSynonym => "GENBANK SYNONYM",
            Self::InPart => "IN-PART",
            Self::Misnomer => "MISNOMER",
            Self::Misspelling => "MISSPELLING",
            Self::Synonym => "SYNONYM",
            Self::Teleomorph => "TELEOMORPH",
            Self::Includes => "INCLUDES",
            Self::Acronym => "ACRONYM",
        }
    }

    /// Whether the field holds a single value per record.
    ///
    /// A repeated unique field overwrites the earlier value; all other
    /// fields accumulate in file order.
    pub fn is_unique(&self) -> bool {
        matches!(
            self,
            Self::Id | Self::ParentId | Self::Rank | Self::GcId | Self::MgcId
        )
    }
}
