//! Taxonomy entry data structure

use super::fields::FieldName;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single record of the taxonomy file.
///
/// The five unique fields (ID, PARENT ID, RANK, GC ID, MGC ID) hold one
/// value each; every other field keeps its values in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonEntry {
    id: String,
    scalars: HashMap<FieldName, String>,
    names: HashMap<FieldName, Vec<String>>,
}

impl TaxonEntry {
    /// Create an entry with the given taxon identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            scalars: HashMap::new(),
            names: HashMap::new(),
        }
    }

    /// Record one field value.
    ///
    /// A unique field overwrites any earlier value (including the ID);
    /// a repeatable field appends.
    pub fn add_field(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        if field == FieldName::Id {
            self.id = value;
        } else if field.is_unique() {
            self.scalars.insert(field, value);
        } else {
            self.names.entry(field).or_default().push(value);
        }
    }

    /// The taxon identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Value of a unique field, if the record carried it.
    pub fn scalar(&self, field: FieldName) -> Option<&str> {
        if field == FieldName::Id {
            Some(&self.id)
        } else {
            self.scalars.get(&field).map(String::as_str)
        }
    }

    /// The identifier of the taxonomic parent. Absent on the root.
    pub fn parent_id(&self) -> Option<&str> {
        self.scalar(FieldName::ParentId)
    }

    /// The rank text as read from the file.
    pub fn rank(&self) -> Option<&str> {
        self.scalar(FieldName::Rank)
    }

    /// The genetic code identifier.
    pub fn gc_id(&self) -> Option<&str> {
        self.scalar(FieldName::GcId)
    }

    /// The mitochondrial genetic code identifier.
    pub fn mgc_id(&self) -> Option<&str> {
        self.scalar(FieldName::MgcId)
    }

    /// All values of a repeatable field, in file order.
    pub fn names(&self, field: FieldName) -> &[String] {
        self.names.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }
}
