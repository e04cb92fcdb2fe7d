//! In-memory adverse-event dataset.
//!
//! The dataset is loaded once at startup from a CSV file and treated as
//! immutable for the lifetime of the process. Components receive it as
//! an `Arc<Dataset>`; there is no module-level singleton.

mod loader;
mod schema;

pub use loader::load_csv;
pub use schema::{SchemaEntry, SchemaRegistry};

use std::collections::HashMap;

/// Column holding the unique subject identifier.
pub const SUBJECT_ID_COLUMN: &str = "USUBJID";

/// Column holding the adverse-event severity.
pub const SEVERITY_COLUMN: &str = "AESEV";

/// One adverse-event record: a mapping from column name to string value.
/// An absent or empty value both read as the empty string.
#[derive(Debug, Clone, Default)]
pub struct Record {
    values: HashMap<String, String>,
}

impl Record {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Field value for a column, empty string when missing.
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    /// The record's subject identifier.
    pub fn subject_id(&self) -> &str {
        self.get(SUBJECT_ID_COLUMN)
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Immutable, ordered collection of adverse-event records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    /// Column names, in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Whether a column exists in this dataset.
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// All records, in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records belonging to one subject.
    pub fn subject_records<'a>(&'a self, subject_id: &'a str) -> impl Iterator<Item = &'a Record> {
        self.records
            .iter()
            .filter(move |r| r.subject_id() == subject_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
