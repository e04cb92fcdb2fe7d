//! Column schema registry.
//!
//! A fixed mapping from column name to a human-readable description,
//! rendered into the model prompt. Insertion order is preserved so the
//! prompt is deterministic.

/// One schema entry: column name plus free-text description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    pub column: String,
    pub description: String,
}

/// Insertion-ordered registry of schema entries.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    entries: Vec<SchemaEntry>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default ADAE schema.
    pub fn clinical_default() -> Self {
        let mut registry = Self::new();
        registry.insert("AESEV", "Severity of adverse event (e.g., MILD, MODERATE, SEVERE)");
        registry.insert("AETERM", "Adverse event term/condition (e.g., HEADACHE, COUGH)");
        registry.insert("AESOC", "Body system category (e.g., CARDIAC DISORDERS)");
        registry.insert("AEBODSYS", "Body system (similar to AESOC)");
        registry.insert("AEDECOD", "Standardized AE term");
        registry.insert("TRTEMFL", "Treatment-emergent flag (Y/N)");
        registry.insert("AEREL", "Relationship to drug (NONE/REMOTE/POSSIBLE/PROBABLE)");
        registry.insert("USUBJID", "Unique subject identifier");
        registry
    }

    /// Insert an entry, replacing any existing entry for the same column
    /// in place.
    pub fn insert(&mut self, column: impl Into<String>, description: impl Into<String>) {
        let column = column.into();
        let description = description.into();
        if let Some(existing) = self.entries.iter_mut().find(|e| e.column == column) {
            existing.description = description;
        } else {
            self.entries.push(SchemaEntry { column, description });
        }
    }

    pub fn get(&self, column: &str) -> Option<&SchemaEntry> {
        self.entries.iter().find(|e| e.column == column)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the registry as `COLUMN: description` lines for the prompt.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}: {}", e.column, e.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
