/// Assessment catalogue: the fixed, ordered set of recommendable items.
///
/// The catalogue is loaded once at startup (built-in JSON or a file named by
/// the caller) and never mutated afterwards. Order is significant: it is the
/// tie-break for equal similarity scores.
use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RecommendError;

const BUILTIN_CATALOGUE: &str = include_str!("../data/catalogue.json");

/// A single assessment product (e.g. "Cognitive Ability Test").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    /// Display name, unique within a catalogue.
    pub name: String,
    /// Free-text description; this is the text that gets vectorized.
    pub description: String,
    pub url: String,
    /// Duration in minutes.
    pub duration: u32,
    pub remote_support: bool,
    pub adaptive_support: bool,
    /// Category tags such as "Personality" or "Simulation".
    #[serde(default)]
    pub test_types: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Catalogue {
    entries: Vec<CatalogueEntry>,
}

impl Catalogue {
    /// Validate and wrap a list of entries.
    ///
    /// Fails when the list is empty or two entries share a name. Duplicate
    /// test type tags within an entry are dropped, keeping first occurrence.
    pub fn new(mut entries: Vec<CatalogueEntry>) -> Result<Self, RecommendError> {
        if entries.is_empty() {
            return Err(RecommendError::InvalidCatalogue(
                "catalogue must contain at least one entry".to_string(),
            ));
        }

        let mut names = HashSet::new();
        for entry in &mut entries {
            if entry.name.trim().is_empty() {
                return Err(RecommendError::InvalidCatalogue(
                    "entry name must not be empty".to_string(),
                ));
            }
            if !names.insert(entry.name.clone()) {
                return Err(RecommendError::InvalidCatalogue(format!(
                    "duplicate entry name: {}",
                    entry.name
                )));
            }

            let mut seen = HashSet::new();
            entry.test_types.retain(|t| seen.insert(t.clone()));
        }

        Ok(Self { entries })
    }

    /// The catalogue shipped with the crate.
    pub fn builtin() -> Result<Self, RecommendError> {
        Self::from_json_str(BUILTIN_CATALOGUE)
    }

    /// Parse a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self, RecommendError> {
        let entries: Vec<CatalogueEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn from_path(path: &Path) -> Result<Self, RecommendError> {
        let content = std::fs::read_to_string(path)?;
        let catalogue = Self::from_json_str(&content)?;
        debug!(path = %path.display(), entries = catalogue.len(), "catalogue loaded from file");
        Ok(catalogue)
    }

    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogueEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, description: &str) -> CatalogueEntry {
        CatalogueEntry {
            name: name.to_string(),
            description: description.to_string(),
            url: format!("https://example.com/{}", name.to_lowercase()),
            duration: 30,
            remote_support: true,
            adaptive_support: false,
            test_types: vec!["Simulation".to_string()],
        }
    }

    #[test]
    fn builtin_catalogue_loads() {
        let catalogue = Catalogue::builtin().expect("builtin catalogue should parse");
        assert_eq!(catalogue.len(), 5);
        assert_eq!(catalogue.entries()[0].name, "Cognitive Ability Test");
        assert_eq!(catalogue.entries()[3].duration, 60);
        assert_eq!(catalogue.entries()[3].test_types, vec!["Knowledge & Skills"]);
    }

    #[test]
    fn rejects_empty_catalogue() {
        let err = Catalogue::new(Vec::new()).unwrap_err();
        assert!(matches!(err, RecommendError::InvalidCatalogue(_)));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = Catalogue::new(vec![entry("A", "one"), entry("A", "two")]).unwrap_err();
        assert!(err.to_string().contains("duplicate entry name: A"));
    }

    #[test]
    fn dedups_test_types() {
        let mut e = entry("A", "one");
        e.test_types = vec!["X".into(), "Y".into(), "X".into()];
        let catalogue = Catalogue::new(vec![e]).unwrap();
        assert_eq!(catalogue.entries()[0].test_types, vec!["X", "Y"]);
    }

    #[test]
    fn missing_test_types_defaults_to_empty() {
        let json = r#"[{"name": "A", "description": "d", "url": "u", "duration": 10,
                        "remote_support": true, "adaptive_support": true}]"#;
        let catalogue = Catalogue::from_json_str(json).unwrap();
        assert!(catalogue.entries()[0].test_types.is_empty());
    }

    #[test]
    fn malformed_json_is_format_error() {
        let err = Catalogue::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, RecommendError::CatalogueFormat(_)));
    }
}
