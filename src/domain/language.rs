use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGE: &str = "English";

const BUNDLED_CATALOG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/resources/languages.json"
));

/// One supported assessment language.
///
/// Fallback fields are optional: languages that only carry a locale code and
/// a prompt label borrow the English fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub display_name: String,
    pub locale_code: String,
    pub prompt_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_questions: Option<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("catalog has no English entry")]
    MissingDefault,
    #[error("English entry must define both fallback fields")]
    IncompleteDefault,
    #[error("duplicate language: {0}")]
    DuplicateLanguage(String),
    #[error("language {0} has an empty fallback list")]
    EmptyFallbackList(String),
}

/// Immutable language table. Lookups never fail: unknown names resolve to
/// the English entry.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    entries: Vec<LanguageEntry>,
    default_index: usize,
}

impl LanguageCatalog {
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<LanguageEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn new(entries: Vec<LanguageEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.display_name.as_str()) {
                return Err(CatalogError::DuplicateLanguage(entry.display_name.clone()));
            }
            if entry.fallback_questions.as_ref().is_some_and(Vec::is_empty) {
                return Err(CatalogError::EmptyFallbackList(entry.display_name.clone()));
            }
        }

        let default_index = entries
            .iter()
            .position(|e| e.display_name == DEFAULT_LANGUAGE)
            .ok_or(CatalogError::MissingDefault)?;

        let default = &entries[default_index];
        if default.fallback_question.is_none() || default.fallback_questions.is_none() {
            return Err(CatalogError::IncompleteDefault);
        }

        Ok(Self {
            entries,
            default_index,
        })
    }

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    pub fn default_entry(&self) -> &LanguageEntry {
        &self.entries[self.default_index]
    }

    pub fn get(&self, name: &str) -> Option<&LanguageEntry> {
        self.entries.iter().find(|e| e.display_name == name)
    }

    pub fn resolve(&self, name: &str) -> &LanguageEntry {
        self.get(name).unwrap_or_else(|| self.default_entry())
    }

    pub fn locale_code(&self, name: &str) -> &str {
        &self.resolve(name).locale_code
    }

    pub fn prompt_label(&self, name: &str) -> &str {
        &self.resolve(name).prompt_label
    }

    pub fn fallback_question(&self, name: &str) -> &str {
        self.resolve(name)
            .fallback_question
            .as_deref()
            .or(self.default_entry().fallback_question.as_deref())
            .unwrap_or_default()
    }

    pub fn fallback_questions(&self, name: &str) -> &[String] {
        self.resolve(name)
            .fallback_questions
            .as_deref()
            .or(self.default_entry().fallback_questions.as_deref())
            .unwrap_or_default()
    }
}
