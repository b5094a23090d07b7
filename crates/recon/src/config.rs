use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::ReconError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CompareConfig {
    pub name: String,
    pub sources: SourcesConfig,
    #[serde(default)]
    pub documents: Option<DocumentsConfig>,
    /// Keyword categories: category name → substring matched
    /// case-insensitively against document identifiers and contents.
    #[serde(default)]
    pub categories: BTreeMap<String, String>,
}

/// The two fixed sources being reconciled.
#[derive(Debug, Deserialize)]
pub struct SourcesConfig {
    pub csv: SourceConfig,
    pub json: SourceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub file: String,
    pub fields: FieldMapping,
}

// ---------------------------------------------------------------------------
// Field mapping
// ---------------------------------------------------------------------------

/// Which raw field holds what. `user` defaults to the key value when not
/// mapped; a missing `count` mapping means an implicit count of 1 per row.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldMapping {
    pub key: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub count: Option<String>,
}

// ---------------------------------------------------------------------------
// Document feed
// ---------------------------------------------------------------------------

/// Classification feed: a JSON list file or a directory scan.
/// Exactly one of the two must be set.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentsConfig {
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub dir: Option<String>,
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl CompareConfig {
    pub fn from_toml(input: &str) -> Result<Self, ReconError> {
        let config: CompareConfig =
            toml::from_str(input).map_err(|e| ReconError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReconError> {
        if self.name.trim().is_empty() {
            return Err(ReconError::ConfigValidation("name must not be empty".into()));
        }

        for (label, source) in [("csv", &self.sources.csv), ("json", &self.sources.json)] {
            if source.fields.key.trim().is_empty() {
                return Err(ReconError::ConfigValidation(format!(
                    "source '{label}': key field must not be empty"
                )));
            }
        }

        if let Some(ref docs) = self.documents {
            match (&docs.file, &docs.dir) {
                (Some(_), Some(_)) => {
                    return Err(ReconError::ConfigValidation(
                        "documents: set either 'file' or 'dir', not both".into(),
                    ));
                }
                (None, None) => {
                    return Err(ReconError::ConfigValidation(
                        "documents: one of 'file' or 'dir' is required".into(),
                    ));
                }
                _ => {}
            }
        }

        for (name, substring) in &self.categories {
            if name.trim().is_empty() {
                return Err(ReconError::ConfigValidation(
                    "category name must not be empty".into(),
                ));
            }
            if substring.trim().is_empty() {
                return Err(ReconError::ConfigValidation(format!(
                    "category '{name}': substring must not be empty"
                )));
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
