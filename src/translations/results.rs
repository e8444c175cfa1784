//! The generated results module written by `repokit check`.
//!
//! Output shape:
//!
//! ```text
//! module.exports = {
//!   "missing": {
//!     "en": {},
//!     "fi": { "admin": ["admin:users.title"] }
//!   }
//! };
//! ```
//!
//! Every configured language is present; namespaces without findings are left
//! out. The optional `unused` section follows the same rules.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

/// Findings for one language: `(namespace, key ids)` pairs in configured
/// namespace order, never holding an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageFindings {
    pub language: String,
    pub missing: Vec<(String, Vec<String>)>,
    pub unused: Vec<(String, Vec<String>)>,
}

impl LanguageFindings {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Default::default()
        }
    }

    pub fn add_missing(&mut self, namespace: &str, keys: Vec<String>) {
        if !keys.is_empty() {
            self.missing.push((namespace.to_string(), keys));
        }
    }

    pub fn add_unused(&mut self, namespace: &str, keys: Vec<String>) {
        if !keys.is_empty() {
            self.unused.push((namespace.to_string(), keys));
        }
    }

    pub fn missing_count(&self) -> usize {
        self.missing.iter().map(|(_, keys)| keys.len()).sum()
    }

    pub fn unused_count(&self) -> usize {
        self.unused.iter().map(|(_, keys)| keys.len()).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    pub languages: Vec<LanguageFindings>,
    /// Whether the `unused` section is part of the output.
    pub include_unused: bool,
}

impl AuditReport {
    pub fn missing_count(&self) -> usize {
        self.languages.iter().map(LanguageFindings::missing_count).sum()
    }

    pub fn unused_count(&self) -> usize {
        self.languages.iter().map(LanguageFindings::unused_count).sum()
    }

    pub fn to_json(&self) -> Value {
        let mut root = Map::new();
        root.insert(
            "missing".to_string(),
            section(&self.languages, |l| &l.missing),
        );
        if self.include_unused {
            root.insert(
                "unused".to_string(),
                section(&self.languages, |l| &l.unused),
            );
        }
        Value::Object(root)
    }

    /// Render as a CommonJS module exporting the report.
    pub fn render_module(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(&self.to_json())
            .context("Failed to serialize translation results")?;
        Ok(format!("module.exports = {};", json))
    }

    /// Write the module to `path`, creating its directory and replacing any
    /// previous file.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(path, self.render_module()?)
            .with_context(|| format!("Failed to write results: {}", path.display()))
    }
}

fn section<F>(languages: &[LanguageFindings], select: F) -> Value
where
    F: Fn(&LanguageFindings) -> &Vec<(String, Vec<String>)>,
{
    let mut by_language = Map::new();
    for findings in languages {
        let mut by_namespace = Map::new();
        for (namespace, keys) in select(findings) {
            by_namespace.insert(
                namespace.clone(),
                Value::Array(keys.iter().cloned().map(Value::String).collect()),
            );
        }
        by_language.insert(findings.language.clone(), Value::Object(by_namespace));
    }
    Value::Object(by_language)
}
