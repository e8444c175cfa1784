use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::config::TranslationConfig;

/// A resource file that exists but could not be loaded.
#[derive(Debug, Clone)]
pub struct ResourceWarning {
    pub language: String,
    pub namespace: String,
    /// Full error chain, including the file path.
    pub error: String,
}

/// Loaded namespaces for one language. Namespaces whose file was missing or
/// broken are simply absent.
#[derive(Debug, Default)]
pub struct LanguageResources {
    pub language: String,
    pub namespaces: HashMap<String, Value>,
}

impl LanguageResources {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            namespaces: HashMap::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>, tree: Value) -> Self {
        self.namespaces.insert(namespace.into(), tree);
        self
    }

    pub fn get(&self, namespace: &str) -> Option<&Value> {
        self.namespaces.get(namespace)
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct LoadResourcesResult {
    pub resources: LanguageResources,
    pub warnings: Vec<ResourceWarning>,
}

pub fn parse_resource_file(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    let tree: Value = serde_json::from_str(content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;
    Ok(tree)
}

/// Load every configured namespace of `language`.
pub fn load_language(root: &Path, config: &TranslationConfig, language: &str) -> LoadResourcesResult {
    let mut result = LoadResourcesResult {
        resources: LanguageResources::new(language),
        warnings: Vec::new(),
    };

    for namespace in &config.namespaces {
        let path = config.resource_path(root, language, namespace);
        if !path.exists() {
            continue;
        }

        match parse_resource_file(&path) {
            Ok(tree) => {
                result.resources.namespaces.insert(namespace.clone(), tree);
            }
            Err(e) => {
                result.warnings.push(ResourceWarning {
                    language: language.to_string(),
                    namespace: namespace.clone(),
                    error: format!("{:#}", e),
                });
            }
        }
    }

    result
}
