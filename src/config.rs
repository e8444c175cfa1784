use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".repokitrc.json";

/// Name of the manifest file looked up in every package directory.
pub const MANIFEST_FILE_NAME: &str = "package.json";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub bump: BumpConfig,
    #[serde(default)]
    pub translations: TranslationConfig,
}

/// Settings for `repokit bump`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BumpConfig {
    /// Directories holding a `package.json`, bumped in this order.
    #[serde(default = "default_package_dirs")]
    pub package_dirs: Vec<String>,
}

/// Settings for `repokit check`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationConfig {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// File name suffixes (without the dot) scanned for translation calls.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_locales_root")]
    pub locales_root: String,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default = "default_namespaces")]
    pub namespaces: Vec<String>,
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_package_dirs() -> Vec<String> {
    [".", "frontend", "backend"].map(String::from).to_vec()
}

fn default_source_root() -> String {
    "frontend/src".to_string()
}

fn default_extensions() -> Vec<String> {
    ["tsx", "ts"].map(String::from).to_vec()
}

fn default_locales_root() -> String {
    "frontend/src/locales".to_string()
}

fn default_languages() -> Vec<String> {
    ["en", "fi", "sv"].map(String::from).to_vec()
}

fn default_namespaces() -> Vec<String> {
    ["common", "admin", "student", "teacher", "counselor", "noUser"]
        .map(String::from)
        .to_vec()
}

fn default_output() -> String {
    "translationCheckResult/translationResults.js".to_string()
}

impl Default for BumpConfig {
    fn default() -> Self {
        Self {
            package_dirs: default_package_dirs(),
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            extensions: default_extensions(),
            ignores: Vec::new(),
            locales_root: default_locales_root(),
            languages: default_languages(),
            namespaces: default_namespaces(),
            output: default_output(),
        }
    }
}

impl TranslationConfig {
    /// Expected resource file for one language and namespace:
    /// `<localesRoot>/<lang>/<namespace>.json`.
    pub fn resource_path(&self, root: &Path, language: &str, namespace: &str) -> PathBuf {
        join_relative(root, &self.locales_root)
            .join(language)
            .join(format!("{}.json", namespace))
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid, or if
    /// the language or namespace lists are empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.translations.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.translations.languages.is_empty() {
            bail!("'languages' must list at least one language code");
        }
        if self.translations.namespaces.is_empty() {
            bail!("'namespaces' must list at least one namespace");
        }
        if self.translations.extensions.is_empty() {
            bail!("'extensions' must list at least one file suffix");
        }

        Ok(())
    }
}

/// Join a configured relative path onto `root`, dropping `.` components so
/// that `"."` resolves to `root` itself.
pub fn join_relative(root: &Path, relative: impl AsRef<Path>) -> PathBuf {
    relative
        .as_ref()
        .components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .fold(root.to_path_buf(), |acc, c| acc.join(c))
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory that relative config paths resolve against.
    pub root: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult { config, root })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
        }),
    }
}
