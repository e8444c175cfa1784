//! Translation auditing.
//!
//! The pipeline runs in a single pass:
//!
//! 1. `walker`: collect source files under the source root
//! 2. `extract`: pull `t('ns:key')` references out of each file, dedup them
//! 3. `resources`: load every language/namespace resource file
//! 4. `missing`: resolve each used key against its namespace tree
//! 5. `results`: assemble the report and write the generated module
//!
//! Problems with individual resource files are collected as warnings; only
//! failures reading the source tree are fatal.

pub mod extract;
pub mod missing;
pub mod resources;
pub mod results;
pub mod walker;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

pub use extract::{DEFAULT_NAMESPACE, UsedKeyReference, dedup_keys, extract_keys};
pub use missing::{find_missing_keys, find_unused_keys, resolve_key_path};
pub use resources::{LanguageResources, ResourceWarning, load_language};
pub use results::{AuditReport, LanguageFindings};

use crate::config::{TranslationConfig, join_relative};

#[derive(Debug, Clone, Copy, Default)]
pub struct AuditOptions {
    /// Also report resource keys that no source file references.
    pub include_unused: bool,
}

#[derive(Debug)]
pub struct AuditResult {
    pub report: AuditReport,
    /// Unique keys found in source, in discovery order.
    pub used_keys: Vec<UsedKeyReference>,
    pub source_files_checked: usize,
    pub warnings: Vec<ResourceWarning>,
    /// Where the report is written.
    pub output_path: PathBuf,
}

/// Scan the configured source tree and collect unique key references.
pub fn collect_used_keys(
    root: &Path,
    config: &TranslationConfig,
) -> Result<(Vec<UsedKeyReference>, usize)> {
    let source_root = join_relative(root, &config.source_root);
    let ignores = walker::compile_ignores(&config.ignores)?;
    let files = walker::walk_source_files(&source_root, &config.extensions, &ignores, root)?;

    let mut references = Vec::new();
    for file in &files {
        let bytes = fs::read(file)
            .with_context(|| format!("Failed to read source file: {}", file.display()))?;
        references.extend(extract_keys(&String::from_utf8_lossy(&bytes)));
    }

    Ok((dedup_keys(references), files.len()))
}

/// Compare `used_keys` against already loaded resources.
///
/// Pure: no filesystem access, so callers can feed in-memory trees.
pub fn build_report(
    used_keys: &[UsedKeyReference],
    languages: &[LanguageResources],
    namespaces: &[String],
    options: AuditOptions,
) -> AuditReport {
    let languages = languages
        .iter()
        .map(|resources| {
            let mut findings = LanguageFindings::new(resources.language.as_str());
            for namespace in namespaces {
                let tree = resources.get(namespace);
                findings.add_missing(namespace, find_missing_keys(used_keys, namespace, tree));
                if options.include_unused
                    && let Some(tree) = tree
                {
                    findings.add_unused(namespace, find_unused_keys(used_keys, namespace, tree));
                }
            }
            findings
        })
        .collect();

    AuditReport {
        languages,
        include_unused: options.include_unused,
    }
}

/// Run the whole audit without writing the report.
pub fn audit(root: &Path, config: &TranslationConfig, options: AuditOptions) -> Result<AuditResult> {
    let (used_keys, source_files_checked) = collect_used_keys(root, config)?;

    let mut warnings = Vec::new();
    let mut languages = Vec::with_capacity(config.languages.len());
    for language in &config.languages {
        let loaded = load_language(root, config, language);
        warnings.extend(loaded.warnings);
        languages.push(loaded.resources);
    }

    let report = build_report(&used_keys, &languages, &config.namespaces, options);

    Ok(AuditResult {
        report,
        used_keys,
        source_files_checked,
        warnings,
        output_path: join_relative(root, &config.output),
    })
}
