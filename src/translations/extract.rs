//! Translation call extraction.
//!
//! This is a syntactic scan: a key is only found when it is written as a
//! single string literal directly inside `t(...)`. Keys built at runtime
//! (template interpolation, concatenation, variables) are not seen.

use std::{collections::HashSet, fmt, sync::LazyLock};

use regex::Regex;

/// Namespace assumed when a call site has no `ns:` prefix.
pub const DEFAULT_NAMESPACE: &str = "common";

/// Matches `t('key')`, `t("ns:key")`, `` t(`ns:a.b`) ``.
///
/// Group 1 is the optional namespace, group 2 the key path.
static TRANSLATION_CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"t\(['"`](?:([^:'"`]+):)?([^'"`]+)['"`]\)"#)
        .expect("translation call regex is valid")
});

/// One translation key referenced from source code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UsedKeyReference {
    pub namespace: String,
    pub key_path: String,
}

impl UsedKeyReference {
    pub fn new(namespace: impl Into<String>, key_path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key_path: key_path.into(),
        }
    }

    /// Parse a `namespace:keyPath` identifier. Without a colon the namespace
    /// defaults to `common`.
    pub fn parse(id: &str) -> Self {
        match id.split_once(':') {
            Some((namespace, key_path)) => Self::new(namespace, key_path),
            None => Self::new(DEFAULT_NAMESPACE, id),
        }
    }

    /// The `namespace:keyPath` identifier used in reports.
    pub fn id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for UsedKeyReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key_path)
    }
}

/// Extract every translation key referenced in `content`, in source order.
pub fn extract_keys(content: &str) -> Vec<UsedKeyReference> {
    TRANSLATION_CALL_REGEX
        .captures_iter(content)
        .map(|caps| {
            let namespace = caps.get(1).map_or(DEFAULT_NAMESPACE, |m| m.as_str());
            let key_path = caps.get(2).map_or("", |m| m.as_str());
            UsedKeyReference::new(namespace, key_path)
        })
        .collect()
}

/// Drop repeated references, keeping the first occurrence of each.
pub fn dedup_keys(keys: impl IntoIterator<Item = UsedKeyReference>) -> Vec<UsedKeyReference> {
    let mut seen = HashSet::new();
    keys.into_iter()
        .filter(|key| seen.insert(key.clone()))
        .collect()
}
