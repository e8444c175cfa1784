use std::collections::HashSet;

use serde_json::Value;

use super::extract::UsedKeyReference;

/// Walk `tree` along the dot-separated `key_path`.
///
/// Every segment must be present in the current mapping; the value it leads
/// to may itself be a mapping. Array elements are addressed by index.
pub fn resolve_key_path<'a>(tree: &'a Value, key_path: &str) -> Option<&'a Value> {
    let mut current = tree;
    for segment in key_path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(array_index(segment)?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Canonical decimal index only: `"0"`, `"12"`, but not `"01"` or `"+1"`.
fn array_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical { segment.parse().ok() } else { None }
}

/// Keys of `namespace` that do not resolve in `tree`, in input order.
///
/// An unloaded namespace (`tree` is `None`) behaves like an empty one: every
/// key of that namespace is missing.
pub fn find_missing_keys(
    keys: &[UsedKeyReference],
    namespace: &str,
    tree: Option<&Value>,
) -> Vec<String> {
    keys.iter()
        .filter(|key| key.namespace == namespace)
        .filter(|key| tree.and_then(|t| resolve_key_path(t, &key.key_path)).is_none())
        .map(UsedKeyReference::id)
        .collect()
}

/// Leaf keys of `tree` that no used key of `namespace` reaches.
///
/// A leaf counts as used when the key itself or any of its ancestors is
/// referenced, since looking up an ancestor pulls in the whole subtree. A
/// string array leaf also counts when one of its elements is referenced by
/// index.
pub fn find_unused_keys(keys: &[UsedKeyReference], namespace: &str, tree: &Value) -> Vec<String> {
    let used: HashSet<&str> = keys
        .iter()
        .filter(|key| key.namespace == namespace)
        .map(|key| key.key_path.as_str())
        .collect();

    let mut leaves = Vec::new();
    collect_leaf_paths(tree, String::new(), &mut leaves);

    leaves
        .into_iter()
        .filter(|leaf| !is_covered(leaf, &used))
        .map(|leaf| UsedKeyReference::new(namespace, leaf).id())
        .collect()
}

fn is_covered(leaf: &str, used: &HashSet<&str>) -> bool {
    if used.contains(leaf) {
        return true;
    }
    leaf.match_indices('.')
        .any(|(idx, _)| used.contains(&leaf[..idx]))
        || used.iter().any(|key| {
            key.strip_prefix(leaf)
                .is_some_and(|rest| rest.starts_with('.'))
        })
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn collect_leaf_paths(value: &Value, prefix: String, result: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                collect_leaf_paths(val, join_key(&prefix, key), result);
            }
        }
        Value::Array(arr) => {
            if arr.is_empty() {
                return;
            }
            // String arrays are looked up as a whole; other arrays by index.
            let is_string_array = arr.iter().all(|v| matches!(v, Value::String(_)));
            if is_string_array && !prefix.is_empty() {
                result.push(prefix);
            } else {
                for (index, val) in arr.iter().enumerate() {
                    collect_leaf_paths(val, join_key(&prefix, &index.to_string()), result);
                }
            }
        }
        _ => {
            if !prefix.is_empty() {
                result.push(prefix);
            }
        }
    }
}
