//! Common utility functions shared across the codebase.

use std::path::Path;

/// Display `path` relative to `base` when it lies inside it.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use repokit::utils::display_path;
///
/// assert_eq!(display_path(Path::new("/repo/frontend/package.json"), Path::new("/repo")), "frontend/package.json");
/// assert_eq!(display_path(Path::new("/elsewhere/package.json"), Path::new("/repo")), "/elsewhere/package.json");
/// ```
pub fn display_path(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    if relative.as_os_str().is_empty() {
        ".".to_string()
    } else {
        relative.display().to_string()
    }
}

/// Pick the singular or plural form of a noun for `count`.
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
