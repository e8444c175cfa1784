use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::WalkDir;

/// Collect every source file under `source_root` whose name ends in one of
/// `extensions`.
///
/// Symlinks are followed; `walkdir` reports a link cycle as an error, which
/// is returned like any other filesystem error. Entries are visited in file
/// name order so repeated runs see the same sequence.
///
/// `ignores` are matched against the path relative to `base_dir`.
pub fn walk_source_files(
    source_root: &Path,
    extensions: &[String],
    ignores: &[Pattern],
    base_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let suffixes: Vec<String> = extensions
        .iter()
        .map(|ext| format!(".{}", ext.trim_start_matches('.')))
        .collect();

    let mut files = Vec::new();

    for entry in WalkDir::new(source_root)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry
            .with_context(|| format!("Failed to walk source tree: {}", source_root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_source_file(path, &suffixes) {
            continue;
        }

        let relative = path.strip_prefix(base_dir).unwrap_or(path);
        let relative_str = relative.to_string_lossy();
        if ignores.iter().any(|p| p.matches(&relative_str)) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    Ok(files)
}

fn is_source_file(path: &Path, suffixes: &[String]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| suffixes.iter().any(|suffix| name.ends_with(suffix.as_str())))
}

/// Compile `ignores` glob patterns.
pub fn compile_ignores(ignores: &[String]) -> Result<Vec<Pattern>> {
    ignores
        .iter()
        .map(|p| {
            Pattern::new(p)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
        })
        .collect()
}
