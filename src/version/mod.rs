//! Lockstep version bumping across several `package.json` manifests.
//!
//! Each configured directory is handled in order: read the manifest,
//! increment its own version, write it back. The first failure stops the
//! batch; manifests already written stay written.

pub mod error;
pub mod increment;
pub mod manifest;

use std::path::{Path, PathBuf};

pub use error::{Result, VersionError};
pub use increment::{BumpClass, increment, increment_str, parse_version};
pub use manifest::Manifest;

use crate::config::{BumpConfig, join_relative};

/// One manifest whose version was (or, in dry-run mode, would be) changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionUpdate {
    pub path: PathBuf,
    pub old_version: String,
    pub new_version: String,
}

/// The manifest that stopped the batch, with its error.
#[derive(Debug)]
pub struct BumpFailure {
    pub dir: PathBuf,
    pub error: VersionError,
}

/// Outcome of a bump run: every update performed before the run ended, and
/// the failure that ended it early, if any.
#[derive(Debug, Default)]
pub struct BumpSummary {
    pub updates: Vec<VersionUpdate>,
    pub failure: Option<BumpFailure>,
    pub is_dry_run: bool,
}

/// Read, increment and (unless `dry_run`) write the manifest in `dir`.
pub fn bump_manifest(dir: &Path, class: BumpClass, dry_run: bool) -> Result<VersionUpdate> {
    let mut manifest = Manifest::read(dir)?;
    let old_version = manifest.version()?.to_string();
    let new_version = increment_str(&old_version, class)?;

    manifest.set_version(&new_version)?;
    if !dry_run {
        manifest.write()?;
    }

    Ok(VersionUpdate {
        path: manifest.path,
        old_version,
        new_version,
    })
}

/// Bump every manifest listed in `config`, resolving directories against `root`.
pub fn bump_all(root: &Path, config: &BumpConfig, class: BumpClass, dry_run: bool) -> BumpSummary {
    let mut summary = BumpSummary {
        is_dry_run: dry_run,
        ..Default::default()
    };

    for dir in &config.package_dirs {
        let dir = join_relative(root, dir);
        match bump_manifest(&dir, class, dry_run) {
            Ok(update) => summary.updates.push(update),
            Err(error) => {
                summary.failure = Some(BumpFailure { dir, error });
                break;
            }
        }
    }

    summary
}
