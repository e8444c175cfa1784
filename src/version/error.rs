use std::path::PathBuf;

/// Errors raised while bumping package versions. All of them abort the batch.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// The bump class argument is not one of `patch`, `minor`, `major`.
    #[error("unknown bump class '{0}' (expected one of: patch, minor, major)")]
    UnknownBumpClass(String),

    /// No `package.json` in the configured directory.
    #[error("manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    /// The manifest exists but could not be read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The manifest is not valid JSON.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The manifest has no string `version` field.
    #[error("{} has no string \"version\" field", .0.display())]
    MissingVersion(PathBuf),

    /// Invalid semver version string.
    #[error("invalid version '{version}': {source}")]
    InvalidVersion {
        version: String,
        source: semver::Error,
    },
}

pub type Result<T> = std::result::Result<T, VersionError>;
