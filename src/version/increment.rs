use std::{fmt, str::FromStr};

use semver::{BuildMetadata, Prerelease, Version};

use super::error::{Result, VersionError};

/// Granularity of a version bump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BumpClass {
    #[default]
    Patch,
    Minor,
    Major,
}

impl BumpClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpClass::Patch => "patch",
            BumpClass::Minor => "minor",
            BumpClass::Major => "major",
        }
    }
}

impl fmt::Display for BumpClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpClass {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "patch" => Ok(BumpClass::Patch),
            "minor" => Ok(BumpClass::Minor),
            "major" => Ok(BumpClass::Major),
            other => Err(VersionError::UnknownBumpClass(other.to_string())),
        }
    }
}

/// Parse a version string, tolerating surrounding whitespace and a leading `v`.
pub fn parse_version(version: &str) -> Result<Version> {
    let trimmed = version.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(trimmed).map_err(|source| VersionError::InvalidVersion {
        version: version.to_string(),
        source,
    })
}

/// Compute the next version for `class`.
///
/// A pre-release of the target version is promoted to its release instead of
/// skipping past it: `1.2.3-rc.1` patches to `1.2.3`, `1.3.0-beta` minors to
/// `1.3.0` and `2.0.0-alpha` majors to `2.0.0`. Build metadata is dropped.
pub fn increment(version: &Version, class: BumpClass) -> Version {
    let mut next = version.clone();
    let is_prerelease = !version.pre.is_empty();

    match class {
        BumpClass::Major => {
            if version.minor != 0 || version.patch != 0 || !is_prerelease {
                next.major += 1;
            }
            next.minor = 0;
            next.patch = 0;
        }
        BumpClass::Minor => {
            if version.patch != 0 || !is_prerelease {
                next.minor += 1;
            }
            next.patch = 0;
        }
        BumpClass::Patch => {
            if !is_prerelease {
                next.patch += 1;
            }
        }
    }

    next.pre = Prerelease::EMPTY;
    next.build = BuildMetadata::EMPTY;
    next
}

/// Parse `version` and increment it, returning the new version as a string.
pub fn increment_str(version: &str, class: BumpClass) -> Result<String> {
    let parsed = parse_version(version)?;
    Ok(increment(&parsed, class).to_string())
}
