use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::Value;

use super::error::{Result, VersionError};
use crate::config::MANIFEST_FILE_NAME;

/// A parsed `package.json`.
///
/// The document is kept as a whole so that every field other than `version`
/// is written back unchanged, in its existing order.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub path: PathBuf,
    document: Value,
}

impl Manifest {
    /// Read the manifest inside `dir`.
    pub fn read(dir: &Path) -> Result<Self> {
        Self::read_file(dir.join(MANIFEST_FILE_NAME))
    }

    pub fn read_file(path: PathBuf) -> Result<Self> {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(VersionError::ManifestNotFound(path));
            }
            Err(source) => return Err(VersionError::Io { path, source }),
        };

        let document: Value = match serde_json::from_str(&content) {
            Ok(document) => document,
            Err(source) => return Err(VersionError::Parse { path, source }),
        };

        Ok(Self { path, document })
    }

    pub fn version(&self) -> Result<&str> {
        self.document
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| VersionError::MissingVersion(self.path.clone()))
    }

    pub fn set_version(&mut self, version: &str) -> Result<()> {
        match self.document.as_object_mut() {
            Some(map) => {
                map.insert("version".to_string(), Value::String(version.to_string()));
                Ok(())
            }
            None => Err(VersionError::MissingVersion(self.path.clone())),
        }
    }

    /// Serialized form: two-space indentation plus a trailing newline.
    pub fn to_json_string(&self) -> String {
        let mut out = serde_json::to_string_pretty(&self.document)
            .unwrap_or_else(|_| self.document.to_string());
        out.push('\n');
        out
    }

    /// Overwrite the manifest file in place.
    pub fn write(&self) -> Result<()> {
        fs::write(&self.path, self.to_json_string()).map_err(|source| VersionError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
