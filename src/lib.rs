//! Repokit - release and i18n tooling for multi-package web projects
//!
//! Repokit is a CLI tool and library with two independent utilities:
//! bumping the version of several `package.json` manifests in lockstep, and
//! auditing a frontend source tree for translation keys that are missing from
//! the per-language, per-namespace JSON resource files.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, output)
//! - `config`: Configuration file loading and parsing
//! - `translations`: Translation audit pipeline (scan, extract, load, compare, write)
//! - `utils`: Shared utility functions
//! - `version`: Manifest reading/writing and semver increments

pub mod cli;
pub mod config;
pub mod translations;
pub mod utils;
pub mod version;
