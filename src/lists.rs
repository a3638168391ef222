//! Denylist and skip-list configuration loaded from lists.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::ffi::OsStr;

// Embed the TOML file directly in the binary at compile time
const DEFAULT_LISTS_TOML: &str = include_str!("../lists.toml");

/// The two name sets steering a run: directories that are never game server
/// containers, and placeholder files that survive cleaning.
///
/// Built once at startup and passed by reference into discovery and the
/// remover; there is no global state to override.
#[derive(Debug, Clone)]
pub struct CleanupLists {
    not_gsc_dirs: HashSet<String>,
    skip_files: HashSet<String>,
}

/// Structure to deserialize the lists from TOML
#[derive(Debug, Deserialize)]
struct ListsFile {
    containers: ContainersSection,
    placeholders: PlaceholdersSection,
}

#[derive(Debug, Deserialize)]
struct ContainersSection {
    deny: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PlaceholdersSection {
    keep: Vec<String>,
}

impl CleanupLists {
    /// Build lists from arbitrary name sets.
    pub fn new(
        not_gsc_dirs: impl IntoIterator<Item = impl Into<String>>,
        skip_files: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        CleanupLists {
            not_gsc_dirs: not_gsc_dirs.into_iter().map(Into::into).collect(),
            skip_files: skip_files.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse the embedded lists.toml into the default lists.
    pub fn load_defaults() -> Result<Self> {
        let file: ListsFile =
            toml::from_str(DEFAULT_LISTS_TOML).context("Failed to parse lists TOML file")?;

        Ok(CleanupLists::new(
            file.containers.deny,
            file.placeholders.keep,
        ))
    }

    /// True if a top-level directory name must never be treated as a game
    /// server container.
    pub fn is_not_gsc(&self, name: &str) -> bool {
        self.not_gsc_dirs.contains(name)
    }

    /// True if a filename is a placeholder that cleaning leaves in place.
    pub fn is_skip_file(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.skip_files.contains(n))
    }
}
