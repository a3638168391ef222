//! Game server container discovery and cleanliness checks.

use crate::lists::CleanupLists;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the subdirectory holding a container's deletable runtime state.
pub const SERVER_FILES_DIR: &str = "server_files";

/// One game server container, identified by its directory name under the
/// base path. Holds no filesystem state of its own; every query hits the
/// filesystem when asked.
#[derive(Debug, Clone)]
pub struct Container {
    name: String,
    path: PathBuf,
}

impl Container {
    pub fn new(base: &Path, name: &str) -> Self {
        Container {
            name: name.to_string(),
            path: base.join(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the container's server_files directory.
    pub fn server_files(&self) -> PathBuf {
        self.path.join(SERVER_FILES_DIR)
    }

    /// Whether the container directory itself exists.
    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    /// Whether the container has a server_files directory.
    pub fn has_server_files(&self) -> bool {
        self.server_files().is_dir()
    }

    /// Check if the container's server_files directory is clean: every entry
    /// directly inside it (files and directories alike, non-recursive) is
    /// named in the skip-list. An empty directory is clean.
    ///
    /// Errors if server_files is missing or unreadable; callers are expected
    /// to have verified existence first.
    pub fn is_clean(&self, lists: &CleanupLists) -> Result<bool> {
        let server_files = self.server_files();
        let entries = fs::read_dir(&server_files)
            .with_context(|| format!("Failed to read {}", server_files.display()))?;

        for entry in entries {
            let entry = entry
                .with_context(|| format!("Failed to read entry in {}", server_files.display()))?;
            if !lists.is_skip_file(&entry.file_name()) {
                return Ok(false);
            }
        }

        Ok(true)
    }
}

/// List the names of all directories under `base` that are supposed to be
/// game server containers, in directory-listing order.
///
/// Immediate subdirectories only; names on the denylist and non-directory
/// entries are left out. Symlinks to directories count as directories.
/// Errors if `base` cannot be listed.
pub fn discover_containers(base: &Path, lists: &CleanupLists) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(base).with_context(|| format!("Failed to list {}", base.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", base.display()))?;

        if !entry.path().is_dir() {
            continue;
        }

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(name) => {
                eprintln!("Warning: Skipping non-UTF-8 directory name {:?}", name);
                continue;
            }
        };

        if !lists.is_not_gsc(&name) {
            names.push(name);
        }
    }

    Ok(names)
}

/// Format the `[name]` tag that prefixes per-container status lines, padded
/// to a 15-character column so the messages line up.
pub fn gsc_tag(name: &str) -> String {
    format!("{:<15}", format!("[{name}]"))
}
