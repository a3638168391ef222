//! Recursive removal of server_files contents.

use crate::lists::CleanupLists;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Tally of what one remover invocation deleted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanStats {
    pub files_deleted: u64,
    pub dirs_removed: u64,
    pub bytes_freed: u64,
}

/// Remove all files and subdirectories in the given directory, leaving the
/// directory itself in place.
///
/// The walk is bottom-up, so a directory's contents are fully processed
/// before the directory itself is considered. Files named in the skip-list
/// are left where they are; everything else is deleted permanently. A
/// subdirectory is removed only once it is empty, so a directory still
/// sheltering a preserved placeholder survives, as do its ancestors.
/// Symlinks are removed like files and never followed.
///
/// With `verbose` set, one line is printed per deleted file (before the
/// deletion), per removed directory (after the removal), and per kept
/// non-empty directory.
///
/// The first filesystem error aborts the walk and propagates; the target may
/// then be left partially cleaned.
pub fn clean_server_files(
    target: &Path,
    lists: &CleanupLists,
    verbose: bool,
) -> Result<CleanStats> {
    let mut stats = CleanStats::default();

    for entry in WalkDir::new(target).min_depth(1).contents_first(true) {
        let entry = entry.with_context(|| format!("Failed to walk {}", target.display()))?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            if !dir_is_empty(path)? {
                if verbose {
                    println!("  -- keeping directory {} (not empty)", path.display());
                }
                continue;
            }
            fs::remove_dir(path)
                .with_context(|| format!("Failed to remove directory {}", path.display()))?;
            stats.dirs_removed += 1;
            if verbose {
                println!("  -- deleting directory {}", path.display());
            }
        } else {
            if lists.is_skip_file(entry.file_name()) {
                continue;
            }
            if verbose {
                println!("  -- deleting file {}", path.display());
            }
            // Sample the size first; a vanished file surfaces as a removal error.
            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            fs::remove_file(path)
                .with_context(|| format!("Failed to delete {}", path.display()))?;
            stats.files_deleted += 1;
            stats.bytes_freed += size;
        }
    }

    Ok(stats)
}

fn dir_is_empty(path: &Path) -> Result<bool> {
    let mut entries =
        fs::read_dir(path).with_context(|| format!("Failed to read directory {}", path.display()))?;
    Ok(entries.next().is_none())
}
