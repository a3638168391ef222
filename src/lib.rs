//! gsclean - Game Server Container Cleaner
//!
//! gsclean resets game server containers by deleting everything inside their
//! `server_files` directories while preserving allowlisted placeholder files
//! (`.gitignore`, `.gitkeep`). A game server container is a directory holding
//! one isolated game-server instance; `server_files` carries the live
//! configs, saves and binaries that a reset wipes.
//!
//! ## Architecture
//!
//! - `lists`: the denylist/skip-list configuration, with defaults embedded
//!   from lists.toml
//! - `containers`: container discovery under a base path and the
//!   clean-already check
//! - `cleaner`: the bottom-up recursive remover
//!
//! The binary wires these together: resolve the target containers, report
//! and skip the missing or already-clean ones, confirm interactively when
//! asked, then clean.

pub mod cleaner;
pub mod containers;
pub mod lists;

// Re-export commonly used items
pub use cleaner::{clean_server_files, CleanStats};
pub use containers::{discover_containers, gsc_tag, Container, SERVER_FILES_DIR};
pub use lists::CleanupLists;
