//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and render defaults so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "users-list";

/// Crate version, as recorded in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was built for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.users-list.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".users-list.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "users-list";

/// Extension of files written by the snapshot store.
pub const SNAPSHOT_EXTENSION: &str = "snap";

/// Default directory for stored snapshots, relative to the working directory.
pub const DEFAULT_SNAPSHOT_DIR: &str = "tests/snapshots";

/// Class attached to every user row unless configured otherwise.
pub const DEFAULT_ROW_CLASS: &str = "card card-body bg-light";

/// Largest accepted HTML indent width.
pub const MAX_INDENT: usize = 16;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_HEADING: &str = "USERS_LIST_HEADING";
pub const ENV_FORMAT: &str = "USERS_LIST_FORMAT";
pub const ENV_INDENT: &str = "USERS_LIST_INDENT";
pub const ENV_SNAPSHOT_DIR: &str = "USERS_LIST_SNAPSHOT_DIR";
pub const ENV_UPDATE_SNAPSHOTS: &str = "USERS_LIST_UPDATE_SNAPSHOTS";
