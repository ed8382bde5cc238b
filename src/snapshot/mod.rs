//! Golden-output snapshots.
//!
//! A snapshot is the serialized rendering of a component stored under
//! `<dir>/<name>.snap`. Checking compares current output with the stored
//! file byte for byte; the [`UpdateMode`] decides when the store may write.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::SNAPSHOT_EXTENSION;

/// Errors from the snapshot store.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("invalid snapshot name '{0}': use letters, digits, '_', '-' or '.', not starting with '.'")]
    InvalidName(String),

    #[error("snapshot '{name}' does not exist at {path} and updates are disabled")]
    Missing { name: String, path: PathBuf },

    #[error(
        "snapshot '{name}' does not match {path} at line {line}\n  expected: {expected}\n    actual: {actual}"
    )]
    Mismatch {
        name: String,
        path: PathBuf,
        line: usize,
        expected: String,
        actual: String,
    },

    #[error("failed to read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write snapshot {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// When the store may write snapshot files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    /// Never write; a missing snapshot is an error.
    Never,
    /// Write snapshots that do not exist yet; never overwrite.
    #[default]
    Missing,
    /// Overwrite any snapshot that differs.
    Always,
}

impl fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateMode::Never => write!(f, "never"),
            UpdateMode::Missing => write!(f, "missing"),
            UpdateMode::Always => write!(f, "always"),
        }
    }
}

impl std::str::FromStr for UpdateMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "never" | "false" | "0" | "no" | "off" => Ok(UpdateMode::Never),
            "missing" | "new" => Ok(UpdateMode::Missing),
            "always" | "true" | "1" | "yes" | "on" => Ok(UpdateMode::Always),
            _ => Err(format!("unknown snapshot update mode: {s}")),
        }
    }
}

/// Result of a successful check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOutcome {
    Matched,
    Created,
    Updated,
}

impl fmt::Display for SnapshotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotOutcome::Matched => write!(f, "matched"),
            SnapshotOutcome::Created => write!(f, "created"),
            SnapshotOutcome::Updated => write!(f, "updated"),
        }
    }
}

/// Directory of stored snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
    mode: UpdateMode,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>, mode: UpdateMode) -> Self {
        Self {
            dir: dir.into(),
            mode,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn mode(&self) -> UpdateMode {
        self.mode
    }

    /// Path of the file backing `name`.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, SnapshotError> {
        validate_name(name)?;
        Ok(self.dir.join(format!("{name}.{SNAPSHOT_EXTENSION}")))
    }

    /// Stored contents of `name`, or `None` if it was never recorded.
    pub fn read(&self, name: &str) -> Result<Option<String>, SnapshotError> {
        let path = self.path_for(name)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SnapshotError::Read { path, source }),
        }
    }

    /// Compare `actual` against the stored snapshot `name`.
    pub fn check(&self, name: &str, actual: &str) -> Result<SnapshotOutcome, SnapshotError> {
        let path = self.path_for(name)?;
        let stored = self.read(name)?;

        match stored {
            Some(expected) if expected == actual => Ok(SnapshotOutcome::Matched),
            Some(expected) => {
                if self.mode == UpdateMode::Always {
                    self.write(&path, actual)?;
                    tracing::info!(name, path = %path.display(), "snapshot updated");
                    return Ok(SnapshotOutcome::Updated);
                }
                let (line, expected, actual) = first_difference(&expected, actual);
                Err(SnapshotError::Mismatch {
                    name: name.to_string(),
                    path,
                    line,
                    expected,
                    actual,
                })
            }
            None if self.mode == UpdateMode::Never => Err(SnapshotError::Missing {
                name: name.to_string(),
                path,
            }),
            None => {
                self.write(&path, actual)?;
                tracing::info!(name, path = %path.display(), "snapshot created");
                Ok(SnapshotOutcome::Created)
            }
        }
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), SnapshotError> {
        let io_err = |source| SnapshotError::Write {
            path: path.to_path_buf(),
            source,
        };
        std::fs::create_dir_all(&self.dir).map_err(io_err)?;
        std::fs::write(path, content).map_err(io_err)
    }
}

fn validate_name(name: &str) -> Result<(), SnapshotError> {
    let valid = !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(SnapshotError::InvalidName(name.to_string()))
    }
}

/// First differing line (1-based) between two texts, with both sides shown
/// as `<missing>` where one text is shorter.
///
/// A difference only in the trailing newline is reported on the line after
/// the last one.
pub fn first_difference(expected: &str, actual: &str) -> (usize, String, String) {
    let mut exp = expected.split('\n');
    let mut act = actual.split('\n');
    let mut line = 1;
    loop {
        match (exp.next(), act.next()) {
            (Some(e), Some(a)) if e == a => line += 1,
            (None, None) => return (line, String::new(), String::new()),
            (e, a) => {
                let show = |s: Option<&str>| s.map_or_else(|| "<missing>".to_string(), |s| format!("{s:?}"));
                return (line, show(e), show(a));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &Path, mode: UpdateMode) -> SnapshotStore {
        SnapshotStore::new(dir.join("snaps"), mode)
    }

    #[test]
    fn creates_missing_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path(), UpdateMode::Missing);

        assert_eq!(store.check("list", "<div></div>").unwrap(), SnapshotOutcome::Created);
        assert_eq!(store.read("list").unwrap().as_deref(), Some("<div></div>"));
        assert_eq!(store.check("list", "<div></div>").unwrap(), SnapshotOutcome::Matched);
    }

    #[test]
    fn mismatch_reports_first_differing_line() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path(), UpdateMode::Missing);
        store.check("list", "<div>\n  <h4>dash</h4>\n</div>\n").unwrap();

        let err = store
            .check("list", "<div>\n  <h4>lily</h4>\n</div>\n")
            .unwrap_err();
        match err {
            SnapshotError::Mismatch { line, expected, actual, .. } => {
                assert_eq!(line, 2);
                assert!(expected.contains("dash"));
                assert!(actual.contains("lily"));
            }
            other => panic!("unexpected error: {other}"),
        }
        // Missing mode never overwrites
        assert!(store.read("list").unwrap().unwrap().contains("dash"));
    }

    #[test]
    fn always_mode_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path(), UpdateMode::Always);
        store.check("list", "old").unwrap();

        assert_eq!(store.check("list", "new").unwrap(), SnapshotOutcome::Updated);
        assert_eq!(store.read("list").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn never_mode_requires_existing_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path(), UpdateMode::Never);

        let err = store.check("list", "x").unwrap_err();
        assert!(matches!(err, SnapshotError::Missing { .. }));
        assert!(!dir.path().join("snaps").exists());
    }

    #[test]
    fn rejects_path_like_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path(), UpdateMode::Missing);
        for name in ["", "../escape", "a/b", ".hidden", "with space"] {
            assert!(
                matches!(store.check(name, "x"), Err(SnapshotError::InvalidName(_))),
                "name {name:?} should be rejected"
            );
        }
        assert!(store.path_for("users_list.v2-empty").is_ok());
    }

    #[test]
    fn path_uses_snap_extension() {
        let store = SnapshotStore::new("golden", UpdateMode::Never);
        assert_eq!(
            store.path_for("users").unwrap(),
            PathBuf::from("golden").join("users.snap")
        );
    }

    #[test]
    fn first_difference_cases() {
        assert_eq!(first_difference("a\nb", "a\nc"), (2, "\"b\"".into(), "\"c\"".into()));
        assert_eq!(first_difference("a\n", "a"), (2, "\"\"".into(), "<missing>".into()));
        assert_eq!(first_difference("same", "same"), (2, String::new(), String::new()));
    }

    #[test]
    fn update_mode_parsing() {
        assert_eq!("never".parse::<UpdateMode>().unwrap(), UpdateMode::Never);
        assert_eq!("TRUE".parse::<UpdateMode>().unwrap(), UpdateMode::Always);
        assert_eq!("0".parse::<UpdateMode>().unwrap(), UpdateMode::Never);
        assert_eq!("missing".parse::<UpdateMode>().unwrap(), UpdateMode::Missing);
        assert!("sometimes".parse::<UpdateMode>().is_err());
        assert_eq!(UpdateMode::Always.to_string(), "always");
    }
}
