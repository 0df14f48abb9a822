//! JSON file user store
//!
//! Persists the user list as a pretty-printed JSON array (4-space indent,
//! non-ASCII written verbatim). Saves go through a temp file in the target
//! directory that is renamed over the original, so readers never observe a
//! half-written file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::domain::result::{Error, Result, StorageErrorKind};
use crate::domain::UserRecord;
use crate::ports::UserStore;

/// Default file name inside the data directory
pub const USERS_FILE: &str = "users.json";

/// Credential store backed by a single JSON document
pub struct JsonFileUserStore {
    path: PathBuf,
}

impl JsonFileUserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing JSON document
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserStore for JsonFileUserStore {
    fn load(&self) -> Result<Vec<UserRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::storage(
                    StorageErrorKind::ReadFailed,
                    format!("{}: {}", self.path.display(), e),
                ))
            }
        };

        serde_json::from_str(&content).map_err(|e| {
            Error::storage(
                StorageErrorKind::Malformed,
                format!("{}: {}", self.path.display(), e),
            )
        })
    }

    fn save(&self, records: &[UserRecord]) -> Result<()> {
        let bytes = to_pretty_json(records).map_err(|e| {
            Error::storage(StorageErrorKind::WriteFailed, e.to_string())
        })?;

        write_atomic(&self.path, &bytes).map_err(|e| {
            Error::storage(
                StorageErrorKind::WriteFailed,
                format!("{}: {}", self.path.display(), e),
            )
        })
    }
}

/// Serialize with a 4-space indent
fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `bytes` to `path` via a sibling temp file and rename
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;

    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
