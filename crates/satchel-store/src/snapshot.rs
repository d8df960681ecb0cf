use crate::error::{Result, StoreError};
use satchel_core::{AddressBook, NotesBook};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// The complete persisted state: both books in one self-describing JSON
/// document. Round-trip fidelity is the contract; every field value and
/// collection membership survives save + load exactly.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub contacts: AddressBook,
    pub notes: NotesBook,
}

/// Loads the snapshot at `path`. A missing file yields empty books; an
/// unreadable or malformed file is an error, never a silent reset.
pub fn load(path: &Path) -> Result<Snapshot> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Snapshot::default()),
        Err(err) => return Err(err.into()),
    };
    serde_json::from_slice(&bytes).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Saves the snapshot by writing a temporary sibling file and renaming it
/// over `path`, so an interrupted save never corrupts the previous state.
pub fn save(path: &Path, snapshot: &Snapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = path.with_extension("json.tmp");
    let bytes = serde_json::to_vec_pretty(snapshot).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
