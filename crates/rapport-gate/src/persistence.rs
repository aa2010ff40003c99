//! Snapshot files.
//!
//! Each save writes a uniquely named temp file in the target directory,
//! syncs it to disk, and renames it into place. Concurrent saves to one path
//! never share a temp file, and a crash mid-write leaves the previous
//! snapshot intact.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use rapport_core::errors::RapportResult;
use rapport_observability::tracing_setup::events;

use crate::snapshot::GateSnapshot;

/// Write `snapshot` to `path` as JSON.
pub fn save_snapshot(path: &Path, snapshot: &GateSnapshot) -> RapportResult<()> {
    let json = snapshot.to_json()?;
    let dir = parent_dir(path);

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.as_file().sync_all()?;
    // On failure the temp file travels back in the error and is removed on drop.
    tmp.persist(path).map_err(|e| e.error)?;
    sync_dir(dir);

    events::snapshot_saved(snapshot.len(), &path.display().to_string());
    Ok(())
}

/// Read a snapshot from `path`. A missing file is `Ok(None)`.
pub fn load_snapshot(path: &Path) -> RapportResult<Option<GateSnapshot>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    GateSnapshot::from_json(&contents).map(Some)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

// Persist the rename itself. Directories can't be opened for sync on every
// platform, so failure here is not an error.
fn sync_dir(dir: &Path) {
    if let Ok(handle) = File::open(dir) {
        let _ = handle.sync_all();
    }
}
