use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::IconError;
use crate::favicon::Artifact;

/// Write `bytes` to `path`, creating the parent directory if needed.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<(), IconError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| IconError::Write {
            path: parent.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    fs::write(path, bytes).map_err(|e| IconError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}

/// Write every artifact into `dir`, creating it if it doesn't exist.
///
/// Returns the written paths in artifact order. Stops at the first failure.
pub fn write_artifacts(dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, IconError> {
    fs::create_dir_all(dir).map_err(|e| IconError::Write {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = dir.join(&artifact.name);
        write_file(&path, &artifact.bytes)?;
        written.push(path);
    }
    Ok(written)
}
