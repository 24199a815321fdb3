// ============================================================
// Layer 6 — Artifact Writer / Reader
// ============================================================
// Persists a corpus as a single bincode blob.
//
// Format (bincode 1.x default options):
//   u64 little-endian element count
//   per string: u64 little-endian byte length, then UTF-8 bytes
//
// A Vec<String> written here can be read back by any bincode
// consumer, or decoded by hand from the layout above.
//
// The destination is created or truncated. Its parent
// directory must already exist: a missing output directory is
// reported as an error rather than created. There is no
// partial-write recovery; a failed write can leave a short
// file behind.

use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::error::{PipelineError, Result};

/// Writes one value to one destination file
pub struct ArtifactWriter {
    path: PathBuf,
}

impl ArtifactWriter {
    /// Writer for `path`; nothing touches disk until `write`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Serialize `value` and write it to the destination path.
    pub fn write<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let file = File::create(&self.path).map_err(|e| PipelineError::io(&self.path, e))?;
        let mut out = BufWriter::new(file);

        bincode::serialize_into(&mut out, value).map_err(|source| PipelineError::Codec {
            path: self.path.clone(),
            source,
        })?;

        // BufWriter swallows flush errors on drop
        out.flush().map_err(|e| PipelineError::io(&self.path, e))?;

        tracing::debug!("Wrote artifact '{}'", self.path.display());
        Ok(())
    }
}

/// Read an artifact back into memory.
pub fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| PipelineError::io(path, e))?;
    bincode::deserialize_from(BufReader::new(file)).map_err(|source| PipelineError::Codec {
        path: path.to_path_buf(),
        source,
    })
}
