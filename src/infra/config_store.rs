// ============================================================
// Layer 6 — Config Store
// ============================================================
// Loads and saves BuildConfig as pretty JSON so a run can be
// reproduced from a file instead of a long command line.
//
// Example config.json:
//   {
//     "corpus_dir": "data/op_spam_v1.4",
//     "output_dir": "data",
//     "labels": [
//       { "name": "deceptive", "prefix": "d", "artifact": "berted_deception.bin" },
//       { "name": "truthful",  "prefix": "t", "artifact": "berted_truthful.bin" }
//     ],
//     "policy": "strict"
//   }

use std::{fs, path::Path};

use crate::application::build_use_case::BuildConfig;
use crate::error::{PipelineError, Result};

/// Read and validate a BuildConfig. Empty label lists and
/// labels sharing an artifact file are rejected.
pub fn load_config(path: &Path) -> Result<BuildConfig> {
    let json = fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))?;
    let cfg: BuildConfig = serde_json::from_str(&json).map_err(|source| PipelineError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    cfg.validate().map_err(|reason| PipelineError::InvalidConfig {
        path: path.to_path_buf(),
        reason,
    })?;
    tracing::debug!("Loaded build config from '{}'", path.display());
    Ok(cfg)
}

/// Write `cfg` as pretty JSON, replacing any existing file.
/// Backs `build --write-config`.
pub fn save_config(path: &Path, cfg: &BuildConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(cfg).map_err(|source| PipelineError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|e| PipelineError::io(path, e))?;
    tracing::info!("Saved build config to '{}'", path.display());
    Ok(())
}
