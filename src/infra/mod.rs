// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches disk on the output side:
//
//   artifact.rs     — bincode writer/reader for corpora
//   config_store.rs — BuildConfig as JSON

/// Corpus artifact serialization
pub mod artifact;

/// Build configuration file loading and saving
pub mod config_store;
