// ============================================================
// Layer 3 — Core Traits
// ============================================================
// The driver only needs "give me the corpus for this prefix".
// CorpusScanner is the filesystem implementation; tests plug
// in in-memory sources to exercise the driver on its own.

use crate::domain::corpus::ScanOutcome;
use crate::error::Result;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Anything that can produce the corpus for one filename prefix.
///
/// Implementations:
///   - CorpusScanner → walks a directory tree of .txt files
pub trait CorpusSource {
    fn collect(&self, prefix: char) -> Result<ScanOutcome>;
}
