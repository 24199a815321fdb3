// ============================================================
// Layer 4 — Data Layer
// ============================================================
// Turns a directory tree into in-memory corpora.
//
//   corpus root
//       │
//       ▼
//   PrefixFilter   → which file names belong to a label
//       │
//       ▼
//   CorpusScanner  → walks the tree, reads and trims each file
//       │
//       ▼
//   Corpus         → handed to the infra layer for writing

/// File-name test for one label
pub mod filter;

/// Recursive directory scan producing a Corpus
pub mod scanner;
