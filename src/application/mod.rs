// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only. Scanning lives in Layer 4,
// writing in Layer 6, printing in Layer 1.

// Scan the corpus and write one artifact per label
pub mod build_use_case;

// Read an artifact back and summarise it
pub mod inspect_use_case;
