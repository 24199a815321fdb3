// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain structs and traits describing what the pipeline
// works with. No filesystem walking, no serialization code.
//
//   Corpus      — the ordered, trimmed documents of one label
//   LabelSpec   — a label name, its filename prefix, and the
//                 artifact file it is written to
//   traits      — the seam between the driver and the scanner

pub mod corpus;

pub mod label;

pub mod traits;
