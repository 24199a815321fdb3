// ============================================================
// Layer 3 — Label Specification
// ============================================================
// A label is assigned from the outside: whichever prefix filter
// produced a corpus decides its label. LabelSpec ties the
// three things the driver needs together.
//
// op_spam convention:
//   d_hilton_1.txt  → deceptive
//   t_hilton_1.txt  → truthful

use serde::{Deserialize, Serialize};

/// One output class: its name, file-name prefix and artifact file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSpec {
    /// Human-readable name, used in logs and reports
    pub name: String,

    /// First character of every file name in this class (case-sensitive)
    pub prefix: char,

    /// File name of the artifact, relative to the output directory
    pub artifact: String,
}

impl LabelSpec {
    /// Build a label from its three parts
    pub fn new(name: impl Into<String>, prefix: char, artifact: impl Into<String>) -> Self {
        Self {
            name:     name.into(),
            prefix,
            artifact: artifact.into(),
        }
    }

    /// op_spam deceptive reviews: `d*.txt` → `berted_deception.bin`
    pub fn deceptive() -> Self {
        Self::new("deceptive", 'd', "berted_deception.bin")
    }

    /// op_spam truthful reviews: `t*.txt` → `berted_truthful.bin`
    pub fn truthful() -> Self {
        Self::new("truthful", 't', "berted_truthful.bin")
    }
}
