// ============================================================
// Layer 4 — Corpus Scanner
// ============================================================
// Walks the corpus root to any depth and collects the trimmed
// text of every file the prefix filter accepts.
//
// Expected op_spam layout (not enforced):
//
//   op_spam_v1.4/
//     negative_polarity/
//       deceptive_from_MTurk/fold1..fold5/d_*.txt
//       truthful_from_Web/fold1..fold5/t_*.txt
//     positive_polarity/
//       ...
//
// Entries are visited in file-name order inside each directory,
// so two runs over the same tree give the same corpus order on
// every platform.
//
// Failure handling depends on ScanPolicy:
//   Strict          — first unreadable or non-UTF-8 file aborts
//   SkipUnreadable  — such files are logged and reported, the
//                     scan continues
// A failure walking the tree (missing root included) always
// aborts.
//
// Text is read the way a text-mode reader sees it: CRLF and
// lone CR become LF before the edges are trimmed.
//
// Reference: walkdir crate documentation
//            Rust Book §9 (Error Handling)

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::{DirEntry, WalkDir};

use crate::data::filter::PrefixFilter;
use crate::domain::corpus::ScanOutcome;
use crate::domain::traits::CorpusSource;
use crate::error::{PipelineError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPolicy {
    #[default]
    Strict,
    SkipUnreadable,
}

/// Walks one corpus root. The same scanner serves every label.
pub struct CorpusScanner {
    root:   PathBuf,
    policy: ScanPolicy,
}

impl CorpusScanner {
    /// Scanner rooted at `root` with the strict policy.
    /// The root is not checked until the first scan.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root:   root.into(),
            policy: ScanPolicy::default(),
        }
    }

    /// Choose what a per-file failure does to the scan
    pub fn with_policy(mut self, policy: ScanPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Collect the trimmed text of every file `filter` accepts,
    /// in sorted walk order.
    pub fn scan(&self, filter: &PrefixFilter) -> Result<ScanOutcome> {
        let mut outcome = ScanOutcome::default();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry?;
            if !is_file_candidate(&entry) || !filter.matches_path(entry.path()) {
                continue;
            }

            match read_document(entry.path()) {
                Ok(text) => {
                    tracing::debug!("Read '{}' ({} chars)", entry.path().display(), text.len());
                    outcome.corpus.push(text);
                }
                Err(e) if self.policy == ScanPolicy::SkipUnreadable && e.is_per_file() => {
                    tracing::warn!("Skipping {}", e);
                    outcome.skipped.push(entry.into_path());
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            "Prefix '{}': {} documents under '{}' ({} skipped)",
            filter.prefix(),
            outcome.corpus.len(),
            self.root.display(),
            outcome.skipped.len()
        );
        Ok(outcome)
    }
}

impl CorpusSource for CorpusScanner {
    fn collect(&self, prefix: char) -> Result<ScanOutcome> {
        self.scan(&PrefixFilter::new(prefix))
    }
}

/// Regular files and every symlink that does not point at a
/// directory. Dangling links are kept so reading them fails
/// like any other unreadable file.
fn is_file_candidate(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        return !entry.path().is_dir();
    }
    entry.file_type().is_file()
}

/// Read one file as UTF-8, normalise line endings to `\n` and
/// trim surrounding whitespace.
/// The handle is closed before this returns.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| PipelineError::io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|source| PipelineError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    Ok(text.trim_matches(is_strip_char).to_string())
}

/// Unicode whitespace plus the ASCII file/group/record/unit
/// separators (0x1C..=0x1F), which text-mode strip also removes.
fn is_strip_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
