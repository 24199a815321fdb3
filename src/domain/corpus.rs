// ============================================================
// Layer 3 — Corpus Domain Type
// ============================================================
// A Corpus is the ordered list of documents that share one
// label. A document is nothing more than the trimmed text of
// one file: the path it came from is not kept, so the
// downstream model only ever sees the review text.
//
// Corpus serializes transparently as Vec<String>, so the
// artifact on disk is exactly a list of strings.
//
// Reference: Rust Book §8 (Vectors), serde `transparent` attribute

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Ordered documents of one label, in scan order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    documents: Vec<String>,
}

impl Corpus {
    /// Append one document. Empty strings are kept: an empty
    /// file is still a document.
    pub fn push(&mut self, document: impl Into<String>) {
        self.documents.push(document.into());
    }

    /// Number of documents, empty ones included
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Hand the plain list over, e.g. after reading an artifact
    pub fn into_documents(self) -> Vec<String> {
        self.documents
    }
}

impl<S: Into<String>> FromIterator<S> for Corpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            documents: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// What a scan produced: the corpus itself plus the files that
/// were stepped over under a lenient scan policy.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub corpus:  Corpus,
    pub skipped: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_kept() {
        let mut corpus = Corpus::default();
        corpus.push("");
        corpus.push("text");
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.into_documents(), vec!["", "text"]);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let corpus: Corpus = ["a", "b"].into_iter().collect();
        let json = serde_json::to_string(&corpus).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
    }
}
