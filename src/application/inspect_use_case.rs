// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Reads an artifact back the way the modeling stage will and
// summarises it: how many documents, and what the first few
// look like.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::domain::corpus::Corpus;
use crate::infra::artifact::read_artifact;

/// Document count of an artifact and its first few documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSummary {
    pub documents: usize,
    pub preview:   Vec<String>,
}

/// Reads back one artifact written by BuildUseCase
pub struct InspectUseCase {
    artifact: PathBuf,
}

impl InspectUseCase {
    /// Inspect the artifact at `artifact`
    pub fn new(artifact: impl Into<PathBuf>) -> Self {
        Self { artifact: artifact.into() }
    }

    /// Load the artifact and keep the first `limit` documents
    pub fn summarize(&self, limit: usize) -> Result<ArtifactSummary> {
        let corpus: Corpus = read_artifact(&self.artifact)
            .with_context(|| format!("Cannot inspect '{}'", self.artifact.display()))?;
        let mut documents = corpus.into_documents();

        let count = documents.len();
        documents.truncate(limit);
        tracing::debug!("Artifact '{}' holds {} documents", self.artifact.display(), count);

        Ok(ArtifactSummary {
            documents: count,
            preview:   documents,
        })
    }
}
