// ============================================================
// Layer 2 — BuildUseCase
// ============================================================
// Produces one artifact per label:
//
//   Step 1: Scan the corpus root once per label    (Layer 4 - data)
//   Step 2: Write each corpus to its artifact file (Layer 6 - infra)
//
// Every scan finishes before the first write, so a failing
// scan leaves the output directory untouched.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::PathBuf};

use crate::data::scanner::{CorpusScanner, ScanPolicy};
use crate::domain::label::LabelSpec;
use crate::domain::traits::CorpusSource;
use crate::infra::artifact::ArtifactWriter;

// ─── Build Configuration ─────────────────────────────────────────────────────
// Everything a run depends on. Serialisable so the same run can
// be replayed from a JSON file (see infra::config_store).
/// Corpus root, output directory, labels and scan policy of one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub corpus_dir: PathBuf,
    pub output_dir: PathBuf,
    pub labels:     Vec<LabelSpec>,
    #[serde(default)]
    pub policy:     ScanPolicy,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from("data/op_spam_v1.4"),
            output_dir: PathBuf::from("data"),
            labels:     vec![LabelSpec::deceptive(), LabelSpec::truthful()],
            policy:     ScanPolicy::Strict,
        }
    }
}

impl BuildConfig {
    /// Reject configs that would write nothing, or write two labels
    /// into the same artifact file.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.labels.is_empty() {
            return Err("at least one label is required".to_string());
        }
        let mut seen = HashSet::new();
        for label in &self.labels {
            if !seen.insert(label.artifact.as_str()) {
                return Err(format!(
                    "label '{}' reuses artifact '{}'",
                    label.name, label.artifact
                ));
            }
        }
        Ok(())
    }
}

/// Per-label result of a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelReport {
    pub name:      String,
    pub documents: usize,
    pub skipped:   usize,
    pub artifact:  PathBuf,
}

/// One LabelReport per configured label, in config order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub labels: Vec<LabelReport>,
}

// ─── BuildUseCase ─────────────────────────────────────────────────────────────
/// Runs a BuildConfig against a corpus source
pub struct BuildUseCase<S = CorpusScanner> {
    config: BuildConfig,
    source: S,
}

impl BuildUseCase<CorpusScanner> {
    /// Scan the configured corpus directory on disk
    pub fn new(config: BuildConfig) -> Self {
        let source = CorpusScanner::new(&config.corpus_dir).with_policy(config.policy);
        Self::with_source(config, source)
    }
}

impl<S: CorpusSource> BuildUseCase<S> {
    /// Run against any CorpusSource, not just the filesystem
    pub fn with_source(config: BuildConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Scan every label, then write every artifact.
    /// Nothing is written unless all scans succeed.
    pub fn execute(&self) -> Result<BuildReport> {
        let cfg = &self.config;
        if let Err(reason) = cfg.validate() {
            anyhow::bail!("Invalid build config: {reason}");
        }

        // ── Step 1: Collect every corpus ──────────────────────────────────────
        let mut scanned = Vec::with_capacity(cfg.labels.len());
        for label in &cfg.labels {
            tracing::info!(
                "Collecting '{}' documents (prefix '{}') from '{}'",
                label.name,
                label.prefix,
                cfg.corpus_dir.display()
            );
            let outcome = self
                .source
                .collect(label.prefix)
                .with_context(|| format!("Failed to collect the '{}' corpus", label.name))?;
            if outcome.corpus.is_empty() {
                tracing::warn!("No '{}' documents matched prefix '{}'", label.name, label.prefix);
            }
            scanned.push((label, outcome));
        }

        // ── Step 2: Write one artifact per label ──────────────────────────────
        let mut report = BuildReport::default();
        for (label, outcome) in scanned {
            let path = cfg.output_dir.join(&label.artifact);
            ArtifactWriter::new(&path)
                .write(&outcome.corpus)
                .with_context(|| format!("Failed to write the '{}' artifact", label.name))?;

            tracing::info!(
                "Wrote {} '{}' documents to '{}'",
                outcome.corpus.len(),
                label.name,
                path.display()
            );

            report.labels.push(LabelReport {
                name:      label.name.clone(),
                documents: outcome.corpus.len(),
                skipped:   outcome.skipped.len(),
                artifact:  path,
            });
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::corpus::ScanOutcome;
    use crate::error::PipelineError;
    use crate::infra::artifact::read_artifact;
    use std::{fs, io, path::Path};
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn config_for(corpus: &Path, out: &Path) -> BuildConfig {
        BuildConfig {
            corpus_dir: corpus.to_path_buf(),
            output_dir: out.to_path_buf(),
            ..BuildConfig::default()
        }
    }

    #[test]
    fn test_end_to_end_two_labels() {
        let corpus = tempdir().unwrap();
        let out = tempdir().unwrap();
        write(corpus.path(), "deceptive/fold1/d_1.txt", "Lorem ipsum");
        write(corpus.path(), "truthful/fold1/t_1.txt", "Dolor sit");

        let report = BuildUseCase::new(config_for(corpus.path(), out.path()))
            .execute()
            .unwrap();

        let deceptive: Vec<String> =
            read_artifact(&out.path().join("berted_deception.bin")).unwrap();
        let truthful: Vec<String> =
            read_artifact(&out.path().join("berted_truthful.bin")).unwrap();
        assert_eq!(deceptive, vec!["Lorem ipsum"]);
        assert_eq!(truthful, vec!["Dolor sit"]);

        assert_eq!(report.labels.len(), 2);
        assert_eq!(report.labels[0].name, "deceptive");
        assert_eq!(report.labels[0].documents, 1);
        assert_eq!(report.labels[1].skipped, 0);
    }

    #[test]
    fn test_empty_corpus_still_writes_artifacts() {
        let corpus = tempdir().unwrap();
        let out = tempdir().unwrap();

        BuildUseCase::new(config_for(corpus.path(), out.path()))
            .execute()
            .unwrap();

        let truthful: Vec<String> =
            read_artifact(&out.path().join("berted_truthful.bin")).unwrap();
        assert!(truthful.is_empty());
    }

    #[test]
    fn test_lenient_policy_reports_skips() {
        let corpus = tempdir().unwrap();
        let out = tempdir().unwrap();
        write(corpus.path(), "d_1.txt", "kept");
        fs::write(corpus.path().join("d_2.txt"), [0xffu8, 0xfe]).unwrap();

        let cfg = BuildConfig {
            policy: ScanPolicy::SkipUnreadable,
            ..config_for(corpus.path(), out.path())
        };
        let report = BuildUseCase::new(cfg).execute().unwrap();
        assert_eq!(report.labels[0].documents, 1);
        assert_eq!(report.labels[0].skipped, 1);
    }

    #[test]
    fn test_strict_policy_aborts_without_writing() {
        let corpus = tempdir().unwrap();
        let out = tempdir().unwrap();
        write(corpus.path(), "t_1.txt", "fine");
        fs::write(corpus.path().join("d_1.txt"), [0xffu8]).unwrap();

        let err = BuildUseCase::new(config_for(corpus.path(), out.path()))
            .execute()
            .unwrap_err();
        assert!(err.to_string().contains("deceptive"));
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    /// Succeeds for every prefix except one
    struct FailingOn(char);

    impl CorpusSource for FailingOn {
        fn collect(&self, prefix: char) -> crate::error::Result<ScanOutcome> {
            if prefix == self.0 {
                return Err(PipelineError::io(
                    "stub",
                    io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
                ));
            }
            Ok(ScanOutcome {
                corpus:  ["doc"].into_iter().collect(),
                skipped: Vec::new(),
            })
        }
    }

    #[test]
    fn test_second_scan_failure_writes_nothing() {
        let out = tempdir().unwrap();
        let cfg = config_for(Path::new("unused"), out.path());

        let result = BuildUseCase::with_source(cfg, FailingOn('t')).execute();
        assert!(result.is_err());
        assert!(!out.path().join("berted_deception.bin").exists());
    }

    #[test]
    fn test_shared_artifact_is_rejected_before_writing() {
        let out = tempdir().unwrap();
        let mut cfg = config_for(Path::new("unused"), out.path());
        cfg.labels[1].artifact = cfg.labels[0].artifact.clone();

        let err = BuildUseCase::with_source(cfg, FailingOn('x'))
            .execute()
            .unwrap_err();
        assert!(err.to_string().contains("reuses artifact"));
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_empty_label_list_is_rejected() {
        let out = tempdir().unwrap();
        let cfg = BuildConfig {
            labels: Vec::new(),
            ..config_for(Path::new("unused"), out.path())
        };
        assert!(BuildUseCase::with_source(cfg, FailingOn('x')).execute().is_err());
    }

    #[test]
    fn test_missing_output_dir_fails() {
        let out = tempdir().unwrap();
        let cfg = config_for(Path::new("unused"), &out.path().join("missing"));

        let err = BuildUseCase::with_source(cfg, FailingOn('x'))
            .execute()
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::Io { .. })
        ));
    }
}
