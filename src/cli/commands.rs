// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Two subcommands: `build` and `inspect`.
//
// Every build flag can also come from an OPSPAM_* environment
// variable, or the whole configuration from a JSON file via
// --config. --write-config records what a run used.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::build_use_case::BuildConfig;
use crate::data::scanner::ScanPolicy;
use crate::domain::label::LabelSpec;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split the corpus into deceptive/truthful artifacts
    Build(BuildArgs),

    /// Print the size and first documents of an artifact
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Root of the op_spam corpus
    #[arg(long, env = "OPSPAM_CORPUS_DIR", default_value = "data/op_spam_v1.4")]
    pub corpus_dir: PathBuf,

    /// Directory the artifacts are written into (must exist)
    #[arg(long, env = "OPSPAM_OUTPUT_DIR", default_value = "data")]
    pub output_dir: PathBuf,

    /// File-name prefix of deceptive reviews
    #[arg(long, env = "OPSPAM_DECEPTIVE_PREFIX", default_value_t = 'd')]
    pub deceptive_prefix: char,

    /// File-name prefix of truthful reviews
    #[arg(long, env = "OPSPAM_TRUTHFUL_PREFIX", default_value_t = 't')]
    pub truthful_prefix: char,

    /// Artifact file name for deceptive reviews
    #[arg(long, default_value = "berted_deception.bin")]
    pub deceptive_artifact: String,

    /// Artifact file name for truthful reviews
    #[arg(long, default_value = "berted_truthful.bin")]
    pub truthful_artifact: String,

    /// Log and skip unreadable or non-UTF-8 files instead of aborting
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Load the whole build configuration from a JSON file;
    /// the other build flags are ignored when this is set
    #[arg(long, env = "OPSPAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Save the resolved build configuration as JSON before running,
    /// for replay with --config
    #[arg(long)]
    pub write_config: Option<PathBuf>,
}

/// The application layer never sees clap types.
impl From<BuildArgs> for BuildConfig {
    fn from(a: BuildArgs) -> Self {
        BuildConfig {
            corpus_dir: a.corpus_dir,
            output_dir: a.output_dir,
            labels:     vec![
                LabelSpec::new("deceptive", a.deceptive_prefix, a.deceptive_artifact),
                LabelSpec::new("truthful", a.truthful_prefix, a.truthful_artifact),
            ],
            policy:     if a.skip_unreadable {
                ScanPolicy::SkipUnreadable
            } else {
                ScanPolicy::Strict
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Artifact written by `build`
    #[arg(long)]
    pub artifact: PathBuf,

    /// How many documents to print
    #[arg(long, default_value_t = 3)]
    pub limit: usize,
}
