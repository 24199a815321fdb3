// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes to a use case.
//
//   1. `build`   — scan the corpus, write one artifact per label
//   2. `inspect` — read an artifact back and preview it
//
// With no subcommand the binary runs `build`, so a bare
// `opspam-prep` still produces both artifacts from the default
// (or OPSPAM_*) paths. Build flags are accepted at the top
// level for the same reason.
//
// Reference: Rust Book §12 (Building a CLI Program)
//            clap derive tutorial (flattened default subcommand)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{BuildArgs, Commands, InspectArgs};

use crate::application::build_use_case::BuildConfig;

/// Top-level parser; a missing subcommand means `build`
#[derive(Parser, Debug)]
#[command(
    name = "opspam-prep",
    version,
    about = "Split the op_spam review corpus into deceptive/truthful artifacts for BERT.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Build options used when no subcommand is given
    #[command(flatten)]
    pub build: BuildArgs,
}

impl Cli {
    /// Dispatch to the chosen use case
    pub fn run(self) -> Result<()> {
        match self.command {
            Some(Commands::Build(args))   => run_build(args),
            Some(Commands::Inspect(args)) => run_inspect(args),
            None                          => run_build(self.build),
        }
    }
}

/// Resolve the config (flags or --config file), optionally save it,
/// run the build and print one line per label.
fn run_build(args: BuildArgs) -> Result<()> {
    use crate::application::build_use_case::BuildUseCase;
    use crate::infra::config_store::{load_config, save_config};

    let write_config = args.write_config.clone();
    let config: BuildConfig = match &args.config {
        Some(path) => load_config(path)?,
        None       => args.into(),
    };

    if let Some(path) = &write_config {
        save_config(path, &config)?;
    }

    let report = BuildUseCase::new(config).execute()?;

    for label in &report.labels {
        println!(
            "{:<10} {:>6} documents  {:>3} skipped  → {}",
            label.name,
            label.documents,
            label.skipped,
            label.artifact.display()
        );
    }
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    let summary = InspectUseCase::new(&args.artifact).summarize(args.limit)?;

    println!("{}: {} documents", args.artifact.display(), summary.documents);
    for (i, doc) in summary.preview.iter().enumerate() {
        println!("[{i}] {doc}");
    }
    Ok(())
}
