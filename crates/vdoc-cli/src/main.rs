//! # vdoc CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vdoc_cli::masks::{run_masks, MasksArgs};
use vdoc_cli::record::{run_record, RecordArgs};
use vdoc_cli::redact::{run_redact, RedactArgs};
use vdoc_cli::resolve::{run_project, run_resolve, ProjectArgs, ResolveArgs};

/// Virtual document toolkit.
///
/// Resolves paths into documents that may contain Trellis masks, prints
/// verification links for masked values, creates masks, and builds upload
/// records for audits and certificates of insurance.
#[derive(Parser, Debug)]
#[command(name = "vdoc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Verifier endpoint for verification links. Overrides VDOC_VERIFIER_URL.
    #[arg(long, global = true, value_name = "URL")]
    verifier_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a path and report where and why traversal stopped.
    Resolve(ResolveArgs),

    /// Print the value at a path, or its verification link when masked.
    Project(ProjectArgs),

    /// List the masks in a document.
    Masks(MasksArgs),

    /// Build the upload record for an audit or certificate of insurance.
    Record(RecordArgs),

    /// Replace subtrees of a document with masks.
    Redact(RedactArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = vdoc_cli::build_resolver(cli.verifier_url.as_deref()).and_then(|resolver| {
        match &cli.command {
            Commands::Resolve(args) => run_resolve(args, &resolver),
            Commands::Project(args) => run_project(args, &resolver),
            Commands::Masks(args) => run_masks(args, &resolver),
            Commands::Record(args) => run_record(args, &resolver),
            Commands::Redact(args) => run_redact(args),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
