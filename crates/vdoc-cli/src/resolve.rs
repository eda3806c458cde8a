//! # Resolve and Project Subcommands
//!
//! `vdoc resolve` prints the full resolution (unconsumed suffix, stopping
//! node, outcome) as JSON. `vdoc project` prints what a reader would see at
//! the path: the value, or the verification link if it is masked.
//!
//! ## Exit Codes
//!
//! | Code | `resolve`          | `project`          |
//! |------|--------------------|--------------------|
//! | 0    | fully resolved     | value or link      |
//! | 1    | member missing     | absent             |
//! | 2    | stopped at a mask  |                    |

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use vdoc_core::DocPath;
use vdoc_resolve::{Outcome, Projection, Resolver};

/// Arguments for `vdoc resolve`.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Document to read (JSON, or YAML by extension).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Path into the document, `.` or `/` delimited.
    #[arg(value_name = "PATH")]
    pub path: String,
}

/// Arguments for `vdoc project`.
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Document to read (JSON, or YAML by extension).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Path into the document, `.` or `/` delimited.
    #[arg(value_name = "PATH")]
    pub path: String,
    /// Print the tagged projection as JSON instead of its display text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the resolve subcommand.
pub fn run_resolve(args: &ResolveArgs, resolver: &Resolver) -> Result<u8> {
    let document = crate::load_document(&args.file)?;
    let resolution = resolver.resolve(&document, DocPath::parse(&args.path));
    println!("{}", serde_json::to_string_pretty(&resolution)?);
    Ok(outcome_code(resolution.outcome))
}

/// Execute the project subcommand.
pub fn run_project(args: &ProjectArgs, resolver: &Resolver) -> Result<u8> {
    let document = crate::load_document(&args.file)?;
    let projection = resolver.project(&document, DocPath::parse(&args.path));
    if args.json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else {
        println!("{projection}");
    }
    Ok(match projection {
        Projection::Absent => 1,
        Projection::Value(_) | Projection::Link(_) => 0,
    })
}

fn outcome_code(outcome: Outcome) -> u8 {
    match outcome {
        Outcome::Resolved => 0,
        Outcome::Missing => 1,
        Outcome::Masked => 2,
    }
}
