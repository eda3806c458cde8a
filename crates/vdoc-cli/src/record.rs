//! # Record Subcommand
//!
//! Prints the upload `properties` record for an audit or certificate of
//! insurance as JSON. The document kind is detected unless `--kind` is
//! given.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use vdoc_record::{build_properties, build_properties_as, DocumentKind};
use vdoc_resolve::Resolver;

/// Arguments for `vdoc record`.
#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Document to read (JSON, or YAML by extension).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Treat the document as this kind instead of detecting it.
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
    /// Write the record here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Document kinds accepted by `--kind`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    Audit,
    Coi,
}

impl From<KindArg> for DocumentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Audit => DocumentKind::Audit,
            KindArg::Coi => DocumentKind::Coi,
        }
    }
}

/// Execute the record subcommand.
pub fn run_record(args: &RecordArgs, resolver: &Resolver) -> Result<u8> {
    let document = crate::load_document(&args.file)?;
    let record = match args.kind {
        Some(kind) => build_properties_as(resolver, &document, kind.into()),
        None => build_properties(resolver, &document)
            .with_context(|| format!("cannot build a record for {}", args.file.display()))?,
    };
    let text = serde_json::to_string_pretty(&record)?;
    crate::emit(args.output.as_deref(), &text)?;
    Ok(0)
}
