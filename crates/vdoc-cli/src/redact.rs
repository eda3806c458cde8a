//! # Redact Subcommand
//!
//! Replaces one or more subtrees of a document with Trellis masks. The
//! masked document is written in the input's format. Nonces are needed to
//! later disclose a masked value; they are written only to the file named by
//! `--nonces` and are otherwise discarded.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use url::Url;

use vdoc_mask::Redactor;

use crate::DocumentFormat;

/// Arguments for `vdoc redact`.
#[derive(Args, Debug)]
pub struct RedactArgs {
    /// Document to read (JSON, or YAML by extension).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Paths of the subtrees to mask.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
    /// Resource URL recorded in each mask as the location of the original.
    #[arg(long)]
    pub url: String,
    /// Write the masked document here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    /// Write the nonce and hash of every new mask here, as JSON.
    #[arg(long)]
    pub nonces: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct NonceEntry {
    nonce: String,
    hash: String,
}

/// Execute the redact subcommand.
pub fn run_redact(args: &RedactArgs) -> Result<u8> {
    let resource_url =
        Url::parse(&args.url).with_context(|| format!("invalid resource url: {}", args.url))?;
    let mut document = crate::load_document(&args.file)?;

    let mut nonces = BTreeMap::new();
    for path in &args.paths {
        let masked = Redactor
            .mask_path(&mut document, path.as_str(), &resource_url)
            .with_context(|| format!("failed to mask '{path}'"))?;
        tracing::info!(path = %path, hash = %masked.hash, "masked");
        nonces.insert(
            path.clone(),
            NonceEntry {
                nonce: masked.nonce,
                hash: masked.hash,
            },
        );
    }

    let text = crate::render_document(&document, DocumentFormat::from_path(&args.file))?;
    crate::emit(args.output.as_deref(), &text)?;

    match &args.nonces {
        Some(path) => {
            let json = serde_json::to_string_pretty(&nonces)?;
            std::fs::write(path, json)
                .with_context(|| format!("failed to write nonces: {}", path.display()))?;
        }
        None => tracing::warn!("no --nonces file given; masked values cannot be disclosed later"),
    }
    Ok(0)
}
