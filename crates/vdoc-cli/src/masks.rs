//! # Masks Subcommand
//!
//! Lists the outermost masks in a document, one path per line, optionally
//! followed by a tab and the mask's verification link.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use vdoc_mask::find_mask_paths;
use vdoc_resolve::Resolver;

/// Arguments for `vdoc masks`.
#[derive(Args, Debug)]
pub struct MasksArgs {
    /// Document to read (JSON, or YAML by extension).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Print each mask's verification link next to its path.
    #[arg(long)]
    pub links: bool,
}

/// Execute the masks subcommand.
pub fn run_masks(args: &MasksArgs, resolver: &Resolver) -> Result<u8> {
    let document = crate::load_document(&args.file)?;
    let lines = mask_lines(&document, resolver, args.links);
    tracing::info!(count = lines.len(), "masks found");
    for line in &lines {
        println!("{line}");
    }
    Ok(0)
}

fn mask_lines(document: &serde_json::Value, resolver: &Resolver, links: bool) -> Vec<String> {
    find_mask_paths(document, resolver.classifier())
        .into_iter()
        .map(|path| {
            if links {
                let link = resolver.project_string(document, &path);
                format!("{path}\t{link}")
            } else {
                path.to_string()
            }
        })
        .collect()
}
