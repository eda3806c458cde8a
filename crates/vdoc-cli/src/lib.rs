//! # vdoc-cli: CLI for the Virtual Document Stack
//!
//! Provides the `vdoc` command-line interface over the resolver, the mask
//! tooling and the record builders.
//!
//! ## Subcommands
//!
//! - `vdoc resolve`: Resolve a path and report the unconsumed suffix.
//! - `vdoc project`: Print a path's value, or its verification link.
//! - `vdoc masks`: List the masks a document carries.
//! - `vdoc record`: Build the upload record for an audit or COI.
//! - `vdoc redact`: Replace subtrees with masks.
//!
//! Documents are read as JSON, or as YAML when the file ends in `.yaml` or
//! `.yml`:
//!
//! ```bash
//! vdoc resolve audit.json organization.location.city
//! vdoc project audit.json /organization/location -vv
//! vdoc redact audit.yaml organization/location --url https://trellis.example/resources/123
//! ```

pub mod masks;
pub mod record;
pub mod redact;
pub mod resolve;

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use vdoc_mask::{LinkBuilder, VerifierConfig};
use vdoc_resolve::Resolver;

/// On-disk document encoding, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read and parse a document.
pub fn load_document(path: &Path) -> Result<Value> {
    if !path.exists() {
        bail!("file not found: {}", path.display());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read file: {}", path.display()))?;
    let document = match DocumentFormat::from_path(path) {
        DocumentFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON: {}", path.display()))?,
        DocumentFormat::Yaml => serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML: {}", path.display()))?,
    };
    tracing::debug!(path = %path.display(), "loaded document");
    Ok(document)
}

/// Serialize a document in `format`.
pub fn render_document(document: &Value, format: DocumentFormat) -> Result<String> {
    Ok(match format {
        DocumentFormat::Json => serde_json::to_string_pretty(document)?,
        DocumentFormat::Yaml => serde_yaml::to_string(document)?,
    })
}

/// Write `text` to `output`, or to stdout when no output path is given.
pub fn emit(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("failed to write file: {}", path.display())),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

/// Verifier configuration from the environment, with the endpoint replaced
/// by `verifier_url` when one is given.
pub fn verifier_config(verifier_url: Option<&str>) -> Result<VerifierConfig> {
    let mut config = VerifierConfig::from_env().context("invalid verifier configuration")?;
    if let Some(raw) = verifier_url {
        config
            .set_verifier_url(raw)
            .context("invalid --verifier-url")?;
    }
    Ok(config)
}

/// A Trellis-mask resolver linking to the configured verifier.
pub fn build_resolver(verifier_url: Option<&str>) -> Result<Resolver> {
    let config = verifier_config(verifier_url)?;
    tracing::debug!(verifier = config.verifier_url(), param = %config.mask_param, "verifier configured");
    Ok(Resolver::new(vdoc_mask::TrellisMask, LinkBuilder::new(config)))
}
