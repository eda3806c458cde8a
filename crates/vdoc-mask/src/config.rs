//! Verifier configuration.
//!
//! Verification links point at an externally hosted verifier. The default is
//! the public Trellis verifier; override via environment variables or
//! explicit construction for staging/testing.

use url::Url;

/// Default verifier endpoint.
pub const DEFAULT_VERIFIER_URL: &str = "https://trellisfw.github.io/reagan";

/// Default name of the query parameter that carries the committed record.
pub const DEFAULT_MASK_PARAM: &str = "trellis-mask";

/// Where verification links point and how they carry their payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Verifier endpoint, normalized, with no query or fragment.
    verifier_url: String,
    /// Query parameter name for the committed record.
    pub mask_param: String,
}

impl VerifierConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `VDOC_VERIFIER_URL` (default: `https://trellisfw.github.io/reagan`)
    /// - `VDOC_MASK_PARAM` (default: `trellis-mask`)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mask_param =
            std::env::var("VDOC_MASK_PARAM").unwrap_or_else(|_| DEFAULT_MASK_PARAM.to_string());
        if mask_param.is_empty() {
            return Err(ConfigError::EmptyParam);
        }
        Ok(Self {
            verifier_url: env_url("VDOC_VERIFIER_URL", DEFAULT_VERIFIER_URL)?,
            mask_param,
        })
    }

    /// Configuration pointing at an explicit verifier endpoint.
    pub fn with_verifier_url(raw: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.set_verifier_url(raw)?;
        Ok(config)
    }

    /// The verifier endpoint links are built against.
    pub fn verifier_url(&self) -> &str {
        &self.verifier_url
    }

    /// Replace the verifier endpoint. Any query or fragment on `raw` is
    /// dropped.
    pub fn set_verifier_url(&mut self, raw: &str) -> Result<(), ConfigError> {
        self.verifier_url = parse_url("verifier_url", raw)?;
        Ok(())
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            verifier_url: DEFAULT_VERIFIER_URL.to_string(),
            mask_param: DEFAULT_MASK_PARAM.to_string(),
        }
    }
}

fn env_url(var: &str, default: &str) -> Result<String, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    parse_url(var, &raw)
}

fn parse_url(name: &str, raw: &str) -> Result<String, ConfigError> {
    let mut url =
        Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(name.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(
            name.to_string(),
            "verifier url must be hierarchical".to_string(),
        ));
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url.into())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("VDOC_MASK_PARAM must not be empty")]
    EmptyParam,
}
