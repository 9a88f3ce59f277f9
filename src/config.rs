//! Static configuration for the short link generator.
//!
//! Configuration is loaded once at startup and validated before any
//! translation happens. Everything is immutable afterwards.
//!
//! ## Environment Variables
//!
//! - `SHORT_URL_BASE` - Origin under which generated short paths are served
//!   (default: `https://s.wff-berlin.de`)
//!
//! The canonical site origin and the accepted tracking sources are fixed
//! compile-time data; only the short link origin is overridable, so staging
//! deployments can point generated links at a test resolver.

use anyhow::Result;
use serde::Serialize;
use std::env;

/// Canonical origin all long URLs must begin with.
pub const BASE_URL: &str = "https://wff-berlin.de";

/// Default origin for generated short links.
pub const DEFAULT_SHORT_URL_BASE: &str = "https://s.wff-berlin.de";

/// A tracking source accepted in the `/s/{source}` segment.
///
/// `value` is the token that ends up in the short URL, `label` the
/// human-readable name shown in selection UIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceTag {
    pub value: String,
    pub label: String,
}

impl SourceTag {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Generator configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Canonical scheme+host prefix all valid long URLs must begin with.
    pub base_url: String,
    /// Scheme+host prefix under which generated short paths are served.
    pub short_url_base: String,
    /// Accepted tracking sources, in display order. Values are unique.
    pub sources: Vec<SourceTag>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the loaded configuration fails validation.
    ///
    /// # Note
    ///
    /// Expects environment variables to be already loaded
    /// (e.g., via `dotenvy::dotenv()` in `main.rs`).
    pub fn from_env() -> Result<Self> {
        let short_url_base =
            env::var("SHORT_URL_BASE").unwrap_or_else(|_| DEFAULT_SHORT_URL_BASE.to_string());

        let config = Self {
            base_url: BASE_URL.to_string(),
            short_url_base,
            sources: default_sources(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - either origin is not an `http(s)://` prefix or carries a trailing slash
    /// - a source value is empty, not a plain lowercase token, or duplicated
    pub fn validate(&self) -> Result<()> {
        for (name, origin) in [
            ("base URL", &self.base_url),
            ("short URL base", &self.short_url_base),
        ] {
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                anyhow::bail!(
                    "{} must start with 'http://' or 'https://', got '{}'",
                    name,
                    origin
                );
            }
            // Origins are concatenated with absolute paths; a trailing slash
            // would put a double slash into every generated link.
            if origin.ends_with('/') {
                anyhow::bail!("{} must not end with '/', got '{}'", name, origin);
            }
        }

        let mut seen = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            if source.value.is_empty() {
                anyhow::bail!("source value must not be empty");
            }
            if !source
                .value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            {
                anyhow::bail!(
                    "source value must contain only lowercase letters and digits, got '{}'",
                    source.value
                );
            }
            if seen.contains(&source.value.as_str()) {
                anyhow::bail!("duplicate source value '{}'", source.value);
            }
            seen.push(source.value.as_str());
        }

        Ok(())
    }

    /// Returns whether `value` is one of the accepted tracking sources.
    pub fn is_accepted_source(&self, value: &str) -> bool {
        self.sources.iter().any(|s| s.value == value)
    }

    /// Canonical origin with the literal `www.` subdomain inserted.
    ///
    /// Only this exact variant is accepted by the validator; it is not a
    /// general subdomain wildcard.
    pub fn www_base_url(&self) -> String {
        self.base_url.replacen("://", "://www.", 1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            short_url_base: DEFAULT_SHORT_URL_BASE.to_string(),
            sources: default_sources(),
        }
    }
}

/// The accepted tracking sources for wff-berlin.de content.
fn default_sources() -> Vec<SourceTag> {
    vec![
        SourceTag::new("email", "E-Mail Newsletter"),
        SourceTag::new("mail", "postalischer Brief"),
        SourceTag::new("ert", "ERT Website"),
        SourceTag::new("strava", "Strava"),
        SourceTag::new("whatsapp", "WhatsApp"),
        SourceTag::new("instagram", "Instagram"),
        SourceTag::new("facebook", "Facebook"),
    ]
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
pub fn load_from_env() -> Result<Config> {
    Config::from_env()
}
