//! Top-level orchestration: raw input string to short URL or error.

use crate::assemble::assemble;
use crate::config::Config;
use crate::error::GenerateError;
use crate::params::QueryParams;
use crate::patterns::translate;
use crate::validate::is_valid_origin;
use url::Url;

/// Outcome of one generation call.
///
/// Blank input is not a user mistake: an untouched input field produces
/// [`Generation::Empty`], with neither a result nor an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// Input was blank or whitespace-only.
    Empty,
    /// The assembled short URL.
    Success(String),
    /// A recognized failure with a user-facing message.
    Failure(GenerateError),
}

impl Generation {
    /// The generated short URL, if any.
    pub fn short_url(&self) -> Option<&str> {
        match self {
            Self::Success(url) => Some(url),
            _ => None,
        }
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&GenerateError> {
        match self {
            Self::Failure(err) => Some(err),
            _ => None,
        }
    }
}

/// Generates a short URL for `raw_url`, optionally tagged with a tracking
/// `source` and `campaign`.
///
/// The input runs through origin validation, pattern translation, and
/// assembly; every failure along the way is captured in the returned
/// [`Generation`], so this never panics and never returns a raw parser
/// error.
pub fn generate_short_url(config: &Config, raw_url: &str, source: &str, campaign: &str) -> Generation {
    if raw_url.trim().is_empty() {
        return Generation::Empty;
    }

    if !is_valid_origin(config, raw_url) {
        return Generation::Failure(GenerateError::InvalidOrigin {
            origin: config.base_url.clone(),
        });
    }

    // Validation just parsed this successfully, but a raw parser error must
    // never reach the caller, so the second decomposition stays fallible.
    let Ok(url) = Url::parse(raw_url) else {
        return Generation::Failure(GenerateError::MalformedUrl);
    };
    let params = QueryParams::from_url(&url);

    let path = match translate(&params) {
        Ok(path) => path,
        Err(err) => return Generation::Failure(err),
    };

    Generation::Success(assemble(config, &path, source, campaign))
}
