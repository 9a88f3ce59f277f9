//! Origin validation for candidate long URLs.

use crate::config::Config;
use url::Url;

/// Returns whether `candidate` is a well-formed absolute URL on the
/// configured canonical origin.
///
/// The check is purely syntactic: the candidate must parse, and its
/// serialized form must begin with `config.base_url` (exact prefix,
/// case-sensitive, scheme included) or with the literal `www.` variant
/// of it. No other subdomain is accepted and nothing is resolved over
/// the network.
pub fn is_valid_origin(config: &Config, candidate: &str) -> bool {
    let Ok(url) = Url::parse(candidate) else {
        return false;
    };

    let serialized = url.to_string();
    serialized.starts_with(&config.base_url) || serialized.starts_with(&config.www_base_url())
}
