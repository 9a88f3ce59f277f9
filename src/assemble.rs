//! Assembly of the final short URL from a translated path.

use crate::config::Config;
use crate::encoding::encode_segment;

/// Sentinel source value meaning "no source selected".
///
/// Selection UIs without a true empty option send this instead.
const SOURCE_NONE: &str = "none";

/// Builds the full short URL for a translated path, appending tracking
/// segments where requested.
///
/// A non-empty `source` is appended verbatim as `/s/{source}`, but only
/// when it is neither the `none` sentinel nor absent from the configured
/// accepted list. An unrecognized source is silently dropped, never an
/// error. Accepted source values are pre-validated tokens and are not
/// re-encoded.
///
/// A non-empty `campaign` is appended as `/c/{campaign}` with standard
/// percent-encoding. Segment order is fixed: path, source, campaign.
pub fn assemble(config: &Config, path: &str, source: &str, campaign: &str) -> String {
    let mut short_url = format!("{}{}", config.short_url_base, path);

    if !source.is_empty() && source != SOURCE_NONE && config.is_accepted_source(source) {
        short_url.push_str("/s/");
        short_url.push_str(source);
    }

    if !campaign.is_empty() {
        short_url.push_str("/c/");
        short_url.push_str(&encode_segment(campaign));
    }

    short_url
}
