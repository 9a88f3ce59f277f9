//! Recognized long-URL shapes and their short path translations.
//!
//! The CMS addresses every content type through query parameters on the
//! site root, so each recognized shape is a predicate over the query
//! parameter mapping plus a generator for the canonical short path.
//!
//! The table is evaluated top to bottom and the first match wins. Order
//! carries meaning: the predicates are not mutually exclusive (a URL can
//! name both a newsletter and an article), so this must stay an ordered
//! list rather than a map keyed by parameter name.

use crate::encoding::{encode_download_filename, encode_segment};
use crate::error::GenerateError;
use crate::params::QueryParams;

/// One recognized long-URL shape: a predicate over the query parameters
/// and a generator producing the canonical short path.
pub struct PatternRule {
    pub name: &'static str,
    matcher: fn(&QueryParams) -> bool,
    generator: fn(&QueryParams) -> String,
}

/// The ordered rule table. First match wins.
pub static URL_PATTERNS: &[PatternRule] = &[
    PatternRule {
        name: "news",
        matcher: |p| p.is("action", "start_news") && p.is("cmd", "view") && p.has("id"),
        generator: |p| format!("/n/{}", p.get("id").unwrap_or("")),
    },
    PatternRule {
        name: "veranstaltung",
        matcher: |p| p.non_empty("veranstaltung"),
        generator: |p| {
            format!(
                "/v/{}",
                encode_segment(p.get("veranstaltung").unwrap_or(""))
            )
        },
    },
    PatternRule {
        name: "veranstaltung-anmelden",
        matcher: |p| p.non_empty("veranstaltunganmelden"),
        generator: |p| {
            format!(
                "/va/{}",
                encode_segment(p.get("veranstaltunganmelden").unwrap_or(""))
            )
        },
    },
    PatternRule {
        name: "event-anmelden",
        matcher: |p| p.is("action", "events_anmeldungen") && p.non_empty("id"),
        generator: |p| format!("/ea/{}", encode_segment(p.get("id").unwrap_or(""))),
    },
    PatternRule {
        name: "newsletter",
        matcher: |p| p.has("newsletter") && !p.has("artikel"),
        generator: |p| {
            format!(
                "/nl/{}",
                encode_segment(p.get("newsletter").unwrap_or(""))
            )
        },
    },
    PatternRule {
        name: "article",
        matcher: |p| p.has("artikel") && !p.has("newsletter"),
        generator: |p| format!("/a/{}", encode_segment(p.get("artikel").unwrap_or(""))),
    },
    PatternRule {
        name: "newsletter-article",
        matcher: |p| p.has("newsletter") && p.has("artikel"),
        generator: |p| {
            format!(
                "/a/{}/nl/{}",
                encode_segment(p.get("artikel").unwrap_or("")),
                encode_segment(p.get("newsletter").unwrap_or(""))
            )
        },
    },
    PatternRule {
        name: "downloads",
        matcher: |p| p.is("action", "data_raum") && p.has("id") && p.has("download"),
        generator: |p| {
            format!(
                "/dr/{}/dl/{}",
                p.get("id").unwrap_or(""),
                encode_download_filename(p.get("download").unwrap_or(""))
            )
        },
    },
];

/// Translates query parameters into the canonical short path.
///
/// # Errors
///
/// Returns [`GenerateError::NoPatternMatch`] if no rule in the table
/// matches the parameter mapping.
pub fn translate(params: &QueryParams) -> Result<String, GenerateError> {
    let rule = URL_PATTERNS
        .iter()
        .find(|rule| (rule.matcher)(params))
        .ok_or(GenerateError::NoPatternMatch)?;

    tracing::debug!(pattern = rule.name, "matched URL pattern");

    Ok((rule.generator)(params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news() {
        let params = QueryParams::from([("action", "start_news"), ("cmd", "view"), ("id", "123")]);
        assert_eq!(translate(&params).unwrap(), "/n/123");
    }

    #[test]
    fn test_news_requires_cmd_view() {
        let params = QueryParams::from([("action", "start_news"), ("cmd", "edit"), ("id", "123")]);
        assert_eq!(translate(&params), Err(GenerateError::NoPatternMatch));
    }

    #[test]
    fn test_veranstaltung() {
        let params = QueryParams::from([("veranstaltung", "123")]);
        assert_eq!(translate(&params).unwrap(), "/v/123");
    }

    #[test]
    fn test_veranstaltung_empty_value_does_not_match() {
        let params = QueryParams::from([("veranstaltung", "")]);
        assert_eq!(translate(&params), Err(GenerateError::NoPatternMatch));
    }

    #[test]
    fn test_veranstaltung_value_is_encoded() {
        let params = QueryParams::from([("veranstaltung", "sommerfest 2025")]);
        assert_eq!(translate(&params).unwrap(), "/v/sommerfest%202025");
    }

    #[test]
    fn test_veranstaltung_anmelden() {
        let params = QueryParams::from([("veranstaltunganmelden", "123")]);
        assert_eq!(translate(&params).unwrap(), "/va/123");
    }

    #[test]
    fn test_event_anmelden() {
        let params = QueryParams::from([("action", "events_anmeldungen"), ("id", "123")]);
        assert_eq!(translate(&params).unwrap(), "/ea/123");
    }

    #[test]
    fn test_event_anmelden_empty_id_does_not_match() {
        let params = QueryParams::from([("action", "events_anmeldungen"), ("id", "")]);
        assert_eq!(translate(&params), Err(GenerateError::NoPatternMatch));
    }

    #[test]
    fn test_newsletter_only() {
        let params = QueryParams::from([("newsletter", "456")]);
        assert_eq!(translate(&params).unwrap(), "/nl/456");
    }

    #[test]
    fn test_article_only() {
        let params = QueryParams::from([("artikel", "789")]);
        assert_eq!(translate(&params).unwrap(), "/a/789");
    }

    #[test]
    fn test_newsletter_with_article_wins_over_both_single_rules() {
        let params = QueryParams::from([("newsletter", "456"), ("artikel", "789")]);
        assert_eq!(translate(&params).unwrap(), "/a/789/nl/456");
    }

    #[test]
    fn test_downloads_uses_legacy_encoding() {
        let params = QueryParams::from([
            ("action", "data_raum"),
            ("id", "345"),
            ("download", "Test-Protokoll Versammlung 2025-06-11.pdf"),
        ]);
        assert_eq!(
            translate(&params).unwrap(),
            "/dr/345/dl/Test-Protokoll+Versammlung+2025-06-11.pdf"
        );
    }

    #[test]
    fn test_downloads_requires_both_id_and_download() {
        let params = QueryParams::from([("action", "data_raum"), ("id", "345")]);
        assert_eq!(translate(&params), Err(GenerateError::NoPatternMatch));
    }

    #[test]
    fn test_veranstaltung_wins_over_later_rules() {
        // veranstaltung sits above newsletter in the table
        let params = QueryParams::from([("veranstaltung", "123"), ("newsletter", "456")]);
        assert_eq!(translate(&params).unwrap(), "/v/123");
    }

    #[test]
    fn test_unknown_parameters_do_not_match() {
        let params = QueryParams::from([("unknown", "1")]);
        assert_eq!(translate(&params), Err(GenerateError::NoPatternMatch));
    }

    #[test]
    fn test_empty_mapping_does_not_match() {
        let params = QueryParams::default();
        assert_eq!(translate(&params), Err(GenerateError::NoPatternMatch));
    }
}
