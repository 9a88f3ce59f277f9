//! Percent-encoding for generated path segments.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// Characters that survive unescaped in a path segment: alphanumerics plus
// the unreserved marks `- _ . ! ~ * ' ( )`. Everything else, including
// non-ASCII (as UTF-8 byte sequences), is percent-encoded.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes an identifier value for use as a short path segment.
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

/// Encodes a download filename in the legacy web-form style.
///
/// Standard percent-encoding is applied first, then encoded spaces are
/// rendered as `+` instead of `%20`. The redirect target for data room
/// downloads expects this older server-side convention; all other
/// characters keep their standard encoding.
pub fn encode_download_filename(value: &str) -> String {
    encode_segment(value).replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_segment_plain() {
        assert_eq!(encode_segment("123"), "123");
        assert_eq!(encode_segment("sommerfest-2025"), "sommerfest-2025");
        assert_eq!(encode_segment("bericht_v2.pdf"), "bericht_v2.pdf");
    }

    #[test]
    fn test_encode_segment_reserved_characters() {
        assert_eq!(encode_segment("a/b"), "a%2Fb");
        assert_eq!(encode_segment("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_segment("nr#7"), "nr%237");
        assert_eq!(encode_segment("50%"), "50%25");
    }

    #[test]
    fn test_encode_segment_space() {
        assert_eq!(encode_segment("a b"), "a%20b");
    }

    #[test]
    fn test_encode_segment_umlauts() {
        assert_eq!(encode_segment("lauftreff-köln"), "lauftreff-k%C3%B6ln");
    }

    #[test]
    fn test_encode_download_filename_spaces_become_plus() {
        assert_eq!(
            encode_download_filename("Report Summary 2025-06-11.pdf"),
            "Report+Summary+2025-06-11.pdf"
        );
    }

    #[test]
    fn test_encode_download_filename_other_characters_stay_standard() {
        assert_eq!(
            encode_download_filename("Protokoll & Anlage #2.pdf"),
            "Protokoll+%26+Anlage+%232.pdf"
        );
    }

    #[test]
    fn test_encode_download_filename_no_spaces() {
        assert_eq!(
            encode_download_filename("Satzung_2024.pdf"),
            "Satzung_2024.pdf"
        );
    }
}
