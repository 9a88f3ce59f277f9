//! Query parameter mapping parsed from a long URL.

use std::collections::HashMap;
use url::Url;

/// Decoded query parameters of a long URL, keyed case-sensitively by name.
///
/// Built fresh per translation call. When a key occurs more than once, the
/// first occurrence wins, matching `URLSearchParams.get` semantics in the
/// browser form that content editors paste these URLs from.
#[derive(Debug, Default, Clone)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    /// Extracts the query parameters of `url`.
    ///
    /// Values are decoded with `application/x-www-form-urlencoded` rules,
    /// so `+` in the query string becomes a space.
    pub fn from_url(url: &Url) -> Self {
        let mut map = HashMap::new();
        for (key, value) in url.query_pairs() {
            map.entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        Self(map)
    }

    /// Returns the decoded value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns whether `key` is present, even with an empty value.
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns whether `key` is present with exactly `value`.
    pub fn is(&self, key: &str, value: &str) -> bool {
        self.get(key) == Some(value)
    }

    /// Returns whether `key` is present with a non-empty value.
    pub fn non_empty(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }
}

#[cfg(test)]
impl<const N: usize> From<[(&str, &str); N]> for QueryParams {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> QueryParams {
        QueryParams::from_url(&Url::parse(input).unwrap())
    }

    #[test]
    fn test_basic_accessors() {
        let params = parse("https://wff-berlin.de?veranstaltung=123&leer=");
        assert_eq!(params.get("veranstaltung"), Some("123"));
        assert!(params.has("veranstaltung"));
        assert!(params.non_empty("veranstaltung"));
        assert!(params.is("veranstaltung", "123"));

        assert!(params.has("leer"));
        assert!(!params.non_empty("leer"));

        assert!(!params.has("fehlt"));
        assert_eq!(params.get("fehlt"), None);
        assert!(!params.is("fehlt", "123"));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let params = parse("https://wff-berlin.de?Artikel=7");
        assert!(params.has("Artikel"));
        assert!(!params.has("artikel"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let params = parse("https://wff-berlin.de?id=1&id=2");
        assert_eq!(params.get("id"), Some("1"));
    }

    #[test]
    fn test_plus_decodes_to_space() {
        let params = parse("https://wff-berlin.de?download=Mein+Dokument.pdf");
        assert_eq!(params.get("download"), Some("Mein Dokument.pdf"));
    }

    #[test]
    fn test_percent_sequences_decode() {
        let params = parse("https://wff-berlin.de?download=K%C3%B6ln%202025.pdf");
        assert_eq!(params.get("download"), Some("Köln 2025.pdf"));
    }

    #[test]
    fn test_no_query_string() {
        let params = parse("https://wff-berlin.de/seite");
        assert!(!params.has("veranstaltung"));
    }
}
