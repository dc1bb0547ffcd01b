// Trend URL construction and the human-readable topic list.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::resolver::topics::{TopicList, SEPARATOR};

/// Fixed pageviews query: English Wikipedia, all platforms, human traffic,
/// no redirects, last 20 days. Page titles are appended to `pages=`.
pub const BASE_URL: &str = "https://pageviews.wmcloud.org/?project=en.wikipedia.org&platform=all-access&agent=user&redirects=0&range=latest-20&pages=";

/// Bytes left unescaped inside a title: alphanumerics plus `_ . - ~ /`.
/// Everything else, the separator included, is percent-encoded.
const TITLE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// A link to the pageviews comparison tool for a set of titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrendUrl(String);

impl TrendUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The encoded, pipe-joined titles after `pages=`.
    pub fn pages_param(&self) -> &str {
        &self.0[BASE_URL.len()..]
    }
}

impl fmt::Display for TrendUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Percent-encode a single title, after trimming surrounding whitespace.
pub fn encode_title(title: &str) -> String {
    utf8_percent_encode(title.trim(), TITLE).to_string()
}

/// Build the trend URL. Titles are encoded one at a time, then joined with
/// a literal separator, so the separators themselves are never escaped.
pub fn build_trend_url(topics: &TopicList) -> TrendUrl {
    let separator = SEPARATOR.to_string();
    let pages = topics
        .iter()
        .map(encode_title)
        .collect::<Vec<_>>()
        .join(separator.as_str());
    TrendUrl(format!("{BASE_URL}{pages}"))
}

/// Display form of each title: underscores become spaces, then trimmed.
/// Never fed back into the URL.
pub fn readable_topics(topics: &TopicList) -> Vec<String> {
    topics
        .iter()
        .map(|t| t.replace('_', " ").trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscore_and_hyphen_survive() {
        assert_eq!(encode_title("Zero-waste_movement"), "Zero-waste_movement");
    }

    #[test]
    fn test_punctuation_and_unicode_are_escaped() {
        assert_eq!(encode_title("Café_(drink)"), "Caf%C3%A9_%28drink%29");
        assert_eq!(encode_title("AT&T"), "AT%26T");
        assert_eq!(encode_title("A|B"), "A%7CB");
    }

    #[test]
    fn test_segment_whitespace_is_trimmed_before_encoding() {
        assert_eq!(encode_title(" Fair_trade "), "Fair_trade");
        assert_eq!(encode_title("Slow food"), "Slow%20food");
    }

    #[test]
    fn test_url_joins_with_literal_pipes() {
        let topics = TopicList::parse("A|B_c|D|E|F").unwrap();
        let url = build_trend_url(&topics);
        assert_eq!(url.as_str(), format!("{BASE_URL}A|B_c|D|E|F"));
        assert_eq!(url.pages_param(), "A|B_c|D|E|F");
    }

    #[test]
    fn test_readable_replaces_underscores() {
        let topics = TopicList::parse("Fair_trade| Slow_food |C|D|E_").unwrap();
        assert_eq!(
            readable_topics(&topics),
            ["Fair trade", "Slow food", "C", "D", "E"]
        );
    }
}
