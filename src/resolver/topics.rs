// TopicList — the parsed reply from the completion endpoint.

use serde::Serialize;

use crate::error::LookupError;

/// Separator between titles, both in the model's reply and in the trend URL.
pub const SEPARATOR: char = '|';

/// Fewest segments accepted from the model. The prompt asks for exactly 10;
/// anything from 5 up is passed through unchanged.
pub const MIN_SEGMENTS: usize = 5;

const MALFORMED_REPLY: &str = "AI model did not return the expected pipe-separated format.";

/// Ordered Wikipedia page titles, as split from the model's reply.
///
/// Segments are kept raw: no per-title trimming, no dedup, no emptiness check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TopicList(Vec<String>);

impl TopicList {
    /// Parse a raw reply. The reply is trimmed, must contain a separator,
    /// and must split into at least `MIN_SEGMENTS` segments.
    pub fn parse(reply: &str) -> Result<Self, LookupError> {
        let trimmed = reply.trim();
        if !trimmed.contains(SEPARATOR) {
            return Err(LookupError::ResolutionFailure(MALFORMED_REPLY.to_string()));
        }

        let segments: Vec<String> = trimmed.split(SEPARATOR).map(str::to_string).collect();
        if segments.len() < MIN_SEGMENTS {
            return Err(LookupError::ResolutionFailure(MALFORMED_REPLY.to_string()));
        }

        Ok(Self(segments))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
