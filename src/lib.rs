// Topicmine: AI-powered topic mining for content marketing.
//
// This is the library root. Each module corresponds to one stage of the
// lookup pipeline: collect a query, resolve topics via a language model,
// build the pageview trend link, display the result.

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod query;
pub mod resolver;
pub mod status;
pub mod trends;

#[cfg(feature = "web")]
pub mod web;
