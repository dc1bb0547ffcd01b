// Lookup pipeline — Query -> TopicList -> TrendUrl -> TopicReport.
//
// Checks run in a fixed order and stop at the first failure:
//   1. both input fields present   (MissingInput, no request)
//   2. API key looks plausible     (InvalidCredential, no request)
//   3. one completion call + parse (ResolutionFailure)
// Only a fully successful run produces a URL.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::LookupError;
use crate::query::Query;
use crate::resolver::resolve_topics;
use crate::resolver::topics::TopicList;
use crate::resolver::traits::CompletionClient;
use crate::trends::link::{build_trend_url, readable_topics, TrendUrl};

/// Result of one successful lookup.
#[derive(Debug, Clone, Serialize)]
pub struct TopicReport {
    pub topics: TopicList,
    pub url: TrendUrl,
    pub readable: Vec<String>,
}

impl TopicReport {
    /// Readable titles joined with ", ".
    pub fn readable_list(&self) -> String {
        self.readable.join(", ")
    }
}

/// Run one lookup to completion.
pub async fn run(
    config: &Config,
    client: &dyn CompletionClient,
    query: &Query,
) -> Result<TopicReport, LookupError> {
    query.validate()?;
    config.require_openai()?;

    info!("Resolving topics for query");
    let topics = match resolve_topics(client, query).await {
        Ok(topics) => topics,
        Err(e) => {
            warn!(error = %e, "Topic resolution failed");
            return Err(e);
        }
    };

    let url = build_trend_url(&topics);
    let readable = readable_topics(&topics);
    Ok(TopicReport {
        topics,
        url,
        readable,
    })
}

/// A lookup running in the background. Await `wait` for the outcome.
pub struct LookupHandle {
    task: JoinHandle<Result<TopicReport, LookupError>>,
}

impl LookupHandle {
    /// True once the lookup has finished, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub async fn wait(self) -> Result<TopicReport, LookupError> {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) => Err(LookupError::ResolutionFailure(format!(
                "lookup task did not complete: {e}"
            ))),
        }
    }
}

/// Start a lookup as a tokio task and return immediately, so the caller
/// can show a busy indicator while the completion call is in flight.
pub fn submit(
    config: Arc<Config>,
    client: Arc<dyn CompletionClient>,
    query: Query,
) -> LookupHandle {
    let task = tokio::spawn(async move { run(&config, client.as_ref(), &query).await });
    LookupHandle { task }
}
