// Topic resolution — ask a language model for relevant Wikipedia titles.
//
// The CompletionClient trait is the seam between the pipeline and the
// hosted endpoint. OpenAiClient is the production implementation; tests
// substitute fakes that return canned replies.

pub mod openai;
pub mod prompt;
pub mod topics;
pub mod traits;

use tracing::{debug, info};

use crate::error::LookupError;
use crate::query::Query;
use prompt::Prompt;
use topics::TopicList;
use traits::CompletionClient;

/// Resolve a query into a list of Wikipedia page titles.
///
/// Makes exactly one completion call. Transport errors and malformed
/// replies both come back as `ResolutionFailure`; there is no retry.
pub async fn resolve_topics(
    client: &dyn CompletionClient,
    query: &Query,
) -> Result<TopicList, LookupError> {
    let prompt = Prompt::for_query(query);
    debug!(
        system_len = prompt.system.len(),
        user_len = prompt.user.len(),
        "Built topic prompt"
    );

    let reply = client
        .complete(&prompt)
        .await
        .map_err(|e| LookupError::ResolutionFailure(format!("{e:#}")))?;

    let topics = TopicList::parse(&reply)?;
    info!(count = topics.len(), "Resolved topics");
    Ok(topics)
}
