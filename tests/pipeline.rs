// Pipeline tests — Query -> resolver -> trend link, with fake completion
// clients standing in for the hosted endpoint. No network access.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use percent_encoding::percent_decode_str;

use topicmine::config::Config;
use topicmine::error::LookupError;
use topicmine::output::terminal::format_report;
use topicmine::pipeline::{self, TopicReport};
use topicmine::query::Query;
use topicmine::resolver::prompt::{Prompt, EXAMPLE_REPLY};
use topicmine::resolver::resolve_topics;
use topicmine::resolver::traits::CompletionClient;
use topicmine::trends::link::{encode_title, BASE_URL};

const COFFEE_REPLY: &str =
    "Coffee|Tea|Espresso|Beans|Roasting|Brewing|Fair_trade|Organic|Subscription|Gourmet";

/// Returns a canned reply and counts how many times it was called.
struct CannedClient {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl CannedClient {
    fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for CannedClient {
    async fn complete(&self, _prompt: &Prompt) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(message) => Err(anyhow::anyhow!("{message}")),
        }
    }
}

fn config() -> Config {
    Config::with_api_key("sk-proj-test-key")
}

fn coffee_query() -> Query {
    Query::new("A coffee subscription box", "Urban millennials").unwrap()
}

async fn run_with(client: &CannedClient, query: &Query) -> Result<TopicReport, LookupError> {
    pipeline::run(&config(), client, query).await
}

// ============================================================
// Successful lookups
// ============================================================

#[tokio::test]
async fn coffee_scenario_builds_url_and_readable_list() {
    let client = CannedClient::replying(COFFEE_REPLY);
    let report = run_with(&client, &coffee_query()).await.unwrap();

    let expected = format!("{BASE_URL}{COFFEE_REPLY}");
    assert_eq!(report.url.as_str(), expected);
    let displayed = format_report(&report);
    assert!(displayed.contains(
        "Coffee, Tea, Espresso, Beans, Roasting, Brewing, Fair trade, Organic, Subscription, Gourmet\n"
    ));
    assert!(displayed.contains(&expected));
    assert_eq!(report.topics.len(), 10);
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn url_pages_round_trip_to_original_segments() {
    let reply = "Café_culture|AT&T|Zero-waste_movement|C++|Ünïcödé|100%_juice|Q&A|Slow_food";
    let client = CannedClient::replying(reply);
    let report = run_with(&client, &coffee_query()).await.unwrap();

    assert!(report.url.as_str().starts_with(BASE_URL));

    let decoded: Vec<String> = report
        .url
        .pages_param()
        .split('|')
        .map(|p| percent_decode_str(p).decode_utf8().unwrap().into_owned())
        .collect();
    let original: Vec<&str> = reply.split('|').collect();
    assert_eq!(decoded, original);
}

#[tokio::test]
async fn url_is_a_valid_absolute_url() {
    let client = CannedClient::replying(EXAMPLE_REPLY);
    let report = run_with(&client, &coffee_query()).await.unwrap();

    let parsed = reqwest::Url::parse(report.url.as_str()).unwrap();
    assert_eq!(parsed.host_str(), Some("pageviews.wmcloud.org"));
    let pages = parsed
        .query_pairs()
        .find(|(k, _)| k == "pages")
        .map(|(_, v)| v.into_owned())
        .unwrap();
    assert_eq!(pages, EXAMPLE_REPLY);
}

#[tokio::test]
async fn reply_whitespace_is_trimmed() {
    let client = CannedClient::replying("\n\n  A|B|C|D|E \n");
    let report = run_with(&client, &coffee_query()).await.unwrap();
    assert_eq!(report.url.pages_param(), "A|B|C|D|E");
}

#[test]
fn encoding_never_introduces_a_raw_pipe() {
    for title in ["Zero-waste_movement", "A|B", "Pipe_|_dream", "|"] {
        let encoded = encode_title(title);
        assert!(!encoded.contains('|'), "{title} encoded to {encoded}");
    }
    assert_eq!(encode_title("Zero-waste_movement"), "Zero-waste_movement");
}

// ============================================================
// Early failures make no request
// ============================================================

#[tokio::test]
async fn empty_product_is_missing_input_without_request() {
    let client = CannedClient::replying(COFFEE_REPLY);
    let query = Query {
        product_description: String::new(),
        customer_profile: "Urban millennials".to_string(),
    };

    let err = run_with(&client, &query).await.unwrap_err();
    assert!(matches!(err, LookupError::MissingInput));
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn empty_customer_is_missing_input_without_request() {
    let client = CannedClient::replying(COFFEE_REPLY);
    let query = Query {
        product_description: "A coffee subscription box".to_string(),
        customer_profile: String::new(),
    };

    let err = run_with(&client, &query).await.unwrap_err();
    assert!(matches!(err, LookupError::MissingInput));
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn implausible_key_is_invalid_credential_without_request() {
    let client = CannedClient::replying(COFFEE_REPLY);
    for key in ["", "not-a-key", "sk-legacy"] {
        let err = pipeline::run(&Config::with_api_key(key), &client, &coffee_query())
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::InvalidCredential), "key {key:?}");
    }
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn missing_input_is_reported_before_bad_key() {
    let client = CannedClient::replying(COFFEE_REPLY);
    let query = Query {
        product_description: String::new(),
        customer_profile: String::new(),
    };
    let err = pipeline::run(&Config::with_api_key(""), &client, &query)
        .await
        .unwrap_err();
    assert!(matches!(err, LookupError::MissingInput));
}

// ============================================================
// Resolution failures
// ============================================================

#[tokio::test]
async fn reply_without_pipe_is_resolution_failure() {
    let client = CannedClient::replying("Sorry, I cannot help with that request.");
    let err = run_with(&client, &coffee_query()).await.unwrap_err();
    assert!(matches!(err, LookupError::ResolutionFailure(_)));
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn too_few_segments_is_resolution_failure() {
    let client = CannedClient::replying("A|B|C");
    let err = run_with(&client, &coffee_query()).await.unwrap_err();
    assert!(matches!(err, LookupError::ResolutionFailure(_)));

    let client = CannedClient::replying("A|B|C|D|E");
    assert!(run_with(&client, &coffee_query()).await.is_ok());
}

#[tokio::test]
async fn transport_error_text_is_surfaced_and_not_retried() {
    let client = CannedClient::failing("Chat completions API returned 429: rate limited");
    let err = run_with(&client, &coffee_query()).await.unwrap_err();

    match &err {
        LookupError::ResolutionFailure(text) => {
            assert_eq!(text, "Chat completions API returned 429: rate limited")
        }
        other => panic!("expected ResolutionFailure, got {other:?}"),
    }
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn resolver_returns_raw_segments() {
    let client = CannedClient::replying("A |B| C|D|E");
    let topics = resolve_topics(&client, &coffee_query()).await.unwrap();
    assert_eq!(topics.as_slice(), ["A ", "B", " C", "D", "E"]);
}

// ============================================================
// Background submission
// ============================================================

#[tokio::test]
async fn submitted_lookup_resolves_through_handle() {
    let client = Arc::new(CannedClient::replying(COFFEE_REPLY));
    let handle = pipeline::submit(Arc::new(config()), client.clone(), coffee_query());

    let report = handle.wait().await.unwrap();
    assert_eq!(report.topics.len(), 10);
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn submitted_lookup_reports_finished_before_wait() {
    let client = Arc::new(CannedClient::replying(COFFEE_REPLY));
    let handle = pipeline::submit(Arc::new(config()), client, coffee_query());

    for _ in 0..1000 {
        if handle.is_finished() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    assert!(handle.is_finished());
    assert!(handle.wait().await.is_ok());
}

#[tokio::test]
async fn submitted_lookup_reports_failure_through_handle() {
    let client = Arc::new(CannedClient::replying("A|B"));
    let handle = pipeline::submit(Arc::new(config()), client, coffee_query());
    assert!(matches!(
        handle.wait().await,
        Err(LookupError::ResolutionFailure(_))
    ));
}

#[test]
fn report_serializes_as_flat_json() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let client = CannedClient::replying("A_b|C|D|E|F");
    let report = rt.block_on(run_with(&client, &coffee_query())).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["topics"][0], "A_b");
    assert_eq!(json["readable"][0], "A b");
    assert_eq!(json["url"], format!("{BASE_URL}A_b|C|D|E|F"));
}
