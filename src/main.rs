use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use topicmine::config::Config;
use topicmine::output::terminal;
use topicmine::pipeline;
use topicmine::query::Query;
use topicmine::resolver::openai::OpenAiClient;
use topicmine::resolver::traits::CompletionClient;

/// Topicmine: AI-powered topic mining.
///
/// Describe a product and its ideal customer; get ten relevant Wikipedia
/// topics and a link that tracks their pageview trends.
#[derive(Parser)]
#[command(name = "topicmine", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find Wikipedia topics for a product and customer profile
    Find {
        /// Product or service description
        #[arg(long, default_value = "")]
        product: String,

        /// Ideal customer profile
        #[arg(long, default_value = "")]
        customer: String,

        /// Print the result as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show configuration status (endpoint, model, API key format)
    Status,

    /// Serve the web form
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: 8080)
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Address to bind (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("topicmine=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            product,
            customer,
            json,
        } => {
            let config = Config::load()?;
            let query = Query {
                product_description: product,
                customer_profile: customer,
            };

            // Empty fields never reach the network
            if let Err(e) = query.validate() {
                report_failure(&e, json)?;
                return Ok(());
            }

            let client: Arc<dyn CompletionClient> = Arc::new(OpenAiClient::new(&config)?);
            let handle = pipeline::submit(Arc::new(config), client, query);

            let outcome = if json {
                handle.wait().await
            } else {
                terminal::wait_with_spinner(handle).await
            };

            match outcome {
                Ok(report) => {
                    info!(topics = report.topics.len(), "Lookup complete");
                    if json {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    } else {
                        terminal::display_report(&report);
                    }
                }
                Err(e) => report_failure(&e, json)?,
            }
        }

        Commands::Status => {
            let config = Config::load()?;
            topicmine::status::show(&config);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            if !config.api_key_looks_valid() {
                tracing::warn!("OPENAI_API_KEY missing or malformed; lookups will be refused");
            }
            let client: Arc<dyn CompletionClient> = Arc::new(OpenAiClient::new(&config)?);
            topicmine::web::run_server(config, client, port, &bind).await?;
        }
    }

    Ok(())
}

/// Print a failed lookup. Failures are reported, not propagated: the
/// process exits normally so the user can simply run the lookup again.
fn report_failure(err: &topicmine::error::LookupError, json: bool) -> Result<()> {
    if json {
        let body = serde_json::json!({ "error": err.to_string(), "kind": err.kind() });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        terminal::display_error(err);
    }
    Ok(())
}
