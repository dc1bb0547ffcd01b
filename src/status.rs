// Configuration status display — shows endpoint, model and key plausibility.
//
// Never makes a network call: a key that passes here may still be
// rejected by the endpoint.

use colored::Colorize;

use crate::config::Config;
use crate::resolver::openai::{MODEL, TEMPERATURE};
use crate::trends::link::BASE_URL;

/// Display configuration status to the terminal.
pub fn show(config: &Config) {
    println!("Completion endpoint: {}", config.openai_base_url);
    println!("Model: {MODEL} (temperature {TEMPERATURE})");
    println!("API key: {}", config.redacted_api_key());

    if config.api_key_looks_valid() {
        println!("  {}", "Key format looks plausible".green());
    } else {
        println!("  {}", "Key missing or malformed".red());
        println!("  Set OPENAI_API_KEY in your .env file (project keys start with sk-proj)");
    }

    println!("Trend links: {}", BASE_URL.dimmed());
}
