// Colored terminal output for lookup results and failures.
//
// main.rs delegates all user-facing formatting here.

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{LookupError, RETRY_HINT};
use crate::pipeline::{LookupHandle, TopicReport};
use crate::resolver::openai::MODEL;

/// Busy-state text, shared with the web form's submit button.
pub fn busy_message() -> String {
    format!("{MODEL} is analyzing your input and finding relevant topics...")
}

/// Spinner shown while the completion call is in flight.
pub fn busy_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg}")
            .expect("valid template"),
    );
    pb.set_message(busy_message());
    pb
}

/// Wait for a submitted lookup, ticking the busy spinner until it finishes.
pub async fn wait_with_spinner(handle: LookupHandle) -> Result<TopicReport, LookupError> {
    let pb = busy_spinner();
    while !handle.is_finished() {
        pb.tick();
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    pb.finish_and_clear();
    handle.wait().await
}

/// Display a successful lookup: the trend link, then the readable topics.
pub fn display_report(report: &TopicReport) {
    print!("{}", format_report(report));
}

/// Build the text `display_report` prints.
pub fn format_report(report: &TopicReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n{}\n",
        "Success! Found relevant topics.".green().bold()
    ));

    out.push_str(&format!(
        "\n{}\n",
        "=== Your Custom Wikipedia Pageview URL ===".bold()
    ));
    out.push_str(&format!(
        "{}\n",
        "Open this link to see the 20-day pageview trends for these topics. \
         Bookmark it to monitor interest over time."
            .dimmed()
    ));
    out.push_str(&format!("\n  {}\n", report.url.as_str().cyan().underline()));

    out.push_str(&format!(
        "\n{}\n",
        format!("=== Topics Found by {MODEL} ===").bold()
    ));
    out.push_str(&format!("{}\n", report.readable_list()));
    out
}

/// Display a failed lookup. Missing input is a warning; the rest are
/// errors, and resolution failures add a hint to try again.
pub fn display_error(err: &LookupError) {
    if err.is_warning() {
        println!("{} {}", "Warning:".yellow().bold(), err);
        return;
    }

    println!("{} {}", "Error:".red().bold(), err);
    if matches!(err, LookupError::ResolutionFailure(_)) {
        println!("{}", RETRY_HINT.red());
    }
}
