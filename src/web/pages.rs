// Server-rendered HTML for the form page.
//
// All user-supplied and model-supplied text goes through `escape_html`
// before it is written into the page.

use crate::error::{LookupError, RETRY_HINT};
use crate::output::terminal::busy_message;
use crate::pipeline::TopicReport;
use crate::resolver::openai::MODEL;
use crate::web::handlers::form::FormInput;

/// What happened on the last submission.
pub enum Outcome {
    Found(TopicReport),
    Failed(LookupError),
}

const PRODUCT_PLACEHOLDER: &str = "e.g., A subscription box for artisanal, ethically-sourced \
coffee beans from around the world. We focus on single-origin, specialty grade coffee.";

const CUSTOMER_PLACEHOLDER: &str = "e.g., Environmentally conscious millennials, aged 25-40, \
living in urban areas. They appreciate quality over quantity, are interested in the story \
behind their products, and frequent local cafes.";

const STYLE: &str = "body{font-family:sans-serif;max-width:720px;margin:2rem auto;padding:0 1rem}\
textarea{width:100%;height:150px}\
button,.link-button{display:block;width:100%;padding:.75rem;margin-top:1rem;text-align:center;\
background:#ff4b4b;color:#fff;border:0;border-radius:6px;text-decoration:none;font-size:1rem}\
button:disabled{opacity:.6}\
.warning{background:#fff8e1;padding:.75rem}.error{background:#fdecea;padding:.75rem}\
.success{background:#e8f5e9;padding:.75rem}";

/// Render the full page: form, then the outcome of the last submission.
pub fn render_page(input: &FormInput, outcome: Option<&Outcome>) -> String {
    let mut body = String::new();

    body.push_str("<h1>&#x1F4C8; AI-Powered Topic Mining Tool</h1>\n");
    body.push_str(
        "<p>Describe your product and ideal customer. The system will find 10 relevant \
         Wikipedia topics and generate a link to track their popularity.</p>\n",
    );
    body.push_str(&render_form(input));

    match outcome {
        Some(Outcome::Found(report)) => body.push_str(&render_report(report)),
        Some(Outcome::Failed(err)) => body.push_str(&render_error(err)),
        None => {}
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>AI-Powered Topic Mining Tool</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n{body}</body>\n</html>\n"
    )
}

fn render_form(input: &FormInput) -> String {
    format!(
        "<form method=\"post\" action=\"/\" \
         onsubmit=\"var b=this.querySelector('button');b.disabled=true;b.textContent='{busy}';\">\n\
         <label for=\"product_description\"><strong>1. Enter your Product or Service Description</strong></label>\n\
         <textarea id=\"product_description\" name=\"product_description\" placeholder=\"{p_ph}\">{p}</textarea>\n\
         <label for=\"customer_profile\"><strong>2. Describe your Ideal Customer Profile</strong></label>\n\
         <textarea id=\"customer_profile\" name=\"customer_profile\" placeholder=\"{c_ph}\">{c}</textarea>\n\
         <button type=\"submit\">&#x1F680; Find Relevant Topics</button>\n\
         </form>\n",
        busy = escape_html(&busy_message()),
        p_ph = escape_html(PRODUCT_PLACEHOLDER),
        c_ph = escape_html(CUSTOMER_PLACEHOLDER),
        p = escape_html(&input.product_description),
        c = escape_html(&input.customer_profile),
    )
}

fn render_report(report: &TopicReport) -> String {
    format!(
        "<p class=\"success\">&#x2705; Success! Found relevant topics.</p>\n<hr>\n\
         <h2>Your Custom Wikipedia Pageview URL</h2>\n\
         <p>Click the button below to see the 20-day pageview trends for these topics. \
         You can bookmark the link to monitor interest over time!</p>\n\
         <a class=\"link-button\" href=\"{url}\" target=\"_blank\" rel=\"noopener\">View Wikipedia Trends Now</a>\n\
         <hr>\n<h4>Topics Found by {MODEL}:</h4>\n<p class=\"topics\">{topics}</p>\n",
        url = escape_html(report.url.as_str()),
        topics = escape_html(&report.readable_list()),
    )
}

fn render_error(err: &LookupError) -> String {
    if err.is_warning() {
        return format!(
            "<p class=\"warning\">&#x26A0;&#xFE0F; {}</p>\n",
            escape_html(&err.to_string())
        );
    }

    let mut html = format!("<p class=\"error\">{}</p>\n", escape_html(&err.to_string()));
    if matches!(err, LookupError::ResolutionFailure(_)) {
        html.push_str(&format!(
            "<p class=\"error\">&#x274C; {}</p>\n",
            escape_html(RETRY_HINT)
        ));
    }
    html
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_empty_form_has_no_outcome() {
        let html = render_page(&FormInput::default(), None);
        assert!(html.contains("name=\"product_description\""));
        assert!(html.contains("name=\"customer_profile\""));
        assert!(!html.contains("class=\"warning\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_submitted_text_is_echoed_escaped() {
        let input = FormInput {
            product_description: "<script>alert(1)</script>".to_string(),
            customer_profile: "Makers & hackers".to_string(),
        };
        let html = render_page(&input, None);
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;</textarea>"));
        assert!(html.contains("Makers &amp; hackers</textarea>"));
        assert!(!html.contains("<script>alert(1)"));
    }

    #[test]
    fn test_missing_input_renders_warning() {
        let html = render_page(
            &FormInput::default(),
            Some(&Outcome::Failed(LookupError::MissingInput)),
        );
        assert!(html.contains("class=\"warning\""));
        assert!(html.contains("Please fill out both"));
    }

    #[test]
    fn test_resolution_failure_renders_retry_hint() {
        let html = render_page(
            &FormInput::default(),
            Some(&Outcome::Failed(LookupError::ResolutionFailure(
                "connection refused".to_string(),
            ))),
        );
        assert!(html.contains("connection refused"));
        assert!(html.contains("try again in a moment"));
    }
}
