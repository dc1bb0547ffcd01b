// Prompt templates for the topic lookup.
//
// Both messages are fixed apart from the two user fields, which are
// embedded verbatim. The model is told to answer with exactly 10 titles,
// but the parser only requires 5 (see topics::MIN_SEGMENTS).

use crate::query::Query;

const SYSTEM_PROMPT: &str = "You are an expert market researcher and SEO strategist. \
Your task is to identify highly relevant Wikipedia pages that an ideal customer for a \
given product might be interested in. These pages represent potential content marketing \
or advertising opportunities.";

/// Example reply shown to the model. Also a handy fixture.
pub const EXAMPLE_REPLY: &str = "Sustainable_living|Circular_economy|Minimalism|Zero-waste_movement|Ethical_consumerism|Fair_trade|Slow_food|Community-supported_agriculture|Permaculture|B_Corporation";

/// A two-message chat prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    pub fn for_query(query: &Query) -> Self {
        Self {
            system: SYSTEM_PROMPT.to_string(),
            user: user_prompt(&query.product_description, &query.customer_profile),
        }
    }
}

fn user_prompt(product_desc: &str, customer_profile: &str) -> String {
    format!(
        "**Product Description:**
{product_desc}

**Ideal Customer Profile:**
{customer_profile}

---
**Instructions:**
1.  Analyze the product and customer profile to understand their core interests, problems, and related concepts.
2.  Generate a list of exactly 10 highly relevant English Wikipedia page titles.
3.  Format the titles as they appear in a Wikipedia URL (e.g., use underscores `_` instead of spaces, like `Sustainable_living`).
4.  **CRITICAL:** Your entire response MUST BE ONLY these 10 titles, separated by a single vertical bar `|` character. Do not include any introductory text, explanations, numbers, or bullet points.

**Example of a perfect response:**
{EXAMPLE_REPLY}"
    )
}
