// Form handlers — GET / and POST /.
//
// Submission always answers 200 with a full page: the result on success,
// the warning or error above the still-filled form otherwise.

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use crate::pipeline;
use crate::query::Query;
use crate::web::pages::{render_page, Outcome};
use crate::web::AppState;

/// Urlencoded form body. Missing fields arrive as empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub product_description: String,
    #[serde(default)]
    pub customer_profile: String,
}

/// GET / — render the empty form.
pub async fn show_form() -> Html<String> {
    Html(render_page(&FormInput::default(), None))
}

/// POST / — run one lookup and render its outcome.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(input): Form<FormInput>,
) -> Html<String> {
    let query = Query {
        product_description: input.product_description.clone(),
        customer_profile: input.customer_profile.clone(),
    };

    let outcome = match pipeline::run(&state.config, state.client.as_ref(), &query).await {
        Ok(report) => Outcome::Found(report),
        Err(e) => Outcome::Failed(e),
    };

    Html(render_page(&input, Some(&outcome)))
}
