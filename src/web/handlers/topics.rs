// POST /api/topics — JSON lookup.
//
// Returns 200 with the report on success.
// Returns 400 for missing input, 503 for a bad API key configuration and
// 502 when the completion call fails or its reply is malformed.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::error::LookupError;
use crate::pipeline;
use crate::query::Query;
use crate::web::{api_error, AppState};

#[derive(Deserialize)]
pub struct TopicsRequest {
    #[serde(default)]
    product_description: String,
    #[serde(default)]
    customer_profile: String,
}

pub async fn find_topics(
    State(state): State<AppState>,
    Json(body): Json<TopicsRequest>,
) -> Response {
    let query = Query {
        product_description: body.product_description,
        customer_profile: body.customer_profile,
    };

    match pipeline::run(&state.config, state.client.as_ref(), &query).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            let status = match e {
                LookupError::MissingInput => StatusCode::BAD_REQUEST,
                LookupError::InvalidCredential => StatusCode::SERVICE_UNAVAILABLE,
                LookupError::ResolutionFailure(_) => StatusCode::BAD_GATEWAY,
            };
            api_error(status, e.kind(), &e.to_string())
        }
    }
}
