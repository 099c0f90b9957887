//! Scene request handlers
//!
//! Both endpoints run the same short-circuit sequence: rate limit,
//! consent, sanitize, upstream call, response shaping. The variants
//! differ only in system instruction and response field name.

use crate::reject::{api_reject, ApiError};
use crate::AppState;
use scenecraft_core::{check_consent, sanitize, AdmissionError, PromptPayload, PromptVariant, SceneRequest};
use std::net::SocketAddr;
use std::sync::Arc;
use warp::{Rejection, Reply};

/// Handle one scene submission
///
/// The only suspension point is the upstream call; if the caller
/// disconnects first, warp drops this future and the outbound request
/// is cancelled with it.
pub(crate) async fn handle_scene(
    variant: PromptVariant,
    state: Arc<AppState>,
    addr: Option<SocketAddr>,
    consent: Option<String>,
    body: SceneRequest,
) -> Result<impl Reply, Rejection> {
    let client_id = addr.map_or_else(|| "unknown".to_owned(), |a| a.ip().to_string());

    if !state.limiter.admit(&client_id) {
        return Err(api_reject(AdmissionError::RateLimitExceeded));
    }

    if !check_consent(consent.as_deref()) {
        return Err(api_reject(AdmissionError::ConsentRequired));
    }

    let cleaned = sanitize::validate(&body.scene).map_err(api_reject)?;

    let payload = PromptPayload::new(variant, cleaned);
    let completion = state.model.complete(&payload).await.map_err(|e| {
        tracing::error!(client = %client_id, error = %e, "upstream call failed");
        api_reject(e)
    })?;

    // Analysis must never come back as written scene content. Edit
    // suggestions are exempt: that instruction asks the model to quote
    // original lines, slug lines included.
    if variant == PromptVariant::Analyze && sanitize::looks_like_narrative(&completion) {
        tracing::warn!(client = %client_id, "completion rejected as narrative content");
        return Err(warp::reject::custom(ApiError::NarrativeOutput));
    }

    tracing::info!(client = %client_id, ?variant, "scene request served");

    let mut response = serde_json::Map::new();
    response.insert(
        variant.response_field().to_owned(),
        serde_json::Value::String(completion),
    );
    Ok(warp::reply::json(&serde_json::Value::Object(response)))
}

/// Liveness probe body
pub(crate) fn health_body() -> impl Reply {
    warp::reply::json(&serde_json::json!({ "status": "ok" }))
}
