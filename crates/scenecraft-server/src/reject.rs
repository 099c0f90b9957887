//! Rejection types and recovery
//!
//! Every pipeline refusal becomes a typed warp rejection here and is
//! recovered into a JSON error body with the right status. Detail
//! strings are user-facing: no system prompt text, no internal category
//! labels, no upstream error bodies.

use scenecraft_core::AdmissionError;
use scenecraft_upstream::UpstreamError;
use serde::Serialize;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

/// Challenge directive sent with 401 responses from the static guard
pub const CHALLENGE: &str = "Basic realm=\"scenecraft\"";

/// API request failure, carried through warp as a custom rejection
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Refused by the admission pipeline
    #[error(transparent)]
    Admission(#[from] AdmissionError),

    /// Upstream collaborator failed
    #[error("upstream unavailable: {0}")]
    Upstream(#[from] UpstreamError),

    /// Completion looked like generated screenplay content
    #[error("output rejected: narrative content detected")]
    NarrativeOutput,
}

impl ApiError {
    /// HTTP status for this failure
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Admission(AdmissionError::RateLimitExceeded) => StatusCode::TOO_MANY_REQUESTS,
            Self::Admission(_) | Self::NarrativeOutput => StatusCode::BAD_REQUEST,
            Self::Upstream(e) if e.is_missing_credential() => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// User-facing detail string
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Admission(e) => e.to_string(),
            Self::Upstream(e) if e.is_missing_credential() => {
                "missing upstream API key".to_owned()
            }
            Self::Upstream(_) => "upstream service unavailable, try again later".to_owned(),
            Self::NarrativeOutput => self.to_string(),
        }
    }
}

impl warp::reject::Reject for ApiError {}

/// Static guard refusal; recovered into 401 plus a challenge header
#[derive(Debug)]
pub struct Unauthorized;

impl warp::reject::Reject for Unauthorized {}

/// Wrap a pipeline error as a warp rejection
pub(crate) fn api_reject(err: impl Into<ApiError>) -> Rejection {
    warp::reject::custom(err.into())
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Recover rejections into JSON error responses
///
/// Installed once at the top of the route tree.
pub async fn handle_rejection(err: Rejection) -> Result<warp::reply::Response, Infallible> {
    let (status, detail, challenge) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "not found".to_owned(), false)
    } else if let Some(api) = err.find::<ApiError>() {
        (api.status(), api.detail(), false)
    } else if err.find::<Unauthorized>().is_some() {
        (StatusCode::UNAUTHORIZED, "unauthorized".to_owned(), true)
    } else if err.find::<warp::filters::body::BodyDeserializeError>().is_some() {
        (StatusCode::BAD_REQUEST, "invalid request body".to_owned(), false)
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            "request body too large".to_owned(),
            false,
        )
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "method not allowed".to_owned(),
            false,
        )
    } else {
        tracing::error!(?err, "unhandled rejection");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal error".to_owned(),
            false,
        )
    };

    let body = warp::reply::json(&ErrorBody { error: detail });
    let reply = warp::reply::with_status(body, status);
    if challenge {
        Ok(warp::reply::with_header(reply, "www-authenticate", CHALLENGE).into_response())
    } else {
        Ok(reply.into_response())
    }
}
