//! SceneCraft Server - HTTP surface
//!
//! Route tree, in match order:
//! - `GET|HEAD /health` — liveness, unguarded
//! - `POST /analyze`, `POST /edit` — scene endpoints, consent-gated
//! - any other `GET` — static assets behind the shared-credential guard,
//!   with an `index.html` fallback for SPA deep links
//!
//! Rejections recover into JSON error bodies; CORS wraps the whole tree.

#![warn(unreachable_pub)]

pub mod guard;
pub mod handlers;
pub mod reject;

pub use reject::ApiError;

use scenecraft_core::{Config, PromptVariant, RateLimiter, CONSENT_HEADER};
use scenecraft_upstream::SceneModel;
use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;
use warp::{Filter, Rejection, Reply};

/// Largest accepted request body
const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Paths that bypass the static access guard unconditionally
const GUARD_EXEMPT: &[&str] = &["health", "analyze", "edit"];

/// Shared server state
///
/// The rate limiter is the only mutable piece; the model is the seam
/// tests swap out.
pub struct AppState {
    /// Per-client admission budgets
    pub limiter: RateLimiter,
    /// Runtime configuration
    pub config: Config,
    /// Upstream collaborator
    pub model: Arc<dyn SceneModel>,
}

impl AppState {
    /// Build state around a model implementation
    #[must_use]
    pub fn new(config: Config, model: Arc<dyn SceneModel>) -> Self {
        Self {
            limiter: RateLimiter::new(),
            config,
            model,
        }
    }
}

/// Build the complete route tree
#[must_use]
pub fn routes(
    state: Arc<AppState>,
    static_dir: PathBuf,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get().or(warp::head()).unify())
        .map(handlers::health_body);

    let analyze = scene_route("analyze", PromptVariant::Analyze, state.clone());
    let edit = scene_route("edit", PromptVariant::Edit, state.clone());

    // Method first, then the allow-list, then credential: non-GET
    // requests to unmatched paths fall through without ever seeing the
    // guard, and allow-listed paths never produce a challenge even when
    // the method misses their route.
    let credential = state.config.credential.clone();
    let assets = warp::get()
        .and(not_guard_exempt())
        .and(guard::require_credential(credential.clone()))
        .and(warp::fs::dir(static_dir.clone()));
    let spa_fallback = warp::get()
        .and(not_guard_exempt())
        .and(guard::require_credential(credential))
        .and(warp::fs::file(static_dir.join("index.html")));

    let cors = cors_layer(&state.config);

    health
        .or(analyze)
        .or(edit)
        .or(assets)
        .or(spa_fallback)
        .recover(reject::handle_rejection)
        .with(cors)
        .with(warp::trace::request())
}

fn scene_route(
    name: &'static str,
    variant: PromptVariant,
    state: Arc<AppState>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path(name)
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::any().map(move || variant))
        .and(with_state(state))
        .and(warp::addr::remote())
        .and(warp::header::optional::<String>(CONSENT_HEADER))
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and_then(handlers::handle_scene)
}

/// Passes only when the request path is not one of the allow-listed
/// API paths, so the static branches never answer for them.
fn not_guard_exempt() -> impl Filter<Extract = (), Error = Rejection> + Clone {
    warp::path::peek()
        .and_then(|peek: warp::path::Peek| async move {
            let mut segments = peek.segments();
            let exempt = matches!(
                (segments.next(), segments.next()),
                (Some(head), None) if GUARD_EXEMPT.contains(&head)
            );
            if exempt {
                Err(warp::reject::not_found())
            } else {
                Ok(())
            }
        })
        .untuple_one()
}

fn with_state(
    state: Arc<AppState>,
) -> impl Filter<Extract = (Arc<AppState>,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

fn cors_layer(config: &Config) -> warp::cors::Builder {
    warp::cors()
        .allow_origins(config.allowed_origins.iter().map(String::as_str))
        .allow_methods(vec!["GET", "HEAD", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type", "authorization", CONSENT_HEADER])
        .allow_credentials(true)
}
