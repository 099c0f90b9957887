//! SceneCraft Core - request admission pipeline
//!
//! The pure, I/O-free half of the backend:
//! - Per-client sliding-window rate limiting
//! - Scene text cleaning and validation
//! - Terms-of-use consent gating
//! - Prompt payload construction
//! - Runtime configuration
//!
//! The HTTP surface and the upstream collaborator live in sibling crates;
//! everything here is deterministic and directly unit-testable.
//!
//! # Example
//!
//! ```rust
//! use scenecraft_core::{sanitize, RateLimiter, PromptPayload, PromptVariant};
//!
//! let limiter = RateLimiter::new();
//! assert!(limiter.admit("203.0.113.7"));
//!
//! let cleaned = sanitize::validate(
//!     "please rewrite scene\nJOHN stands at the window, phone in hand, not dialing.",
//! ).unwrap();
//! let payload = PromptPayload::new(PromptVariant::Analyze, cleaned);
//! assert!(payload.scene().starts_with("JOHN"));
//! ```

#![warn(unreachable_pub)]

pub mod config;
pub mod consent;
pub mod error;
pub mod prompt;
pub mod rate_limit;
pub mod sanitize;

// Re-exports for convenience
pub use config::{AccessCredential, Config, DEFAULT_MODEL, DEFAULT_UPSTREAM_URL};
pub use consent::{check_consent, CONSENT_HEADER};
pub use error::AdmissionError;
pub use prompt::{PromptPayload, PromptVariant, SceneRequest};
pub use rate_limit::{RateLimiter, MAX_CALLS, RATE_WINDOW};
pub use sanitize::{MAX_SCENE_WORDS, MIN_SCENE_CHARS};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// The admission sequence the handlers compose, run end to end
    /// without the HTTP layer.
    #[test]
    fn full_admission_flow() {
        let limiter = RateLimiter::new();
        let client = "203.0.113.7";

        assert!(limiter.admit(client));
        assert!(check_consent(Some("true")));

        let cleaned = sanitize::validate(
            "please rewrite scene\nShe sets the cup down without drinking from it.",
        )
        .unwrap();
        assert_eq!(cleaned, "She sets the cup down without drinking from it.");

        let payload = PromptPayload::new(PromptVariant::Edit, cleaned);
        assert_eq!(payload.variant().response_field(), "edit_suggestions");
    }

    #[test]
    fn admission_short_circuits_before_prompt_construction() {
        assert!(!check_consent(Some("false")));
        assert!(sanitize::validate("fix scene").is_err());
    }
}
