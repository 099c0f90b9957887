//! Error types for the admission pipeline
//!
//! Covers every way a request can be refused before the upstream call:
//! - Rate limit denials
//! - Missing terms-of-use consent
//! - Scene text that is too short or too long after cleaning

/// Admission pipeline error
///
/// All variants are terminal for the current request; nothing here is
/// retried by the server. The caller may retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdmissionError {
    /// Client exceeded the per-window call budget
    #[error("rate limit exceeded, try again later")]
    RateLimitExceeded,

    /// Consent header absent or not the literal "true"
    #[error("terms and conditions must be accepted (x-user-agreement header = true)")]
    ConsentRequired,

    /// Cleaned scene text is under the minimum length
    #[error("scene too short: {len} characters after cleaning, need at least {min}")]
    SceneTooShort {
        /// Length of the cleaned text
        len: usize,
        /// Minimum accepted length
        min: usize,
    },

    /// Cleaned scene text exceeds the word cap (roughly two pages)
    #[error("scene too long: {words} words, limit is {max}")]
    SceneTooLong {
        /// Word count of the cleaned text
        words: usize,
        /// Maximum accepted word count
        max: usize,
    },
}

impl AdmissionError {
    /// Whether the error is the client's fault (maps to a 4xx status)
    #[inline]
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        // Every admission refusal is; the variant set exists so the server
        // can pick 429 vs 400.
        true
    }
}
