//! Error types for the upstream collaborator
//!
//! Every failure mode of the outbound call collapses to one taxonomy the
//! server can map onto `UpstreamUnavailable`; provider error bodies are
//! never carried through to clients.

/// Upstream call failure
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// No API key configured
    #[error("upstream API key is not configured")]
    MissingCredential,

    /// Connection, TLS, timeout, or body-decode failure
    #[error("upstream transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider returned a non-success status
    #[error("upstream returned status {status}")]
    Status {
        /// HTTP status code from the provider
        status: u16,
    },

    /// Provider response carried no completion
    #[error("upstream response carried no completion")]
    EmptyCompletion,
}

impl UpstreamError {
    /// Whether the failure is an operator problem rather than a
    /// transient provider one
    #[inline]
    #[must_use]
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential)
    }
}
