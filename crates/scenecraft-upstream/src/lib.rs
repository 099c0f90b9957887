//! SceneCraft Upstream - the AI collaborator seam
//!
//! The backend treats the text-completion provider as a black box: given
//! a fixed instruction and the user's scene, it returns a completion.
//! [`SceneModel`] is that seam; the production implementation is
//! [`OpenRouterClient`], and tests substitute stubs.

#![warn(unreachable_pub)]

pub mod error;
pub mod openrouter;

pub use error::UpstreamError;
pub use openrouter::OpenRouterClient;

use async_trait::async_trait;
use scenecraft_core::PromptPayload;

/// Upstream text-completion collaborator
///
/// One outbound network call per invocation; implementations impose
/// their own timeout and surface everything as [`UpstreamError`].
#[async_trait]
pub trait SceneModel: Send + Sync {
    /// Send the payload and return the trimmed completion text
    ///
    /// # Errors
    /// [`UpstreamError`] on missing credential, transport failure,
    /// non-success status, or an empty completion.
    async fn complete(&self, payload: &PromptPayload) -> Result<String, UpstreamError>;
}
