//! Reply acquisition: how the assistant side of a turn gets its text.
//!
//! A [`ReplyPolicy`] is chosen once per client. Two policies exist:
//!
//! - remote: asks the Chat Service (`nuwa_api_client::RemoteReplyPolicy`)
//! - [`SimulatedReplyPolicy`]: waits a random delay and picks a canned reply
//!
//! Failures are reported as [`ReplyError`]; the client turns them into
//! [`FALLBACK_REPLY`] and never surfaces them further.

pub mod canned;
pub mod simulated;

use async_trait::async_trait;
use thiserror::Error;

pub use simulated::SimulatedReplyPolicy;

/// Assistant text used when reply acquisition fails.
pub const FALLBACK_REPLY: &str = "Sorry, I'm having trouble connecting.";

/// Reply acquisition failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplyError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Chat service returned status {0}")]
    Status(u16),

    #[error("Malformed reply: {0}")]
    Decode(String),
}

/// Strategy producing the assistant reply for one user utterance.
#[async_trait]
pub trait ReplyPolicy: Send + Sync {
    /// Short policy name for logs.
    fn name(&self) -> &'static str;

    /// Produce a reply for the trimmed user text.
    async fn acquire(&self, text: &str) -> Result<String, ReplyError>;
}

#[async_trait]
impl<P: ReplyPolicy + ?Sized> ReplyPolicy for std::sync::Arc<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn acquire(&self, text: &str) -> Result<String, ReplyError> {
        (**self).acquire(text).await
    }
}
