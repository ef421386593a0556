//! # nuwa_core
//!
//! Core chat-session logic for the Nuwa Language Room.
//!
//! - [`session`]: the session value object and its pure reducer
//! - [`client`]: the turn protocol driving a session
//! - [`correction`]: correction lookup behind [`correction::CorrectionProvider`]
//! - [`reply`]: interchangeable reply acquisition policies
//! - [`language`]: script-based language detection and practice tabs

pub mod client;
pub mod correction;
pub mod ids;
pub mod language;
pub mod message;
pub mod reply;
pub mod session;

pub use client::{ChatClient, TurnOutcome};
pub use correction::{Correction, CorrectionProvider, CorrectionTable, lookup_correction};
pub use message::{Message, MessageId, Sender};
pub use reply::{FALLBACK_REPLY, ReplyError, ReplyPolicy, SimulatedReplyPolicy};
pub use session::{Action, InvalidSession, Session, reduce};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
