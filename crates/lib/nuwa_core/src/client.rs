//! Chat client: the turn protocol on top of a [`Session`].
//!
//! One turn: append the user message, compute the correction, acquire the
//! assistant reply through the configured [`ReplyPolicy`], append the
//! assistant message. Reply failures become [`FALLBACK_REPLY`].
//!
//! `submit_turn` borrows the client mutably for the whole turn, so turns on a
//! client are strictly sequential and the assistant message for turn N always
//! precedes the user message for turn N+1.

use chrono::Utc;
use tracing::{info, warn};

use crate::correction::{Correction, CorrectionProvider, CorrectionTable};
use crate::language::LanguageTab;
use crate::message::Message;
use crate::reply::{FALLBACK_REPLY, ReplyPolicy};
use crate::session::{Action, Session};

/// What a completed turn appended to the session.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub user: Message,
    pub reply: Message,
    pub correction: Correction,
    /// The reply is the fallback apology because acquisition failed.
    pub recovered: bool,
}

/// Drives a single session.
pub struct ChatClient {
    session: Session,
    policy: Box<dyn ReplyPolicy>,
    corrections: Box<dyn CorrectionProvider>,
}

impl ChatClient {
    /// Client with a fresh session and the built-in correction table.
    pub fn new(policy: impl ReplyPolicy + 'static) -> Self {
        Self {
            session: Session::start(),
            policy: Box::new(policy),
            corrections: Box::new(CorrectionTable::builtin()),
        }
    }

    /// Replace the correction provider.
    pub fn with_corrections(mut self, provider: impl CorrectionProvider + 'static) -> Self {
        self.corrections = Box::new(provider);
        self
    }

    /// Resume from an existing session.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    fn dispatch(&mut self, action: Action) {
        self.session.apply(action);
    }

    /// Record the current composition text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.dispatch(Action::InputChanged(text.into()));
    }

    pub fn select_language(&mut self, tab: LanguageTab) {
        self.dispatch(Action::LanguageSelected(tab));
    }

    /// Footer hint for the selected practice language.
    pub fn language_tip(&self) -> String {
        self.session.language().tip()
    }

    /// Submit whatever is in the composition box.
    pub async fn submit_pending(&mut self) -> Option<TurnOutcome> {
        let text = self.session.pending_input().to_string();
        self.submit_turn(&text).await
    }

    /// Run one turn. Returns `None` when `raw_text` is blank.
    ///
    /// A turn left open by a dropped `submit_turn` future (or a resumed
    /// session) is closed with [`FALLBACK_REPLY`] before the new one starts.
    pub async fn submit_turn(&mut self, raw_text: &str) -> Option<TurnOutcome> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }

        if self.session.is_awaiting_reply() {
            warn!(session = %self.session.id(), "closing abandoned turn with fallback");
            self.dispatch(Action::ReplyArrived {
                text: FALLBACK_REPLY.to_string(),
                at: Utc::now(),
            });
        }

        let before = self.session.messages().len();
        self.dispatch(Action::TurnSubmitted {
            text: text.to_string(),
            at: Utc::now(),
        });
        if self.session.messages().len() == before {
            return None;
        }
        let user = self.session.last_message().cloned()?;

        let correction = self.corrections.correct(text);
        self.dispatch(Action::CorrectionComputed(correction.clone()));

        let policy = self.policy.name();
        let (reply_text, recovered) = match self.policy.acquire(text).await {
            Ok(reply) if !reply.trim().is_empty() => (reply, false),
            Ok(_) => {
                warn!(policy, "blank reply, using fallback");
                (FALLBACK_REPLY.to_string(), true)
            }
            Err(e) => {
                warn!(policy, error = %e, "reply acquisition failed, using fallback");
                (FALLBACK_REPLY.to_string(), true)
            }
        };

        self.dispatch(Action::ReplyArrived {
            text: reply_text,
            at: Utc::now(),
        });
        let reply = self.session.last_message().cloned()?;
        info!(
            session = %self.session.id(),
            user = %user.id,
            reply = %reply.id,
            recovered,
            "turn complete"
        );

        Some(TurnOutcome {
            user,
            reply,
            correction,
            recovered,
        })
    }
}
