//! Session state and its reducer.
//!
//! A [`Session`] only changes through [`reduce`], which makes every state
//! transition of the chat room testable without any front end.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::correction::Correction;
use crate::ids::{created_at, new_session_id};
use crate::language::LanguageTab;
use crate::message::{Message, MessageId, Sender};
use crate::reply::FALLBACK_REPLY;

/// Assistant greeting every session starts with.
pub const GREETING: &str =
    "こんばんは！🌙 How was your day? Feel free to chat in English, Japanese, or Mandarin!";

/// Client-held conversation state for one user.
///
/// Deserializing re-derives the message id counter from the log and rejects
/// logs that could not have been produced by [`reduce`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct Session {
    id: Uuid,
    messages: Vec<Message>,
    pending_input: String,
    is_awaiting_reply: bool,
    last_correction: Correction,
    language: LanguageTab,
    #[serde(skip_serializing)]
    next_id: MessageId,
}

/// Why a stored session was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSession {
    #[error("message id {0} does not follow the previous message")]
    NonMonotonicId(MessageId),

    #[error("session awaits a reply but the last message is not from the user")]
    DanglingAwait,
}

#[derive(Deserialize)]
struct SessionRecord {
    id: Uuid,
    messages: Vec<Message>,
    #[serde(default)]
    pending_input: String,
    #[serde(default)]
    is_awaiting_reply: bool,
    last_correction: Correction,
    #[serde(default)]
    language: LanguageTab,
}

impl TryFrom<SessionRecord> for Session {
    type Error = InvalidSession;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let mut last: Option<MessageId> = None;
        for message in &record.messages {
            if last.is_some_and(|prev| message.id <= prev) {
                return Err(InvalidSession::NonMonotonicId(message.id));
            }
            last = Some(message.id);
        }
        let last_from_user = record.messages.last().is_some_and(Message::is_user);
        if record.is_awaiting_reply && !last_from_user {
            return Err(InvalidSession::DanglingAwait);
        }

        Ok(Self {
            id: record.id,
            messages: record.messages,
            pending_input: record.pending_input,
            is_awaiting_reply: record.is_awaiting_reply,
            last_correction: record.last_correction,
            language: record.language,
            next_id: last.map_or(MessageId(1), MessageId::next),
        })
    }
}

/// State transitions a session accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The composition box changed.
    InputChanged(String),
    /// The user pressed send. Blank text is ignored.
    TurnSubmitted { text: String, at: DateTime<Utc> },
    /// The assistant reply for the in-flight turn arrived.
    ReplyArrived { text: String, at: DateTime<Utc> },
    /// A new correction replaces the previous one.
    CorrectionComputed(Correction),
    /// The practice-language tab changed.
    LanguageSelected(LanguageTab),
}

impl Session {
    /// New session seeded with the assistant greeting at `at`.
    pub fn new(at: DateTime<Utc>) -> Self {
        let mut session = Self {
            id: new_session_id(),
            messages: Vec::new(),
            pending_input: String::new(),
            is_awaiting_reply: false,
            last_correction: Correction::sample(),
            language: LanguageTab::default(),
            next_id: MessageId(1),
        };
        session.push(Sender::Ai, GREETING.to_string(), at);
        session
    }

    /// New session stamped with the current time.
    pub fn start() -> Self {
        Self::new(Utc::now())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When the session was created, read back from its id.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        created_at(self.id)
    }

    /// Messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.is_awaiting_reply
    }

    pub fn last_correction(&self) -> &Correction {
        &self.last_correction
    }

    pub fn language(&self) -> LanguageTab {
        self.language
    }

    fn push(&mut self, from: Sender, text: String, at: DateTime<Utc>) -> MessageId {
        let id = self.next_id;
        self.next_id = id.next();
        self.messages.push(Message::new(id, from, text, at));
        id
    }
}

/// Apply `action` to `session`.
///
/// At most one turn is in flight: a submit while a reply is awaited is
/// dropped, and a reply with no turn in flight is dropped.
pub fn reduce(mut session: Session, action: Action) -> Session {
    session.apply(action);
    session
}

impl Session {
    /// In-place form of [`reduce`].
    pub(crate) fn apply(&mut self, action: Action) {
        match action {
            Action::InputChanged(text) => {
                self.pending_input = text;
            }
            Action::TurnSubmitted { text, at } => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return;
                }
                if self.is_awaiting_reply {
                    debug!(session = %self.id, "submit ignored while awaiting reply");
                    return;
                }
                let id = self.push(Sender::User, trimmed.to_string(), at);
                self.pending_input.clear();
                self.is_awaiting_reply = true;
                debug!(session = %self.id, message = %id, "user message appended");
            }
            Action::ReplyArrived { text, at } => {
                if !self.is_awaiting_reply {
                    debug!(session = %self.id, "reply ignored, no turn in flight");
                    return;
                }
                let text = if text.trim().is_empty() {
                    FALLBACK_REPLY.to_string()
                } else {
                    text
                };
                let id = self.push(Sender::Ai, text, at);
                self.is_awaiting_reply = false;
                debug!(session = %self.id, message = %id, "assistant message appended");
            }
            Action::CorrectionComputed(correction) => {
                self.last_correction = correction;
            }
            Action::LanguageSelected(tab) => {
                self.language = tab;
            }
        }
    }
}
