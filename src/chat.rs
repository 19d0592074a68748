//! Chat session log.
//!
//! The session is plain state owned by the caller: the engine never sees it,
//! and nothing is persisted. Turns are append-only and never edited.

use crate::rules::WELCOME_MESSAGE;
use crate::{Context, ResponseEngine};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Bot,
}

/// One message in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Strictly increasing within a session.
    pub id: u64,
    pub speaker: Speaker,
    pub text: String,
    pub created_at: NaiveDateTime,
}

/// Ordered, session-scoped message log.
#[derive(Debug, Clone)]
pub struct ChatSession {
    turns: Vec<ChatTurn>,
    next_id: u64,
}

impl ChatSession {
    /// Start a session with the bot's welcome turn.
    pub fn new(context: &Context) -> Self {
        let mut session = ChatSession { turns: Vec::new(), next_id: 1 };
        session.push(Speaker::Bot, WELCOME_MESSAGE.to_string(), context.reference_time);
        session
    }

    /// Submit user text and append the bot's reply.
    ///
    /// Blank (empty or whitespace-only) input is ignored and leaves the log
    /// untouched. Otherwise the user turn is appended verbatim, then the
    /// reply turn, which is returned.
    pub fn submit(&mut self, engine: &ResponseEngine, text: &str, context: &Context) -> Option<&ChatTurn> {
        if text.trim().is_empty() {
            debug!("ignoring blank chat submission");
            return None;
        }

        let reply = engine.respond(text);
        self.push(Speaker::User, text.to_string(), context.reference_time);
        self.push(Speaker::Bot, reply.to_string(), context.reference_time);
        debug!(turns = self.turns.len(), "chat turn appended");

        self.turns.last()
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    fn push(&mut self, speaker: Speaker, text: String, created_at: NaiveDateTime) {
        self.turns.push(ChatTurn { id: self.next_id, speaker, text, created_at });
        self.next_id += 1;
    }
}
