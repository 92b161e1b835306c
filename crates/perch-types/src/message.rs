//! Direct message type.

use serde::{Deserialize, Serialize};

use crate::Entry;
use crate::ids::StatusId;

/// A private message between two users.
///
/// Shares the id space and ordering rules of [`crate::Status`], so an inbox is
/// just a `Timeline<DirectMessage>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectMessage {
    pub id: StatusId,
    /// When the message was sent (Unix millis).
    pub created_at: u64,
    pub sender: String,
    pub recipient: String,
    #[serde(default)]
    pub text: String,
}

impl DirectMessage {
    pub fn new(
        id: impl Into<StatusId>,
        created_at: u64,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            created_at,
            sender: sender.into(),
            recipient: recipient.into(),
            text: text.into(),
        }
    }

    /// The other side of the conversation, seen from `me`.
    pub fn counterpart(&self, me: &str) -> &str {
        if self.sender == me {
            &self.recipient
        } else {
            &self.sender
        }
    }
}

impl Entry for DirectMessage {
    type Id = StatusId;

    fn id(&self) -> &StatusId {
        &self.id
    }

    fn created_at(&self) -> u64 {
        self.created_at
    }
}
