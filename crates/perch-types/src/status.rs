//! Status (post) type.
//!
//! A `Status` is immutable once built. Timelines key it by [`StatusId`] and
//! order it by `created_at`; `user` and `text` are carried along untouched.

use serde::{Deserialize, Serialize};

use crate::Entry;
use crate::ids::StatusId;

/// A single timestamped post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: StatusId,
    /// When the post was created (Unix millis).
    pub created_at: u64,
    /// Author's screen name.
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub text: String,
}

impl Status {
    pub fn new(
        id: impl Into<StatusId>,
        created_at: u64,
        user: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            created_at,
            user: user.into(),
            text: text.into(),
        }
    }

    /// Create a status stamped with the current time.
    pub fn now(id: impl Into<StatusId>, user: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, crate::now_millis(), user, text)
    }

    /// Case-insensitive substring match on the text. Used by offline search.
    pub fn mentions(&self, term: &str) -> bool {
        self.text.to_lowercase().contains(&term.to_lowercase())
    }
}

impl Entry for Status {
    type Id = StatusId;

    fn id(&self) -> &StatusId {
        &self.id
    }

    fn created_at(&self) -> u64 {
        self.created_at
    }
}
