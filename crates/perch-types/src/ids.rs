//! Typed identifiers for timeline entries.
//!
//! Remote services hand out numeric ids for posts and messages. They're opaque
//! to perch: only equality and hashing matter, never arithmetic.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identity of a status or direct message.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusId(u64);

impl StatusId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric value, as the remote service knows it.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for StatusId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<StatusId> for u64 {
    fn from(id: StatusId) -> u64 {
        id.0
    }
}

impl FromStr for StatusId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for StatusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for StatusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StatusId({})", self.0)
    }
}
