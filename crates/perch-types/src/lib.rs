//! Shared entry types for perch.
//!
//! This is the leaf crate: identifiers, statuses, direct messages, and the
//! [`Entry`] trait that timelines are generic over. It has **no internal perch
//! dependencies**.
//!
//! # Key Types
//!
//! |-------------------|----------------------------------------------|
//! | Type              | Purpose                                      |
//! |-------------------|----------------------------------------------|
//! | [`Entry`]         | Identity + timestamp, all a timeline needs   |
//! | [`StatusId`]      | Opaque numeric identity of an entry          |
//! | [`Status`]        | A timestamped post (author + text)           |
//! | [`DirectMessage`] | A timestamped private message                |
//! |-------------------|----------------------------------------------|

pub mod ids;
pub mod message;
pub mod status;

use std::fmt::Debug;
use std::hash::Hash;

pub use ids::StatusId;
pub use message::DirectMessage;
pub use status::Status;

/// Something that can live in a timeline.
///
/// Timelines only ever look at the identity (for dedup) and the creation time
/// (for ordering). Everything else is payload.
pub trait Entry {
    /// Identity key. Two entries with equal ids are the same entry.
    type Id: Clone + Eq + Hash + Debug;

    fn id(&self) -> &Self::Id;

    /// Creation time as Unix milliseconds.
    fn created_at(&self) -> u64;
}

/// Current time as Unix milliseconds. Used by constructors throughout the crate.
pub(crate) fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
