//! Error types for timeline operations.

use thiserror::Error;

use crate::update::UpdateError;

/// Errors surfaced by timeline collections.
///
/// Navigation never produces one of these; only queries that need an element
/// to exist do.
#[derive(Error, Debug)]
pub enum TimelineError {
    /// The timeline list has no timelines, so there is no active one.
    #[error("no active timeline: timeline list is empty")]
    EmptyCollection,

    /// Positional access past the end of a timeline.
    #[error("index {index} out of range for timeline with {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    /// The update function of a timeline failed.
    #[error("timeline update failed: {0}")]
    Update(#[source] UpdateError),
}
