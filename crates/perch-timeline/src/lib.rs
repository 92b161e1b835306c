//! Cursor-tracked collections for perch.
//!
//! Everything here is plain in-memory state: no I/O, no threads. Fetching,
//! rendering and key dispatch live elsewhere and drive these types through the
//! operations below.
//!
//! # Layers
//!
//! ```text
//! ActiveList (trait)          ← active index + navigation
//!     ├── Timeline<E>         ← dedup by id, newest first, cursor follows identity
//!     └── TimelineList<E>     ← ordered timelines, named lookup
//!             └── VisibleTimelineList<E>  ← + contiguous window of visible panes
//! ```
//!
//! # Cursor semantics
//!
//! - The active index is [`NULL_INDEX`] exactly when the collection is empty.
//! - Navigation never wraps and never fails; moving past either end is a no-op.
//! - `Timeline::get_active` returns `None` when empty, while
//!   `TimelineList::get_active_timeline` returns
//!   [`TimelineError::EmptyCollection`]. Callers rely on that difference.

mod active;
mod error;
mod timeline;
mod timeline_list;
mod update;
mod visible;

pub use active::{ActiveList, NULL_INDEX};
pub use error::TimelineError;
pub use timeline::Timeline;
pub use timeline_list::TimelineList;
pub use update::{UpdateArgs, UpdateError, UpdateFn};
pub use visible::VisibleTimelineList;

pub use perch_types::{DirectMessage, Entry, Status, StatusId};

/// Result type for timeline operations.
pub type Result<T> = std::result::Result<T, TimelineError>;
