//! Offline driver for perch timelines.
//!
//! Builds a [`VisibleTimelineList`] from a RON config, refreshes it from a JSON
//! feed fixture instead of a remote service, and replays navigation commands
//! against it. Useful for poking at cursor and window behavior without a
//! terminal UI.

pub mod command;
pub mod config;
pub mod feed;
pub mod render;

use std::rc::Rc;

use perch_timeline::VisibleTimelineList;

pub use command::Command;
pub use config::{ConfigError, PerchConfig, Source, TimelineConfig};
pub use feed::{Feed, FeedError};
pub use render::render;

/// Build the pane list described by `config`, fed from `feed`.
///
/// The first timeline is active and the first `config.visible` panes are
/// visible (clamped to the number of timelines, at least one).
pub fn build_list(config: &PerchConfig, feed: Feed) -> VisibleTimelineList {
    let feed = Rc::new(feed);
    let mut list = VisibleTimelineList::new();
    for timeline in &config.timelines {
        list.append_timeline(feed.timeline(timeline));
    }
    for _ in 1..config.visible {
        list.expand_visible_next();
    }
    tracing::debug!(timelines = list.timeline_names().len(), visible = ?list.visible(), "pane list built");
    list
}
