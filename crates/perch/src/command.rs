//! Scripted navigation commands.

use perch_timeline::{ActiveList, Result, VisibleTimelineList};
use strum::{Display, EnumString};

/// One step of a navigation script, named the way it's typed on the command
/// line (`next`, `expand-previous`, `status-last`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Command {
    #[strum(to_string = "previous", serialize = "prev")]
    Previous,
    Next,
    First,
    Last,
    ShiftPrevious,
    ShiftNext,
    ExpandPrevious,
    ExpandNext,
    #[strum(to_string = "shrink-beginning", serialize = "shrink-beggining")]
    ShrinkBeginning,
    ShrinkEnd,
    /// Refresh the active timeline.
    Update,
    UpdateAll,
    /// Close the active timeline.
    Delete,
    StatusPrevious,
    StatusNext,
    StatusFirst,
    StatusLast,
}

impl Command {
    /// Apply to `list`.
    ///
    /// Window and timeline navigation never fail. Updates and deletes can,
    /// as can status navigation on an empty list.
    pub fn apply(self, list: &mut VisibleTimelineList) -> Result<()> {
        match self {
            Command::Previous => list.activate_previous(),
            Command::Next => list.activate_next(),
            Command::First => list.activate_first(),
            Command::Last => list.activate_last(),
            Command::ShiftPrevious => list.shift_active_previous(),
            Command::ShiftNext => list.shift_active_next(),
            Command::ExpandPrevious => list.expand_visible_previous(),
            Command::ExpandNext => list.expand_visible_next(),
            Command::ShrinkBeginning => list.shrink_visible_beggining(),
            Command::ShrinkEnd => list.shrink_visible_end(),
            Command::Update => {
                let fetched = list.update_active_timeline()?;
                tracing::info!(fetched, "active timeline updated");
            }
            Command::UpdateAll => {
                let fetched = list.update_all()?;
                tracing::info!(fetched, "all timelines updated");
            }
            Command::Delete => {
                let removed = list.delete_active_timeline()?;
                tracing::info!(name = removed.name(), "timeline closed");
            }
            Command::StatusPrevious => list.get_active_timeline_mut()?.activate_previous(),
            Command::StatusNext => list.get_active_timeline_mut()?.activate_next(),
            Command::StatusFirst => list.get_active_timeline_mut()?.activate_first(),
            Command::StatusLast => list.get_active_timeline_mut()?.activate_last(),
        }
        Ok(())
    }
}
