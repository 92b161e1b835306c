//! Ordered timelines with an active cursor.

use crate::active::{ActiveList, NULL_INDEX};
use crate::error::TimelineError;
use crate::timeline::Timeline;
use crate::{Entry, Result, Status};

/// Timelines in insertion order, one of them active.
///
/// Unlike [`Timeline::get_active`], the active-timeline queries here fail with
/// [`TimelineError::EmptyCollection`] when there is nothing to return.
#[derive(Debug)]
pub struct TimelineList<E: Entry = Status> {
    timelines: Vec<Timeline<E>>,
    active: Option<usize>,
}

impl<E: Entry> TimelineList<E> {
    pub fn new() -> Self {
        Self {
            timelines: Vec::new(),
            active: NULL_INDEX,
        }
    }

    pub fn has_timelines(&self) -> bool {
        !self.timelines.is_empty()
    }

    /// Append at the end. The first timeline appended becomes active.
    pub fn append_timeline(&mut self, timeline: Timeline<E>) {
        tracing::debug!(name = timeline.name(), position = self.timelines.len(), "timeline appended");
        self.timelines.push(timeline);
        if self.active.is_none() {
            self.active = Some(0);
        }
    }

    pub fn get_active_timeline(&self) -> Result<&Timeline<E>> {
        self.active
            .and_then(|i| self.timelines.get(i))
            .ok_or(TimelineError::EmptyCollection)
    }

    pub fn get_active_timeline_mut(&mut self) -> Result<&mut Timeline<E>> {
        self.active
            .and_then(|i| self.timelines.get_mut(i))
            .ok_or(TimelineError::EmptyCollection)
    }

    pub fn get_active_timeline_name(&self) -> Result<&str> {
        self.get_active_timeline().map(Timeline::name)
    }

    /// Remove the active timeline and return it.
    ///
    /// The cursor keeps its position, clamped to the new last index, and
    /// becomes `NULL_INDEX` once the list is empty.
    pub fn delete_active_timeline(&mut self) -> Result<Timeline<E>> {
        let index = self.active.ok_or(TimelineError::EmptyCollection)?;
        let removed = self.timelines.remove(index);
        self.active = match self.timelines.len() {
            0 => NULL_INDEX,
            len => Some(index.min(len - 1)),
        };
        tracing::debug!(name = removed.name(), index, remaining = self.timelines.len(), "timeline deleted");
        Ok(removed)
    }

    /// Run the update function of the active timeline.
    ///
    /// Returns how many new entries it gained.
    pub fn update_active_timeline(&mut self) -> Result<usize> {
        self.get_active_timeline_mut()?
            .update()
            .map_err(TimelineError::Update)
    }

    /// Update every timeline in order, stopping at the first failure.
    ///
    /// Returns the total number of new entries.
    pub fn update_all(&mut self) -> Result<usize> {
        let mut total = 0;
        for timeline in &mut self.timelines {
            total += timeline.update().map_err(|e| {
                tracing::warn!(name = timeline.name(), error = %e, "timeline update failed");
                TimelineError::Update(e)
            })?;
        }
        Ok(total)
    }

    pub fn get(&self, index: usize) -> Option<&Timeline<E>> {
        self.timelines.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Timeline<E>> {
        self.timelines.iter()
    }

    pub fn timeline_names(&self) -> Vec<&str> {
        self.timelines.iter().map(Timeline::name).collect()
    }

    /// Index of the first timeline called `name`.
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.timelines.iter().position(|t| t.name() == name)
    }
}

impl<E: Entry> Default for TimelineList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entry> ActiveList for TimelineList<E> {
    fn len(&self) -> usize {
        self.timelines.len()
    }

    fn active_index(&self) -> Option<usize> {
        self.active
    }

    fn activate(&mut self, index: usize) {
        if index < self.timelines.len() {
            self.active = Some(index);
        }
    }
}

impl<'a, E: Entry> IntoIterator for &'a TimelineList<E> {
    type Item = &'a Timeline<E>;
    type IntoIter = std::slice::Iter<'a, Timeline<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.timelines.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
