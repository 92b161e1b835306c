//! A timeline list plus the window of panes on screen.
//!
//! The window is a contiguous, ascending run of indices into the list. It is
//! empty exactly when the list is empty and otherwise always contains the
//! active index:
//!
//! - activating an index outside the window collapses it to `[active]`;
//! - activating an index inside the window leaves it alone;
//! - expanding grows it by one index at either end, up to the list bounds;
//! - shrinking drops one index at either end, but never the active one.

use std::ops::RangeInclusive;

use crate::active::ActiveList;
use crate::timeline::Timeline;
use crate::timeline_list::TimelineList;
use crate::{Entry, Result, Status};

#[derive(Debug)]
pub struct VisibleTimelineList<E: Entry = Status> {
    list: TimelineList<E>,
    visible: Vec<usize>,
}

impl<E: Entry> VisibleTimelineList<E> {
    pub fn new() -> Self {
        Self {
            list: TimelineList::new(),
            visible: Vec::new(),
        }
    }

    /// Indices of the visible timelines, ascending.
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    /// The visible window as a range, `None` when nothing is visible.
    pub fn visible_range(&self) -> Option<RangeInclusive<usize>> {
        Some(*self.visible.first()?..=*self.visible.last()?)
    }

    /// Timelines inside the window, left to right.
    pub fn visible_timelines(&self) -> impl Iterator<Item = &Timeline<E>> {
        self.visible.iter().filter_map(|&i| self.list.get(i))
    }

    /// Read access to the underlying list.
    pub fn timelines(&self) -> &TimelineList<E> {
        &self.list
    }

    // =========================================================================
    // Window
    // =========================================================================

    pub fn expand_visible_previous(&mut self) {
        if let Some(&lowest) = self.visible.first()
            && lowest > 0
        {
            self.visible.insert(0, lowest - 1);
        }
    }

    pub fn expand_visible_next(&mut self) {
        if let Some(&highest) = self.visible.last()
            && highest + 1 < self.list.len()
        {
            self.visible.push(highest + 1);
        }
    }

    /// Drop the lowest visible index unless it is the active one.
    ///
    /// The active index is never dropped, even from a wider window: `[0, 1]`
    /// with `0` active stays `[0, 1]`.
    pub fn shrink_visible_beggining(&mut self) {
        if let Some(&lowest) = self.visible.first()
            && Some(lowest) != self.list.active_index()
        {
            self.visible.remove(0);
        }
    }

    /// Drop the highest visible index unless it is the active one.
    ///
    /// As with [`shrink_visible_beggining`](Self::shrink_visible_beggining),
    /// `[0, 1]` with `1` active stays `[0, 1]`.
    pub fn shrink_visible_end(&mut self) {
        if let Some(&highest) = self.visible.last()
            && Some(highest) != self.list.active_index()
        {
            self.visible.pop();
        }
    }

    // =========================================================================
    // TimelineList operations
    // =========================================================================

    pub fn has_timelines(&self) -> bool {
        self.list.has_timelines()
    }

    /// Append at the end. The first timeline appended becomes active and the
    /// only visible one.
    pub fn append_timeline(&mut self, timeline: Timeline<E>) {
        self.list.append_timeline(timeline);
        if self.visible.is_empty() {
            self.visible.extend(self.list.active_index());
        }
    }

    pub fn get_active_timeline(&self) -> Result<&Timeline<E>> {
        self.list.get_active_timeline()
    }

    pub fn get_active_timeline_mut(&mut self) -> Result<&mut Timeline<E>> {
        self.list.get_active_timeline_mut()
    }

    pub fn get_active_timeline_name(&self) -> Result<&str> {
        self.list.get_active_timeline_name()
    }

    /// Remove the active timeline, renumbering the window around the gap.
    pub fn delete_active_timeline(&mut self) -> Result<Timeline<E>> {
        let removed_at = self.list.active_index();
        let removed = self.list.delete_active_timeline()?;

        if let Some(gap) = removed_at {
            self.visible.retain(|&i| i != gap);
            for i in &mut self.visible {
                if *i > gap {
                    *i -= 1;
                }
            }
        }
        match self.list.active_index() {
            None => self.visible.clear(),
            Some(active) if !self.visible.contains(&active) => self.visible = vec![active],
            Some(_) => {}
        }
        Ok(removed)
    }

    pub fn update_active_timeline(&mut self) -> Result<usize> {
        self.list.update_active_timeline()
    }

    pub fn update_all(&mut self) -> Result<usize> {
        self.list.update_all()
    }

    pub fn get(&self, index: usize) -> Option<&Timeline<E>> {
        self.list.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Timeline<E>> {
        self.list.iter()
    }

    pub fn timeline_names(&self) -> Vec<&str> {
        self.list.timeline_names()
    }

    /// Activate the first timeline called `name`. Returns whether one exists.
    pub fn activate_by_name(&mut self, name: &str) -> bool {
        match self.list.position_by_name(name) {
            Some(index) => {
                self.activate(index);
                true
            }
            None => false,
        }
    }
}

impl<E: Entry> Default for VisibleTimelineList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entry> ActiveList for VisibleTimelineList<E> {
    fn len(&self) -> usize {
        self.list.len()
    }

    fn active_index(&self) -> Option<usize> {
        self.list.active_index()
    }

    fn activate(&mut self, index: usize) {
        if index >= self.list.len() {
            return;
        }
        self.list.activate(index);
        if !self.visible.contains(&index) {
            tracing::trace!(index, "activated hidden timeline, collapsing window");
            self.visible = vec![index];
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
