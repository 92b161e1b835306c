//! A deduplicated, newest-first collection of entries.

use std::fmt;
use std::ops::Index;

use indexmap::IndexMap;
use serde_json::Value;

use crate::active::{ActiveList, NULL_INDEX};
use crate::error::TimelineError;
use crate::update::{UpdateArgs, UpdateError, UpdateFn};
use crate::{Entry, Result, Status};

/// Entries keyed by id, kept sorted by `created_at` descending.
///
/// The active index follows the active entry's identity: inserting newer or
/// older entries shifts its position but never changes which entry is active.
pub struct Timeline<E: Entry = Status> {
    name: String,
    /// Id → entry, in display order (position 0 is the newest).
    entries: IndexMap<E::Id, E>,
    active: Option<usize>,
    update_fn: Option<UpdateFn<E>>,
    update_args: UpdateArgs,
}

impl<E: Entry> Timeline<E> {
    /// Create an empty timeline with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: IndexMap::new(),
            active: NULL_INDEX,
            update_fn: None,
            update_args: UpdateArgs::None,
        }
    }

    /// Seed the timeline with entries (deduplicated and sorted).
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = E>) -> Self {
        self.add_statuses(entries);
        self
    }

    /// Attach a refresh callback and the arguments to call it with.
    pub fn with_update<F>(mut self, update_fn: F, args: UpdateArgs) -> Self
    where
        F: FnMut(Option<&Value>) -> std::result::Result<Vec<E>, UpdateError> + 'static,
    {
        self.update_fn = Some(Box::new(update_fn));
        self.update_args = args;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn update_args(&self) -> &UpdateArgs {
        &self.update_args
    }

    pub fn has_update_function(&self) -> bool {
        self.update_fn.is_some()
    }

    /// The active entry, or `None` when the timeline is empty.
    pub fn get_active(&self) -> Option<&E> {
        self.active.and_then(|i| self.get(i))
    }

    /// Entry at `index` in display order (0 = newest).
    pub fn get(&self, index: usize) -> Option<&E> {
        self.entries.get_index(index).map(|(_, e)| e)
    }

    /// Like [`get`](Self::get), but reports the bounds on failure.
    pub fn try_get(&self, index: usize) -> Result<&E> {
        self.get(index).ok_or(TimelineError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    pub fn contains(&self, id: &E::Id) -> bool {
        self.entries.contains_key(id)
    }

    pub fn newest(&self) -> Option<&E> {
        self.entries.first().map(|(_, e)| e)
    }

    pub fn oldest(&self) -> Option<&E> {
        self.entries.last().map(|(_, e)| e)
    }

    /// Entries newest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &E> + ExactSizeIterator {
        self.entries.values()
    }

    /// Entries strictly newer than `timestamp` (Unix millis), newest first.
    pub fn get_newer_than(&self, timestamp: u64) -> Vec<&E> {
        self.entries
            .values()
            .take_while(|e| e.created_at() > timestamp)
            .collect()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Insert `entry` unless one with the same id is already present.
    ///
    /// Returns whether the entry was inserted.
    pub fn add_status(&mut self, entry: E) -> bool {
        self.add_statuses(std::iter::once(entry)) == 1
    }

    /// Insert every entry whose id isn't present yet, then restore ordering.
    ///
    /// Same outcome as calling [`add_status`](Self::add_status) once per
    /// entry: on an empty timeline the first entry inserted becomes active.
    /// Returns the number of entries inserted.
    pub fn add_statuses(&mut self, entries: impl IntoIterator<Item = E>) -> usize {
        let mut active_id = self.get_active().map(|e| e.id().clone());

        let mut inserted = 0;
        for entry in entries {
            if self.entries.contains_key(entry.id()) {
                tracing::trace!(timeline = %self.name, id = ?entry.id(), "duplicate entry skipped");
                continue;
            }
            if active_id.is_none() {
                active_id = Some(entry.id().clone());
            }
            self.entries.insert(entry.id().clone(), entry);
            inserted += 1;
        }

        if inserted > 0 {
            // Stable: entries with equal timestamps keep arrival order.
            self.entries
                .sort_by(|_, a, _, b| b.created_at().cmp(&a.created_at()));
            self.relocate_active(active_id.as_ref());
            tracing::debug!(
                timeline = %self.name,
                inserted,
                total = self.entries.len(),
                "entries added"
            );
        }
        inserted
    }

    /// Remove every entry. The cursor goes back to `NULL_INDEX`.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.active = NULL_INDEX;
    }

    /// Run the update function (if any) and merge what it returns.
    ///
    /// Returns the number of new entries. Without an update function this is
    /// a no-op returning `Ok(0)`. Errors from the update function are returned
    /// as-is and nothing is merged.
    pub fn update(&mut self) -> std::result::Result<usize, UpdateError> {
        let Some(update_fn) = self.update_fn.as_mut() else {
            return Ok(0);
        };
        tracing::debug!(timeline = %self.name, args = ?self.update_args, "updating timeline");
        let fetched = self.update_args.call(update_fn)?;
        Ok(self.add_statuses(fetched))
    }

    /// Point the cursor back at `active_id` after a reorder.
    fn relocate_active(&mut self, active_id: Option<&E::Id>) {
        self.active = match active_id.and_then(|id| self.entries.get_index_of(id)) {
            Some(index) => Some(index),
            None if self.entries.is_empty() => NULL_INDEX,
            None => Some(0),
        };
    }
}

impl<E: Entry> Default for Timeline<E> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<E: Entry> ActiveList for Timeline<E> {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn active_index(&self) -> Option<usize> {
        self.active
    }

    fn activate(&mut self, index: usize) {
        if index < self.entries.len() {
            self.active = Some(index);
        }
    }
}

/// Positional access; panics when `index >= len`, like slice indexing.
impl<E: Entry> Index<usize> for Timeline<E> {
    type Output = E;

    fn index(&self, index: usize) -> &E {
        &self.entries[index]
    }
}

impl<'a, E: Entry> IntoIterator for &'a Timeline<E> {
    type Item = &'a E;
    type IntoIter = indexmap::map::Values<'a, E::Id, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl<E: Entry> fmt::Debug for Timeline<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timeline")
            .field("name", &self.name)
            .field("len", &self.entries.len())
            .field("active", &self.active)
            .field("has_update_function", &self.update_fn.is_some())
            .field("update_args", &self.update_args)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
