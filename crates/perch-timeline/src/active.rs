//! Active-index cursor shared by every collection.

/// The active index of an empty collection.
pub const NULL_INDEX: Option<usize> = None;

/// A sequence with a "currently selected" element.
///
/// Implementors provide the length, the current index, and [`activate`], the
/// single place the cursor is written. Every navigation method funnels through
/// `activate`, so a collection with derived state (like the visible window of
/// [`crate::VisibleTimelineList`]) only has to override that one method.
///
/// All navigation is total: on an empty collection or at a boundary the call
/// does nothing.
///
/// [`activate`]: ActiveList::activate
pub trait ActiveList {
    /// Same value as the crate-level [`NULL_INDEX`].
    const NULL_INDEX: Option<usize> = NULL_INDEX;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the active element, `NULL_INDEX` when empty.
    fn active_index(&self) -> Option<usize>;

    /// Make `index` the active position. Out-of-range indices are ignored.
    fn activate(&mut self, index: usize);

    fn activate_previous(&mut self) {
        if let Some(index) = self.active_index()
            && index > 0
        {
            self.activate(index - 1);
        }
    }

    fn activate_next(&mut self) {
        if let Some(index) = self.active_index()
            && index + 1 < self.len()
        {
            self.activate(index + 1);
        }
    }

    fn activate_first(&mut self) {
        if !self.is_empty() {
            self.activate(0);
        }
    }

    fn activate_last(&mut self) {
        if let Some(last) = self.len().checked_sub(1) {
            self.activate(last);
        }
    }

    /// Same contract as [`activate_previous`](ActiveList::activate_previous).
    fn shift_active_previous(&mut self) {
        self.activate_previous();
    }

    /// Same contract as [`activate_next`](ActiveList::activate_next).
    fn shift_active_next(&mut self) {
        self.activate_next();
    }
}
