//! Property-based invariant tests for timelines and the visible window.
//!
//! 1. Timelines stay sorted newest-first after any batch of inserts.
//! 2. Ids are unique and adding an entry twice changes nothing.
//! 3. Inserting never changes which entry is active, and a batch insert ends
//!    up exactly like inserting the same entries one at a time.
//! 4. `get_newer_than` returns exactly the strictly newer entries.
//! 5. The visible window stays contiguous, in bounds, and holds the active index.

use std::collections::HashSet;

use perch_timeline::{ActiveList, Status, Timeline, VisibleTimelineList};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

/// Small id space so batches contain duplicates; small clock so timestamps tie.
fn status_strategy() -> impl Strategy<Value = Status> {
    (0u64..40, 0u64..20).prop_map(|(id, ts)| Status::new(id, ts, "test", "Test"))
}

fn batches_strategy() -> impl Strategy<Value = Vec<Vec<Status>>> {
    prop::collection::vec(prop::collection::vec(status_strategy(), 0..8), 1..6)
}

#[derive(Clone, Debug)]
enum Op {
    Previous,
    Next,
    First,
    Last,
    ShiftPrevious,
    ShiftNext,
    ExpandPrevious,
    ExpandNext,
    ShrinkBeginning,
    ShrinkEnd,
    Append,
    Delete,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Previous),
        Just(Op::Next),
        Just(Op::First),
        Just(Op::Last),
        Just(Op::ShiftPrevious),
        Just(Op::ShiftNext),
        Just(Op::ExpandPrevious),
        Just(Op::ExpandNext),
        Just(Op::ShrinkBeginning),
        Just(Op::ShrinkEnd),
        Just(Op::Append),
        Just(Op::Delete),
    ]
}

fn apply(list: &mut VisibleTimelineList, op: &Op) {
    match op {
        Op::Previous => list.activate_previous(),
        Op::Next => list.activate_next(),
        Op::First => list.activate_first(),
        Op::Last => list.activate_last(),
        Op::ShiftPrevious => list.shift_active_previous(),
        Op::ShiftNext => list.shift_active_next(),
        Op::ExpandPrevious => list.expand_visible_previous(),
        Op::ExpandNext => list.expand_visible_next(),
        Op::ShrinkBeginning => list.shrink_visible_beggining(),
        Op::ShrinkEnd => list.shrink_visible_end(),
        Op::Append => list.append_timeline(Timeline::new("pane")),
        Op::Delete => {
            let _ = list.delete_active_timeline();
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1–3. Sorting, dedup, and cursor identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sorted_unique_and_cursor_stable(batches in batches_strategy()) {
        let mut timeline: Timeline = Timeline::new("Home");

        for batch in batches {
            let active_before = timeline.get_active().map(|s| s.id);
            timeline.add_statuses(batch);

            let stamps: Vec<u64> = timeline.iter().map(|s| s.created_at).collect();
            prop_assert!(
                stamps.windows(2).all(|w| w[0] >= w[1]),
                "not newest-first: {:?}", stamps
            );

            let ids: HashSet<_> = timeline.iter().map(|s| s.id).collect();
            prop_assert_eq!(ids.len(), timeline.len());

            if let Some(id) = active_before {
                prop_assert_eq!(timeline.get_active().map(|s| s.id), Some(id));
            }
            prop_assert_eq!(timeline.active_index().is_none(), timeline.is_empty());
        }
    }

    #[test]
    fn adding_twice_is_idempotent(seed in prop::collection::vec(status_strategy(), 0..10), extra in status_strategy()) {
        let mut once: Timeline = Timeline::new("a").with_entries(seed.clone());
        once.add_status(extra.clone());

        let mut twice: Timeline = Timeline::new("b").with_entries(seed);
        twice.add_status(extra.clone());
        twice.add_status(extra);

        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once.active_index(), twice.active_index());
        prop_assert_eq!(once.get_active(), twice.get_active());
    }

    #[test]
    fn batch_matches_single_inserts(batches in batches_strategy()) {
        let mut batched: Timeline = Timeline::new("batched");
        let mut singles: Timeline = Timeline::new("singles");

        for batch in batches {
            batched.add_statuses(batch.clone());
            for status in batch {
                singles.add_status(status);
            }

            let batched_ids: Vec<_> = batched.iter().map(|s| s.id).collect();
            let single_ids: Vec<_> = singles.iter().map(|s| s.id).collect();
            prop_assert_eq!(batched_ids, single_ids);
            prop_assert_eq!(batched.active_index(), singles.active_index());
            prop_assert_eq!(batched.get_active(), singles.get_active());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Newer-than
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn newer_than_is_exact(entries in prop::collection::vec(status_strategy(), 0..20), cutoff in 0u64..22) {
        let timeline: Timeline = Timeline::new("Home").with_entries(entries);

        let newer: Vec<_> = timeline.get_newer_than(cutoff).into_iter().map(|s| s.id).collect();
        let expected: Vec<_> = timeline.iter().filter(|s| s.created_at > cutoff).map(|s| s.id).collect();
        prop_assert_eq!(newer, expected);

        if let Some(newest) = timeline.newest() {
            prop_assert!(timeline.get_newer_than(newest.created_at).is_empty());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Visible window
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn visible_window_invariants(initial in 0usize..5, ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut list: VisibleTimelineList = VisibleTimelineList::new();
        for _ in 0..initial {
            list.append_timeline(Timeline::new("pane"));
        }

        for op in &ops {
            apply(&mut list, op);

            let visible = list.visible();
            match list.active_index() {
                None => {
                    prop_assert!(list.is_empty());
                    prop_assert!(visible.is_empty(), "window {:?} on empty list", visible);
                }
                Some(active) => {
                    prop_assert!(active < list.len());
                    prop_assert!(visible.contains(&active), "active {} outside {:?} after {:?}", active, visible, op);
                    prop_assert!(visible.windows(2).all(|w| w[1] == w[0] + 1), "not contiguous: {:?}", visible);
                    prop_assert!(visible.iter().all(|&i| i < list.len()), "out of bounds: {:?}", visible);
                }
            }
        }
    }
}
