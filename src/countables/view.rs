//! # Display Ordering
//!
//! The canonical collection keeps insertion order: it is what gets persisted
//! and what `change_count` indexes into. Users, however, want the busiest
//! counters on top. This module computes that *display order* as a pure
//! projection over a borrowed slice. It never reorders the canonical
//! collection and nothing here is cached, so there is exactly one source of
//! truth.
//!
//! Display order:
//! 1. `count` descending
//! 2. ties broken by name ascending ([`compare_names`])
//!
//! ```text
//! canonical: [A:2, B:2, C:5]      display: 1. C:5   (index 2)
//!                                          2. A:2   (index 0)
//!                                          3. B:2   (index 1)
//! ```
//!
//! [`project`] keeps the canonical index next to every row, so a consumer that
//! rendered row `n` can address the right entry without searching by name.

use crate::model::Countable;
use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;
use tracing::warn;

thread_local! {
    // Root-locale collator at default (tertiary) strength. `Collator` is not
    // `Sync`, so each thread builds its own on first use.
    static COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new())
            .map_err(|e| warn!(error = ?e, "collation data unavailable, using case-folded order"))
            .ok();
}

/// A row of the display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCountable {
    /// 1-based position in display order.
    pub position: usize,
    /// 0-based position in the canonical collection.
    pub index: usize,
    pub countable: Countable,
}

/// Name ordering used for tie-breaks.
///
/// Locale-aware collation: accents sort with their base letter and, on
/// otherwise equal names, lowercase sorts first. Raw comparison breaks any
/// remaining tie so the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        })
        .then_with(|| a.cmp(b))
}

fn display_order(a: &Countable, b: &Countable) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| compare_names(&a.name, &b.name))
}

/// Returns a sorted copy of `entries`.
pub fn sorted_view(entries: &[Countable]) -> Vec<Countable> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(display_order);
    sorted
}

/// Like [`sorted_view`], but keeps display position and canonical index.
pub fn project(entries: &[Countable]) -> Vec<DisplayCountable> {
    let mut indexed: Vec<(usize, &Countable)> = entries.iter().enumerate().collect();
    indexed.sort_by(|(_, a), (_, b)| display_order(a, b));

    indexed
        .into_iter()
        .enumerate()
        .map(|(pos, (index, countable))| DisplayCountable {
            position: pos + 1,
            index,
            countable: countable.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(name: &str, count: u64) -> Countable {
        Countable::with_count(name, count)
    }

    #[test]
    fn sorts_by_count_then_name() {
        let entries = vec![c("A", 2), c("B", 2), c("C", 5)];
        let view = sorted_view(&entries);
        assert_eq!(view, vec![c("C", 5), c("A", 2), c("B", 2)]);
    }

    #[test]
    fn does_not_touch_canonical_order() {
        let entries = vec![c("A", 2), c("B", 2), c("C", 5)];
        let _ = sorted_view(&entries);
        assert_eq!(entries, vec![c("A", 2), c("B", 2), c("C", 5)]);
    }

    #[test]
    fn empty_collection_projects_to_empty() {
        assert!(sorted_view(&[]).is_empty());
        assert!(project(&[]).is_empty());
    }

    #[test]
    fn tie_break_is_case_insensitive_first() {
        let entries = vec![c("banana", 1), c("Cherry", 1), c("apple", 1)];
        let names: Vec<_> = sorted_view(&entries).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["apple", "banana", "Cherry"]);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let entries = vec![c("Zebra", 1), c("Émeu", 1), c("Ökse", 1), c("apple", 1)];
        let names: Vec<_> = sorted_view(&entries).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["apple", "Émeu", "Ökse", "Zebra"]);
    }

    #[test]
    fn compare_names_is_total() {
        assert_eq!(compare_names("crow", "Crow"), Ordering::Less);
        assert_eq!(compare_names("Crow", "crow"), Ordering::Greater);
        assert_eq!(compare_names("Crow", "Crow"), Ordering::Equal);
    }

    #[test]
    fn project_keeps_canonical_index() {
        let entries = vec![c("A", 2), c("B", 2), c("C", 5)];
        let rows = project(&entries);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[0].index, 2);
        assert_eq!(rows[0].countable.name, "C");
        assert_eq!(rows[1].index, 0);
        assert_eq!(rows[2].index, 1);
        assert_eq!(rows[2].position, 3);
    }
}
