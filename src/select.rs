//! Reduction of a word table to its most frequent entries.
//!
//! Entries are ranked by `(count, word)`. Trimming always discards the lowest-ranked
//! entry, so among words sharing the lowest count the alphabetically first one goes
//! first. The ranking is total, which makes the result independent of hash order.

use crate::counter::WordTable;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A word chosen for display together with its count.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SelectedEntry {
    // Field order gives the derived `Ord` its (count, word) ranking.
    pub count: usize,
    pub word: String,
}

/// The finalized set of entries to render. Order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<SelectedEntry>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SelectedEntry] {
        &self.entries
    }

    pub fn min_count(&self) -> Option<usize> {
        self.entries.iter().map(|e| e.count).min()
    }

    pub fn max_count(&self) -> Option<usize> {
        self.entries.iter().map(|e| e.count).max()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|e| e.word == word)
    }

    pub fn into_entries(self) -> Vec<SelectedEntry> {
        self.entries
    }
}

/// Keeps the `n` highest-ranked entries of `table`.
///
/// Uses a min-heap bounded at `n` entries, so the cost is O(|table| log n).
/// `n == 0` yields an empty selection; callers validate `n` before getting here.
#[tracing::instrument(skip_all, fields(n = n, table_len = table.len()))]
pub fn trim(table: WordTable, n: usize) -> Selection {
    if n >= table.len() {
        let entries = table
            .into_iter()
            .map(|(word, count)| SelectedEntry { count, word })
            .collect();
        return Selection { entries };
    }

    let mut heap: BinaryHeap<Reverse<SelectedEntry>> = BinaryHeap::with_capacity(n + 1);
    for (word, count) in table {
        heap.push(Reverse(SelectedEntry { count, word }));
        if heap.len() > n {
            if let Some(Reverse(dropped)) = heap.pop() {
                tracing::trace!(word = %dropped.word, count = dropped.count, "trimmed");
            }
        }
    }
    let entries = heap.into_iter().map(|Reverse(entry)| entry).collect();
    Selection { entries }
}
