//! Sorted, font-annotated view of a selection.

use crate::font::{FontScaler, ScaleMode};
use crate::select::{SelectedEntry, Selection};
use std::cmp::Ordering;

/// One output record: a word with its count and computed font size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedWord {
    pub word: String,
    pub count: usize,
    pub font_size: usize,
}

/// A finalized selection paired with its font scale.
#[derive(Debug, Clone)]
pub struct Report {
    entries: Vec<SelectedEntry>,
    scaler: Option<FontScaler>,
}

impl Report {
    /// Takes ownership of `selection` and fixes its scale from the selection's own counts.
    ///
    /// An empty selection has no scale and renders no records.
    pub fn new(selection: Selection, mode: ScaleMode) -> Self {
        let scaler = match (selection.min_count(), selection.max_count()) {
            (Some(min), Some(max)) => Some(FontScaler::new(mode, min, max)),
            _ => None,
        };
        let mut entries = selection.into_entries();
        entries.sort_by(|a, b| case_insensitive(&a.word, &b.word));
        // Popped from the back, so keep it reversed.
        entries.reverse();
        Report { entries, scaler }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Consumes the report, yielding records in case-insensitive word order.
pub struct RenderedWords {
    entries: Vec<SelectedEntry>,
    scaler: Option<FontScaler>,
}

impl IntoIterator for Report {
    type Item = RenderedWord;
    type IntoIter = RenderedWords;

    fn into_iter(self) -> RenderedWords {
        RenderedWords {
            entries: self.entries,
            scaler: self.scaler,
        }
    }
}

impl Iterator for RenderedWords {
    type Item = RenderedWord;

    fn next(&mut self) -> Option<RenderedWord> {
        let scaler = self.scaler?;
        let SelectedEntry { count, word } = self.entries.pop()?;
        Some(RenderedWord {
            font_size: scaler.font_size(count),
            word,
            count,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.entries.len(), Some(self.entries.len()))
    }
}

impl ExactSizeIterator for RenderedWords {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::WordTable;
    use crate::font::{MAX_FONT, MIN_FONT};
    use crate::select::trim;

    fn selection(text: &[&str], n: usize) -> Selection {
        let mut table = WordTable::new();
        table.extend(text.iter().copied());
        trim(table, n)
    }

    #[test]
    fn example_sentence_renders_alphabetically() {
        let words: Vec<&str> = "the cat the dog the cat".split(' ').collect();
        let rendered: Vec<RenderedWord> =
            Report::new(selection(&words, 2), ScaleMode::Shift).into_iter().collect();
        assert_eq!(
            rendered,
            vec![
                RenderedWord { word: "cat".into(), count: 2, font_size: 13 },
                RenderedWord { word: "the".into(), count: 3, font_size: 14 },
            ]
        );
    }

    #[test]
    fn empty_selection_renders_nothing() {
        let report = Report::new(Selection::default(), ScaleMode::Shift);
        assert!(report.is_empty());
        assert_eq!(report.into_iter().count(), 0);
    }

    #[test]
    fn order_ignores_case() {
        assert_eq!(case_insensitive("Apple", "banana"), Ordering::Less);
        assert_eq!(case_insensitive("apple", "Banana"), Ordering::Less);
        assert_eq!(case_insensitive("Zoo", "apple"), Ordering::Greater);
    }

    #[test]
    fn linear_mode_covers_range() {
        let words = ["a", "b", "b", "c", "c", "c"];
        let rendered: Vec<RenderedWord> =
            Report::new(selection(&words, 3), ScaleMode::Linear).into_iter().collect();
        let sizes: Vec<usize> = rendered.iter().map(|r| r.font_size).collect();
        assert_eq!(sizes.first(), Some(&MIN_FONT));
        assert_eq!(sizes.last(), Some(&MAX_FONT));
    }

    #[test]
    fn iterator_reports_remaining_length() {
        let mut iter = Report::new(selection(&["x", "y", "z"], 3), ScaleMode::Shift).into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next().map(|r| r.word), Some("x".to_string()));
        assert_eq!(iter.len(), 2);
    }
}
