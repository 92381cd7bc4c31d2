//! Word frequency aggregation.

use crate::error::{Result, TagCloudError};
use crate::tokenizer::{SeparatorSet, words};
use std::collections::HashMap;
use std::collections::hash_map::Iter;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Lowercased word to occurrence count. Every count is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTable {
    counts: HashMap<String, usize>,
}

impl WordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word`, folded to lowercase. Empty words are ignored.
    pub fn add_word(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        *self.counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> Iter<'_, String, usize> {
        self.counts.iter()
    }
}

impl IntoIterator for WordTable {
    type Item = (String, usize);
    type IntoIter = std::collections::hash_map::IntoIter<String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl<'a> Extend<&'a str> for WordTable {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        for word in iter {
            self.add_word(word);
        }
    }
}

/// Builds a fresh table from `reader`, one line at a time.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD instead of failing the run.
pub fn count_words<R: BufRead>(mut reader: R, separators: &SeparatorSet) -> io::Result<WordTable> {
    let mut table = WordTable::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        table.extend(words(&String::from_utf8_lossy(&line), separators));
    }
    Ok(table)
}

/// Opens `path` and counts every word in it.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn count_file(path: &Path, separators: &SeparatorSet) -> Result<WordTable> {
    let file = File::open(path).map_err(|source| TagCloudError::InputOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let table =
        count_words(BufReader::new(file), separators).map_err(|source| TagCloudError::InputRead {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(
        distinct = table.len(),
        total = table.total(),
        "counted words"
    );
    Ok(table)
}
