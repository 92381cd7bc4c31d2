//! Word extraction driven by a set of separator characters.

use std::collections::BTreeSet;

/// Characters that end a word in the default set.
pub const DEFAULT_SEPARATORS: [char; 22] = [
    ' ', '\t', '\n', '\r', '`', '-', '\\', '/', '(', ')', ',', '.', '!', '?', '[', ']', '\'',
    ';', ':', '"', '_', '*',
];

/// Immutable set of characters that terminate a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: BTreeSet<char>,
}

impl SeparatorSet {
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Self {
        SeparatorSet {
            chars: chars.into_iter().collect(),
        }
    }

    /// The default set extended with `extra`.
    pub fn with_extra<I: IntoIterator<Item = char>>(extra: I) -> Self {
        let mut set = Self::default();
        set.chars.extend(extra);
        set
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS)
    }
}

/// Returns the longest prefix of `text` that contains no separator.
///
/// The result is empty when `text` is empty or starts with a separator.
pub fn next_word<'a>(text: &'a str, separators: &SeparatorSet) -> &'a str {
    let end = text
        .char_indices()
        .find(|&(_, c)| separators.contains(c))
        .map_or(text.len(), |(i, _)| i);
    &text[..end]
}

/// Iterator over every word in a piece of text, in order of appearance.
pub struct Words<'a, 's> {
    rest: &'a str,
    separators: &'s SeparatorSet,
}

/// Splits `text` into words. Case is left untouched.
pub fn words<'a, 's>(text: &'a str, separators: &'s SeparatorSet) -> Words<'a, 's> {
    Words {
        rest: text,
        separators,
    }
}

impl<'a> Iterator for Words<'a, '_> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let separators = self.separators;
        self.rest = self.rest.trim_start_matches(|c: char| separators.contains(c));
        if self.rest.is_empty() {
            return None;
        }
        let word = next_word(self.rest, separators);
        self.rest = &self.rest[word.len()..];
        Some(word)
    }
}
