//! Pattern Matcher
//!
//! Given normalized text and a cursor, finds the first pattern in a
//! sub-table whose `find` is a prefix of `text[cursor..]`. Patterns are
//! additionally indexed by the first character of `find` so a lookup only
//! scans candidates that could possibly match, but ties within a bucket are
//! still resolved by original table order — the index is purely an
//! acceleration, never a change in which pattern wins.

use std::collections::HashMap;

use crate::data::Pattern;

/// An ordered sub-table (non-rule or rule) with a first-character index.
#[derive(Debug)]
pub(crate) struct SubTable {
    patterns: Vec<Pattern>,
    by_first_char: HashMap<char, Vec<usize>>,
}

impl SubTable {
    pub(crate) fn build(patterns: Vec<Pattern>) -> Self {
        let mut by_first_char: HashMap<char, Vec<usize>> = HashMap::new();
        for (index, pattern) in patterns.iter().enumerate() {
            let first = pattern
                .find
                .chars()
                .next()
                .expect("patterns are validated to have non-empty `find`");
            by_first_char.entry(first).or_default().push(index);
        }
        Self {
            patterns,
            by_first_char,
        }
    }

    /// Returns the first pattern (in original table order) whose `find` is a
    /// prefix of `text[cur..]`, plus the number of characters it consumes.
    pub(crate) fn find_at(&self, text: &[char], cur: usize) -> Option<(&Pattern, usize)> {
        let first = *text.get(cur)?;
        let candidates = self.by_first_char.get(&first)?;
        for &index in candidates {
            let pattern = &self.patterns[index];
            let find_len = pattern.find.chars().count();
            if cur + find_len > text.len() {
                continue;
            }
            if pattern
                .find
                .chars()
                .zip(&text[cur..cur + find_len])
                .all(|(expected, &actual)| expected == actual)
            {
                return Some((pattern, find_len));
            }
        }
        None
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.patterns.len()
    }
}
