use std::collections::{BTreeMap, BTreeSet};

/// Zero-based line number into the line store
pub type LineNo = u32;

/// Ordered store of the source's original lines.
///
/// Lines keep their text exactly as read (interior whitespace and all),
/// minus the trailing newline. Append-only during the build phase; the
/// index only ever hands out shared references afterwards.
#[derive(Debug, Default)]
pub struct LineStore {
    lines: Vec<String>,
}

impl LineStore {
    pub(crate) fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Get the original text of a line, if the number is in range
    pub fn get(&self, n: LineNo) -> Option<&str> {
        self.lines.get(n as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Fully built word-to-line index over one text source.
///
/// Immutable once the build phase finishes: lookups alias the stored
/// collections, they never copy or modify them. The per-word sets are
/// `BTreeSet`s, so ascending order and deduplication hold by
/// construction rather than by a sorting pass.
#[derive(Debug, Default)]
pub struct Index {
    pub(crate) lines: LineStore,
    pub(crate) words: BTreeMap<String, BTreeSet<LineNo>>,
}

impl Index {
    /// The store of original lines backing this index
    pub fn line_store(&self) -> &LineStore {
        &self.lines
    }

    /// Number of lines read from the source
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of distinct words in the index
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Line numbers on which `word` occurs, exact match, case-sensitive
    pub fn lines_for(&self, word: &str) -> Option<&BTreeSet<LineNo>> {
        self.words.get(word)
    }
}
