use crate::index::{Index, LineNo, LineStore};
use std::collections::BTreeSet;

/// Canonical empty set aliased by results for words the index has never
/// seen, so a miss allocates nothing.
static EMPTY_LINES: BTreeSet<LineNo> = BTreeSet::new();

/// Read-only lookup engine over a built index.
///
/// Holding a shared reference for its whole life gives the strict
/// build-then-query split for free: the engine cannot observe a
/// half-built index, and no result can outlive the index it aliases.
pub struct QueryEngine<'idx> {
    index: &'idx Index,
}

impl<'idx> QueryEngine<'idx> {
    pub fn new(index: &'idx Index) -> Self {
        Self { index }
    }

    /// Look up a word: exact match, case-sensitive, no trimming.
    ///
    /// An unknown word is not an error; its result aliases the canonical
    /// empty set and reports zero occurrences. Lookups never mutate the
    /// index, so the same word always yields an equivalent result.
    pub fn lookup(&self, word: &str) -> QueryResult<'idx> {
        let lines = self.index.lines_for(word).unwrap_or(&EMPTY_LINES);
        QueryResult {
            word: word.to_string(),
            lines,
            store: self.index.line_store(),
        }
    }
}

/// One word's occurrences: a view into index-owned data, nothing copied.
///
/// The borrow is tied to the index, not the engine, so a result stays
/// usable after the engine that produced it is gone.
#[derive(Debug)]
pub struct QueryResult<'idx> {
    word: String,
    lines: &'idx BTreeSet<LineNo>,
    store: &'idx LineStore,
}

impl<'idx> QueryResult<'idx> {
    /// The word exactly as queried
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Number of lines the word occurs on
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Matching line numbers in ascending order
    #[allow(dead_code)]
    pub fn line_numbers(&self) -> impl Iterator<Item = LineNo> + 'idx {
        let lines = self.lines;
        lines.iter().copied()
    }

    /// Matching `(line number, original text)` pairs in ascending order
    pub fn occurrences(&self) -> impl Iterator<Item = (LineNo, &'idx str)> + 'idx {
        let lines = self.lines;
        let store = self.store;
        lines
            .iter()
            .filter_map(move |&n| store.get(n).map(|text| (n, text)))
    }
}
