use crate::index::tokenize::tokenize;
use crate::index::types::{Index, LineNo};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

/// Build an index from a file on disk.
///
/// Opening the file is the only fatal failure; everything after that
/// degrades to end-of-input (see [`build_from_reader`]).
pub fn build_index(path: &Path) -> Result<Index> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    let start = Instant::now();
    let index = build_from_reader(BufReader::new(file));
    tracing::info!(
        lines = index.line_count(),
        words = index.word_count(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "index built"
    );

    Ok(index)
}

/// Build an index from any line-oriented source.
///
/// The source is consumed sequentially, one line at a time, until
/// exhausted; a read error mid-stream ends the stream and whatever was
/// read so far forms the index. Each line is stored verbatim (without
/// its newline) and every token on it is credited to its line number.
/// Set insertion is idempotent, so a word repeated within one line
/// still yields a single entry for that line.
pub fn build_from_reader<R: BufRead>(source: R) -> Index {
    let mut index = Index::default();

    for (n, line) in source.lines().enumerate() {
        let Ok(line) = line else {
            // A failed read ends the stream; keep what was read so far.
            break;
        };

        let n = n as LineNo;
        for token in tokenize(&line) {
            tracing::debug!(line = n, token, "indexed token");
            index.words.entry(token.to_string()).or_default().insert(n);
        }
        index.lines.push(line);
    }

    index
}
