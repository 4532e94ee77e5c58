/// Split a line into words using whitespace as the only delimiter.
///
/// Runs of whitespace collapse and leading/trailing whitespace produces
/// no empty tokens. This is the only normalization the index performs:
/// case and punctuation are preserved, so `word`, `Word` and `word.`
/// are three distinct index entries.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}
