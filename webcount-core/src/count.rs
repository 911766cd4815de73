//! Literal substring counting over raw response bytes.
//!
//! Every start position is reported: after a match the scan resumes one byte
//! past the start of the match, not past its end, so `"aa"` occurs twice in
//! `"aaa"`.

/// Iterator over the start offsets of `needle` in `haystack`, overlapping
/// matches included.
///
/// An empty needle matches at every offset from `0` to `haystack.len()`
/// inclusive.
#[derive(Debug, Clone)]
pub struct MatchPositions<'a> {
    haystack: &'a [u8],
    needle: &'a [u8],
    cursor: usize,
}

impl<'a> MatchPositions<'a> {
    pub fn new(haystack: &'a [u8], needle: &'a [u8]) -> Self {
        Self {
            haystack,
            needle,
            cursor: 0,
        }
    }

    fn find_from(&self, start: usize) -> Option<usize> {
        if start > self.haystack.len() {
            return None;
        }
        if self.needle.is_empty() {
            return Some(start);
        }
        self.haystack[start..]
            .windows(self.needle.len())
            .position(|window| window == self.needle)
            .map(|offset| start + offset)
    }
}

impl Iterator for MatchPositions<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let pos = self.find_from(self.cursor)?;
        self.cursor = pos + 1;
        Some(pos)
    }
}

/// Counts occurrences of `term` in `body`, overlapping matches included.
pub fn count_occurrences(body: &[u8], term: &[u8]) -> usize {
    let count = MatchPositions::new(body, term).count();
    tracing::trace!(
        "Counted {} occurrence(s) of a {}-byte term in a {}-byte body",
        count,
        term.len(),
        body.len()
    );
    count
}
