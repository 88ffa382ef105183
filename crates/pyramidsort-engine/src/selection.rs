use crate::reorder::reorder;

/// A zero-based, end-exclusive range of lines within a text buffer.
///
/// Ranges are positions, not validated references: a range past the end of
/// the buffer clamps rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Reorders only the lines of `text` covered by `range`, leaving the rest
/// byte-for-byte intact.
///
/// The selected lines keep their terminators while being extracted, so a
/// selection ending mid-buffer carries its trailing separator through
/// [`reorder`] and the surrounding text rejoins without a seam.
pub fn reorder_line_range(text: &str, range: &LineRange) -> String {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let end = range.end.min(lines.len());
    let start = range.start.min(end);

    let selected: String = lines[start..end].concat();
    let reordered = reorder(&selected);

    let mut out = String::with_capacity(text.len());
    out.extend(lines[..start].iter().copied());
    out.push_str(&reordered);
    out.extend(lines[end..].iter().copied());
    out
}
