use crate::classify::classify;
use crate::order::compare;

/// Platform line separator. All block boundaries are expressed in terms of
/// this constant; mixed line endings inside one input are not normalized.
#[cfg(windows)]
pub const LINE_SEP: &str = "\r\n";
/// Platform line separator. All block boundaries are expressed in terms of
/// this constant; mixed line endings inside one input are not normalized.
#[cfg(not(windows))]
pub const LINE_SEP: &str = "\n";

/// Secondary block separator, orthogonal to blank lines: two literal
/// backslash characters.
pub const CONTINUATION_MARKER: &str = r"\\";

/// Reorders the lines of `input` into a pyramid.
///
/// The input is decomposed recursively: first on blank lines (a doubled
/// [`LINE_SEP`]), then on the [`CONTINUATION_MARKER`], and each part is
/// reordered independently and rejoined on the same delimiter. At the leaf
/// level a multi-line block is sorted with [`compare`] only when every line
/// classifies to the same [`Role`](crate::Role); a mixed block comes back
/// verbatim.
///
/// Leaf sorting drops empty lines from the output and preserves a trailing
/// [`LINE_SEP`] when the original block ended with one. Total over all
/// strings; the worst case returns the input unchanged.
pub fn reorder(input: &str) -> String {
    let blank_line = [LINE_SEP, LINE_SEP].concat();
    let blank_groups: Vec<&str> = input.split(blank_line.as_str()).collect();
    if blank_groups.len() > 1 {
        return join_reordered(&blank_groups, &blank_line);
    }

    let marker_groups: Vec<&str> = input.split(CONTINUATION_MARKER).collect();
    if marker_groups.len() > 1 {
        return join_reordered(&marker_groups, CONTINUATION_MARKER);
    }

    if !input.contains(LINE_SEP) {
        return input.to_string();
    }

    let mut lines: Vec<&str> = input.split(LINE_SEP).filter(|l| !l.is_empty()).collect();

    let roles: Vec<_> = lines.iter().map(|l| classify(l.trim())).collect();
    let homogeneous = match roles.first() {
        Some(first) => roles.iter().all(|r| r == first),
        None => true,
    };
    if !homogeneous {
        return input.to_string();
    }

    lines.sort_by(|a, b| compare(a, b));
    let mut out = lines.join(LINE_SEP);
    if input.ends_with(LINE_SEP) {
        out.push_str(LINE_SEP);
    }
    out
}

fn join_reordered(groups: &[&str], delimiter: &str) -> String {
    groups
        .iter()
        .map(|g| reorder(g))
        .collect::<Vec<_>>()
        .join(delimiter)
}
