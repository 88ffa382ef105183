use std::cmp::Ordering;

use crate::classify::{Role, classify};

/// Extracts the comparison key for a line under the given role.
///
/// Declarations compare on their left-hand side (everything before the first
/// `=`), imports on their module clause (everything before the first `from`),
/// and anything else on the whole trimmed line. Keys come from the untrimmed
/// line even though the role was judged on the trimmed one. A missing `=` or
/// `from` degrades to the whole line; no role ever fails to produce a key.
pub fn sort_key<'a>(line: &'a str, role: Role) -> &'a str {
    match role {
        Role::Declaration => line.split_once('=').map_or(line, |(lhs, _)| lhs).trim(),
        Role::Import | Role::ImportType => {
            line.split_once("from").map_or(line, |(lhs, _)| lhs).trim()
        }
        Role::Text => line.trim(),
    }
}

/// Three-way ordering of two lines within one homogeneous block.
///
/// The role is taken from `a` alone; callers only sort blocks whose lines all
/// share a role, so judging one line is enough. `Text` lines always compare
/// equal, which makes sorting a text block a no-op.
///
/// Shorter keys sort first. Keys of equal length sort in *descending*
/// lexicographic order. Identical keys compare equal, so a stable sort
/// leaves their input order alone.
pub fn compare(a: &str, b: &str) -> Ordering {
    let role = classify(a.trim());
    if role == Role::Text {
        return Ordering::Equal;
    }

    let key_a = sort_key(a, role);
    let key_b = sort_key(b, role);

    match key_a.len().cmp(&key_b.len()) {
        Ordering::Equal => key_b.cmp(key_a),
        unequal => unequal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("const bb = 1", Role::Declaration, "const bb")]
    #[case("  const a = 2", Role::Declaration, "const a")]
    #[case("import {a} from 'b'", Role::Import, "import {a}")]
    #[case("import type {T} from 'b'", Role::ImportType, "import type {T}")]
    #[case("no delimiter here", Role::Text, "no delimiter here")]
    fn key_extraction(#[case] line: &str, #[case] role: Role, #[case] expected: &str) {
        assert_eq!(sort_key(line, role), expected);
    }

    #[test]
    fn missing_from_token_degrades_to_whole_line() {
        assert_eq!(sort_key("import './side-effect'", Role::Import), "import './side-effect'");
    }

    #[test]
    fn shorter_key_sorts_first() {
        assert_eq!(compare("const a = 2", "const bb = 1"), Ordering::Less);
        assert_eq!(compare("const bb = 1", "const a = 2"), Ordering::Greater);
    }

    #[test]
    fn equal_length_keys_sort_descending() {
        // "import {b}" and "import {a}" have equal length, so the
        // lexicographically larger key comes first.
        assert_eq!(
            compare("import {b} from 'x'", "import {a} from 'y'"),
            Ordering::Less
        );
        assert_eq!(
            compare("import {a} from 'y'", "import {b} from 'x'"),
            Ordering::Greater
        );
    }

    #[test]
    fn text_lines_always_compare_equal() {
        assert_eq!(compare("zebra", "ant"), Ordering::Equal);
    }

    #[test]
    fn identical_keys_compare_equal() {
        assert_eq!(compare("const a = 1", "const a = 2"), Ordering::Equal);
    }
}
