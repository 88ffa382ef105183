/// Syntactic role of a single line, judged on local facts only.
///
/// This is phase 1 of reordering: each line is classified independently,
/// without reference to surrounding lines. The role decides both whether a
/// block may be sorted and which comparison key is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Anything that matches none of the patterns below.
    Text,
    /// A line starting with `import`.
    Import,
    /// A line starting with `import type`.
    ImportType,
    /// An assignment (`=` not followed by `=`) or a key/value pair
    /// (`:` present without a `?`).
    Declaration,
}

/// Classifies a trimmed line into a [`Role`].
///
/// Total over all strings; the fallback role is [`Role::Text`].
///
/// The colon and question-mark checks are presence tests, not occurrence
/// counts: each scores at most 1, so `a:b:c?d` comes out even and is *not* a
/// declaration. Downstream callers rely on this exact behavior; see the
/// pinning test below before changing it.
pub fn classify(trimmed: &str) -> Role {
    let colon_hits = usize::from(trimmed.contains(':'));
    let question_mark_hits = usize::from(trimmed.contains('?'));

    let is_assignment = match trimmed.find('=') {
        Some(pos) => trimmed.as_bytes().get(pos + 1) != Some(&b'='),
        None => false,
    };

    if is_assignment || colon_hits > question_mark_hits {
        return Role::Declaration;
    }
    if trimmed.starts_with("import type") {
        return Role::ImportType;
    }
    if trimmed.starts_with("import") {
        return Role::Import;
    }
    Role::Text
}
