//! Type canonicalization.
//!
//! `normalize_type` maps a raw type spelling to the key used for matching.
//! It is total (malformed input passes through) and idempotent, so the
//! result can be computed once at construction time and compared with
//! plain string equality forever after.

use crate::core::arena::{ArenaStr, StringArena};

/// Keywords dropped wherever they appear as a whole word. `constant` and
/// `myconst` are never touched; `const*` and `*const` are.
const STRIPPED_KEYWORDS: [&str; 4] = ["const", "class", "struct", "union"];

const BASIC_STRING: &[u8] = b"basic_string<";

/// Canonicalizes a type spelling into the arena and returns a view over
/// the normalized text.
///
/// Three steps: drop all whitespace, drop qualifier keywords at word
/// boundaries, and rewrite `basic_string<...>` instantiations to the bare
/// `string` alias (the upstream parser reports fully-instantiated names
/// for standard containers, so `std::string` and its expanded form would
/// otherwise never compare equal).
pub fn normalize_type(arena: &mut StringArena, text: &str) -> ArenaStr {
    let scratch = arena.allocate(text.len());
    let bytes = text.as_bytes();
    let mut used = 0;
    {
        let out = arena.scratch_mut(&scratch);
        let mut read = 0;
        while read < bytes.len() {
            let b = bytes[read];
            if b.is_ascii_whitespace() {
                read += 1;
                continue;
            }
            if let Some(keyword_len) = keyword_at(bytes, read) {
                read += keyword_len;
                continue;
            }
            out[used] = b;
            used += 1;
            read += 1;
        }
        used = canonicalize_basic_string(out, used);
    }
    arena.finalize(scratch, used)
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Returns the length of a stripped keyword starting at `pos`, if the
/// occurrence is bounded by non-word characters on both sides.
fn keyword_at(bytes: &[u8], pos: usize) -> Option<usize> {
    if pos > 0 && is_word_byte(bytes[pos - 1]) {
        return None;
    }
    for keyword in STRIPPED_KEYWORDS {
        let end = pos + keyword.len();
        if bytes[pos..].starts_with(keyword.as_bytes())
            && (end == bytes.len() || !is_word_byte(bytes[end]))
        {
            return Some(keyword.len());
        }
    }
    None
}

/// Rewrites every `basic_string<...>` occurrence in `buf[..len]` to
/// `string`, matching nested angle brackets to find the true closing `>`.
/// The enclosing namespace qualifier is untouched, so
/// `std::basic_string<char>` becomes `std::string`. If any occurrence has
/// unbalanced brackets the buffer is left as-is.
fn canonicalize_basic_string(buf: &mut [u8], len: usize) -> usize {
    // Validation pass first: the rewrite below is destructive, so bail
    // out before touching anything if a closing `>` is missing.
    let mut pos = 0;
    let mut found = false;
    while let Some(start) = find_occurrence(&buf[..len], pos) {
        let open = start + BASIC_STRING.len() - 1;
        match matching_angle(&buf[..len], open) {
            Some(close) => pos = close + 1,
            None => return len,
        }
        found = true;
    }
    if !found {
        return len;
    }

    let mut read = 0;
    let mut write = 0;
    while read < len {
        // The boundary byte is the last one written, since earlier
        // rewrites may have shifted the text left.
        let bounded = write == 0 || !is_word_byte(buf[write - 1]);
        if bounded && buf[read..len].starts_with(BASIC_STRING) {
            if let Some(close) = matching_angle(&buf[..len], read + BASIC_STRING.len() - 1) {
                buf[write..write + 6].copy_from_slice(b"string");
                write += 6;
                read = close + 1;
                continue;
            }
        }
        buf[write] = buf[read];
        write += 1;
        read += 1;
    }
    write
}

/// Finds the next `basic_string<` at or after `from` that starts on a
/// word boundary (so `my_basic_string<...>` is not rewritten).
fn find_occurrence(buf: &[u8], from: usize) -> Option<usize> {
    let mut pos = from;
    while pos + BASIC_STRING.len() <= buf.len() {
        if buf[pos..].starts_with(BASIC_STRING) && (pos == 0 || !is_word_byte(buf[pos - 1])) {
            return Some(pos);
        }
        pos += 1;
    }
    None
}

/// Index of the `>` matching the `<` at `open`, or `None` if unbalanced.
fn matching_angle(buf: &[u8], open: usize) -> Option<usize> {
    debug_assert_eq!(buf[open], b'<');
    let mut depth = 1i32;
    for (i, &b) in buf.iter().enumerate().skip(open + 1) {
        match b {
            b'<' => depth += 1,
            b'>' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str) -> String {
        let mut arena = StringArena::new();
        let view = normalize_type(&mut arena, text);
        arena.resolve(view).to_string()
    }

    #[test]
    fn keyword_stripping_is_word_bounded() {
        assert_eq!(normalize("constant"), "constant");
        assert_eq!(normalize("myconst"), "myconst");
        assert_eq!(normalize("const"), "");
        assert_eq!(normalize("const const"), "");
        assert_eq!(normalize("const*"), "*");
        assert_eq!(normalize("*const"), "*");
    }

    #[test]
    fn wildcard_is_a_no_op() {
        assert_eq!(normalize("*"), "*");
    }

    #[test]
    fn basic_string_prefix_must_be_word_bounded() {
        assert_eq!(
            normalize("my_basic_string<char>"),
            "my_basic_string<char>"
        );
        assert_eq!(normalize("std::basic_string<char>"), "std::string");
    }

    #[test]
    fn unbalanced_angles_pass_through() {
        // Whitespace and keywords are still stripped; only the
        // basic_string rewrite backs off.
        assert_eq!(
            normalize("const std::basic_string<char"),
            "std::basic_string<char"
        );
    }
}
