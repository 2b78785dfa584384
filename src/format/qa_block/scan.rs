//! Brace scanning and backslash sanitizing for embedded JSON payloads.

/// Given `open` pointing at a `{`, return the index just past its matching `}`.
/// Braces inside quoted strings are ignored, and the byte after any `\` is
/// skipped. Returns None when the text ends before depth returns to zero.
pub(super) fn find_block_end(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'{') {
        return None;
    }
    let mut depth = 0usize;
    let mut in_string = false;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'"' => in_string = !in_string,
            b'{' if !in_string => depth += 1,
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Length of the JSON escape sequence following a backslash, or 0 when the
/// backslash is stray (typically a LaTeX command such as `\frac`).
fn json_escape_len(after: &str) -> usize {
    let bytes = after.as_bytes();
    match bytes.first() {
        Some(b'"' | b'\\' | b'/') => 1,
        Some(b'u') if bytes.len() >= 5 && bytes[1..5].iter().all(u8::is_ascii_hexdigit) => 5,
        // \n, \t ... followed by a lowercase letter reads as \nabla, \times ...
        Some(b'b' | b'f' | b'n' | b'r' | b't') => {
            if bytes.get(1).is_some_and(u8::is_ascii_lowercase) {
                0
            } else {
                1
            }
        }
        _ => 0,
    }
}

/// Double every backslash that does not start a recognized JSON escape.
pub(super) fn sanitize_backslashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    let mut rest = s;
    while let Some(idx) = rest.find('\\') {
        out.push_str(&rest[..idx]);
        let after = &rest[idx + 1..];
        let len = json_escape_len(after);
        if len > 0 {
            out.push('\\');
            out.push_str(&after[..len]);
            rest = &after[len..];
        } else {
            out.push_str("\\\\");
            rest = after;
        }
    }
    out.push_str(rest);
    out
}
