//! Raw JSON output mode.

use serde::de::IgnoredAny;

/// Re-indent `text` with two spaces, keeping key order.
///
/// Tokens are copied as written, so numbers such as `1e3` or integers wider
/// than 64 bits come out exactly as they went in. Text that is not valid JSON
/// comes back unchanged.
pub fn pretty_json(text: &str) -> String {
    if serde_json::from_str::<IgnoredAny>(text).is_err() {
        return text.to_string();
    }
    reindent(text.trim())
}

// Input is known-valid JSON; only whitespace outside strings is rewritten.
fn reindent(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() * 2);
    let mut depth = 0usize;
    let mut idx = 0;

    while idx < bytes.len() {
        let b = bytes[idx];
        match b {
            b'"' => {
                let end = string_end(bytes, idx);
                out.push_str(&text[idx..end]);
                idx = end;
                continue;
            }
            b'{' | b'[' => {
                let close = if b == b'{' { b'}' } else { b']' };
                let next = skip_whitespace(bytes, idx + 1);
                if bytes.get(next) == Some(&close) {
                    out.push(b as char);
                    out.push(close as char);
                    idx = next + 1;
                    continue;
                }
                depth += 1;
                out.push(b as char);
                newline(&mut out, depth);
            }
            b'}' | b']' => {
                depth = depth.saturating_sub(1);
                newline(&mut out, depth);
                out.push(b as char);
            }
            b',' => {
                out.push(',');
                newline(&mut out, depth);
            }
            b':' => out.push_str(": "),
            b' ' | b'\t' | b'\n' | b'\r' => {}
            _ => {
                let start = idx;
                while idx < bytes.len() && !is_delimiter(bytes[idx]) {
                    idx += 1;
                }
                out.push_str(&text[start..idx]);
                continue;
            }
        }
        idx += 1;
    }
    out
}

// Index one past the closing quote of the string opening at `start`.
fn string_end(bytes: &[u8], start: usize) -> usize {
    let mut idx = start + 1;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\\' => idx += 2,
            b'"' => return idx + 1,
            _ => idx += 1,
        }
    }
    bytes.len()
}

fn skip_whitespace(bytes: &[u8], mut idx: usize) -> usize {
    while idx < bytes.len() && matches!(bytes[idx], b' ' | b'\t' | b'\n' | b'\r') {
        idx += 1;
    }
    idx
}

fn is_delimiter(b: u8) -> bool {
    matches!(
        b,
        b'{' | b'}' | b'[' | b']' | b',' | b':' | b'"' | b' ' | b'\t' | b'\n' | b'\r'
    )
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str("  ");
    }
}
