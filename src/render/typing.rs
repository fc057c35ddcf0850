//! Character-by-character output.

use std::io::{self, Write};
use std::time::Duration;

use crate::pacing::Pacer;

const ESC: char = '\x1b';

/// Write `lines` one visible character at a time, pausing `delay` after each.
///
/// Lines are joined with a newline; nothing is written after the last one.
/// ANSI escape sequences are written whole and without a pause, so a
/// sequence is never split across writes.
pub fn progressive_print<W: Write + ?Sized>(
    out: &mut W,
    pacer: &dyn Pacer,
    lines: &[String],
    delay: Duration,
) -> io::Result<()> {
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.write_all(b"\n")?;
        }

        let mut chars = line.char_indices().peekable();
        while let Some((start, ch)) = chars.next() {
            let mut end = start + ch.len_utf8();

            if ch == ESC {
                // CSI: ESC [ params... final byte in @..~
                if let Some(&(_, '[')) = chars.peek() {
                    chars.next();
                    end += 1;
                    for (idx, c) in chars.by_ref() {
                        end = idx + c.len_utf8();
                        if ('@'..='~').contains(&c) {
                            break;
                        }
                    }
                }
                out.write_all(line[start..end].as_bytes())?;
                continue;
            }

            out.write_all(line[start..end].as_bytes())?;
            out.flush()?;
            pacer.pause(delay);
        }
    }
    out.flush()
}
