//! Escape decoding for quoted string tokens.

use alloc::string::String;
use core::str::Chars;

/// Decodes the body of a quoted string (surrounding quotes already stripped).
///
/// Everything copies through verbatim except after a backslash: `\\`, `\/`
/// and `\"` yield the escaped character itself, `\t \n \r \f \b` yield the
/// usual controls, and `\uXXXX` with exactly four hex digits yields that code
/// point re-encoded as UTF-8. A malformed or truncated `\uXXXX` is not an
/// error; the `u` and whatever follows pass through literally. Any other
/// escaped character also passes through as itself.
///
/// Lone UTF-16 surrogate halves are not representable and decode to U+FFFD;
/// surrogate pairs are not combined.
pub(crate) fn decode_escapes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw.chars();
    while let Some(c) = rest.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(escaped) = rest.next() else {
            // Unreachable for scanner-produced text: a trailing backslash
            // would have escaped the closing quote instead.
            out.push('\\');
            break;
        };
        match escaped {
            '\\' | '/' | '"' => out.push(escaped),
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            'f' => out.push('\u{000C}'),
            'b' => out.push('\u{0008}'),
            'u' => match hex4(&rest) {
                Some((code, after)) => {
                    out.push(char::from_u32(u32::from(code)).unwrap_or(char::REPLACEMENT_CHARACTER));
                    rest = after;
                }
                // Fewer than four hex digits follow: keep the `u` and let the
                // digits (if any) copy through on later iterations.
                None => out.push('u'),
            },
            other => out.push(other),
        }
    }
    out
}

/// Reads exactly four hex digits, returning the code point and the advanced
/// iterator, or `None` without consuming anything.
fn hex4<'a>(rest: &Chars<'a>) -> Option<(u16, Chars<'a>)> {
    let mut probe = rest.clone();
    let mut code: u16 = 0;
    for _ in 0..4 {
        let digit = probe.next()?.to_digit(16)?;
        code = (code << 4) | u16::try_from(digit).ok()?;
    }
    Some((code, probe))
}
