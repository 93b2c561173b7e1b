//! Lexical tokens produced by the scanner.

use alloc::string::String;
use core::fmt;

/// The kind of a lexical token.
///
/// The discriminants are the terminal columns of the grammar's action table
/// (columns 0–8 of that table are non-terminals), so a token kind indexes the
/// table directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenKind {
    /// `{`
    ObjectOpen = 9,
    /// `}`
    ObjectClose = 10,
    /// `[`
    ArrayOpen = 11,
    /// `]`
    ArrayClose = 12,
    /// `,`
    Comma = 13,
    /// A quoted string; its text is escape-decoded.
    Quoted = 14,
    /// `:`
    Colon = 15,
    /// An unquoted literal: a number or `true`/`false`/`null`.
    Bareword = 16,
    /// End of input, used as the final lookahead. Never carries text and
    /// never reaches a [`Handler`](crate::Handler).
    End = 17,
}

impl TokenKind {
    pub(crate) fn column(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::ObjectOpen => "'{'",
            TokenKind::ObjectClose => "'}'",
            TokenKind::ArrayOpen => "'['",
            TokenKind::ArrayClose => "']'",
            TokenKind::Comma => "','",
            TokenKind::Quoted => "string",
            TokenKind::Colon => "':'",
            TokenKind::Bareword => "bareword",
            TokenKind::End => "end of input",
        })
    }
}

/// A complete token: its kind plus the text it was scanned from.
///
/// Quoted strings hold the decoded body (quotes stripped, escapes resolved);
/// barewords hold the literal text exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn end() -> Self {
        Token {
            kind: TokenKind::End,
            text: String::new(),
        }
    }
}
