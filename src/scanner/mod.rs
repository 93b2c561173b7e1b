//! The character-level tokenizer.
//!
//! A 28-state DFA over 19 character categories, driven with maximal munch:
//! the scanner keeps consuming as long as a transition exists, remembering
//! the most recent accepting state. When it hits a dead transition it backs
//! off to that state, commits the token, and pushes the characters read past
//! it onto a put-back queue so they are re-offered — in order — before any
//! fresh input. Nothing is ever lost or read twice.
//!
//! Input arrives as UTF-8 chunks appended to a byte ring; characters are
//! decoded lazily so a chunk boundary may fall anywhere, including inside a
//! multi-byte sequence or an escape. Running out of characters mid-token
//! reports [`Scan::Pending`] until [`Scanner::finish`] marks true end of
//! input.

use alloc::{collections::VecDeque, string::String};
use core::mem;

use crate::{
    error::LexError,
    escape::decode_escapes,
    token::{Token, TokenKind},
};

#[cfg(test)]
mod tests;

/// Character categories labeling the columns of the DFA.
///
/// The letters of `true`, `false` and `null` get individual categories so
/// the DFA can spell those literals out state by state. Categorization is
/// context-sensitive: inside a string almost everything is `Plain`, and the
/// character after a backslash is always `Other` so escaped quotes and
/// backslashes do not terminate the string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
enum Category {
    LetterA = 0,
    LetterE = 1,
    LetterF = 2,
    LetterL = 3,
    LetterN = 4,
    LetterR = 5,
    LetterS = 6,
    LetterT = 7,
    LetterU = 8,
    /// One of `{` `}` `[` `]` `,` `:`.
    Structural = 9,
    /// `1` through `9`.
    Digit = 10,
    Dot = 11,
    /// `+` or `-`.
    Sign = 12,
    Backslash = 13,
    Quote = 14,
    /// Any character inside a string that needs no special handling.
    Plain = 15,
    /// Anything not covered by another category.
    Other = 16,
    /// Whitespace outside a string. Drives transitions but is never kept.
    Blank = 17,
    Zero = 18,
}

/// Which token, if any, a DFA state accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Acceptance {
    No,
    Bareword,
    Quoted,
    Structural,
}

/// Where the categorizer currently is relative to string quoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LexContext {
    #[default]
    Default,
    InString,
    AfterBackslash,
}

/// DFA transitions; `-1` is the dead transition.
///
/// States: 0 start; 1/3/6 inside a string (after the opening quote, a plain
/// character, an escaped character); 2 integer digits; 4 closed string;
/// 5 backslash seen; 7–10 `null`; 11–14 `true`; 15 structural; 16–20
/// `false`; 21 lone zero; 22 leading dot awaiting a digit; 23 decimal point
/// and fraction digits (accepting, so `1.` is a complete number);
/// 24 exponent marker; 25 exponent sign; 26 exponent digits; 27 leading
/// sign.
#[rustfmt::skip]
static TRANSITIONS: [[i8; 19]; 28] = [
    //  a   e   f   l   n   r   s   t   u  {:  1-9  .   +-  \   "   pl  any ws   0
    [  -1, -1, 16, -1,  7, -1, -1, 11, -1, 15,  2, 22, 27, -1,  1, -1, -1,  0, 21 ], //  0
    [  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  5,  4,  3, -1, -1, -1 ], //  1
    [  -1, 24, -1, -1, -1, -1, -1, -1, -1, -1,  2, 23, -1, -1,  1, -1, -1, -1,  2 ], //  2
    [  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  5,  4,  3, -1, -1, -1 ], //  3
    [  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1 ], //  4
    [  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  6, -1, -1 ], //  5
    [  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  5,  4,  3, -1, -1, -1 ], //  6
    [  -1, -1, -1, -1, -1, -1, -1, -1,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1 ], //  7
    [  -1, -1, -1,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1 ], //  8
    [  -1, -1, -1, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1 ], //  9
    [  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1 ], // 10
    [  -1, -1, -1, -1, -1, 12, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1 ], // 11
    [  -1, -1, -1, -1, -1, -1, -1, -1, 13, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1 ], // 12
    [  -1, 14, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1 ], // 13
    [  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1 ], // 14
    [  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1 ], // 15
    [  17, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1 ], // 16
    [  -1, -1, -1, 18, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1 ], // 17
    [  -1, -1, -1, -1, -1, -1, 19, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1 ], // 18
    [  -1, 20, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1 ], // 19
    [  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1 ], // 20
    [  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 23, -1, -1, -1, -1, -1, -1, -1 ], // 21
    [  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 23, -1, -1, -1, -1, -1, -1, -1, 23 ], // 22
    [  -1, 24, -1, -1, -1, -1, -1, -1, -1, -1, 23, -1, -1, -1, -1, -1, -1, -1, 23 ], // 23
    [  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 26, -1, 25, -1, -1, -1, -1, -1, -1 ], // 24
    [  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 26, -1, -1, -1, -1, -1, -1, -1, -1 ], // 25
    [  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 26, -1, -1, -1, -1, -1, -1, -1, 26 ], // 26
    [  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  2, 22, -1, -1, -1, -1, -1, -1, 21 ], // 27
];

/// Per-state acceptance, parallel to [`TRANSITIONS`].
static ACCEPT: [Acceptance; 28] = [
    Acceptance::No,         //  0
    Acceptance::No,         //  1
    Acceptance::Bareword,   //  2
    Acceptance::No,         //  3
    Acceptance::Quoted,     //  4
    Acceptance::No,         //  5
    Acceptance::No,         //  6
    Acceptance::No,         //  7
    Acceptance::No,         //  8
    Acceptance::No,         //  9
    Acceptance::Bareword,   // 10
    Acceptance::No,         // 11
    Acceptance::No,         // 12
    Acceptance::No,         // 13
    Acceptance::Bareword,   // 14
    Acceptance::Structural, // 15
    Acceptance::No,         // 16
    Acceptance::No,         // 17
    Acceptance::No,         // 18
    Acceptance::No,         // 19
    Acceptance::Bareword,   // 20
    Acceptance::Bareword,   // 21
    Acceptance::No,         // 22
    Acceptance::Bareword,   // 23
    Acceptance::No,         // 24
    Acceptance::No,         // 25
    Acceptance::Bareword,   // 26
    Acceptance::No,         // 27
];

/// Outcome of one call to [`Scanner::next_token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Scan {
    /// A complete token.
    Token(Token),
    /// The input ran dry mid-scan and [`Scanner::finish`] has not been
    /// called; whatever is pending may still be extended by the next chunk.
    Pending,
    /// True end of input with nothing pending.
    End,
}

/// The resumable tokenizer.
#[derive(Debug, Default)]
pub(crate) struct Scanner {
    /// Unread chunk bytes, decoded lazily.
    input: VecDeque<u8>,
    /// Characters read past a committed token, re-offered before `input`.
    putback: VecDeque<char>,
    /// Text of the token being scanned.
    text: String,
    /// How many characters of `text` were read after the last accepting
    /// state. These go back to `putback` when the token commits.
    tail: usize,
    state: u8,
    last_accepting: Option<u8>,
    context: LexContext,
    ended: bool,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk. Chunks may split the text anywhere.
    pub fn feed(&mut self, chunk: &str) {
        self.feed_bytes(chunk.as_bytes());
    }

    /// Appends raw bytes, which need not align with UTF-8 character
    /// boundaries; characters split across chunks are decoded once whole.
    pub fn feed_bytes(&mut self, chunk: &[u8]) {
        // End of input is one-way; late arrivals are dropped.
        if self.ended {
            return;
        }
        self.input.extend(chunk.iter().copied());
    }

    /// Marks true end of input. Without this, running dry is always
    /// [`Scan::Pending`]. One-way: chunks fed afterwards are ignored.
    pub fn finish(&mut self) {
        self.ended = true;
    }

    /// Scans the next token with maximal munch.
    pub fn next_token(&mut self) -> Result<Scan, LexError> {
        loop {
            let Some(c) = self.next_char() else {
                if !self.ended {
                    return Ok(Scan::Pending);
                }
                if let Some(accepted) = self.last_accepting.take() {
                    return Ok(Scan::Token(self.commit(accepted)));
                }
                if self.text.is_empty() {
                    return Ok(Scan::End);
                }
                self.reset();
                return Err(LexError::UnexpectedEnd);
            };
            let category = self.categorize(c);
            if category != Category::Blank {
                self.text.push(c);
                self.tail += 1;
            }
            match u8::try_from(TRANSITIONS[usize::from(self.state)][category as usize]) {
                Ok(next) => {
                    self.state = next;
                    if ACCEPT[usize::from(next)] != Acceptance::No {
                        self.last_accepting = Some(next);
                        self.tail = 0;
                    }
                }
                Err(_) => {
                    // Dead transition: back off to the last accepting state,
                    // or fail if there was none.
                    if let Some(accepted) = self.last_accepting.take() {
                        return Ok(Scan::Token(self.commit(accepted)));
                    }
                    self.reset();
                    return Err(LexError::InvalidCharacter(c));
                }
            }
        }
    }

    /// Takes the next character, preferring put-back characters over the
    /// live input ring. Invalid UTF-8 decodes to U+FFFD.
    fn next_char(&mut self) -> Option<char> {
        if let Some(c) = self.putback.pop_front() {
            return Some(c);
        }
        let (decoded, len) = bstr::decode_utf8(self.input.make_contiguous());
        if len == 0 {
            return None;
        }
        // A failed decode consuming the whole ring may be a multi-byte
        // sequence split across chunks; hold out for its remaining bytes.
        if decoded.is_none() && len == self.input.len() && !self.ended {
            return None;
        }
        self.input.drain(..len);
        Some(decoded.unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    /// Categorizes `c`, updating the string context as a side effect.
    fn categorize(&mut self, c: char) -> Category {
        match self.context {
            LexContext::InString => match c {
                '\\' => {
                    self.context = LexContext::AfterBackslash;
                    Category::Backslash
                }
                '"' => {
                    self.context = LexContext::Default;
                    Category::Quote
                }
                _ => Category::Plain,
            },
            LexContext::AfterBackslash => {
                self.context = LexContext::InString;
                Category::Other
            }
            LexContext::Default => match c {
                '"' => {
                    self.context = LexContext::InString;
                    Category::Quote
                }
                '0' => Category::Zero,
                '1'..='9' => Category::Digit,
                '.' => Category::Dot,
                '+' | '-' => Category::Sign,
                '{' | '}' | '[' | ']' | ',' | ':' => Category::Structural,
                ' ' | '\t' | '\n' | '\r' | '\u{000C}' => Category::Blank,
                'a' | 'A' => Category::LetterA,
                'e' | 'E' => Category::LetterE,
                'f' | 'F' => Category::LetterF,
                'l' | 'L' => Category::LetterL,
                'n' | 'N' => Category::LetterN,
                'r' | 'R' => Category::LetterR,
                's' | 'S' => Category::LetterS,
                't' | 'T' => Category::LetterT,
                'u' | 'U' => Category::LetterU,
                _ => Category::Other,
            },
        }
    }

    /// Commits the token accepted at `accepted`, returning the characters
    /// read past it to the put-back queue. Popping off the end of the text
    /// while pushing to the queue's front restores their original order,
    /// ahead of anything already queued.
    fn commit(&mut self, accepted: u8) -> Token {
        for _ in 0..self.tail {
            if let Some(c) = self.text.pop() {
                self.putback.push_front(c);
            }
        }
        let token = match ACCEPT[usize::from(accepted)] {
            Acceptance::Quoted => Token {
                kind: TokenKind::Quoted,
                text: decode_escapes(&self.text[1..self.text.len() - 1]),
            },
            Acceptance::Structural => Token {
                kind: structural_kind(self.text.as_bytes().first().copied()),
                text: mem::take(&mut self.text),
            },
            Acceptance::Bareword => Token {
                kind: TokenKind::Bareword,
                text: mem::take(&mut self.text),
            },
            Acceptance::No => unreachable!("committed a non-accepting state"),
        };
        self.reset();
        token
    }

    fn reset(&mut self) {
        self.state = 0;
        self.context = LexContext::Default;
        self.text.clear();
        self.last_accepting = None;
        self.tail = 0;
    }
}

fn structural_kind(byte: Option<u8>) -> TokenKind {
    match byte {
        Some(b'{') => TokenKind::ObjectOpen,
        Some(b'}') => TokenKind::ObjectClose,
        Some(b'[') => TokenKind::ArrayOpen,
        Some(b']') => TokenKind::ArrayClose,
        Some(b',') => TokenKind::Comma,
        Some(b':') => TokenKind::Colon,
        _ => unreachable!("structural states accept exactly one punctuation character"),
    }
}
