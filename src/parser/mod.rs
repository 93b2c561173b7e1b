//! The grammar automaton and its semantic action dispatch.
//!
//! [`Parser`] drives the shift-reduce tables over the token stream of one
//! document. Shifting a token pushes a `(symbol, state)` pair and fires the
//! structural event mapped to the entered state, if any; reducing pops the
//! production's symbols and re-enters via the goto half of the table with
//! the same lookahead. The document is complete exactly when the goal
//! production reduces the stack to empty with end-of-input as lookahead.
//!
//! [`Parser::parse`] is resumable: it returns [`ParseStatus::Pending`]
//! whenever the tokenizer runs dry, and also after any shift once no further
//! complete token is available — a token that looks finished may still be
//! extended by a later chunk, and end-of-input completes the parse only as
//! the lookahead of the final reductions on a subsequent call. Callers loop
//! on `parse` after [`Parser::finish`] until it returns
//! [`ParseStatus::Complete`] or an error.

use alloc::vec::Vec;
use core::fmt;

use crate::{
    error::{ParseError, TableFault},
    event::Handler,
    grammar::{self, Action},
    scanner::{Scan, Scanner},
    token::{Token, TokenKind},
};


/// Outcome of a successful parsing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStatus {
    /// Progress was made but the document is not finished; feed more input
    /// (or call [`Parser::finish`]) and parse again.
    Pending,
    /// The document parsed to completion. The session is finished.
    Complete,
}

/// A grammar symbol on the automaton stack.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Symbol {
    Terminal(TokenKind),
    NonTerminal(u8),
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Terminal(kind) => write!(f, "t:{kind}"),
            Symbol::NonTerminal(production) => write!(f, "n{production}"),
        }
    }
}

/// One parsing session for a single JSON document.
///
/// A session owns its tokenizer and automaton state; independent documents
/// get independent sessions, and dropping one mid-parse is always safe.
#[derive(Debug, Default)]
pub struct Parser {
    scanner: Scanner,
    state: u8,
    stack: Vec<(Symbol, u8)>,
    done: bool,
}

impl Parser {
    /// Creates a session positioned before the first character.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk of JSON text. Chunk boundaries may fall anywhere,
    /// including inside tokens, escapes, or multi-byte characters.
    pub fn feed(&mut self, chunk: &str) {
        self.scanner.feed(chunk);
    }

    /// Appends raw bytes. Unlike [`Parser::feed`] this accepts chunks that
    /// split multi-byte UTF-8 sequences; the split character is decoded once
    /// its remaining bytes arrive. Invalid UTF-8 decodes to U+FFFD.
    pub fn feed_bytes(&mut self, chunk: &[u8]) {
        self.scanner.feed_bytes(chunk);
    }

    /// Signals that no more input will ever arrive. Required: without it an
    /// exhausted tokenizer always reports [`ParseStatus::Pending`]. One-way:
    /// anything fed after this call is ignored.
    pub fn finish(&mut self) {
        self.scanner.finish();
    }

    /// Consumes as much buffered input as possible, firing `handler`'s
    /// events along the way.
    ///
    /// Returns [`ParseStatus::Pending`] when more input (or another call
    /// after [`Parser::finish`]) is needed, [`ParseStatus::Complete`] when
    /// the document is done. Any `Err` is terminal: the session's state is
    /// unspecified afterwards and it must be discarded. Events fired before
    /// a failure were already delivered and stand.
    ///
    /// Driving a session after `Complete` or an error is a caller bug,
    /// checked only by a debug assertion.
    pub fn parse<H: Handler>(&mut self, handler: &mut H) -> Result<ParseStatus, ParseError> {
        debug_assert!(!self.done, "session already produced a terminal result");
        let result = self.step(handler);
        if !matches!(result, Ok(ParseStatus::Pending)) {
            self.done = true;
        }
        result
    }

    fn step<H: Handler>(&mut self, handler: &mut H) -> Result<ParseStatus, ParseError> {
        let mut token = match self.scanner.next_token()? {
            Scan::Pending => return Ok(ParseStatus::Pending),
            Scan::End => Token::end(),
            Scan::Token(token) => token,
        };
        loop {
            match grammar::ACTIONS[usize::from(self.state)][token.kind.column()] {
                Action::Err => return Err(ParseError::Unexpected(token.kind)),
                Action::Shift(next) => {
                    self.stack.push((Symbol::Terminal(token.kind), next));
                    self.state = next;
                    dispatch(next, &token, handler);
                    token = match self.scanner.next_token()? {
                        Scan::Pending | Scan::End => return Ok(ParseStatus::Pending),
                        Scan::Token(token) => token,
                    };
                }
                Action::Reduce { production, pops } => {
                    let pops = usize::from(pops);
                    let Some(kept) = self.stack.len().checked_sub(pops) else {
                        return Err(TableFault::StackUnderflow.into());
                    };
                    self.stack.truncate(kept);
                    let Some(&(_, exposed)) = self.stack.last() else {
                        if production == grammar::GOAL && token.kind == TokenKind::End {
                            return Ok(ParseStatus::Complete);
                        }
                        return Err(TableFault::PrematureEmptyStack.into());
                    };
                    let goto = grammar::ACTIONS[usize::from(exposed)][usize::from(production)];
                    let Action::Shift(next) = goto else {
                        return Err(TableFault::MissingGoto {
                            state: exposed,
                            production,
                        }
                        .into());
                    };
                    self.stack.push((Symbol::NonTerminal(production), next));
                    self.state = next;
                    // Same lookahead, new state.
                }
            }
        }
    }
}

/// Fires the structural event associated with a shift-entered state.
///
/// The mapping is a property of the grammar tables: e.g. states 1, 10 and 11
/// are entered exactly by shifting the `{` of an object, wherever that
/// object appears.
fn dispatch<H: Handler>(state: u8, token: &Token, handler: &mut H) {
    match state {
        1 | 10 | 11 => handler.object_start(),
        2 => handler.key(&token.text),
        4 | 5 => handler.object_value(&token.text, token.kind),
        13 | 32 | 34 => handler.object_end(),
        6 | 9 | 19 => handler.array_start(),
        7 | 8 => handler.array_value(&token.text, token.kind),
        23 | 36 | 37 => handler.array_end(),
        _ => {}
    }
}
