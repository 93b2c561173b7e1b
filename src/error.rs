//! Error taxonomy.
//!
//! Three failure families are kept apart: character-level [`LexError`]s,
//! grammar-level rejections ([`ParseError::Unexpected`]), and
//! [`TableFault`]s, which indicate a defect in the automaton tables rather
//! than bad input. Needing more data is never an error; it is reported as
//! [`ParseStatus::Pending`](crate::ParseStatus::Pending).

use thiserror::Error;

use crate::token::TokenKind;

/// A character-level scanning failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexError {
    /// The character has no valid continuation from the current scanning
    /// position, and no earlier prefix of the pending text forms a token to
    /// fall back to.
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),
    /// End of input was signaled while the pending text is a dead end: it is
    /// not a token and can no longer become one.
    #[error("unexpected end of input inside an unfinished token")]
    UnexpectedEnd,
}

/// An internal inconsistency detected while driving the grammar tables.
///
/// These never indicate malformed input; a well-formed table cannot produce
/// them. They are reported as errors rather than panics so an embedding
/// application can fail the one session instead of aborting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableFault {
    /// A reduction asked to pop more symbols than the stack holds.
    #[error("state stack underflow during reduction")]
    StackUnderflow,
    /// The stack emptied on a reduction that is not the goal reduction at
    /// end of input.
    #[error("state stack emptied outside the goal reduction")]
    PrematureEmptyStack,
    /// After a reduction, the exposed state has no shift transition on the
    /// reduced non-terminal.
    #[error("no goto from state {state} on non-terminal {production}")]
    MissingGoto {
        /// The state exposed on top of the stack after popping.
        state: u8,
        /// The non-terminal produced by the reduction.
        production: u8,
    },
}

/// A terminal parsing failure.
///
/// Once a session returns any of these, its state is unspecified and the
/// session must be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The scanner rejected the input.
    #[error("lexical error: {0}")]
    Lexical(#[from] LexError),
    /// A well-formed token arrived where the grammar allows no such token.
    #[error("syntax error: unexpected {0}")]
    Unexpected(TokenKind),
    /// The automaton tables are internally inconsistent.
    #[error("parse table fault: {0}")]
    Fault(#[from] TableFault),
}
