//! An incremental, resumable JSON parser.
//!
//! `jsonshift` accepts JSON text in arbitrary-sized, arbitrarily-split chunks
//! (from a socket, a growing buffer, …) and emits a stream of structural
//! events — object/array start and end, member keys, primitive values —
//! without buffering the whole document first. It never blocks waiting for
//! input: when the current chunk runs out mid-token it returns
//! [`ParseStatus::Pending`], keeps all automaton state, and resumes exactly
//! where it left off once more text is fed.
//!
//! The parser is built from two cooperating table-driven machines: a
//! character-category DFA that tokenizes with maximal munch (characters read
//! past a token boundary are put back and re-offered, never lost or re-read),
//! and a shift-reduce automaton whose shifts drive the seven structural
//! events of a [`Handler`].
//!
//! ```
//! use jsonshift::{EventLog, ParseEvent, ParseStatus, Parser, TokenKind};
//!
//! let mut parser = Parser::new();
//! let mut log = EventLog::default();
//!
//! parser.feed("{ \"a\" : 1.");
//! assert_eq!(parser.parse(&mut log), Ok(ParseStatus::Pending));
//!
//! // The number is held back: `1.` may still be extended by the next chunk.
//! parser.feed("3 }");
//! parser.finish();
//! while parser.parse(&mut log).unwrap() == ParseStatus::Pending {}
//!
//! assert_eq!(
//!     log.events,
//!     vec![
//!         ParseEvent::ObjectStart,
//!         ParseEvent::Key("a".into()),
//!         ParseEvent::ObjectValue("1.3".into(), TokenKind::Bareword),
//!         ParseEvent::ObjectEnd,
//!     ]
//! );
//! ```
//!
//! A session parses exactly one document and is finished once it returns
//! [`ParseStatus::Complete`] or an error; independent documents get
//! independent sessions. The grammar accepts an object or an array at the top
//! level.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod escape;
mod event;
mod grammar;
mod parser;
mod scanner;
mod token;
mod tree;
mod value;

pub use error::{LexError, ParseError, TableFault};
pub use event::{EventLog, Handler, ParseEvent};
pub use parser::{ParseStatus, Parser};
pub use token::TokenKind;
pub use tree::{TreeBuilder, parse_value};
pub use value::{Array, Map, Value};
