//! The structural events and their callback surface.

use alloc::{string::String, vec::Vec};

use crate::token::TokenKind;

/// Receives the structural events of one parsing session.
///
/// Every method defaults to doing nothing, so an implementor subscribes only
/// to the events it cares about. The implementor itself is the consumer
/// context: events mutate it through `&mut self`.
///
/// Events arrive synchronously, before the parser reads another token, and
/// in document order. Primitive values carry the token text together with
/// its [`TokenKind`] — [`TokenKind::Quoted`] for strings (escape-decoded),
/// [`TokenKind::Bareword`] for numbers and the `true`/`false`/`null`
/// literals (raw text) — so consumers can interpret them without re-lexing.
pub trait Handler {
    /// `{` opened an object.
    fn object_start(&mut self) {}

    /// A member key was read inside an object.
    fn key(&mut self, _key: &str) {}

    /// A primitive member value was read inside an object.
    fn object_value(&mut self, _text: &str, _kind: TokenKind) {}

    /// `}` closed an object.
    fn object_end(&mut self) {}

    /// `[` opened an array.
    fn array_start(&mut self) {}

    /// A primitive element was read inside an array.
    fn array_value(&mut self, _text: &str, _kind: TokenKind) {}

    /// `]` closed an array.
    fn array_end(&mut self) {}
}

/// An owned record of a single structural event.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseEvent {
    /// `{` opened an object.
    ObjectStart,
    /// A member key inside an object.
    Key(String),
    /// A primitive member value inside an object.
    ObjectValue(String, TokenKind),
    /// `}` closed an object.
    ObjectEnd,
    /// `[` opened an array.
    ArrayStart,
    /// A primitive element inside an array.
    ArrayValue(String, TokenKind),
    /// `]` closed an array.
    ArrayEnd,
}

/// A [`Handler`] that records every event it receives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    /// The recorded events, in emission order.
    pub events: Vec<ParseEvent>,
}

impl Handler for EventLog {
    fn object_start(&mut self) {
        self.events.push(ParseEvent::ObjectStart);
    }

    fn key(&mut self, key: &str) {
        self.events.push(ParseEvent::Key(key.into()));
    }

    fn object_value(&mut self, text: &str, kind: TokenKind) {
        self.events.push(ParseEvent::ObjectValue(text.into(), kind));
    }

    fn object_end(&mut self) {
        self.events.push(ParseEvent::ObjectEnd);
    }

    fn array_start(&mut self) {
        self.events.push(ParseEvent::ArrayStart);
    }

    fn array_value(&mut self, text: &str, kind: TokenKind) {
        self.events.push(ParseEvent::ArrayValue(text.into(), kind));
    }

    fn array_end(&mut self) {
        self.events.push(ParseEvent::ArrayEnd);
    }
}
