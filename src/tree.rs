//! Folding the event stream into a [`Value`] tree.

use alloc::{string::String, vec::Vec};

use crate::{
    error::ParseError,
    event::Handler,
    parser::{ParseStatus, Parser},
    token::TokenKind,
    value::{Map, Value},
};

/// A [`Handler`] that assembles the events of one session into a [`Value`].
///
/// Containers nest on an internal stack; each object tracks the key awaiting
/// its value. Quoted primitives become strings. Barewords are matched
/// case-insensitively against `true`, `false` and `null`, and anything else
/// is read as a number (an unreadable number becomes `0`; the grammar only
/// lets well-formed barewords through).
#[derive(Debug, Default)]
pub struct TreeBuilder {
    open: Vec<Container>,
    root: Option<Value>,
}

#[derive(Debug)]
enum Container {
    Object {
        members: Map,
        pending_key: Option<String>,
    },
    Array(Vec<Value>),
}

impl TreeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the finished document, or `None` if the session never closed
    /// a top-level container.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        self.root
    }

    fn attach(&mut self, value: Value) {
        match self.open.last_mut() {
            Some(Container::Object {
                members,
                pending_key,
            }) => {
                if let Some(key) = pending_key.take() {
                    members.insert(key, value);
                }
            }
            Some(Container::Array(items)) => items.push(value),
            None => self.root = Some(value),
        }
    }

    fn close(&mut self) {
        if let Some(finished) = self.open.pop() {
            let value = match finished {
                Container::Object { members, .. } => Value::Object(members),
                Container::Array(items) => Value::Array(items),
            };
            self.attach(value);
        }
    }
}

impl Handler for TreeBuilder {
    fn object_start(&mut self) {
        self.open.push(Container::Object {
            members: Map::new(),
            pending_key: None,
        });
    }

    fn key(&mut self, key: &str) {
        if let Some(Container::Object { pending_key, .. }) = self.open.last_mut() {
            *pending_key = Some(key.into());
        }
    }

    fn object_value(&mut self, text: &str, kind: TokenKind) {
        self.attach(primitive(text, kind));
    }

    fn object_end(&mut self) {
        self.close();
    }

    fn array_start(&mut self) {
        self.open.push(Container::Array(Vec::new()));
    }

    fn array_value(&mut self, text: &str, kind: TokenKind) {
        self.attach(primitive(text, kind));
    }

    fn array_end(&mut self) {
        self.close();
    }
}

fn primitive(text: &str, kind: TokenKind) -> Value {
    if kind == TokenKind::Quoted {
        return Value::String(text.into());
    }
    if text.eq_ignore_ascii_case("true") {
        Value::Bool(true)
    } else if text.eq_ignore_ascii_case("false") {
        Value::Bool(false)
    } else if text.eq_ignore_ascii_case("null") {
        Value::Null
    } else {
        Value::Number(text.parse().unwrap_or(0.0))
    }
}

/// Parses a complete, in-memory JSON document into a [`Value`].
///
/// ```
/// use jsonshift::{Value, parse_value};
///
/// let doc = parse_value(r#"{"ok": true}"#).unwrap();
/// assert_eq!(doc.to_string(), r#"{"ok":true}"#);
/// ```
///
/// # Errors
///
/// Any lexical or syntax error the streaming parser would report.
pub fn parse_value(input: &str) -> Result<Value, ParseError> {
    let mut parser = Parser::new();
    parser.feed(input);
    parser.finish();
    let mut builder = TreeBuilder::new();
    while parser.parse(&mut builder)? == ParseStatus::Pending {}
    Ok(builder.into_value().unwrap_or(Value::Null))
}
