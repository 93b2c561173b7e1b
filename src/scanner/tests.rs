use alloc::{string::String, vec::Vec};

use super::{Scan, Scanner};
use crate::{
    error::LexError,
    token::{Token, TokenKind},
};

fn scan_all(input: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new();
    scanner.feed(input);
    scanner.finish();
    let mut out = Vec::new();
    loop {
        match scanner.next_token()? {
            Scan::Token(token) => out.push(token),
            Scan::End => return Ok(out),
            Scan::Pending => unreachable!("input was finished"),
        }
    }
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

fn bareword(text: &str) -> Token {
    Token {
        kind: TokenKind::Bareword,
        text: String::from(text),
    }
}

#[test]
fn structural_characters_scan_individually() {
    let tokens = scan_all("{}[],:").unwrap();
    assert_eq!(
        kinds(&tokens),
        [
            TokenKind::ObjectOpen,
            TokenKind::ObjectClose,
            TokenKind::ArrayOpen,
            TokenKind::ArrayClose,
            TokenKind::Comma,
            TokenKind::Colon,
        ]
    );
}

#[test]
fn whitespace_separates_tokens_but_is_dropped() {
    let tokens = scan_all(" {\t}\r\n").unwrap();
    assert_eq!(kinds(&tokens), [TokenKind::ObjectOpen, TokenKind::ObjectClose]);
    assert_eq!(texts(&tokens), ["{", "}"]);
}

#[test]
fn whitespace_inside_strings_is_data() {
    let tokens = scan_all("\" a\tb \"").unwrap();
    assert_eq!(texts(&tokens), [" a\tb "]);
}

#[test]
fn literal_barewords() {
    let tokens = scan_all("true false null").unwrap();
    assert_eq!(
        tokens,
        [bareword("true"), bareword("false"), bareword("null")]
    );
}

#[test]
fn literal_letters_are_case_insensitive() {
    // The DFA spells the literals out per letter, each letter category
    // covering both cases; the original casing survives in the text.
    let tokens = scan_all("TRUE FaLsE NuLl").unwrap();
    assert_eq!(
        tokens,
        [bareword("TRUE"), bareword("FaLsE"), bareword("NuLl")]
    );
}

#[test]
fn number_forms() {
    let tokens = scan_all("0 0. 1. 0.0 .8 -3 1.5 -1.3e+1 1e-1 1.e+1").unwrap();
    assert_eq!(
        texts(&tokens),
        ["0", "0.", "1.", "0.0", ".8", "-3", "1.5", "-1.3e+1", "1e-1", "1.e+1"]
    );
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Bareword));
}

#[test]
fn input_fed_after_finish_is_ignored() {
    let mut scanner = Scanner::new();
    scanner.feed("[]");
    scanner.finish();
    scanner.feed("{}");
    let tokens = [scanner.next_token(), scanner.next_token()];
    assert!(matches!(tokens[0], Ok(Scan::Token(_))));
    assert!(matches!(tokens[1], Ok(Scan::Token(_))));
    assert_eq!(scanner.next_token(), Ok(Scan::End));
}

#[test]
fn a_token_is_held_until_it_cannot_be_extended() {
    let mut scanner = Scanner::new();
    scanner.feed("1");
    assert_eq!(scanner.next_token(), Ok(Scan::Pending));
    scanner.feed(".3");
    assert_eq!(scanner.next_token(), Ok(Scan::Pending));
    scanner.finish();
    assert_eq!(scanner.next_token(), Ok(Scan::Token(bareword("1.3"))));
    assert_eq!(scanner.next_token(), Ok(Scan::End));
}

#[test]
fn characters_past_a_committed_token_are_reoffered() {
    let tokens = scan_all("[1]").unwrap();
    assert_eq!(
        kinds(&tokens),
        [
            TokenKind::ArrayOpen,
            TokenKind::Bareword,
            TokenKind::ArrayClose,
        ]
    );
    assert_eq!(tokens[1].text, "1");
}

#[test]
fn backing_off_commits_the_accepted_prefix() {
    // `1.3e+` reads ahead hoping for an exponent digit; at end of input the
    // scanner falls back to `1.3` and re-offers `e` and `+`, which then fail
    // on their own.
    let mut scanner = Scanner::new();
    scanner.feed("1.3e+");
    scanner.finish();
    assert_eq!(scanner.next_token(), Ok(Scan::Token(bareword("1.3"))));
    assert_eq!(
        scanner.next_token(),
        Err(LexError::InvalidCharacter('e'))
    );
}

#[test]
fn string_escapes_are_decoded_on_commit() {
    let tokens = scan_all("\"h\\u0041 \\u00e9\\t\\\"\\\\\\/\"").unwrap();
    assert_eq!(texts(&tokens), ["hA é\t\"\\/"]);
    assert_eq!(tokens[0].kind, TokenKind::Quoted);
}

#[test]
fn malformed_unicode_escape_passes_through() {
    let tokens = scan_all("\"\\u12x\"").unwrap();
    assert_eq!(texts(&tokens), ["u12x"]);
}

#[test]
fn escaped_quote_does_not_terminate_the_string() {
    let tokens = scan_all("\"a\\\"b\"").unwrap();
    assert_eq!(texts(&tokens), ["a\"b"]);
}

#[test]
fn a_chunk_may_split_an_escape() {
    let mut scanner = Scanner::new();
    scanner.feed("\"a\\");
    assert_eq!(scanner.next_token(), Ok(Scan::Pending));
    scanner.feed("nb\"");
    scanner.finish();
    let Ok(Scan::Token(token)) = scanner.next_token() else {
        panic!("expected a string token");
    };
    assert_eq!(token.text, "a\nb");
}

#[test]
fn a_chunk_may_split_a_multibyte_character() {
    let mut scanner = Scanner::new();
    let bytes = "\"é\"".as_bytes();
    // The split lands between the two bytes of `é`.
    scanner.feed_bytes(&bytes[..2]);
    assert_eq!(scanner.next_token(), Ok(Scan::Pending));
    scanner.feed_bytes(&bytes[2..]);
    scanner.finish();
    let Ok(Scan::Token(token)) = scanner.next_token() else {
        panic!("expected a string token");
    };
    assert_eq!(token.text, "é");
}

#[test]
fn unterminated_string_fails_only_at_end_of_input() {
    let mut scanner = Scanner::new();
    scanner.feed("\"abc");
    assert_eq!(scanner.next_token(), Ok(Scan::Pending));
    scanner.finish();
    assert_eq!(scanner.next_token(), Err(LexError::UnexpectedEnd));
}

#[test]
fn unfinishable_bareword_fails_immediately() {
    let mut scanner = Scanner::new();
    scanner.feed("tri");
    assert_eq!(
        scanner.next_token(),
        Err(LexError::InvalidCharacter('i'))
    );
}

#[test]
fn empty_input() {
    let mut scanner = Scanner::new();
    assert_eq!(scanner.next_token(), Ok(Scan::Pending));
    scanner.finish();
    assert_eq!(scanner.next_token(), Ok(Scan::End));
    // End is sticky.
    assert_eq!(scanner.next_token(), Ok(Scan::End));
}
