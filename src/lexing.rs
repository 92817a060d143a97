//! The C0 tokenizer
//!
//! Source text is split line by line and each line is tokenized with
//! logos. Tokens keep their literal spelling (char and string literals
//! keep their quotes), names are lowercased, and the stream always ends
//! with a single ENDMARKER token.

use crate::symbol::Symbol;
use crate::token::{Location, Token};
use logos::Logos;

/// Raw lexical shapes, matched per line. Spelling and position are
/// taken from the lexer afterwards, so the variants carry no payload.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\x0b\x0c\r]+")]
enum RawToken {
    #[regex(r"[0-9]+")]
    Number,

    // One quoted letter, digit, underscore or arithmetic operator
    #[regex(r"'[0-9A-Za-z+\-*/_]'")]
    Char,

    // Printable characters except the double quote itself
    #[regex(r#""[ !#-~]*""#)]
    Str,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Name,

    // '!' on its own is not an operator and falls out as an error
    #[token("(")]
    #[token(")")]
    #[token("[")]
    #[token("]")]
    #[token("{")]
    #[token("}")]
    #[token(";")]
    #[token(":")]
    #[token(",")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("<")]
    #[token("<=")]
    #[token(">")]
    #[token(">=")]
    #[token("=")]
    #[token("==")]
    #[token("!=")]
    Op,
}

/// Tokenize C0 source text
///
/// Lines are 1-based and columns 0-based byte offsets. Blank lines
/// produce no tokens but still count. Malformed input turns into
/// ERRORTOKEN entries rather than failing, so the caller decides how
/// to report them.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lnum: u32 = 0;

    for line in source.lines() {
        lnum += 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut lexer = RawToken::lexer(line);
        while let Some(result) = lexer.next() {
            let location = Location::new(lnum, lexer.span().start as u32);
            let (symbol, text) = match result {
                Ok(RawToken::Number) => (Symbol::Number, lexer.slice().to_string()),
                Ok(RawToken::Char) => (Symbol::Char, lexer.slice().to_string()),
                Ok(RawToken::Str) => (Symbol::String, lexer.slice().to_string()),
                Ok(RawToken::Name) => (Symbol::Name, lexer.slice().to_ascii_lowercase()),
                Ok(RawToken::Op) => (Symbol::Op, lexer.slice().to_string()),
                Err(()) => (Symbol::ErrorToken, lexer.slice().to_string()),
            };
            tokens.push(Token::new(symbol, text, location, line.to_string()));
        }
    }

    tokens.push(Token::new(
        Symbol::EndMarker,
        String::new(),
        Location::new(lnum, 0),
        String::new(),
    ));
    tokens
}

/// Render tokens one per line: location range, kind and quoted text in
/// fixed-width columns
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let range = format!("{},{}:", token.location.line, token.location.column);
        out.push_str(&format!(
            "{:<20}{:<15}{:<15}\n",
            range,
            token.symbol.name(),
            format!("'{}'", token.text)
        ));
    }
    out
}
