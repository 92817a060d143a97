//! Tokens and source locations
//!
//! A token pairs a terminal symbol with its literal text and the place
//! it was read from. The full source line rides along so diagnostics
//! can show context without going back to the file.

use crate::symbol::Symbol;
use serde::Serialize;
use std::fmt;

/// A line/column pair. Lines are 1-based, columns are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A single lexical unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// Terminal kind, always below `NT_OFFSET`
    #[serde(rename = "type")]
    pub symbol: Symbol,
    /// Literal text. Char and string literals keep their quotes.
    #[serde(rename = "string")]
    pub text: String,
    /// Where the first character of the token sits
    #[serde(rename = "start")]
    pub location: Location,
    /// The source line the token came from, without the newline
    pub line: String,
}

impl Token {
    pub fn new(symbol: Symbol, text: String, location: Location, line: String) -> Self {
        Self {
            symbol,
            text,
            location,
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token(type={}, string='{}', start={}, line='{}')",
            self.symbol, self.text, self.location, self.line
        )
    }
}
