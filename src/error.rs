//! Error types for tokenizing and parsing

use crate::token::Location;
use std::fmt;

/// Errors produced while parsing a token stream
///
/// Every variant except `MalformedGrammar` points at a source location.
/// `MalformedGrammar` means the automaton tables themselves are broken,
/// which no input can trigger with the compiled-in grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// No shift or descend arc matched and the state is not final
    UnexpectedToken {
        text: String,
        location: Location,
        production: &'static str,
        expected: Vec<String>,
    },
    /// The tokenizer flagged this token as malformed
    ErrorToken { text: String, location: Location },
    /// The token stream ended while a production was still open
    UnexpectedEndOfInput {
        location: Location,
        production: &'static str,
    },
    /// A token arrived after the start production was already closed
    TrailingInput { text: String, location: Location },
    /// A label or state index in the tables is out of range
    MalformedGrammar { detail: String },
}

impl ParseError {
    /// The source location the error points at, if it has one
    pub fn location(&self) -> Option<Location> {
        match self {
            ParseError::UnexpectedToken { location, .. }
            | ParseError::ErrorToken { location, .. }
            | ParseError::UnexpectedEndOfInput { location, .. }
            | ParseError::TrailingInput { location, .. } => Some(*location),
            ParseError::MalformedGrammar { .. } => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken {
                text,
                location,
                production,
                expected,
            } => {
                write!(
                    f,
                    "unexpected token '{}' at {} while parsing {}",
                    text, location, production
                )?;
                if !expected.is_empty() {
                    write!(f, " (expected {})", join_alternatives(expected))?;
                }
                Ok(())
            }
            ParseError::ErrorToken { text, location } => {
                write!(f, "error token '{}' at {}", text, location)
            }
            ParseError::UnexpectedEndOfInput {
                location,
                production,
            } => {
                write!(
                    f,
                    "unexpected end of input at {} while parsing {}",
                    location, production
                )
            }
            ParseError::TrailingInput { text, location } => {
                write!(f, "trailing input '{}' at {}", text, location)
            }
            ParseError::MalformedGrammar { detail } => {
                write!(f, "malformed grammar table: {}", detail)
            }
        }
    }
}

impl std::error::Error for ParseError {}

fn join_alternatives(expected: &[String]) -> String {
    match expected {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}
