//! # c0
//!
//! A compiler front-end for the C0 teaching language: a tokenizer and
//! a grammar-driven parser producing a concrete parse tree.
//!
//! The grammar lives in static automaton tables, one finite automaton
//! per nonterminal, and the parser is a pushdown automaton over them:
//! it classifies each token into a label, then shifts it, descends
//! into a sub-production, or closes the production on top of the
//! stack. Nothing in the parser knows C0 specifically; the language is
//! entirely in the tables.
//!
//! ```
//! let tree = c0::parse("void main() { printf(\"hi\"); }").unwrap();
//! assert_eq!(tree.type_name(), "program");
//! ```

pub mod cst;
pub mod error;
pub mod grammar;
pub mod lexing;
pub mod parsing;
pub mod symbol;
pub mod token;

pub use cst::Node;
pub use error::ParseError;
pub use grammar::GRAMMAR;
pub use lexing::{format_tokens, tokenize};
pub use parsing::Parser;
pub use symbol::{Symbol, NT_OFFSET};
pub use token::{Location, Token};

/// Tokenize and parse C0 source text against the compiled-in grammar
pub fn parse(source: &str) -> Result<Node, ParseError> {
    Parser::new(&GRAMMAR)?.parse_tokens(tokenize(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        let tree = parse("void main() {}").unwrap();
        assert_eq!(tree.symbol, Symbol::Program);
    }

    #[test]
    fn test_parse_reports_errors() {
        assert!(parse("void main() {").is_err());
        assert!(parse("@").is_err());
    }

    #[test]
    fn test_empty_source_is_an_empty_program() {
        // the grammar allows zero declarations, so only ENDMARKER remains
        let tree = parse("").unwrap();
        assert_eq!(tree.symbol, Symbol::Program);
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].symbol, Symbol::EndMarker);
    }
}
