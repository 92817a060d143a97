//! The pushdown-automaton parser
//!
//! A parse runs one automaton per open production, stacked. Each token
//! is classified into a label, then the top automaton either shifts it
//! as a leaf, descends into a nonterminal whose FIRST set holds the
//! label, or closes the production and retries in the parent. Shift
//! wins over descend, descend wins over close. The grammar must keep
//! the alternatives at every state disjoint for this to be
//! deterministic; the parser does not check that, it just walks.

use crate::cst::Node;
use crate::error::ParseError;
use crate::grammar::{Dfa, Grammar};
use crate::symbol::Symbol;
use crate::token::{Location, Token};

/// One level of the parse stack: an automaton, the state it is in, and
/// the node collecting its children
struct Frame {
    dfa: &'static Dfa,
    state: usize,
    node: Node,
}

/// Outcome of feeding one token
enum Step {
    /// Token consumed, more input expected
    Continue,
    /// The start production closed over this token
    Done(Node),
}

/// Parser for one token stream
///
/// Holds the frame stack while parsing; the grammar itself is shared
/// and read-only, so any number of parsers can run against it at once.
pub struct Parser {
    grammar: &'static Grammar,
    stack: Vec<Frame>,
}

impl Parser {
    /// Set up a parse of the grammar's start symbol. The root node
    /// carries the artificial location 0:0.
    pub fn new(grammar: &'static Grammar) -> Result<Self, ParseError> {
        let start = grammar.start();
        let dfa = grammar.dfa_for(start)?;
        Ok(Self {
            grammar,
            stack: vec![Frame {
                dfa,
                state: 0,
                node: Node::new(start, Location::new(0, 0)),
            }],
        })
    }

    /// Consume the whole token stream and build the parse tree
    ///
    /// Returns as soon as the start production closes. When the stream
    /// runs out first, completed productions still reduce; a stack that
    /// cannot reduce to the root is an unexpected end of input. The
    /// parser is consumed either way, a fresh one is needed per stream.
    pub fn parse_tokens(
        mut self,
        tokens: impl IntoIterator<Item = Token>,
    ) -> Result<Node, ParseError> {
        let mut last_location = Location::new(1, 0);
        for token in tokens {
            last_location = token.location;
            if let Step::Done(root) = self.add_token(token)? {
                return Ok(root);
            }
        }
        self.finish(last_location)
    }

    /// Drain the stack once the stream is exhausted, closing every
    /// frame that sits in a final state
    fn finish(mut self, last_location: Location) -> Result<Node, ParseError> {
        loop {
            let completed = match self.stack.last() {
                Some(frame) => frame
                    .dfa
                    .state(frame.state)
                    .map(|state| state.is_final)
                    .unwrap_or(false),
                None => false,
            };
            if completed {
                if let Some(root) = self.pop() {
                    return Ok(root);
                }
                continue;
            }
            let production = self
                .stack
                .last()
                .map(|frame| frame.dfa.name)
                .unwrap_or_else(|| self.grammar.start().name());
            return Err(ParseError::UnexpectedEndOfInput {
                location: last_location,
                production,
            });
        }
    }

    fn add_token(&mut self, token: Token) -> Result<Step, ParseError> {
        if token.symbol == Symbol::ErrorToken {
            return Err(ParseError::ErrorToken {
                text: token.text,
                location: token.location,
            });
        }

        let label = match self.grammar.classify(token.symbol, &token.text) {
            Some(label) => label,
            None => return Err(self.unexpected(&token)),
        };

        loop {
            let (dfa, state_index) = match self.stack.last() {
                Some(frame) => (frame.dfa, frame.state),
                None => {
                    return Err(ParseError::TrailingInput {
                        text: token.text,
                        location: token.location,
                    })
                }
            };
            let state = dfa
                .state(state_index)
                .ok_or_else(|| ParseError::MalformedGrammar {
                    detail: format!("{} has no state {}", dfa.name, state_index),
                })?;

            // shift beats descend: a terminal arc matching the token
            // wins over any nonterminal arc
            if let Some(arc) = state.arcs.iter().find(|arc| arc.label == label) {
                self.shift(&token, arc.target as usize);
                return Ok(match self.close_accepted() {
                    Some(root) => Step::Done(root),
                    None => Step::Continue,
                });
            }

            // descend beats close: enter the first nonterminal whose
            // FIRST set holds the label, keeping the token in hand
            let mut descend = None;
            for arc in state.arcs {
                let symbol = self.grammar.label(arc.label)?.symbol;
                if !symbol.is_nonterminal() {
                    continue;
                }
                let next_dfa = self.grammar.dfa_for(symbol)?;
                if next_dfa.first_contains(label) {
                    descend = Some((symbol, next_dfa, arc.target as usize));
                    break;
                }
            }
            if let Some((symbol, next_dfa, target)) = descend {
                self.push(symbol, next_dfa, target, token.location);
                continue;
            }

            if state.is_final {
                // production complete; hand its node to the parent and
                // retry the token there
                if self.pop().is_some() {
                    return Err(ParseError::TrailingInput {
                        text: token.text,
                        location: token.location,
                    });
                }
                continue;
            }

            return Err(self.unexpected(&token));
        }
    }

    /// Append a leaf for the token and advance the top frame
    fn shift(&mut self, token: &Token, target: usize) {
        if let Some(frame) = self.stack.last_mut() {
            frame.node.add_child(Node::from_token(token));
            frame.state = target;
        }
    }

    /// Open a frame for a nonterminal. The parent moves to the arc
    /// target now, so closing the child lands it in the right state.
    fn push(&mut self, symbol: Symbol, dfa: &'static Dfa, target: usize, location: Location) {
        if let Some(frame) = self.stack.last_mut() {
            frame.state = target;
        }
        self.stack.push(Frame {
            dfa,
            state: 0,
            node: Node::new(symbol, location),
        });
    }

    /// Close the top frame. Returns the finished node when it was the
    /// root frame, otherwise attaches it to the parent.
    fn pop(&mut self) -> Option<Node> {
        let frame = self.stack.pop()?;
        match self.stack.last_mut() {
            Some(parent) => {
                parent.node.add_child(frame.node);
                None
            }
            None => Some(frame.node),
        }
    }

    /// After a shift, close every frame sitting in an accept-only
    /// state. Returns the root node if the cascade drains the stack.
    fn close_accepted(&mut self) -> Option<Node> {
        loop {
            let accepted = match self.stack.last() {
                Some(frame) => frame
                    .dfa
                    .state(frame.state)
                    .map(|state| state.is_accept_only())
                    .unwrap_or(false),
                None => false,
            };
            if !accepted {
                return None;
            }
            if let Some(root) = self.pop() {
                return Some(root);
            }
        }
    }

    fn unexpected(&self, token: &Token) -> ParseError {
        let (production, expected) = match self.stack.last() {
            Some(frame) => (frame.dfa.name, self.expected_labels(frame)),
            None => (self.grammar.start().name(), Vec::new()),
        };
        ParseError::UnexpectedToken {
            text: token.text.clone(),
            location: token.location,
            production,
            expected,
        }
    }

    /// Describe what the current state could accept, expanding
    /// nonterminal arcs to their FIRST sets
    fn expected_labels(&self, frame: &Frame) -> Vec<String> {
        let mut expected = Vec::new();
        let state = match frame.dfa.state(frame.state) {
            Some(state) => state,
            None => return expected,
        };
        for arc in state.arcs {
            let label = match self.grammar.label(arc.label) {
                Ok(label) => label,
                Err(_) => continue,
            };
            if label.symbol.is_terminal() {
                push_unique(&mut expected, label.describe());
            } else if let Ok(dfa) = self.grammar.dfa_for(label.symbol) {
                for &first in dfa.first {
                    if let Ok(entry) = self.grammar.label(first) {
                        push_unique(&mut expected, entry.describe());
                    }
                }
            }
        }
        expected
    }
}

fn push_unique(expected: &mut Vec<String>, description: String) {
    if !expected.contains(&description) {
        expected.push(description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::GRAMMAR;
    use crate::lexing::tokenize;

    fn parse(source: &str) -> Result<Node, ParseError> {
        Parser::new(&GRAMMAR)
            .expect("start automaton")
            .parse_tokens(tokenize(source))
    }

    #[test]
    fn test_minimal_program() {
        let root = parse("void main() {}").unwrap();
        assert_eq!(root.symbol, Symbol::Program);
        assert_eq!(root.location, Location::new(0, 0));
        assert_eq!(root.children.len(), 2);

        let declaration = &root.children[0];
        assert_eq!(declaration.symbol, Symbol::Declaration);
        assert_eq!(declaration.children.len(), 5);
        assert_eq!(declaration.children[1].value, "main");

        assert_eq!(root.children[1].symbol, Symbol::EndMarker);
    }

    #[test]
    fn test_leaves_reproduce_the_token_stream() {
        let source = "int x;\nvoid main() { x = 1 + 2; }";
        let tokens = tokenize(source);
        let root = parse(source).unwrap();

        let leaves: Vec<(Symbol, String)> = root
            .iter()
            .filter(|node| node.is_terminal())
            .map(|node| (node.symbol, node.value.clone()))
            .collect();
        let stream: Vec<(Symbol, String)> =
            tokens.into_iter().map(|t| (t.symbol, t.text)).collect();
        assert_eq!(leaves, stream);
    }

    #[test]
    fn test_parsing_is_deterministic() {
        let source = "const int n = 10;\nvoid main() { printf(n); }";
        assert_eq!(parse(source).unwrap(), parse(source).unwrap());
    }

    #[test]
    fn test_nonterminal_nodes_take_their_first_token_location() {
        let root = parse("void main() {}").unwrap();
        let declaration = &root.children[0];
        assert_eq!(declaration.location, Location::new(1, 0));
        let compound = declaration.last_child().unwrap();
        assert_eq!(compound.symbol, Symbol::CompoundStmt);
        assert_eq!(compound.location, Location::new(1, 12));
    }

    #[test]
    fn test_error_token_fails_fast() {
        let err = parse("void main() { x = !y; }").unwrap_err();
        assert_eq!(
            err,
            ParseError::ErrorToken {
                text: "!".to_string(),
                location: Location::new(1, 18),
            }
        );
    }

    #[test]
    fn test_unclassifiable_token_is_unexpected() {
        let err = parse("void main() { a: ; }").unwrap_err();
        match err {
            ParseError::UnexpectedToken { text, location, .. } => {
                assert_eq!(text, ":");
                assert_eq!(location, Location::new(1, 15));
            }
            other => panic!("expected UnexpectedToken, got {:?}", other),
        }
    }

    #[test]
    fn test_unexpected_token_names_the_open_production() {
        // missing '}' leaves compound_stmt open when ENDMARKER arrives
        let err = parse("void main() {").unwrap_err();
        match err {
            ParseError::UnexpectedToken {
                text,
                location,
                production,
                expected,
            } => {
                assert_eq!(text, "");
                assert_eq!(location, Location::new(1, 0));
                assert_eq!(production, "compound_stmt");
                assert_eq!(
                    expected,
                    [
                        "'}'", "'const'", "'{'", "'for'", "'if'", "'printf'", "'return'",
                        "'scanf'", "'while'", "NAME", "';'", "'char'", "'int'", "'void'"
                    ]
                );
            }
            other => panic!("expected UnexpectedToken, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_points_at_the_first_bad_token() {
        // a valid prefix, then '=' where an expression must start
        let err = parse("void main() { x = = 1; }").unwrap_err();
        match err {
            ParseError::UnexpectedToken { text, location, .. } => {
                assert_eq!(text, "=");
                assert_eq!(location, Location::new(1, 18));
            }
            other => panic!("expected UnexpectedToken, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_token_stream() {
        let err = Parser::new(&GRAMMAR)
            .unwrap()
            .parse_tokens(Vec::new())
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedEndOfInput {
                location: Location::new(1, 0),
                production: "program",
            }
        );
    }

    #[test]
    fn test_stream_without_endmarker() {
        // tokenize always appends ENDMARKER; dropping it leaves the
        // stream exhausted mid-production
        let mut tokens = tokenize("void main() {}");
        tokens.pop();
        let last = tokens.last().unwrap().location;
        let err = Parser::new(&GRAMMAR)
            .unwrap()
            .parse_tokens(tokens)
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedEndOfInput {
                location: last,
                production: "program",
            }
        );
    }
}
