//! Grammar tables and lookup
//!
//! A grammar is a family of finite automata, one per nonterminal, over
//! a shared label alphabet. A label names either an exact keyword or
//! operator spelling, a bare terminal kind, or a nonterminal to descend
//! into. Everything here is read-only data plus lookup; the parser in
//! [`crate::parsing`] supplies the control flow.

mod tables;

pub use tables::GRAMMAR;

use crate::error::ParseError;
use crate::symbol::{Symbol, NT_OFFSET};
use once_cell::sync::OnceCell;
use std::collections::HashMap;

/// A transition: `label` indexes the grammar's label table, `target`
/// the owning automaton's state array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc {
    pub label: u16,
    pub target: u16,
}

/// One automaton state
#[derive(Debug)]
pub struct State {
    pub arcs: &'static [Arc],
    pub is_final: bool,
}

impl State {
    /// A final state with no way out. Reaching one closes the
    /// enclosing production unconditionally.
    pub fn is_accept_only(&self) -> bool {
        self.is_final && self.arcs.is_empty()
    }
}

/// The automaton for one nonterminal
///
/// States are dense, state 0 is the start state. `first` holds the
/// terminal labels that can begin a derivation of this nonterminal and
/// gates descend decisions in the parser.
#[derive(Debug)]
pub struct Dfa {
    pub symbol: Symbol,
    pub name: &'static str,
    pub states: &'static [State],
    pub first: &'static [u16],
}

impl Dfa {
    pub fn state(&self, index: usize) -> Option<&'static State> {
        self.states.get(index)
    }

    pub fn first_contains(&self, label: u16) -> bool {
        self.first.contains(&label)
    }
}

/// One entry of the label alphabet
///
/// `text` is set for keywords and operators that must match a token's
/// exact spelling; it is `None` for bare terminal kinds and for
/// nonterminal labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub symbol: Symbol,
    pub text: Option<&'static str>,
}

impl Label {
    /// Human-readable form: the quoted spelling if there is one, the
    /// symbol name otherwise
    pub fn describe(&self) -> String {
        match self.text {
            Some(text) => format!("'{}'", text),
            None => self.symbol.name().to_string(),
        }
    }
}

/// A complete grammar: label alphabet, automata, start symbol
///
/// Built once into a `static` and shared by reference; the token
/// classification index is filled in lazily on first use.
#[derive(Debug)]
pub struct Grammar {
    start: Symbol,
    labels: &'static [Label],
    dfas: &'static [&'static Dfa],
    index: OnceCell<LabelIndex>,
}

impl Grammar {
    pub const fn new(
        start: Symbol,
        labels: &'static [Label],
        dfas: &'static [&'static Dfa],
    ) -> Self {
        Self {
            start,
            labels,
            dfas,
            index: OnceCell::new(),
        }
    }

    /// The symbol the whole input must derive from
    pub fn start(&self) -> Symbol {
        self.start
    }

    /// The label alphabet
    pub fn labels(&self) -> &'static [Label] {
        self.labels
    }

    /// The automata, indexed by `symbol - NT_OFFSET`
    pub fn dfas(&self) -> &'static [&'static Dfa] {
        self.dfas
    }

    /// Look up a label by index
    pub fn label(&self, index: u16) -> Result<&'static Label, ParseError> {
        self.labels
            .get(index as usize)
            .ok_or_else(|| ParseError::MalformedGrammar {
                detail: format!("label {} out of range", index),
            })
    }

    /// The automaton for a nonterminal
    pub fn dfa_for(&self, symbol: Symbol) -> Result<&'static Dfa, ParseError> {
        let slot = (symbol as u16)
            .checked_sub(NT_OFFSET)
            .and_then(|i| self.dfas.get(i as usize))
            .copied();
        match slot {
            Some(dfa) if dfa.symbol == symbol => Ok(dfa),
            _ => Err(ParseError::MalformedGrammar {
                detail: format!("no automaton for {}", symbol.name()),
            }),
        }
    }

    /// Classify a token into a label index. Exact keyword and operator
    /// spellings win over the token's bare terminal kind, so `if` maps
    /// to the keyword label and not to NAME.
    pub fn classify(&self, symbol: Symbol, text: &str) -> Option<u16> {
        let index = self.index.get_or_init(|| LabelIndex::build(self.labels));
        if matches!(symbol, Symbol::Name | Symbol::Op) {
            if let Some(&label) = index.by_text.get(text) {
                return Some(label);
            }
        }
        index.by_symbol.get(&symbol).copied()
    }
}

/// Lookup maps over the label alphabet. The first matching label wins
/// in both maps, mirroring a linear scan of the label table.
#[derive(Debug)]
struct LabelIndex {
    by_text: HashMap<&'static str, u16>,
    by_symbol: HashMap<Symbol, u16>,
}

impl LabelIndex {
    fn build(labels: &'static [Label]) -> Self {
        let mut by_text = HashMap::new();
        let mut by_symbol = HashMap::new();
        for (i, label) in labels.iter().enumerate() {
            let index = i as u16;
            match label.text {
                Some(text) => {
                    by_text.entry(text).or_insert(index);
                }
                None => {
                    by_symbol.entry(label.symbol).or_insert(index);
                }
            }
        }
        Self { by_text, by_symbol }
    }
}
