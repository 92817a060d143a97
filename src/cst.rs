//! The concrete parse tree
//!
//! Terminal leaves carry the token text they were built from,
//! nonterminal nodes carry their children in derivation order. The
//! tree owns its nodes outright and is never mutated once the parser
//! hands it over.

use crate::symbol::Symbol;
use crate::token::{Location, Token};
use serde::Serialize;
use std::fmt;

/// One parse tree node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub symbol: Symbol,
    /// Token text for terminals, empty for nonterminals
    pub value: String,
    #[serde(rename = "context")]
    pub location: Location,
    pub children: Vec<Node>,
}

impl Node {
    /// An empty nonterminal node, filled in as its production is
    /// recognized
    pub fn new(symbol: Symbol, location: Location) -> Self {
        Self {
            symbol,
            value: String::new(),
            location,
            children: Vec::new(),
        }
    }

    /// A leaf node copying the token's kind, text and location
    pub fn from_token(token: &Token) -> Self {
        Self {
            symbol: token.symbol,
            value: token.text.clone(),
            location: token.location,
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn type_name(&self) -> &'static str {
        self.symbol.name()
    }

    pub fn is_terminal(&self) -> bool {
        self.symbol.is_terminal()
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    pub fn last_child(&self) -> Option<&Node> {
        self.children.last()
    }

    /// Walk the subtree depth-first, parents before children, children
    /// left to right
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// The value as diagnostics print it: quoted, with `None` standing
    /// in for valueless nodes
    pub fn format_value(&self) -> String {
        if self.symbol != Symbol::EndMarker && self.value.is_empty() {
            "None".to_string()
        } else {
            format!("'{}'", self.value)
        }
    }

    /// Lisp-style rendering of the subtree, for dumps and tests
    pub fn tree(&self) -> TreeFormat<'_> {
        TreeFormat { root: self }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node(type={}, value={}, context={}, children=",
            self.type_name(),
            self.format_value(),
            self.location
        )?;
        if self.children.is_empty() {
            write!(f, "None)")
        } else {
            write!(f, "[")?;
            for (i, child) in self.children.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", child)?;
            }
            write!(f, "])")
        }
    }
}

/// Depth-first pre-order iterator over a subtree
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Display adapter produced by [`Node::tree`]
///
/// A node with a single child stays on one line; longer child lists
/// get one line per child, indented two spaces per level:
///
/// ```text
/// (expr:
///   (NAME: x),
///   (OP: '+'),
///   (NUMBER: 2))
/// ```
pub struct TreeFormat<'a> {
    root: &'a Node,
}

impl fmt::Display for TreeFormat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print_node(f, self.root, 0)
    }
}

fn print_node(f: &mut fmt::Formatter<'_>, node: &Node, indent: usize) -> fmt::Result {
    write!(f, "({}", node.type_name())?;
    if node.is_terminal() {
        print_terminal(f, node)?;
    } else {
        print_nonterminal(f, node, indent)?;
    }
    write!(f, ")")
}

fn print_terminal(f: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
    match node.symbol {
        // ENDMARKER has no value worth showing
        Symbol::EndMarker => Ok(()),
        // quote OP values so they don't mix with the parentheses
        Symbol::Op => write!(f, ": '{}'", node.value),
        _ => write!(f, ": {}", node.value),
    }
}

fn print_nonterminal(f: &mut fmt::Formatter<'_>, node: &Node, indent: usize) -> fmt::Result {
    match node.children.as_slice() {
        [] => Ok(()),
        [only] => {
            write!(f, ": ")?;
            print_node(f, only, indent)
        }
        children => {
            writeln!(f, ":")?;
            for (i, child) in children.iter().enumerate() {
                write!(f, "{:width$}", "", width = (indent + 1) * 2)?;
                print_node(f, child, indent + 1)?;
                if i + 1 != children.len() {
                    writeln!(f, ",")?;
                }
            }
            Ok(())
        }
    }
}
