//! Grammar symbols for the C0 language
//!
//! Terminals and nonterminals share one numbering: terminal kinds start
//! at zero, nonterminal kinds start at `NT_OFFSET`. The automaton tables
//! address a nonterminal's machine by `symbol - NT_OFFSET`.

use serde::{Serialize, Serializer};
use std::fmt;

/// First nonterminal discriminant. Everything below it is a terminal.
pub const NT_OFFSET: u16 = 256;

/// All grammar symbols of the C0 language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Symbol {
    // Terminals (token kinds)
    Name = 0,
    Op = 1,
    ErrorToken = 2,
    EndMarker = 3,
    Char = 4,
    Number = 5,
    String = 6,

    // Nonterminals (one automaton each)
    Program = 256,
    Arglist = 257,
    CompoundStmt = 258,
    Condition = 259,
    ConstDecl = 260,
    ConstItem = 261,
    DeclTrailer = 262,
    Declaration = 263,
    Expr = 264,
    Factor = 265,
    FactorTrailer = 266,
    FlowStmt = 267,
    ForStmt = 268,
    IfStmt = 269,
    Integer = 270,
    Paralist = 271,
    ReadStmt = 272,
    ReturnStmt = 273,
    Stmt = 274,
    StmtTrailer = 275,
    Subscript2 = 276,
    Term = 277,
    TypeName = 278,
    VarDecl = 279,
    VarItem = 280,
    WhileStmt = 281,
    WriteStmt = 282,
}

impl Symbol {
    /// Check if this symbol is a token kind
    pub fn is_terminal(self) -> bool {
        (self as u16) < NT_OFFSET
    }

    /// Check if this symbol names a grammar rule
    pub fn is_nonterminal(self) -> bool {
        !self.is_terminal()
    }

    /// The symbol's name: upper case for terminals, the rule name for
    /// nonterminals.
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Name => "NAME",
            Symbol::Op => "OP",
            Symbol::ErrorToken => "ERRORTOKEN",
            Symbol::EndMarker => "ENDMARKER",
            Symbol::Char => "CHAR",
            Symbol::Number => "NUMBER",
            Symbol::String => "STRING",
            Symbol::Program => "program",
            Symbol::Arglist => "arglist",
            Symbol::CompoundStmt => "compound_stmt",
            Symbol::Condition => "condition",
            Symbol::ConstDecl => "const_decl",
            Symbol::ConstItem => "const_item",
            Symbol::DeclTrailer => "decl_trailer",
            Symbol::Declaration => "declaration",
            Symbol::Expr => "expr",
            Symbol::Factor => "factor",
            Symbol::FactorTrailer => "factor_trailer",
            Symbol::FlowStmt => "flow_stmt",
            Symbol::ForStmt => "for_stmt",
            Symbol::IfStmt => "if_stmt",
            Symbol::Integer => "integer",
            Symbol::Paralist => "paralist",
            Symbol::ReadStmt => "read_stmt",
            Symbol::ReturnStmt => "return_stmt",
            Symbol::Stmt => "stmt",
            Symbol::StmtTrailer => "stmt_trailer",
            Symbol::Subscript2 => "subscript2",
            Symbol::Term => "term",
            Symbol::TypeName => "type_name",
            Symbol::VarDecl => "var_decl",
            Symbol::VarItem => "var_item",
            Symbol::WhileStmt => "while_stmt",
            Symbol::WriteStmt => "write_stmt",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_discriminants() {
        assert_eq!(Symbol::Name as u16, 0);
        assert_eq!(Symbol::Op as u16, 1);
        assert_eq!(Symbol::ErrorToken as u16, 2);
        assert_eq!(Symbol::EndMarker as u16, 3);
        assert_eq!(Symbol::Char as u16, 4);
        assert_eq!(Symbol::Number as u16, 5);
        assert_eq!(Symbol::String as u16, 6);
    }

    #[test]
    fn test_nonterminal_discriminants() {
        assert_eq!(Symbol::Program as u16, NT_OFFSET);
        assert_eq!(Symbol::Arglist as u16, 257);
        assert_eq!(Symbol::WriteStmt as u16, 282);
    }

    #[test]
    fn test_terminal_predicate() {
        assert!(Symbol::Name.is_terminal());
        assert!(Symbol::EndMarker.is_terminal());
        assert!(!Symbol::Program.is_terminal());

        assert!(Symbol::Program.is_nonterminal());
        assert!(Symbol::Expr.is_nonterminal());
        assert!(!Symbol::Op.is_nonterminal());
    }

    #[test]
    fn test_names() {
        assert_eq!(Symbol::Name.name(), "NAME");
        assert_eq!(Symbol::EndMarker.name(), "ENDMARKER");
        assert_eq!(Symbol::Program.name(), "program");
        assert_eq!(Symbol::CompoundStmt.name(), "compound_stmt");
        assert_eq!(Symbol::Subscript2.name(), "subscript2");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Symbol::Op), "OP");
        assert_eq!(format!("{}", Symbol::TypeName), "type_name");
    }
}
