//! Automaton tables for the C0 grammar.
//!
//! One automaton per nonterminal, 62 labels shared by arcs and FIRST
//! sets. Label indices point into `LABELS`; a state with `is_final` and
//! no arcs is accept-only. `DFAS` is indexed by `symbol - NT_OFFSET`.

use super::{Arc, Dfa, Grammar, Label, State};
use crate::symbol::Symbol;

static LABELS: [Label; 62] = [
    Label { symbol: Symbol::EndMarker, text: None },     // 0
    Label { symbol: Symbol::ConstDecl, text: None },     // 1
    Label { symbol: Symbol::Declaration, text: None },   // 2
    Label { symbol: Symbol::Name, text: Some("char") },  // 3
    Label { symbol: Symbol::Name, text: Some("const") }, // 4
    Label { symbol: Symbol::Name, text: Some("int") },   // 5
    Label { symbol: Symbol::Name, text: Some("void") },  // 6
    Label { symbol: Symbol::Op, text: Some("(") },       // 7
    Label { symbol: Symbol::Expr, text: None },          // 8
    Label { symbol: Symbol::Op, text: Some(")") },       // 9
    Label { symbol: Symbol::Op, text: Some(",") },       // 10
    Label { symbol: Symbol::Op, text: Some("{") },       // 11
    Label { symbol: Symbol::Op, text: Some("}") },       // 12
    Label { symbol: Symbol::Stmt, text: None },          // 13
    Label { symbol: Symbol::VarDecl, text: None },       // 14
    Label { symbol: Symbol::Op, text: Some("!=") },      // 15
    Label { symbol: Symbol::Op, text: Some("<") },       // 16
    Label { symbol: Symbol::Op, text: Some("<=") },      // 17
    Label { symbol: Symbol::Op, text: Some("==") },      // 18
    Label { symbol: Symbol::Op, text: Some(">") },       // 19
    Label { symbol: Symbol::Op, text: Some(">=") },      // 20
    Label { symbol: Symbol::Op, text: Some("+") },       // 21
    Label { symbol: Symbol::Op, text: Some("-") },       // 22
    Label { symbol: Symbol::Char, text: None },          // 23
    Label { symbol: Symbol::Name, text: None },          // 24
    Label { symbol: Symbol::Number, text: None },        // 25
    Label { symbol: Symbol::TypeName, text: None },      // 26
    Label { symbol: Symbol::ConstItem, text: None },     // 27
    Label { symbol: Symbol::Op, text: Some(";") },       // 28
    Label { symbol: Symbol::Op, text: Some("=") },       // 29
    Label { symbol: Symbol::Integer, text: None },       // 30
    Label { symbol: Symbol::CompoundStmt, text: None },  // 31
    Label { symbol: Symbol::Paralist, text: None },      // 32
    Label { symbol: Symbol::Subscript2, text: None },    // 33
    Label { symbol: Symbol::VarItem, text: None },       // 34
    Label { symbol: Symbol::Op, text: Some("[") },       // 35
    Label { symbol: Symbol::Name, text: Some("main") },  // 36
    Label { symbol: Symbol::DeclTrailer, text: None },   // 37
    Label { symbol: Symbol::Term, text: None },          // 38
    Label { symbol: Symbol::FactorTrailer, text: None }, // 39
    Label { symbol: Symbol::Arglist, text: None },       // 40
    Label { symbol: Symbol::Op, text: Some("]") },       // 41
    Label { symbol: Symbol::ForStmt, text: None },       // 42
    Label { symbol: Symbol::IfStmt, text: None },        // 43
    Label { symbol: Symbol::ReadStmt, text: None },      // 44
    Label { symbol: Symbol::ReturnStmt, text: None },    // 45
    Label { symbol: Symbol::WhileStmt, text: None },     // 46
    Label { symbol: Symbol::WriteStmt, text: None },     // 47
    Label { symbol: Symbol::Name, text: Some("for") },   // 48
    Label { symbol: Symbol::Name, text: Some("if") },    // 49
    Label { symbol: Symbol::Name, text: Some("printf") },// 50
    Label { symbol: Symbol::Name, text: Some("return") },// 51
    Label { symbol: Symbol::Name, text: Some("scanf") }, // 52
    Label { symbol: Symbol::Name, text: Some("while") }, // 53
    Label { symbol: Symbol::Condition, text: None },     // 54
    Label { symbol: Symbol::Name, text: Some("else") },  // 55
    Label { symbol: Symbol::FlowStmt, text: None },      // 56
    Label { symbol: Symbol::StmtTrailer, text: None },   // 57
    Label { symbol: Symbol::Factor, text: None },        // 58
    Label { symbol: Symbol::Op, text: Some("*") },       // 59
    Label { symbol: Symbol::Op, text: Some("/") },       // 60
    Label { symbol: Symbol::String, text: None },        // 61
];

// program: const_decl* declaration* ENDMARKER
static STATES_PROGRAM: [State; 3] = [
    State {
        arcs: &[
            Arc { label: 0, target: 1 },
            Arc { label: 1, target: 0 },
            Arc { label: 2, target: 2 },
        ],
        is_final: false,
    },
    State { arcs: &[], is_final: true },
    State { arcs: &[Arc { label: 0, target: 1 }, Arc { label: 2, target: 2 }], is_final: false },
];

static DFA_PROGRAM: Dfa = Dfa {
    symbol: Symbol::Program,
    name: "program",
    states: &STATES_PROGRAM,
    first: &[0, 3, 4, 5, 6],
};

// arglist: '(' expr (',' expr)* ')'
static STATES_ARGLIST: [State; 4] = [
    State { arcs: &[Arc { label: 7, target: 1 }], is_final: false },
    State { arcs: &[Arc { label: 8, target: 2 }], is_final: false },
    State { arcs: &[Arc { label: 9, target: 3 }, Arc { label: 10, target: 1 }], is_final: false },
    State { arcs: &[], is_final: true },
];

static DFA_ARGLIST: Dfa = Dfa {
    symbol: Symbol::Arglist,
    name: "arglist",
    states: &STATES_ARGLIST,
    first: &[7],
};

// compound_stmt: '{' const_decl* var_decl* stmt* '}'
static STATES_COMPOUND_STMT: [State; 5] = [
    State { arcs: &[Arc { label: 11, target: 1 }], is_final: false },
    State {
        arcs: &[
            Arc { label: 12, target: 2 },
            Arc { label: 1, target: 1 },
            Arc { label: 13, target: 3 },
            Arc { label: 14, target: 4 },
        ],
        is_final: false,
    },
    State { arcs: &[], is_final: true },
    State { arcs: &[Arc { label: 12, target: 2 }, Arc { label: 13, target: 3 }], is_final: false },
    State {
        arcs: &[
            Arc { label: 12, target: 2 },
            Arc { label: 13, target: 3 },
            Arc { label: 14, target: 4 },
        ],
        is_final: false,
    },
];

static DFA_COMPOUND_STMT: Dfa = Dfa {
    symbol: Symbol::CompoundStmt,
    name: "compound_stmt",
    states: &STATES_COMPOUND_STMT,
    first: &[11],
};

// condition: expr [('!='|'<'|'<='|'=='|'>'|'>=') expr]
static STATES_CONDITION: [State; 4] = [
    State { arcs: &[Arc { label: 8, target: 1 }], is_final: false },
    State {
        arcs: &[
            Arc { label: 15, target: 2 },
            Arc { label: 16, target: 2 },
            Arc { label: 17, target: 2 },
            Arc { label: 18, target: 2 },
            Arc { label: 19, target: 2 },
            Arc { label: 20, target: 2 },
        ],
        is_final: true,
    },
    State { arcs: &[Arc { label: 8, target: 3 }], is_final: false },
    State { arcs: &[], is_final: true },
];

static DFA_CONDITION: Dfa = Dfa {
    symbol: Symbol::Condition,
    name: "condition",
    states: &STATES_CONDITION,
    first: &[7, 21, 22, 23, 24, 25],
};

// const_decl: 'const' type_name const_item (',' const_item)* ';'
static STATES_CONST_DECL: [State; 5] = [
    State { arcs: &[Arc { label: 4, target: 1 }], is_final: false },
    State { arcs: &[Arc { label: 26, target: 2 }], is_final: false },
    State { arcs: &[Arc { label: 27, target: 3 }], is_final: false },
    State { arcs: &[Arc { label: 10, target: 2 }, Arc { label: 28, target: 4 }], is_final: false },
    State { arcs: &[], is_final: true },
];

static DFA_CONST_DECL: Dfa = Dfa {
    symbol: Symbol::ConstDecl,
    name: "const_decl",
    states: &STATES_CONST_DECL,
    first: &[4],
};

// const_item: NAME '=' (integer | CHAR)
static STATES_CONST_ITEM: [State; 4] = [
    State { arcs: &[Arc { label: 24, target: 1 }], is_final: false },
    State { arcs: &[Arc { label: 29, target: 2 }], is_final: false },
    State { arcs: &[Arc { label: 23, target: 3 }, Arc { label: 30, target: 3 }], is_final: false },
    State { arcs: &[], is_final: true },
];

static DFA_CONST_ITEM: Dfa = Dfa {
    symbol: Symbol::ConstItem,
    name: "const_item",
    states: &STATES_CONST_ITEM,
    first: &[24],
};

// decl_trailer: [paralist] compound_stmt | [subscript2] (',' var_item)* ';'
static STATES_DECL_TRAILER: [State; 5] = [
    State {
        arcs: &[
            Arc { label: 10, target: 1 },
            Arc { label: 28, target: 2 },
            Arc { label: 31, target: 2 },
            Arc { label: 32, target: 3 },
            Arc { label: 33, target: 4 },
        ],
        is_final: false,
    },
    State { arcs: &[Arc { label: 34, target: 4 }], is_final: false },
    State { arcs: &[], is_final: true },
    State { arcs: &[Arc { label: 31, target: 2 }], is_final: false },
    State { arcs: &[Arc { label: 10, target: 1 }, Arc { label: 28, target: 2 }], is_final: false },
];

static DFA_DECL_TRAILER: Dfa = Dfa {
    symbol: Symbol::DeclTrailer,
    name: "decl_trailer",
    states: &STATES_DECL_TRAILER,
    first: &[35, 7, 10, 11, 28],
};

// declaration: type_name ('main' '(' ')' compound_stmt | NAME decl_trailer)
static STATES_DECLARATION: [State; 7] = [
    State { arcs: &[Arc { label: 26, target: 1 }], is_final: false },
    State { arcs: &[Arc { label: 36, target: 2 }, Arc { label: 24, target: 3 }], is_final: false },
    State { arcs: &[Arc { label: 7, target: 4 }], is_final: false },
    State { arcs: &[Arc { label: 37, target: 5 }], is_final: false },
    State { arcs: &[Arc { label: 9, target: 6 }], is_final: false },
    State { arcs: &[], is_final: true },
    State { arcs: &[Arc { label: 31, target: 5 }], is_final: false },
];

static DFA_DECLARATION: Dfa = Dfa {
    symbol: Symbol::Declaration,
    name: "declaration",
    states: &STATES_DECLARATION,
    first: &[3, 5, 6],
};

// expr: ['+'|'-'] term (('+'|'-') term)*
static STATES_EXPR: [State; 3] = [
    State {
        arcs: &[
            Arc { label: 21, target: 1 },
            Arc { label: 22, target: 1 },
            Arc { label: 38, target: 2 },
        ],
        is_final: false,
    },
    State { arcs: &[Arc { label: 38, target: 2 }], is_final: false },
    State { arcs: &[Arc { label: 21, target: 1 }, Arc { label: 22, target: 1 }], is_final: true },
];

static DFA_EXPR: Dfa = Dfa {
    symbol: Symbol::Expr,
    name: "expr",
    states: &STATES_EXPR,
    first: &[7, 21, 22, 23, 24, 25],
};

// factor: '(' expr ')' | CHAR | NUMBER | NAME [factor_trailer]
static STATES_FACTOR: [State; 5] = [
    State {
        arcs: &[
            Arc { label: 7, target: 1 },
            Arc { label: 23, target: 2 },
            Arc { label: 24, target: 3 },
            Arc { label: 25, target: 2 },
        ],
        is_final: false,
    },
    State { arcs: &[Arc { label: 8, target: 4 }], is_final: false },
    State { arcs: &[], is_final: true },
    State { arcs: &[Arc { label: 39, target: 2 }], is_final: true },
    State { arcs: &[Arc { label: 9, target: 2 }], is_final: false },
];

static DFA_FACTOR: Dfa = Dfa {
    symbol: Symbol::Factor,
    name: "factor",
    states: &STATES_FACTOR,
    first: &[7, 23, 25, 24],
};

// factor_trailer: '[' expr ']' | arglist
static STATES_FACTOR_TRAILER: [State; 4] = [
    State { arcs: &[Arc { label: 35, target: 1 }, Arc { label: 40, target: 2 }], is_final: false },
    State { arcs: &[Arc { label: 8, target: 3 }], is_final: false },
    State { arcs: &[], is_final: true },
    State { arcs: &[Arc { label: 41, target: 2 }], is_final: false },
];

static DFA_FACTOR_TRAILER: Dfa = Dfa {
    symbol: Symbol::FactorTrailer,
    name: "factor_trailer",
    states: &STATES_FACTOR_TRAILER,
    first: &[7, 35],
};

// flow_stmt: for_stmt | if_stmt | while_stmt | (read_stmt | return_stmt | write_stmt) ';'
static STATES_FLOW_STMT: [State; 3] = [
    State {
        arcs: &[
            Arc { label: 42, target: 1 },
            Arc { label: 43, target: 1 },
            Arc { label: 44, target: 2 },
            Arc { label: 45, target: 2 },
            Arc { label: 46, target: 1 },
            Arc { label: 47, target: 2 },
        ],
        is_final: false,
    },
    State { arcs: &[], is_final: true },
    State { arcs: &[Arc { label: 28, target: 1 }], is_final: false },
];

static DFA_FLOW_STMT: Dfa = Dfa {
    symbol: Symbol::FlowStmt,
    name: "flow_stmt",
    states: &STATES_FLOW_STMT,
    first: &[48, 49, 50, 51, 52, 53],
};

// for_stmt: 'for' '(' NAME '=' expr ';' condition ';' NAME '=' NAME ('+'|'-') NUMBER ')' stmt
static STATES_FOR_STMT: [State; 16] = [
    State { arcs: &[Arc { label: 48, target: 1 }], is_final: false },
    State { arcs: &[Arc { label: 7, target: 2 }], is_final: false },
    State { arcs: &[Arc { label: 24, target: 3 }], is_final: false },
    State { arcs: &[Arc { label: 29, target: 4 }], is_final: false },
    State { arcs: &[Arc { label: 8, target: 5 }], is_final: false },
    State { arcs: &[Arc { label: 28, target: 6 }], is_final: false },
    State { arcs: &[Arc { label: 54, target: 7 }], is_final: false },
    State { arcs: &[Arc { label: 28, target: 8 }], is_final: false },
    State { arcs: &[Arc { label: 24, target: 9 }], is_final: false },
    State { arcs: &[Arc { label: 29, target: 10 }], is_final: false },
    State { arcs: &[Arc { label: 24, target: 11 }], is_final: false },
    State {
        arcs: &[
            Arc { label: 21, target: 12 },
            Arc { label: 22, target: 12 },
        ],
        is_final: false,
    },
    State { arcs: &[Arc { label: 25, target: 13 }], is_final: false },
    State { arcs: &[Arc { label: 9, target: 14 }], is_final: false },
    State { arcs: &[Arc { label: 13, target: 15 }], is_final: false },
    State { arcs: &[], is_final: true },
];

static DFA_FOR_STMT: Dfa = Dfa {
    symbol: Symbol::ForStmt,
    name: "for_stmt",
    states: &STATES_FOR_STMT,
    first: &[48],
};

// if_stmt: 'if' '(' condition ')' stmt ['else' stmt]
static STATES_IF_STMT: [State; 8] = [
    State { arcs: &[Arc { label: 49, target: 1 }], is_final: false },
    State { arcs: &[Arc { label: 7, target: 2 }], is_final: false },
    State { arcs: &[Arc { label: 54, target: 3 }], is_final: false },
    State { arcs: &[Arc { label: 9, target: 4 }], is_final: false },
    State { arcs: &[Arc { label: 13, target: 5 }], is_final: false },
    State { arcs: &[Arc { label: 55, target: 6 }], is_final: true },
    State { arcs: &[Arc { label: 13, target: 7 }], is_final: false },
    State { arcs: &[], is_final: true },
];

static DFA_IF_STMT: Dfa = Dfa {
    symbol: Symbol::IfStmt,
    name: "if_stmt",
    states: &STATES_IF_STMT,
    first: &[49],
};

// integer: ['+'|'-'] NUMBER
static STATES_INTEGER: [State; 3] = [
    State {
        arcs: &[
            Arc { label: 21, target: 1 },
            Arc { label: 22, target: 1 },
            Arc { label: 25, target: 2 },
        ],
        is_final: false,
    },
    State { arcs: &[Arc { label: 25, target: 2 }], is_final: false },
    State { arcs: &[], is_final: true },
];

static DFA_INTEGER: Dfa = Dfa {
    symbol: Symbol::Integer,
    name: "integer",
    states: &STATES_INTEGER,
    first: &[25, 21, 22],
};

// paralist: '(' type_name NAME (',' type_name NAME)* ')'
static STATES_PARALIST: [State; 5] = [
    State { arcs: &[Arc { label: 7, target: 1 }], is_final: false },
    State { arcs: &[Arc { label: 26, target: 2 }], is_final: false },
    State { arcs: &[Arc { label: 24, target: 3 }], is_final: false },
    State { arcs: &[Arc { label: 9, target: 4 }, Arc { label: 10, target: 1 }], is_final: false },
    State { arcs: &[], is_final: true },
];

static DFA_PARALIST: Dfa = Dfa {
    symbol: Symbol::Paralist,
    name: "paralist",
    states: &STATES_PARALIST,
    first: &[7],
};

// read_stmt: 'scanf' '(' NAME (',' NAME)* ')'
static STATES_READ_STMT: [State; 5] = [
    State { arcs: &[Arc { label: 52, target: 1 }], is_final: false },
    State { arcs: &[Arc { label: 7, target: 2 }], is_final: false },
    State { arcs: &[Arc { label: 24, target: 3 }], is_final: false },
    State { arcs: &[Arc { label: 9, target: 4 }, Arc { label: 10, target: 2 }], is_final: false },
    State { arcs: &[], is_final: true },
];

static DFA_READ_STMT: Dfa = Dfa {
    symbol: Symbol::ReadStmt,
    name: "read_stmt",
    states: &STATES_READ_STMT,
    first: &[52],
};

// return_stmt: 'return' ['(' expr ')']
static STATES_RETURN_STMT: [State; 5] = [
    State { arcs: &[Arc { label: 51, target: 1 }], is_final: false },
    State { arcs: &[Arc { label: 7, target: 2 }], is_final: true },
    State { arcs: &[Arc { label: 8, target: 3 }], is_final: false },
    State { arcs: &[Arc { label: 9, target: 4 }], is_final: false },
    State { arcs: &[], is_final: true },
];

static DFA_RETURN_STMT: Dfa = Dfa {
    symbol: Symbol::ReturnStmt,
    name: "return_stmt",
    states: &STATES_RETURN_STMT,
    first: &[51],
};

// stmt: flow_stmt | '{' stmt* '}' | NAME [stmt_trailer] ';' | ';'
static STATES_STMT: [State; 5] = [
    State {
        arcs: &[
            Arc { label: 28, target: 1 },
            Arc { label: 11, target: 2 },
            Arc { label: 24, target: 3 },
            Arc { label: 56, target: 1 },
        ],
        is_final: false,
    },
    State { arcs: &[], is_final: true },
    State { arcs: &[Arc { label: 12, target: 1 }, Arc { label: 13, target: 2 }], is_final: false },
    State { arcs: &[Arc { label: 28, target: 1 }, Arc { label: 57, target: 4 }], is_final: false },
    State { arcs: &[Arc { label: 28, target: 1 }], is_final: false },
];

static DFA_STMT: Dfa = Dfa {
    symbol: Symbol::Stmt,
    name: "stmt",
    states: &STATES_STMT,
    first: &[11, 48, 49, 50, 51, 52, 53, 24, 28],
};

// stmt_trailer: arglist | ['[' expr ']'] '=' expr
static STATES_STMT_TRAILER: [State; 6] = [
    State {
        arcs: &[
            Arc { label: 29, target: 1 },
            Arc { label: 35, target: 2 },
            Arc { label: 40, target: 3 },
        ],
        is_final: false,
    },
    State { arcs: &[Arc { label: 8, target: 3 }], is_final: false },
    State { arcs: &[Arc { label: 8, target: 4 }], is_final: false },
    State { arcs: &[], is_final: true },
    State { arcs: &[Arc { label: 41, target: 5 }], is_final: false },
    State { arcs: &[Arc { label: 29, target: 1 }], is_final: false },
];

static DFA_STMT_TRAILER: Dfa = Dfa {
    symbol: Symbol::StmtTrailer,
    name: "stmt_trailer",
    states: &STATES_STMT_TRAILER,
    first: &[7, 35, 29],
};

// subscript2: '[' NUMBER ']'
static STATES_SUBSCRIPT2: [State; 4] = [
    State { arcs: &[Arc { label: 35, target: 1 }], is_final: false },
    State { arcs: &[Arc { label: 25, target: 2 }], is_final: false },
    State { arcs: &[Arc { label: 41, target: 3 }], is_final: false },
    State { arcs: &[], is_final: true },
];

static DFA_SUBSCRIPT2: Dfa = Dfa {
    symbol: Symbol::Subscript2,
    name: "subscript2",
    states: &STATES_SUBSCRIPT2,
    first: &[35],
};

// term: factor (('*'|'/') factor)*
static STATES_TERM: [State; 2] = [
    State { arcs: &[Arc { label: 58, target: 1 }], is_final: false },
    State { arcs: &[Arc { label: 59, target: 0 }, Arc { label: 60, target: 0 }], is_final: true },
];

static DFA_TERM: Dfa = Dfa {
    symbol: Symbol::Term,
    name: "term",
    states: &STATES_TERM,
    first: &[7, 23, 25, 24],
};

// type_name: 'char' | 'int' | 'void'
static STATES_TYPE_NAME: [State; 2] = [
    State {
        arcs: &[
            Arc { label: 3, target: 1 },
            Arc { label: 5, target: 1 },
            Arc { label: 6, target: 1 },
        ],
        is_final: false,
    },
    State { arcs: &[], is_final: true },
];

static DFA_TYPE_NAME: Dfa = Dfa {
    symbol: Symbol::TypeName,
    name: "type_name",
    states: &STATES_TYPE_NAME,
    first: &[3, 5, 6],
};

// var_decl: type_name var_item (',' var_item)* ';'
static STATES_VAR_DECL: [State; 4] = [
    State { arcs: &[Arc { label: 26, target: 1 }], is_final: false },
    State { arcs: &[Arc { label: 34, target: 2 }], is_final: false },
    State { arcs: &[Arc { label: 10, target: 1 }, Arc { label: 28, target: 3 }], is_final: false },
    State { arcs: &[], is_final: true },
];

static DFA_VAR_DECL: Dfa = Dfa {
    symbol: Symbol::VarDecl,
    name: "var_decl",
    states: &STATES_VAR_DECL,
    first: &[3, 5, 6],
};

// var_item: NAME [subscript2]
static STATES_VAR_ITEM: [State; 3] = [
    State { arcs: &[Arc { label: 24, target: 1 }], is_final: false },
    State { arcs: &[Arc { label: 33, target: 2 }], is_final: true },
    State { arcs: &[], is_final: true },
];

static DFA_VAR_ITEM: Dfa = Dfa {
    symbol: Symbol::VarItem,
    name: "var_item",
    states: &STATES_VAR_ITEM,
    first: &[24],
};

// while_stmt: 'while' '(' condition ')' stmt
static STATES_WHILE_STMT: [State; 6] = [
    State { arcs: &[Arc { label: 53, target: 1 }], is_final: false },
    State { arcs: &[Arc { label: 7, target: 2 }], is_final: false },
    State { arcs: &[Arc { label: 54, target: 3 }], is_final: false },
    State { arcs: &[Arc { label: 9, target: 4 }], is_final: false },
    State { arcs: &[Arc { label: 13, target: 5 }], is_final: false },
    State { arcs: &[], is_final: true },
];

static DFA_WHILE_STMT: Dfa = Dfa {
    symbol: Symbol::WhileStmt,
    name: "while_stmt",
    states: &STATES_WHILE_STMT,
    first: &[53],
};

// write_stmt: 'printf' '(' (STRING [',' expr] | expr) ')'
static STATES_WRITE_STMT: [State; 7] = [
    State { arcs: &[Arc { label: 50, target: 1 }], is_final: false },
    State { arcs: &[Arc { label: 7, target: 2 }], is_final: false },
    State { arcs: &[Arc { label: 61, target: 3 }, Arc { label: 8, target: 4 }], is_final: false },
    State { arcs: &[Arc { label: 9, target: 5 }, Arc { label: 10, target: 6 }], is_final: false },
    State { arcs: &[Arc { label: 9, target: 5 }], is_final: false },
    State { arcs: &[], is_final: true },
    State { arcs: &[Arc { label: 8, target: 4 }], is_final: false },
];

static DFA_WRITE_STMT: Dfa = Dfa {
    symbol: Symbol::WriteStmt,
    name: "write_stmt",
    states: &STATES_WRITE_STMT,
    first: &[50],
};

static DFAS: [&Dfa; 27] = [
    &DFA_PROGRAM,
    &DFA_ARGLIST,
    &DFA_COMPOUND_STMT,
    &DFA_CONDITION,
    &DFA_CONST_DECL,
    &DFA_CONST_ITEM,
    &DFA_DECL_TRAILER,
    &DFA_DECLARATION,
    &DFA_EXPR,
    &DFA_FACTOR,
    &DFA_FACTOR_TRAILER,
    &DFA_FLOW_STMT,
    &DFA_FOR_STMT,
    &DFA_IF_STMT,
    &DFA_INTEGER,
    &DFA_PARALIST,
    &DFA_READ_STMT,
    &DFA_RETURN_STMT,
    &DFA_STMT,
    &DFA_STMT_TRAILER,
    &DFA_SUBSCRIPT2,
    &DFA_TERM,
    &DFA_TYPE_NAME,
    &DFA_VAR_DECL,
    &DFA_VAR_ITEM,
    &DFA_WHILE_STMT,
    &DFA_WRITE_STMT,
];

/// The compiled C0 grammar. The start symbol is `program`.
pub static GRAMMAR: Grammar = Grammar::new(Symbol::Program, &LABELS, &DFAS);
