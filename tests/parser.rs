//! Parser integration tests
//!
//! These parse whole C0 programs through the public entry point and
//! check the concrete trees that come out:
//! - tree shape and node locations for representative programs
//! - the rendered tree format
//! - every nonterminal's children spell an accepting path through its
//!   automaton
//! - error messages for the common failure modes

use c0::{parse, tokenize, Node, ParseError, Symbol, GRAMMAR};

/// Resolve the label a node carries when it sits in a children list.
fn child_label(node: &Node) -> u16 {
    if node.is_terminal() {
        GRAMMAR
            .classify(node.symbol, &node.value)
            .expect("terminal child classifies")
    } else {
        GRAMMAR
            .labels()
            .iter()
            .position(|label| label.symbol == node.symbol && label.text.is_none())
            .expect("nonterminal child has a label") as u16
    }
}

/// Walk the tree and check each nonterminal's children against its
/// automaton: the child labels must trace arcs from state 0 to a final
/// state.
fn assert_accepting_paths(node: &Node) {
    if node.is_terminal() {
        return;
    }
    let dfa = GRAMMAR.dfa_for(node.symbol).unwrap();
    let mut state = 0usize;
    for child in &node.children {
        let label = child_label(child);
        let arc = dfa.states[state]
            .arcs
            .iter()
            .find(|arc| arc.label == label)
            .unwrap_or_else(|| {
                panic!("no arc for label {} from {} state {}", label, dfa.name, state)
            });
        state = arc.target as usize;
    }
    assert!(
        dfa.states[state].is_final,
        "{} stops in non-final state {}",
        dfa.name, state
    );
    for child in &node.children {
        assert_accepting_paths(child);
    }
}

#[test]
fn test_minimal_program() {
    let tree = parse("void main() {}").unwrap();
    insta::assert_snapshot!(tree.tree(), @r#"
    (program:
      (declaration:
        (type_name: (NAME: void)),
        (NAME: main),
        (OP: '('),
        (OP: ')'),
        (compound_stmt:
          (OP: '{'),
          (OP: '}'))),
      (ENDMARKER))
    "#);
}

#[test]
fn test_assignment_statement() {
    // single-child productions print inline, so the term/factor chain
    // around each operand collapses onto one line
    let tree = parse("void main() { x = 1 + 2; }").unwrap();
    insta::assert_snapshot!(tree.tree(), @r#"
    (program:
      (declaration:
        (type_name: (NAME: void)),
        (NAME: main),
        (OP: '('),
        (OP: ')'),
        (compound_stmt:
          (OP: '{'),
          (stmt:
            (NAME: x),
            (stmt_trailer:
              (OP: '='),
              (expr:
                (term: (factor: (NUMBER: 1))),
                (OP: '+'),
                (term: (factor: (NUMBER: 2))))),
            (OP: ';')),
          (OP: '}'))),
      (ENDMARKER))
    "#);
}

#[test]
fn test_full_program_structure() {
    let source = "\
const int limit = 10;
int count[4];

void main() {
  int i;
  for (i = 0; i < limit; i = i + 1) {
    count[0] = count[0] + i;
  }
  if (count[0] >= limit) {
    printf(\"big: \", count[0]);
  } else {
    printf(\"small\");
  }
  while (i > 0) {
    i = i - 1;
  }
  return;
}";
    let tree = parse(source).unwrap();

    let top: Vec<Symbol> = tree.children.iter().map(|c| c.symbol).collect();
    assert_eq!(
        top,
        vec![
            Symbol::ConstDecl,
            Symbol::Declaration,
            Symbol::Declaration,
            Symbol::EndMarker,
        ]
    );

    // the main declaration: type_name 'main' '(' ')' compound_stmt
    let main = &tree.children[2];
    assert_eq!(main.location.line, 4);
    assert_eq!(main.children.len(), 5);
    assert_eq!(main.children[1].value, "main");
    let body = main.last_child().unwrap();
    assert_eq!(body.symbol, Symbol::CompoundStmt);
    assert_eq!(body.location.line, 4);
    assert_eq!(body.location.column, 12);

    // braces, one var_decl, then the four statements
    assert_eq!(body.children.len(), 7);
    assert_eq!(body.children[1].symbol, Symbol::VarDecl);
    let stmt_lines: Vec<u32> = body.children[2..6]
        .iter()
        .map(|stmt| {
            assert_eq!(stmt.symbol, Symbol::Stmt);
            stmt.location.line
        })
        .collect();
    assert_eq!(stmt_lines, vec![6, 9, 14, 17]);

    assert_accepting_paths(&tree);
}

#[test]
fn test_leaves_reproduce_the_token_stream() {
    let source = "int x;\nvoid main() { scanf(x); printf(x * 2); }";
    let tokens = tokenize(source);
    let tree = parse(source).unwrap();

    let leaves: Vec<(Symbol, String)> = tree
        .iter()
        .filter(|node| node.is_terminal())
        .map(|node| (node.symbol, node.value.clone()))
        .collect();
    let stream: Vec<(Symbol, String)> = tokens
        .into_iter()
        .map(|token| (token.symbol, token.text))
        .collect();
    assert_eq!(leaves, stream);
}

#[test]
fn test_missing_right_operand() {
    let err = parse("void main() { x = 1 + ; }").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected token ';' at 1:22 while parsing expr (expected '(', CHAR, NUMBER or NAME)"
    );
}

#[test]
fn test_unclassifiable_token() {
    // the scanner accepts ':' but no production uses it
    let err = parse("void main() { x : 1; }").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected token ':' at 1:16 while parsing stmt (expected ';', '(', '[' or '=')"
    );
}

#[test]
fn test_error_token_aborts_the_parse() {
    let err = parse("void main() { x = !2; }").unwrap_err();
    assert_eq!(err.to_string(), "error token '!' at 1:18");
}

#[test]
fn test_truncated_program() {
    // the endmarker arrives while the body is still open
    let err = parse("void main() {").unwrap_err();
    match err {
        ParseError::UnexpectedToken {
            production,
            ref expected,
            ..
        } => {
            assert_eq!(production, "compound_stmt");
            assert!(expected.contains(&"'}'".to_string()));
            assert!(expected.contains(&"NAME".to_string()));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_statement_variants_parse() {
    let sources = [
        "void main() { ; }",
        "void main() { { } }",
        "void main() { x = y[3] / 2; }",
        "void main() { if (x == 0) x = 1; else x = 2; }",
        "void main() { while (x != 0) x = x - 1; }",
        "void main() { for (i = 0; i <= 9; i = i + 1) printf(i); }",
        "void main() { scanf(a, b); }",
        "void main() { return (x + 1); }",
        "void main() { x = f(1); y = g(x, 'A'); }",
        "void main() { f(1); }",
        "const char c = 'x';\nvoid main() { printf(c); }",
        "int grid[100];\nchar tag;\nvoid main() { grid[0] = 1; }",
        "void copy(int src) { dst = src; }\nvoid main() { copy(1); }",
    ];
    for source in sources {
        let tree = parse(source)
            .unwrap_or_else(|e| panic!("failed to parse {:?}: {}", source, e));
        assert_accepting_paths(&tree);
    }
}
