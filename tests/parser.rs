use luminary::{
    ast::{BinaryOperator, Node, UnaryOperator},
    error::{Error, ErrorKind},
    interpreter::{lexer::tokenize, parser::core::parse},
};
use pretty_assertions::assert_eq;

fn statements(src: &str) -> Vec<Node> {
    let tokens = tokenize(src, "test.lum").unwrap_or_else(|e| panic!("lexing failed: {e}"));
    match parse(&tokens) {
        Ok(Node::Block { statements, .. }) => statements,
        Ok(other) => panic!("expected a program block, got {other:?}"),
        Err(e) => panic!("parsing failed: {e}"),
    }
}

fn single(src: &str) -> Node {
    let mut nodes = statements(src);
    assert_eq!(nodes.len(), 1, "expected exactly one statement in {src:?}");
    nodes.remove(0)
}

fn syntax_error(src: &str) -> Error {
    let tokens = tokenize(src, "test.lum").unwrap_or_else(|e| panic!("lexing failed: {e}"));
    let err = parse(&tokens).expect_err("parsing should fail");
    assert_eq!(err.kind, ErrorKind::InvalidSyntax);
    err
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let Node::BinaryOp { op: BinaryOperator::Add, left, right, span } = single("1 + 2 * 3") else {
        panic!("expected an addition");
    };
    assert!(matches!(*left, Node::Number { value, .. } if value == 1.0));
    assert!(matches!(*right, Node::BinaryOp { op: BinaryOperator::Mul, .. }));
    assert_eq!((span.start.col, span.end.col), (0, 9));
}

#[test]
fn comparison_chains_fold_left() {
    let Node::BinaryOp { op: BinaryOperator::Sub, left, .. } = single("10 - 4 - 3") else {
        panic!("expected a subtraction");
    };
    assert!(matches!(*left, Node::BinaryOp { op: BinaryOperator::Sub, .. }));
}

#[test]
fn logical_operators_bind_loosest() {
    let Node::BinaryOp { op: BinaryOperator::Or, left, right, .. } = single("a and b or not c") else {
        panic!("expected an 'or'");
    };
    assert!(matches!(*left, Node::BinaryOp { op: BinaryOperator::And, .. }));
    assert!(matches!(*right, Node::UnaryOp { op: UnaryOperator::Not, .. }));
}

#[test]
fn unary_minus_binds_tighter_than_power() {
    let Node::BinaryOp { op: BinaryOperator::Pow, left, .. } = single("-2 ^ 2") else {
        panic!("expected a power");
    };
    assert!(matches!(*left, Node::UnaryOp { op: UnaryOperator::Negate, .. }));
}

#[test]
fn ternary_nests_to_the_right() {
    let Node::Ternary { right, .. } = single("a ? b : c ? d : e") else {
        panic!("expected a ternary");
    };
    assert!(matches!(*right, Node::Ternary { .. }));
}

#[test]
fn assignments() {
    let Node::VarAssign { name, value, .. } = single("a = b = 1") else {
        panic!("expected an assignment");
    };
    assert_eq!(name, "a");
    assert!(matches!(*value, Node::VarAssign { ref name, .. } if name == "b"));

    assert!(matches!(single("a[0] = 1"), Node::ElementAssign { ref name, .. } if name == "a"));
    assert!(matches!(single("a[b[0]] = 1"), Node::ElementAssign { .. }));
}

#[test]
fn element_access_is_not_an_assignment() {
    assert!(matches!(single("a[0]"), Node::ElementAccess { to: None, .. }));
    assert!(matches!(single("a[0] == 1"),
                     Node::BinaryOp { op: BinaryOperator::Equal, .. }));
    assert!(matches!(single("x[1:2]"), Node::ElementAccess { to: Some(_), .. }));
    assert!(matches!(single("a"), Node::VarAccess { .. }));
}

#[test]
fn postfix_operations_chain() {
    let Node::FunctionCall { callee, arguments, .. } = single("f(1)(2, 3)") else {
        panic!("expected a call");
    };
    assert_eq!(arguments.len(), 2);
    assert!(matches!(*callee, Node::FunctionCall { .. }));

    let Node::ElementAccess { target, .. } = single("rows[0][1]") else {
        panic!("expected an element access");
    };
    assert!(matches!(*target, Node::ElementAccess { .. }));
}

#[test]
fn list_literals() {
    let Node::List { elements, span } = single("[1, \"two\", [3]]") else {
        panic!("expected a list");
    };
    assert_eq!(elements.len(), 3);
    assert!(matches!(elements[2], Node::List { .. }));
    assert_eq!((span.start.col, span.end.col), (0, 15));

    assert!(matches!(single("[]"), Node::List { ref elements, .. } if elements.is_empty()));
}

#[test]
fn if_with_elif_and_else_if() {
    let Node::If { cases, else_case, .. } = single("if a -> 1 elif b -> 2 else if c -> 3") else {
        panic!("expected an if");
    };
    assert_eq!(cases.len(), 2);
    let Some(else_case) = else_case else {
        panic!("expected an else branch");
    };
    assert!(matches!(*else_case, Node::If { ref else_case, .. } if else_case.is_none()));
}

#[test]
fn loops() {
    let Node::For { var, step, .. } = single("for i = 1 : 10 by 2 { }") else {
        panic!("expected a for loop");
    };
    assert_eq!(var, "i");
    assert!(step.is_some());
    assert!(matches!(single("for i = 1 to 3 -> i"), Node::For { step: None, .. }));

    let Node::Each { item, list, .. } = single("each x in [1, 2] -> x") else {
        panic!("expected an each loop");
    };
    assert_eq!(item, "x");
    assert!(matches!(*list, Node::List { .. }));

    assert!(matches!(single("while x < 3 { x = x + 1 }"), Node::While { .. }));
}

#[test]
fn function_definitions() {
    let Node::FunctionDef(def) = single("func (x) { x }") else {
        panic!("expected a function definition");
    };
    assert_eq!(def.name, None);
    assert_eq!(def.params, ["x"]);
    assert!(!def.is_expression_body);

    let Node::FunctionDef(def) = single("func none() -> null") else {
        panic!("expected a function definition");
    };
    assert!(def.params.is_empty());
    assert!(matches!(def.body, Node::Null { .. }));
}

#[test]
fn return_break_and_continue() {
    let nodes = statements("return; return 1; break; continue");
    assert!(matches!(nodes[0], Node::Return { value: None, .. }));
    assert!(matches!(nodes[1], Node::Return { value: Some(_), .. }));
    assert!(matches!(nodes[2], Node::Break { .. }));
    assert!(matches!(nodes[3], Node::Continue { .. }));
}

#[test]
fn statements_are_separated_by_newlines_or_semicolons() {
    assert_eq!(statements("a = 1\nb = 2;; c").len(), 3);
    assert!(statements("").is_empty());
    assert!(statements(";;").is_empty());
    assert!(statements("\n\n").is_empty());

    let nodes = statements("x = 5\n-1\nx");
    assert_eq!(nodes.len(), 3);
    assert!(matches!(nodes[1], Node::UnaryOp { op: UnaryOperator::Negate, .. }));

    let nodes = statements("x = 1\n[1, 2]");
    assert_eq!(nodes.len(), 2);
    assert!(matches!(nodes[1], Node::List { .. }));

    let nodes = statements("g = 2\n(3)");
    assert_eq!(nodes.len(), 2);
    assert!(matches!(nodes[1], Node::Number { value, .. } if value == 3.0));
}

#[test]
fn expressions_continue_across_lines() {
    assert!(matches!(single("total = 1 +\n  2"), Node::VarAssign { .. }));
    assert!(matches!(single("f(\n  1,\n  2\n)"),
                     Node::FunctionCall { ref arguments, .. } if arguments.len() == 2));
    assert!(matches!(single("[\n  1,\n  -2\n]"),
                     Node::List { ref elements, .. } if elements.len() == 2));
    assert!(matches!(single("x\n  ? 1\n  : 2"), Node::Ternary { .. }));
    assert!(matches!(single("if a -> 1\nelif b -> 2\nelse -> 3"),
                     Node::If { ref cases, else_case: Some(_), .. } if cases.len() == 2));
    assert!(matches!(single("while x\n{\n  x = x - 1\n}"), Node::While { .. }));
}

#[test]
fn return_at_the_end_of_a_line_has_no_value() {
    let nodes = statements("return\n(1)");
    assert_eq!(nodes.len(), 2);
    assert!(matches!(nodes[0], Node::Return { value: None, .. }));
}

#[test]
fn missing_expression() {
    let err = syntax_error("x = = 1");
    assert_eq!(err.details, "Expected an expression, found '='");
    let span = err.span.unwrap();
    assert_eq!((span.start.line, span.start.col), (1, 4));

    assert_eq!(syntax_error("1 +").details, "Expected an expression, found end of input");
    assert_eq!(syntax_error("{ 1 }").details, "Expected an expression, found '{'");
}

#[test]
fn unclosed_delimiters() {
    assert_eq!(syntax_error("(1 + 2").details, "Expected ')', found end of input");
    assert_eq!(syntax_error("[1, 2").details, "Expected ',' or ']', found end of input");
    assert_eq!(syntax_error("f(1 2)").details, "Expected ',' or ')', found '2'");
    assert_eq!(syntax_error("while 1 { 1").details, "Expected '}', found end of input");
}

#[test]
fn malformed_control_flow() {
    assert_eq!(syntax_error("if 1 2").details, "Expected '{' or '->', found '2'");
    assert_eq!(syntax_error("for i 1 : 2 { }").details, "Expected '=', found '1'");
    assert_eq!(syntax_error("for i = 1, 2 { }").details, "Expected ':' or 'to', found ','");
    assert_eq!(syntax_error("each x of y { }").details, "Expected 'in', found 'of'");
    assert_eq!(syntax_error("1 ? 2 3").details, "Expected ':', found '3'");
}

#[test]
fn malformed_functions() {
    assert_eq!(syntax_error("func (a, 1) -> a").details, "Expected an identifier, found '1'");
    assert_eq!(syntax_error("func f x -> x").details, "Expected '(', found 'x'");
}
