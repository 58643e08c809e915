mod common;

use common::{assert_failure, assert_value, run};
use luminary::error::ErrorKind;
use pretty_assertions::assert_eq;

fn runtime_error(src: &str) -> String {
    let err = assert_failure(src);
    assert_eq!(err.kind, ErrorKind::Runtime, "unexpected error kind for {src}: {err}");
    err.details
}

fn operation_error(src: &str) -> String {
    let err = assert_failure(src);
    assert_eq!(err.kind, ErrorKind::InvalidSyntax, "unexpected error kind for {src}: {err}");
    err.details
}

#[test]
fn errors_render_kind_details_and_location() {
    let err = assert_failure("x = 1\ny = x / 0");
    assert_eq!(err.to_string(),
               "\x1b[31mError(Runtime Error): Can't divide by zero.\nFile: test.lum - Line: 2 - Col: 8:9");

    let err = assert_failure("x = $");
    assert_eq!(err.to_string(),
               "\x1b[31mError(Illigal Char): '$'.\nFile: test.lum - Line: 1 - Col: 4:5");

    let err = assert_failure("[1] - 2");
    assert_eq!(err.to_string(),
               "\x1b[31mError(Invalid Syntax): Invalid '-' operation on a list with a number.\nFile: test.lum - Line: 1 - Col: 0:3");
}

#[test]
fn division_by_zero_points_at_the_divisor() {
    let err = assert_failure("10 / 0");
    assert_eq!(err.details, "Can't divide by zero");
    let span = err.span.unwrap();
    assert_eq!((span.start.col, span.end.col), (5, 6));

    assert_eq!(runtime_error("10 % 0"), "Can't divide by zero");
    assert_eq!(runtime_error("d = 0; 1 / d"), "Can't divide by zero");
}

#[test]
fn index_errors() {
    let err = assert_failure("[1, 2, 3][5]");
    assert_eq!(err.details, "Index out of range (5) with length of 3");
    let span = err.span.unwrap();
    assert_eq!((span.start.col, span.end.col), (0, 12));

    assert_eq!(runtime_error("[1, 2, 3][1:5]"), "Index out of range (5) with length of 3");
    assert_eq!(runtime_error("[1, 2, 3][3:3]"), "Index out of range (3) with length of 3");
    assert_eq!(runtime_error("[1, 2][-1]"), "Index out of range (-1) with length of 2");
    assert_eq!(runtime_error("[][0]"), "Index out of range (0) with length of 0");
    assert_eq!(runtime_error("[1, 2, 3][2:1]"), "Invalid slice range (2:1)");
    assert_eq!(runtime_error("[1, 2, 3](7)"), "Index out of range (7) with length of 3");
    assert_eq!(runtime_error("a = [1]; a[3] = 0"), "Index out of range (3) with length of 1");
}

#[test]
fn indexing_needs_a_list_and_a_number() {
    assert_eq!(runtime_error("[1][\"a\"]"), "Expected a number for the index");
    assert_eq!(runtime_error("[1, 2][0:null]"), "Expected a number for the to-index");
    assert_eq!(runtime_error("5[0]"), "Can't index into a number");
    assert_eq!(runtime_error("x = 5; x[0] = 1"), "Expected a list to assign it's element value");
    assert_eq!(runtime_error("missing[0] = 1"), "Expected a list to assign it's element value");
    assert_eq!(runtime_error("[1, 2](\"a\")"), "Expected a number to index a list");
    assert_eq!(runtime_error("[1, 2](0, 1, 2)"),
               "A list takes an index or start & end indexes, got 3 arguments");
}

#[test]
fn unsupported_operations() {
    assert_eq!(operation_error("\"a\" - 1"), "Invalid '-' operation on a string with a number");
    assert_eq!(operation_error("null + 1"), "Invalid '+' operation on a null with a number");
    assert_eq!(operation_error("1 + \"a\""), "Invalid '+' operation on a number with a string");
    assert_eq!(operation_error("[1] + 2"), "Only lists can be concatenated with a list");
    assert_eq!(operation_error("-[1]"), "Invalid '*' operation on a list with a number");
    assert_eq!(operation_error("2 ^ \"x\""), "Invalid '^' operation on a number with a string");
    assert_value("-\"ab\"", "");
}

#[test]
fn comparisons_need_matching_types() {
    assert_eq!(runtime_error("1 < \"a\""), "Can't compare number with string using '<'");
    assert_eq!(runtime_error("[1] >= [1]"), "Can't compare list with list using '>='");
    assert_eq!(runtime_error("null > 0"), "Can't compare null with number using '>'");
}

#[test]
fn calling_non_functions() {
    assert_eq!(runtime_error("5()"), "Can't call a number");
    assert_eq!(runtime_error("x = null; x(1)"), "Can't call a null");
    assert_eq!(runtime_error("\"f\"()"), "Can't call a string");
}

#[test]
fn argument_count_mismatch() {
    assert_eq!(runtime_error("func f(a) -> a; f(1, 2)"), "f expected 1 argument(s) but got 2");
    assert_eq!(runtime_error("func g(a, b) -> a; g()"), "g expected 2 argument(s) but got 0");
    assert_eq!(runtime_error("(func (a, b) -> a)(1)"),
               "<anonymous> expected 2 argument(s) but got 1");
}

#[test]
fn loop_control_outside_of_a_loop() {
    assert_eq!(runtime_error("break"), "'break' outside of a loop");
    assert_eq!(runtime_error("continue"), "'continue' outside of a loop");
    assert_eq!(runtime_error("func f() { break }; for i = 1 : 3 { f() }"),
               "'break' outside of a loop");
    assert_eq!(runtime_error("func f() -> continue; f()"), "'continue' outside of a loop");
}

#[test]
fn loop_arguments() {
    assert_eq!(runtime_error("for i = \"a\" : 3 { }"), "Expected a number after '='");
    assert_eq!(runtime_error("for i = 1 : \"b\" { }"), "Expected a number after ':'");
    assert_eq!(runtime_error("for i = 1 to 3 by null { }"), "Expected a number after 'by'");
    assert_eq!(runtime_error("for i = 1 : 3 by 0 { }"), "The step of a 'for' loop can't be zero");
    assert_eq!(runtime_error("each x in 5 { }"), "Expected a list in 'each'");
    assert_eq!(runtime_error("each x in \"abc\" { }"), "Expected a list in 'each'");
}

#[test]
fn errors_inside_functions_propagate() {
    let err = assert_failure("func inner() -> 1 / 0\nfunc outer() -> inner()\nouter()");
    assert_eq!(err.details, "Can't divide by zero");
    assert_eq!(err.span.unwrap().start.line, 1);

    assert_eq!(runtime_error("each n in [1, 2] { if n == 2 -> [][n] }"),
               "Index out of range (2) with length of 0");
}

#[test]
fn output_before_an_error_is_kept() {
    let (result, output) = run("print(\"before\"); 1 / 0; print(\"after\")");
    assert!(result.is_err());
    assert_eq!(output, "before");
}

#[test]
fn syntax_errors_stop_before_evaluation() {
    let (result, output) = run("print(\"never\")\nx = = 2");
    let err = result.unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidSyntax);
    assert_eq!(output, "");
}
