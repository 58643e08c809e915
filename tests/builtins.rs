mod common;

use common::{assert_failure, assert_null, assert_value, list, output_of, run_with_input};
use luminary::interpreter::{evaluator::function::core::BUILTIN_FUNCTIONS, value::core::Value};
use pretty_assertions::assert_eq;

#[test]
fn every_builtin_is_installed() {
    for name in BUILTIN_FUNCTIONS {
        let output = output_of(&format!("print({name})"));
        assert!(output.starts_with(&format!("builtin:{name}(")), "{name} printed as {output}");
    }
}

#[test]
fn print_joins_arguments_with_spaces() {
    assert_eq!(output_of("print(\"a\", 1, [1, 2])"), "a 1 [1, 2]");
    assert_eq!(output_of("print()"), "");
    assert_eq!(output_of("print(0.5, -3, null)"), "0.5 -3 null");
    assert_eq!(output_of("print(\"x\"); print(\"y\")"), "xy");
}

#[test]
fn println_ends_the_line() {
    assert_eq!(output_of("println(\"x\"); println()"), "x\n\n");
    assert_eq!(output_of("for i = 1 : 3 -> println(i)"), "1\n2\n3\n");
}

#[test]
fn print_yields_no_value() {
    assert_null("x = print(\"\"); x");
}

#[test]
fn functions_print_their_signature() {
    assert_eq!(output_of("print(func add(a, b) -> a + b)"), "<function add(a, b)>");
    assert_eq!(output_of("print(func () -> 1)"), "<function <anonymous>()>");
    assert_eq!(output_of("print(len)"), "builtin:len(value)");
    assert_eq!(output_of("print(replace)"), "builtin:replace(text, old, new)");
}

#[test]
fn scan_reads_a_line() {
    let (result, output) =
        run_with_input("name = scan(\"Name? \"); println(\"Hello, \" + name)", "Ada\nignored\n");
    assert!(result.is_ok());
    assert_eq!(output, "Name? Hello, Ada\n");
}

#[test]
fn scan_uses_a_default_prompt() {
    let (result, output) = run_with_input("scan()", "x\r\n");
    assert_eq!(result.unwrap(), Some(Value::string("x")));
    assert_eq!(output, "> ");
}

#[test]
fn scan_at_end_of_input_is_empty() {
    let (result, _) = run_with_input("[scan(), scan()]", "only\n");
    assert_eq!(result.unwrap(),
               Some(Value::list(vec![Value::string("only"), Value::string("")])));
}

#[test]
fn scan_prompt_must_be_a_string() {
    let err = assert_failure("scan(5)");
    assert_eq!(err.details, "scan expected a string but got a number");
}

#[test]
fn len_counts_elements_and_bytes() {
    assert_value("len([1, 2, 3])", 3.0);
    assert_value("len([])", 0.0);
    assert_value("len(\"hello\")", 5.0);
    assert_value("len(\"héllo\")", 6.0);
    assert_eq!(assert_failure("len(5)").details,
               "len expected a list or a string but got a number");
}

#[test]
fn string_builtins() {
    assert_value("trim(\"  hi \\t\")", "hi");
    assert_value("upper(\"abc\")", "ABC");
    assert_value("lower(\"MiXeD\")", "mixed");
    assert_value("replace(\"a-b-c\", \"-\", \"+\")", "a+b+c");
    assert_value("replace(\"aaa\", \"b\", \"c\")", "aaa");
    assert_eq!(assert_failure("upper(1)").details, "upper expected a string but got a number");
    assert_eq!(assert_failure("replace(\"a\", 1, \"b\")").details,
               "replace expected a string but got a number");
}

#[test]
fn list_builtins_return_new_lists() {
    assert_value("a = [1]; b = append(a, 2, 3); [a, b]",
                 Value::list(vec![list(&[1.0]), list(&[1.0, 2.0, 3.0])]));
    assert_value("prepend([1], 2, 3)", list(&[2.0, 3.0, 1.0]));
    assert_value("a = [1, 2, 3]; shift(a); a", list(&[1.0, 2.0, 3.0]));
    assert_value("shift([1, 2, 3])", list(&[2.0, 3.0]));
    assert_value("pop([1, 2, 3])", list(&[1.0, 2.0]));
    assert_value("pop([1])", list(&[]));
}

#[test]
fn list_builtin_errors() {
    assert_eq!(assert_failure("shift([])").details, "shift can't be used on an empty list");
    assert_eq!(assert_failure("pop([])").details, "pop can't be used on an empty list");
    assert_eq!(assert_failure("append(1, 2)").details, "append expected a list but got a number");
    assert_eq!(assert_failure("pop(\"ab\")").details, "pop expected a list but got a string");
}

#[test]
fn arity_is_checked() {
    assert_eq!(assert_failure("len()").details, "len expected 1 argument but got 0");
    assert_eq!(assert_failure("len(1, 2)").details, "len expected 1 argument but got 2");
    assert_eq!(assert_failure("replace(\"a\")").details,
               "replace expected 3 arguments but got 1");
    assert_eq!(assert_failure("append([1])").details,
               "append expected at least 2 arguments but got 1");
    assert_eq!(assert_failure("scan(\"a\", \"b\")").details,
               "scan expected 0 or 1 arguments but got 2");
}

#[test]
fn builtins_are_ordinary_values() {
    assert_value("shout = upper; shout(\"hey\")", "HEY");
    assert_value("len = 5; len", 5.0);
    assert_value("apply = func (f, x) -> f(x); apply(len, [1, 2])", 2.0);
}
