use crate::{
    error::Error,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            function::core::expect_string,
        },
        position::Span,
        value::core::{Value, ValueKind},
    },
    util::num::usize_to_f64_checked,
};

/// Number of elements of a list, or of UTF-8 bytes of a string.
///
/// # Errors
/// Fails for any other kind of value.
pub fn len(_: &mut Interpreter, args: &[Value], span: &Span) -> EvalResult<Option<Value>> {
    let value = &args[0];
    let count = match &value.kind {
        ValueKind::List(list) => list.len(),
        ValueKind::String(s) => s.len(),
        _ => {
            return Err(Error::runtime(format!("len expected a list or a string but got a {}",
                                              value.type_name()),
                                      value.span.clone().or_else(|| Some(span.clone()))));
        },
    };
    let count = usize_to_f64_checked(count, Error::runtime("Length too large", Some(span.clone())))?;
    Ok(Some(Value::number(count)))
}

/// Applies `f` to the single string argument of builtin `name`.
pub fn transform(name: &str,
                 args: &[Value],
                 span: &Span,
                 f: fn(&str) -> String)
                 -> EvalResult<Option<Value>> {
    let text = expect_string(name, &args[0], span)?;
    Ok(Some(Value::string(f(text))))
}

/// `replace(text, old, new)`: replaces every occurrence of `old`.
pub fn replace(_: &mut Interpreter, args: &[Value], span: &Span) -> EvalResult<Option<Value>> {
    let text = expect_string("replace", &args[0], span)?;
    let old = expect_string("replace", &args[1], span)?;
    let new = expect_string("replace", &args[2], span)?;
    Ok(Some(Value::string(text.replace(old, new))))
}
