use crate::{
    error::Error,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            function::core::expect_list,
        },
        position::Span,
        value::core::Value,
    },
};

/// `append(list, ...values)`: a new list with `values` added at the end.
/// The original list is left unchanged.
pub fn append(_: &mut Interpreter, args: &[Value], span: &Span) -> EvalResult<Option<Value>> {
    let mut elements = expect_list("append", &args[0], span)?.elements();
    elements.extend_from_slice(&args[1..]);
    Ok(Some(Value::list(elements)))
}

/// `prepend(list, ...values)`: a new list with `values` added at the front,
/// in argument order.
pub fn prepend(_: &mut Interpreter, args: &[Value], span: &Span) -> EvalResult<Option<Value>> {
    let list = expect_list("prepend", &args[0], span)?;
    let mut elements = args[1..].to_vec();
    elements.extend(list.elements());
    Ok(Some(Value::list(elements)))
}

/// `shift(list)`: a new list without the first element.
///
/// # Errors
/// Fails on an empty list.
pub fn shift(_: &mut Interpreter, args: &[Value], span: &Span) -> EvalResult<Option<Value>> {
    let elements = non_empty("shift", &args[0], span)?;
    Ok(Some(Value::list(elements[1..].to_vec())))
}

/// `pop(list)`: a new list without the last element.
///
/// # Errors
/// Fails on an empty list.
pub fn pop(_: &mut Interpreter, args: &[Value], span: &Span) -> EvalResult<Option<Value>> {
    let elements = non_empty("pop", &args[0], span)?;
    Ok(Some(Value::list(elements[..elements.len() - 1].to_vec())))
}

fn non_empty(name: &str, value: &Value, span: &Span) -> EvalResult<Vec<Value>> {
    let elements = expect_list(name, value, span)?.elements();
    if elements.is_empty() {
        return Err(Error::runtime(format!("{name} can't be used on an empty list"),
                                  value.span.clone().or_else(|| Some(span.clone()))));
    }
    Ok(elements)
}
