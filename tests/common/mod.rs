#![allow(dead_code)]

use std::{
    cell::RefCell,
    io::{self, Cursor, Write},
    rc::Rc,
};

use luminary::{
    error::Error,
    interpreter::{
        evaluator::{context::Context, core::Interpreter},
        value::core::Value,
    },
    run_source,
};
use pretty_assertions::assert_eq;

/// An output stream the test keeps a handle to.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `src` with `input` as standard input, returning the result and
/// everything written to the output.
pub fn run_with_input(src: &str, input: &str) -> (Result<Option<Value>, Error>, String) {
    let output = SharedBuffer::default();
    let mut interpreter = Interpreter::with_io(Box::new(Cursor::new(input.as_bytes().to_vec())),
                                               Box::new(output.clone()));
    let context = Context::global();
    let result = run_source(src, "test.lum", &mut interpreter, &context);
    (result, output.contents())
}

pub fn run(src: &str) -> (Result<Option<Value>, Error>, String) {
    run_with_input(src, "")
}

pub fn eval(src: &str) -> Result<Option<Value>, Error> {
    run(src).0
}

pub fn output_of(src: &str) -> String {
    let (result, output) = run(src);
    if let Err(e) = result {
        panic!("Script failed: {e}");
    }
    output
}

pub fn assert_success(src: &str) -> Option<Value> {
    eval(src).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

pub fn assert_value(src: &str, expected: impl Into<Value>) {
    assert_eq!(assert_success(src), Some(expected.into()), "source: {src}");
}

pub fn assert_null(src: &str) {
    let value = assert_success(src).unwrap_or_else(|| panic!("no value for: {src}"));
    assert!(value.is_null(), "expected null for {src}, got {value}");
}

pub fn assert_failure(src: &str) -> Error {
    match eval(src) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail"),
        Err(e) => e,
    }
}

pub fn list(values: &[f64]) -> Value {
    Value::list(values.iter().copied().map(Value::number).collect())
}
