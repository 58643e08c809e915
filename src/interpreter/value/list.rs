use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::EvalResult,
        position::Span,
        value::core::{Value, ValueKind},
    },
    util::{num::f64_to_index, stack::ensure_sufficient_stack},
};

/// Ordered list storage shared between every value that refers to it.
///
/// Element assignment mutates the storage in place, so every holder of the
/// list sees the change. Concatenation, `append` and friends build a new
/// list instead.
#[derive(Debug, Clone, Default)]
pub struct List {
    elements: Rc<RefCell<Vec<Value>>>,
}

impl List {
    #[must_use]
    pub fn new(elements: Vec<Value>) -> Self {
        Self { elements: Rc::new(RefCell::new(elements)) }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }

    /// A copy of the current elements.
    #[must_use]
    pub fn elements(&self) -> Vec<Value> {
        self.elements.borrow().clone()
    }

    /// The element currently stored at `index`, if any.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<Value> {
        self.elements.borrow().get(index).cloned()
    }

    /// A new list holding the elements of `self` followed by those of
    /// `other`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut elements = self.elements();
        elements.extend(other.elements());
        Self::new(elements)
    }

    /// Returns the element at `index`.
    ///
    /// The index is truncated toward zero.
    ///
    /// # Errors
    /// `Index out of range (<index>) with length of <len>` when the index is
    /// negative or past the end.
    pub fn get(&self, index: f64, span: &Span) -> EvalResult<Value> {
        let elements = self.elements.borrow();
        f64_to_index(index).and_then(|i| elements.get(i))
                           .cloned()
                           .ok_or_else(|| out_of_range(index, elements.len(), span))
    }

    /// Returns a new list with the elements in `[start, end)`.
    ///
    /// `start` must be a valid index, `end` may equal the length, and
    /// `start` may not exceed `end`.
    ///
    /// # Errors
    /// An out of range error naming the first offending bound.
    pub fn slice(&self, start: f64, end: f64, span: &Span) -> EvalResult<Value> {
        let elements = self.elements.borrow();
        let len = elements.len();
        let from = f64_to_index(start).filter(|&i| i < len)
                                      .ok_or_else(|| out_of_range(start, len, span))?;
        let to = f64_to_index(end).filter(|&i| i <= len)
                                  .ok_or_else(|| out_of_range(end, len, span))?;
        if from > to {
            return Err(Error::runtime(format!("Invalid slice range ({}:{})",
                                              Value::number(start.trunc()),
                                              Value::number(end.trunc())),
                                      Some(span.clone())));
        }
        Ok(Value::list(elements[from..to].to_vec()))
    }

    /// Replaces the element at `index` in place.
    ///
    /// # Errors
    /// An out of range error when `index` does not name an existing element.
    pub fn set(&self, index: f64, value: Value, span: &Span) -> EvalResult<()> {
        let mut elements = self.elements.borrow_mut();
        let len = elements.len();
        let slot = f64_to_index(index).and_then(|i| elements.get_mut(i))
                                      .ok_or_else(|| out_of_range(index, len, span))?;
        *slot = value;
        Ok(())
    }

    /// Calls the list like a function: one argument indexes, two arguments
    /// slice.
    ///
    /// # Errors
    /// Fails for non-number arguments, any other argument count, or an out
    /// of range index.
    pub fn call(&self, arguments: &[Value], span: &Span) -> EvalResult<Value> {
        let numbers = arguments.iter()
                               .map(|arg| {
                                   arg.as_number().ok_or_else(|| {
                                       Error::runtime("Expected a number to index a list",
                                                      arg.span.clone().or_else(|| Some(span.clone())))
                                   })
                               })
                               .collect::<EvalResult<Vec<_>>>()?;
        match numbers.as_slice() {
            [index] => self.get(*index, span),
            [start, end] => self.slice(*start, *end, span),
            _ => Err(Error::runtime(format!("A list takes an index or start & end indexes, got {} arguments",
                                            arguments.len()),
                                    Some(span.clone()))),
        }
    }
}

fn out_of_range(index: f64, len: usize, span: &Span) -> Error {
    Error::runtime(format!("Index out of range ({}) with length of {len}",
                           Value::number(index.trunc())),
                   Some(span.clone()))
}

impl List {
    /// Writes the list, rendering any list already being written further up
    /// as `[...]`.
    fn write_nested(&self,
                    f: &mut fmt::Formatter<'_>,
                    open: &mut Vec<*const RefCell<Vec<Value>>>)
                    -> fmt::Result {
        let storage = Rc::as_ptr(&self.elements);
        if open.contains(&storage) {
            return write!(f, "[...]");
        }
        open.push(storage);

        write!(f, "[")?;
        for (i, element) in self.elements.borrow().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match &element.kind {
                ValueKind::List(inner) => ensure_sufficient_stack(|| inner.write_nested(f, open))?,
                _ => write!(f, "{element}")?,
            }
        }
        open.pop();
        write!(f, "]")
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_nested(f, &mut Vec::new())
    }
}
