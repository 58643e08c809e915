use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::interpreter::{evaluator::function::core::BUILTIN_TABLE, value::core::Value};

/// The variables defined directly in one scope.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Value>,
}

impl SymbolTable {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.symbols.get(name)
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.symbols.insert(name.to_owned(), value);
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.symbols.remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }
}

/// A lexical scope: a symbol table and the scope that encloses it.
///
/// Contexts are shared through `Rc`. Function values hold on to the context
/// they were defined in, and each call runs in a fresh child of that
/// context.
///
/// # Example
/// ```
/// use luminary::interpreter::{evaluator::context::Context, value::core::Value};
///
/// let global = Context::new();
/// global.set("x", Value::number(1.0));
///
/// let local = Context::child(&global);
/// assert_eq!(local.get("x"), Some(Value::number(1.0)));
///
/// local.set("x", Value::number(2.0));
/// assert_eq!(global.get("x"), Some(Value::number(1.0)));
/// ```
#[derive(Default)]
pub struct Context {
    symbols: RefCell<SymbolTable>,
    parent:  Option<Rc<Self>>,
}

impl Context {
    /// Creates an empty root scope.
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Creates a root scope with every builtin function installed.
    #[must_use]
    pub fn global() -> Rc<Self> {
        let context = Self::new();
        for builtin in BUILTIN_TABLE {
            context.set(builtin.name, Value::builtin(builtin));
        }
        context
    }

    /// Creates a scope nested inside `parent`.
    #[must_use]
    pub fn child(parent: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self { symbols: RefCell::default(),
                       parent:  Some(Rc::clone(parent)), })
    }

    /// Looks `name` up in this scope, then in each enclosing scope.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.symbols.borrow().get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|parent| parent.get(name))
    }

    /// Binds `name` in this scope, replacing any previous binding here.
    pub fn set(&self, name: &str, value: Value) {
        self.symbols.borrow_mut().set(name, value);
    }

    /// Removes `name` from this scope only.
    pub fn remove(&self, name: &str) -> Option<Value> {
        self.symbols.borrow_mut().remove(name)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols = self.symbols.borrow();
        let mut names = symbols.names().collect::<Vec<_>>();
        names.sort_unstable();
        f.debug_struct("Context")
         .field("names", &names)
         .field("has_parent", &self.parent.is_some())
         .finish()
    }
}
