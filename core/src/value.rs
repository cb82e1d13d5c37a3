//! The tagged, reference-counted unit of data.
//!
//! A [`Value`] is shared-owned through `Rc`: cloning acquires a new owned
//! reference, dropping releases one, and dropping the last reference to a
//! list releases every element recursively. APIs that expose a container
//! element hand out a borrowed `&Value`; callers clone to retain it.
//! Lists grow in place only while being built and are frozen once wrapped
//! in `Rc` - published list contents are never mutated.

use std::fmt;
use std::rc::Rc;

use crate::env::Environment;
use crate::error::LispError;

/// Signature of a native operation.
///
/// Builtins receive the raw, unevaluated argument expressions and the
/// environment, and call back into [`crate::eval::evaluate`] for whichever
/// arguments their semantics need.
pub type BuiltinFn = fn(&mut Environment, &[Value]) -> Result<Value, LispError>;

/// A native operation bound in the global frame.
///
/// Compared by function identity: two builtins are equal only if they
/// dispatch to the same function.
#[derive(Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        Builtin { name, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the operation with the raw argument expressions.
    pub fn call(&self, env: &mut Environment, args: &[Value]) -> Result<Value, LispError> {
        (self.func)(env, args)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin").field("name", &self.name).finish()
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.func == other.func
    }
}

/// The four variants the language manipulates.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Self-evaluating; doubles as the boolean, with `0` falsy.
    Integer(i64),
    /// An immutable text label; evaluates via environment lookup.
    Symbol(Rc<str>),
    /// Owned elements; the empty list is the other encoding of nil.
    List(Rc<Vec<Value>>),
    /// Self-evaluating opaque native callable.
    Builtin(Builtin),
}

impl Value {
    pub fn symbol(name: &str) -> Self {
        Value::Symbol(Rc::from(name))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Rc::new(items))
    }

    pub fn empty_list() -> Self {
        Value::List(Rc::new(Vec::new()))
    }

    /// True iff the value is `0` or the empty list. The two encodings are
    /// both falsy but never equal to each other.
    pub fn is_nil(&self) -> bool {
        match self {
            Value::Integer(n) => *n == 0,
            Value::List(items) => items.is_empty(),
            _ => false,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
            Value::Builtin(_) => "builtin",
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Total order within each variant: integers by value, symbols
    /// lexicographically, lists element-wise with shorter-is-less on a
    /// common prefix, builtins by function identity. Values of different
    /// variants never order before one another.
    pub fn less_than(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a < b,
            (Value::Symbol(a), Value::Symbol(b)) => a.as_ref() < b.as_ref(),
            (Value::List(a), Value::List(b)) => {
                for (x, y) in a.iter().zip(b.iter()) {
                    if x.less_than(y) {
                        return true;
                    }
                    if y.less_than(x) {
                        return false;
                    }
                }
                a.len() < b.len()
            }
            (Value::Builtin(a), Value::Builtin(b)) => (a.func as usize) < (b.func as usize),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Symbol(name) => write!(f, "{name}"),
            Value::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
            Value::Builtin(builtin) => write!(f, "<builtin {}>", builtin.name),
        }
    }
}
