//! The ten native operations.
//!
//! Every builtin receives the raw, unevaluated argument expressions and is
//! responsible for its own arity check, for evaluating whichever arguments
//! its semantics need, and for type-checking the evaluated operands. That
//! indirection is what lets `q` skip evaluation entirely, `i` evaluate
//! only the taken branch, and `d` take its first argument as a bare name.

use std::rc::Rc;

use crate::env::{Environment, Frame};
use crate::error::LispError;
use crate::eval::evaluate;
use crate::value::{Builtin, BuiltinFn, Value};

pub(crate) const BUILTINS: [(&str, BuiltinFn); 10] = [
    ("c", construct),
    ("h", head),
    ("t", tail),
    ("s", subtract),
    ("l", less_than),
    ("e", equal),
    ("v", eval),
    ("q", quote),
    ("i", ternary),
    ("d", define),
];

/// Bind the ten builtins into `globals` under their one-letter names.
pub fn install(globals: &mut Frame) {
    for (name, func) in BUILTINS {
        let bound = globals.bind(Rc::from(name), Value::Builtin(Builtin::new(name, func)));
        debug_assert!(bound.is_ok(), "builtin names are unique");
    }
}

fn expect_arity(args: &[Value], expected: usize) -> Result<(), LispError> {
    if args.len() != expected {
        return Err(LispError::arity(expected, args.len()));
    }
    Ok(())
}

fn expect_list(value: Value, position: usize) -> Result<Rc<Vec<Value>>, LispError> {
    match value {
        Value::List(items) => Ok(items),
        other => Err(LispError::type_error(format!(
            "argument {position} must be a list, got {}",
            other.type_name()
        ))),
    }
}

fn expect_integer(value: &Value, position: usize) -> Result<i64, LispError> {
    value.as_integer().ok_or_else(|| {
        LispError::type_error(format!(
            "argument {position} must be an integer, got {}",
            value.type_name()
        ))
    })
}

/// `(c x xs)` - a new list with the value of `x` prepended to the list
/// `xs`.
fn construct(env: &mut Environment, args: &[Value]) -> Result<Value, LispError> {
    expect_arity(args, 2)?;
    let head = evaluate(env, &args[0])?;
    let rest = expect_list(evaluate(env, &args[1])?, 2)?;
    let mut items = Vec::with_capacity(rest.len() + 1);
    items.push(head);
    items.extend(rest.iter().cloned());
    Ok(Value::list(items))
}

/// `(h xs)` - the first element of the list `xs`, or nil for the empty
/// list.
fn head(env: &mut Environment, args: &[Value]) -> Result<Value, LispError> {
    expect_arity(args, 1)?;
    let items = expect_list(evaluate(env, &args[0])?, 1)?;
    Ok(items.first().cloned().unwrap_or_else(Value::empty_list))
}

/// `(t xs)` - a new list of everything after the first element of `xs`.
fn tail(env: &mut Environment, args: &[Value]) -> Result<Value, LispError> {
    expect_arity(args, 1)?;
    let items = expect_list(evaluate(env, &args[0])?, 1)?;
    Ok(Value::list(items.iter().skip(1).cloned().collect()))
}

/// `(s a b)` - integer subtraction, wrapping on overflow.
fn subtract(env: &mut Environment, args: &[Value]) -> Result<Value, LispError> {
    expect_arity(args, 2)?;
    let a = evaluate(env, &args[0])?;
    let a = expect_integer(&a, 1)?;
    let b = evaluate(env, &args[1])?;
    let b = expect_integer(&b, 2)?;
    Ok(Value::Integer(a.wrapping_sub(b)))
}

/// `(l a b)` - `1` if `a` orders before `b` under the per-variant total
/// order, else `0`.
fn less_than(env: &mut Environment, args: &[Value]) -> Result<Value, LispError> {
    expect_arity(args, 2)?;
    let a = evaluate(env, &args[0])?;
    let b = evaluate(env, &args[1])?;
    Ok(Value::Integer(a.less_than(&b) as i64))
}

/// `(e a b)` - `1` if the two values are structurally equal, else `0`.
/// Values of different variants are never equal.
fn equal(env: &mut Environment, args: &[Value]) -> Result<Value, LispError> {
    expect_arity(args, 2)?;
    let a = evaluate(env, &args[0])?;
    let b = evaluate(env, &args[1])?;
    Ok(Value::Integer((a == b) as i64))
}

/// `(v expr)` - evaluate the argument, then evaluate its result.
fn eval(env: &mut Environment, args: &[Value]) -> Result<Value, LispError> {
    expect_arity(args, 1)?;
    let expr = evaluate(env, &args[0])?;
    evaluate(env, &expr)
}

/// `(q expr)` - the argument, untouched.
fn quote(_env: &mut Environment, args: &[Value]) -> Result<Value, LispError> {
    expect_arity(args, 1)?;
    Ok(args[0].clone())
}

/// `(i cond then else)` - evaluate `cond`; nil selects `else`, anything
/// else selects `then`. The untaken branch is never evaluated.
fn ternary(env: &mut Environment, args: &[Value]) -> Result<Value, LispError> {
    expect_arity(args, 3)?;
    let cond = evaluate(env, &args[0])?;
    if cond.is_nil() {
        evaluate(env, &args[2])
    } else {
        evaluate(env, &args[1])
    }
}

/// `(d name expr)` - bind the value of `expr` to `name` in the global
/// frame and return the name. The name is taken raw, so it needs no
/// quoting; redefining an existing name is rejected.
fn define(env: &mut Environment, args: &[Value]) -> Result<Value, LispError> {
    expect_arity(args, 2)?;
    let Value::Symbol(name) = &args[0] else {
        return Err(LispError::type_error(format!(
            "argument 1 must be a symbol, got {}",
            args[0].type_name()
        )));
    };
    let value = evaluate(env, &args[1])?;
    env.define_global(name.clone(), value)?;
    Ok(args[0].clone())
}
