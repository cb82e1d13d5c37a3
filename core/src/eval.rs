//! The recursive evaluation protocol.
//!
//! Dispatch over the shape of the input value: integers, builtins, and the
//! empty list evaluate to themselves, symbols resolve through the
//! environment, and non-empty lists are call forms. A builtin operator
//! receives its arguments unevaluated; a list operator is a closure,
//! `(params body)` for a function or `(() params body)` for a macro.

use tracing::trace;

use crate::env::{Environment, Frame};
use crate::error::LispError;
use crate::value::Value;

/// Evaluate `expr` against `env`, producing an owned result or the first
/// failure encountered. Anything built on a failed path is released as it
/// unwinds.
pub fn evaluate(env: &mut Environment, expr: &Value) -> Result<Value, LispError> {
    trace!(%expr, depth = env.depth(), "evaluate");
    match expr {
        Value::Integer(_) | Value::Builtin(_) => Ok(expr.clone()),
        Value::Symbol(name) => env
            .lookup(name)
            .cloned()
            .ok_or_else(|| LispError::undefined(name.as_ref())),
        Value::List(items) => {
            if items.is_empty() {
                return Ok(expr.clone());
            }
            let operator = evaluate(env, &items[0])?;
            let args = &items[1..];
            match operator {
                // The builtin alone decides which arguments to evaluate.
                Value::Builtin(builtin) => builtin.call(env, args),
                Value::List(closure) => apply_closure(env, &closure, args),
                other => Err(LispError::type_error(format!(
                    "expected a callable, got {}",
                    other.type_name()
                ))),
            }
        }
    }
}

/// Call a list-shaped closure. A leading empty list marks a macro; that is
/// the only two-vs-three-element distinction made here. The call frame is
/// popped exactly once whether the body evaluation succeeds or fails.
fn apply_closure(
    env: &mut Environment,
    closure: &[Value],
    args: &[Value],
) -> Result<Value, LispError> {
    let is_macro = matches!(closure.first(), Some(Value::List(marker)) if marker.is_empty());
    let (params, body) = if is_macro {
        match closure {
            [_, params, body] => (params, body),
            _ => {
                return Err(LispError::type_error(
                    "malformed macro: expected (() params body)",
                ));
            }
        }
    } else {
        match closure {
            [params, body] => (params, body),
            _ => {
                return Err(LispError::type_error(
                    "malformed function: expected (params body)",
                ));
            }
        }
    };

    let mut frame = Frame::new();
    match params {
        Value::List(names) => {
            if names.len() != args.len() {
                return Err(LispError::arity(names.len(), args.len()));
            }
            for (param, arg) in names.iter().zip(args) {
                let Value::Symbol(name) = param else {
                    return Err(LispError::type_error(format!(
                        "parameter names must be symbols, got {}",
                        param.type_name()
                    )));
                };
                // Functions bind arguments evaluated in the caller's
                // environment; macros bind the raw expressions.
                let bound = if is_macro {
                    arg.clone()
                } else {
                    evaluate(env, arg)?
                };
                frame.bind(name.clone(), bound)?;
            }
        }
        // A bare symbol collects every argument into one list.
        Value::Symbol(rest) => {
            let collected = if is_macro {
                args.to_vec()
            } else {
                args.iter()
                    .map(|arg| evaluate(env, arg))
                    .collect::<Result<Vec<_>, _>>()?
            };
            frame.bind(rest.clone(), Value::list(collected))?;
        }
        other => {
            return Err(LispError::type_error(format!(
                "parameters must be a list or a symbol, got {}",
                other.type_name()
            )));
        }
    }

    env.push_frame(frame)?;
    let result = evaluate(env, body);
    env.pop_frame();
    result
}
