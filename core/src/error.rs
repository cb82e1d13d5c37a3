//! Error types for the tinylisp core.

use thiserror::Error;

/// Every way a core operation can fail.
///
/// All failures are values, never process aborts: the evaluator and the
/// builtins surface the first failure encountered, and the driver reports
/// it and keeps accepting input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LispError {
    /// A symbol was evaluated with no binding in the top frame or the
    /// global frame.
    #[error("undefined name: {0} not in scope")]
    UndefinedName(String),

    /// An operation received a value of the wrong variant.
    #[error("type error: {0}")]
    TypeError(String),

    /// A call supplied the wrong number of arguments.
    #[error("expected {expected} arguments, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    /// A name was bound twice in the same frame.
    #[error("name already bound: {0}")]
    NameAlreadyBound(String),

    /// The environment's frame limit was exceeded.
    #[error("stack overflow: nesting deeper than {0} frames")]
    StackOverflow(usize),

    /// The reader rejected the input.
    #[error("syntax error: {0}")]
    SyntaxError(String),

    /// The reader ran out of input inside an open list. The driver keeps
    /// buffering lines when it sees this.
    #[error("unexpected end of input")]
    UnexpectedEof,
}

impl LispError {
    /// Create a type error.
    pub fn type_error(message: impl Into<String>) -> Self {
        LispError::TypeError(message.into())
    }

    /// Create an undefined-name error.
    pub fn undefined(name: impl Into<String>) -> Self {
        LispError::UndefinedName(name.into())
    }

    /// Create an argument-count mismatch error.
    pub fn arity(expected: usize, actual: usize) -> Self {
        LispError::ArityMismatch { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_name_display() {
        let err = LispError::undefined("x");
        assert_eq!(err.to_string(), "undefined name: x not in scope");
    }

    #[test]
    fn test_arity_display() {
        let err = LispError::arity(2, 3);
        assert_eq!(err.to_string(), "expected 2 arguments, got 3");
    }

    #[test]
    fn test_stack_overflow_display() {
        let err = LispError::StackOverflow(128);
        assert!(err.to_string().contains("128"));
    }

    #[test]
    fn test_type_error_constructor() {
        let err = LispError::type_error("expected a list");
        assert_eq!(err, LispError::TypeError("expected a list".to_string()));
    }
}
