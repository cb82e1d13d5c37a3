//! Core of the tinylisp language
//!
//! This crate contains the fundamental pieces of the language: the
//! reference-counted [`Value`] representation, the bounded flat-scope
//! [`Environment`], the recursive [`evaluate`] procedure, the catalog of
//! ten builtins, and the textual [`reader`]. It does not include the
//! interactive driver - that lives in the `tinylisp-repl` crate.

pub mod builtins;
pub mod env;
pub mod error;
pub mod eval;
pub mod reader;
pub mod value;

// Re-export commonly used items for convenience
pub use env::{Environment, Frame, MAX_DEPTH};
pub use error::LispError;
pub use eval::evaluate;
pub use reader::{Reader, read_all, read_one};
pub use value::{Builtin, BuiltinFn, Value};
