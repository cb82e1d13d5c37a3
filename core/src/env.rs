//! The two-level name-resolution environment.
//!
//! The environment is a bounded stack of binding frames. Frame 0 is the
//! persistent global frame, created once per session with the ten builtins
//! and never popped; frames above it are pushed on call entry and popped
//! on call exit. Lookup is flat: only the top frame and frame 0 are
//! consulted, never the caller frames in between.

use std::rc::Rc;

use tracing::trace;

use crate::builtins;
use crate::error::LispError;
use crate::value::Value;

/// Upper bound on call nesting, the global frame included.
pub const MAX_DEPTH: usize = 128;

/// One binding scope: unique names mapped to owned values.
///
/// Entries are kept name-sorted with binary search. Lookups vastly
/// outnumber insertions (one insertion per parameter or global define), so
/// logarithmic search with linear insertion is the right trade.
#[derive(Debug, Default)]
pub struct Frame {
    entries: Vec<(Rc<str>, Value)>,
}

impl Frame {
    pub fn new() -> Self {
        Frame { entries: Vec::new() }
    }

    /// Borrowed view of the value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .binary_search_by(|(key, _)| key.as_ref().cmp(name))
            .ok()
            .map(|pos| &self.entries[pos].1)
    }

    /// Bind `name` to `value`, taking ownership of both. A name already
    /// present in this frame is rejected, never overwritten.
    pub fn bind(&mut self, name: Rc<str>, value: Value) -> Result<(), LispError> {
        match self
            .entries
            .binary_search_by(|(key, _)| key.as_ref().cmp(name.as_ref()))
        {
            Ok(_) => Err(LispError::NameAlreadyBound(name.to_string())),
            Err(pos) => {
                self.entries.insert(pos, (name, value));
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A bounded stack of frames over the persistent global frame.
///
/// Environments carry no hidden global state; independent sessions can
/// coexist by constructing independent environments.
#[derive(Debug)]
pub struct Environment {
    frames: Vec<Frame>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Build frame 0, pre-populated with the ten builtins under their
    /// one-letter names.
    pub fn new() -> Self {
        let mut globals = Frame::new();
        builtins::install(&mut globals);
        Environment {
            frames: vec![globals],
        }
    }

    /// Current nesting depth, frame 0 included.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Push a call frame, taking ownership of it and its bindings.
    pub fn push_frame(&mut self, frame: Frame) -> Result<(), LispError> {
        if self.frames.len() == MAX_DEPTH {
            return Err(LispError::StackOverflow(MAX_DEPTH));
        }
        self.frames.push(frame);
        trace!(depth = self.frames.len(), "push frame");
        Ok(())
    }

    /// Pop the top call frame, releasing all its bindings. The global
    /// frame is never popped.
    pub fn pop_frame(&mut self) {
        debug_assert!(self.frames.len() > 1, "the global frame must not be popped");
        self.frames.pop();
        trace!(depth = self.frames.len(), "pop frame");
    }

    /// Flat-scope lookup: the top frame first, then frame 0. Frames in
    /// between are intentionally invisible.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        let top = self.frames.last().expect("frame 0 is always present");
        top.get(name).or_else(|| self.frames[0].get(name))
    }

    /// Bind into the persistent global frame, with the same
    /// duplicate-name rejection as any other frame.
    pub fn define_global(&mut self, name: Rc<str>, value: Value) -> Result<(), LispError> {
        self.frames[0].bind(name, value)
    }
}
