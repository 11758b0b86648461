//! External matcher capability surface.
//!
//! All pattern parsing, modifier handling, and event matching lives in an
//! external keystroke matcher. This module defines the narrow contract this
//! crate consumes: register a handler under a pattern, receive an opaque
//! handle, hand the handle back to deregister.

use anyhow::Result;
use std::fmt;
use std::sync::Arc;

/// A key-combination pattern, passed to the matcher verbatim.
///
/// The pattern grammar (modifier names, separators, wildcards) is defined
/// entirely by the external matcher; this crate imposes no structure on it
/// and performs no validation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(Arc<str>);

impl Pattern {
    /// Create a new pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern: String = pattern.into();
        Self(Arc::<str>::from(pattern.into_boxed_str()))
    }

    /// Borrow the pattern as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Pattern {
    fn from(value: &str) -> Self {
        Self(Arc::<str>::from(value))
    }
}

impl From<String> for Pattern {
    fn from(value: String) -> Self {
        Self(Arc::<str>::from(value.into_boxed_str()))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handler installed into the matcher's registration table.
///
/// Invoked with the raw input event and the match-result object the
/// matcher produced for it; both are opaque to this crate.
pub type Handler<E, R> = Box<dyn FnMut(&E, &R)>;

/// The external keystroke-matching engine, consumed as a black box.
///
/// The matcher owns a process-wide registration table shared with the rest
/// of the application; implementations of this crate only ever add and
/// remove their own entries and must never assume exclusive ownership of
/// the table.
pub trait Matcher {
    /// Raw input event delivered to handlers.
    type Event: 'static;
    /// Match-result object produced alongside the event.
    type Match: 'static;
    /// Token identifying one live registration.
    type Handle;

    /// Add `handler` to the registration table under `pattern`.
    ///
    /// Rejections (malformed pattern, unsupported modifier) are reported
    /// through the returned error and reach the caller verbatim.
    fn register(
        &self,
        pattern: &Pattern,
        handler: Handler<Self::Event, Self::Match>,
    ) -> Result<Self::Handle>;

    /// Remove a previous registration.
    ///
    /// Unregistering a handle the matcher no longer knows must be a no-op,
    /// never an error.
    fn unregister(&self, handle: Self::Handle);
}
