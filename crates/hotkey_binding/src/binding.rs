//! Lifecycle-bound hotkey registration.
//!
//! [`HotkeyBinding`] owns exactly one live registration with the external
//! matcher for the lifetime of one host-component activation, and keeps
//! the registered callback fresh according to the dependency-list
//! memoization contract.

use crate::deps::DepList;
use crate::matcher::{Matcher, Pattern};
use anyhow::Result;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Callback invoked when the binding's pattern matches an input event.
///
/// Receives the raw input event and the match-result object produced by
/// the external matcher.
pub type Callback<M> = Box<dyn FnMut(&<M as Matcher>::Event, &<M as Matcher>::Match)>;

/// The single mutable slot the registered handler reads through.
///
/// The handler installed into the matcher captures this slot, never a
/// callback directly, so retargeting the slot re-targets the live
/// registration without any matcher traffic.
type CallbackSlot<M> = Rc<RefCell<Callback<M>>>;

/// One key pattern bound to a caller-supplied callback for the lifetime of
/// one host-component activation.
///
/// Construction registers with the matcher; [`HotkeyBinding::render`] is
/// the once-per-render memoization check; dropping the binding (or calling
/// [`HotkeyBinding::deactivate`]) deregisters. There is never more than
/// one outstanding registration per binding, and never less than one while
/// the binding is active.
///
/// Bindings are single-threaded by design and do not implement `Send`.
pub struct HotkeyBinding<M: Matcher> {
    matcher: Rc<M>,
    pattern: Pattern,
    slot: CallbackSlot<M>,
    handle: Option<M::Handle>,
    deps: DepList,
}

impl<M: Matcher> HotkeyBinding<M> {
    /// Activate the binding: register `(pattern, callback)` with the
    /// matcher and record `deps` as the baseline for later comparisons.
    ///
    /// Matcher rejections (malformed pattern, unsupported modifier)
    /// surface verbatim; on error no registration is left behind.
    pub fn new(
        matcher: Rc<M>,
        pattern: impl Into<Pattern>,
        callback: Callback<M>,
        deps: DepList,
    ) -> Result<Self> {
        let pattern = pattern.into();
        let slot: CallbackSlot<M> = Rc::new(RefCell::new(callback));
        let handler = {
            let slot = Rc::clone(&slot);
            Box::new(move |event: &M::Event, matched: &M::Match| {
                (slot.borrow_mut())(event, matched);
            })
        };
        let handle = matcher.register(&pattern, handler)?;
        log::debug!("registered hotkey binding for `{pattern}`");
        Ok(Self {
            matcher,
            pattern,
            slot,
            handle: Some(handle),
            deps,
        })
    }

    /// The once-per-render operation.
    ///
    /// Compares `deps` against the recorded baseline, element by element
    /// and by length. Unchanged deps drop the freshly supplied `callback`
    /// and keep the previously captured one live — passing an empty list
    /// on every render therefore pins the first captured closure for the
    /// whole activation. Changed deps retarget the slot so the next
    /// matching input event invokes `callback`.
    pub fn render(&mut self, callback: Callback<M>, deps: DepList) {
        if deps.same_as(&self.deps) {
            log::trace!("deps unchanged for `{}`, keeping captured callback", self.pattern);
            return;
        }
        *self.slot.borrow_mut() = callback;
        self.deps = deps;
        log::trace!("deps changed for `{}`, callback retargeted", self.pattern);
    }

    /// The pattern this binding was activated with.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Whether the registration is still live.
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Deactivate the binding: deregister with the matcher.
    ///
    /// Safe to call more than once; only the first call reaches the
    /// matcher. No callback invocation can occur afterwards.
    pub fn deactivate(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.matcher.unregister(handle);
            log::debug!("unregistered hotkey binding for `{}`", self.pattern);
        }
    }
}

impl<M: Matcher> Drop for HotkeyBinding<M> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl<M: Matcher> fmt::Debug for HotkeyBinding<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HotkeyBinding")
            .field("pattern", &self.pattern)
            .field("active", &self.handle.is_some())
            .field("deps", &self.deps)
            .finish()
    }
}
