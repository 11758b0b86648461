//! Host-component scope: the hook-call surface.
//!
//! A [`HostScope`] models one activation of a host UI component. Host code
//! calls [`HostScope::use_hotkey`] once per binding during every render
//! pass; the first pass activates bindings, later passes route to
//! [`HotkeyBinding::render`] by call order. Dropping the scope tears every
//! binding down; a reactivated component is a fresh scope.

use crate::binding::{Callback, HotkeyBinding};
use crate::deps::DepList;
use crate::matcher::{Matcher, Pattern};
use anyhow::Result;
use std::rc::Rc;

/// One host-component activation's worth of hotkey bindings.
///
/// Hook call order and count must be stable across the render passes of a
/// single activation — the usual rule the host runtime already imposes on
/// hook-style calls. Violations are caller bugs and trip debug assertions.
pub struct HostScope<M: Matcher> {
    matcher: Rc<M>,
    slots: Vec<HotkeyBinding<M>>,
    cursor: usize,
}

impl<M: Matcher> HostScope<M> {
    /// Create a scope for a freshly activated host component.
    pub fn new(matcher: Rc<M>) -> Self {
        Self {
            matcher,
            slots: Vec::new(),
            cursor: 0,
        }
    }

    /// Begin a render pass.
    pub fn render(&mut self) {
        debug_assert_eq!(
            self.cursor,
            self.slots.len(),
            "previous render pass called fewer hooks than the first one"
        );
        self.cursor = 0;
    }

    /// Bind `pattern` to `callback` for the lifetime of this scope,
    /// memoized on `deps`. Called once per binding per render pass.
    ///
    /// The first render pass registers with the matcher; every later pass
    /// only runs the memoization check. Matcher rejections surface
    /// verbatim from the registering pass.
    pub fn use_hotkey(
        &mut self,
        pattern: impl Into<Pattern>,
        callback: Callback<M>,
        deps: DepList,
    ) -> Result<()> {
        let pattern = pattern.into();
        if self.cursor < self.slots.len() {
            let binding = &mut self.slots[self.cursor];
            debug_assert_eq!(
                binding.pattern(),
                &pattern,
                "hook call order changed across render passes"
            );
            binding.render(callback, deps);
        } else {
            debug_assert_eq!(
                self.cursor,
                self.slots.len(),
                "hook cursor ahead of slot storage"
            );
            self.slots.push(HotkeyBinding::new(
                Rc::clone(&self.matcher),
                pattern,
                callback,
                deps,
            )?);
        }
        self.cursor += 1;
        Ok(())
    }

    /// Number of bindings this scope currently owns.
    pub fn binding_count(&self) -> usize {
        self.slots.len()
    }

    /// Deactivate every binding. Dropping the scope does the same; calling
    /// this twice is a no-op the second time.
    pub fn deactivate(&mut self) {
        // Dropping each binding deregisters it.
        self.slots.clear();
        self.cursor = 0;
    }
}

impl<M: Matcher> std::fmt::Debug for HostScope<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostScope")
            .field("bindings", &self.slots.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}
