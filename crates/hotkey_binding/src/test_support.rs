//! Shared matcher double for the crate's tests.
//!
//! [`ScriptedMatcher`] records register/unregister traffic, can be told to
//! reject specific patterns, and can fire a synthetic input event at the
//! handlers currently registered under a pattern. Registrations are
//! matched by pattern string identity only; no parsing happens here.

use crate::binding::Callback;
use crate::matcher::{Handler, Matcher, Pattern};
use anyhow::{bail, Result};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Synthetic input event delivered to handlers.
#[derive(Debug, Default)]
pub struct TestEvent {
    /// The pattern the event was fired for.
    pub pattern: String,
}

/// Opaque match-result stand-in.
#[derive(Debug, Default)]
pub struct TestMatch;

struct Registration {
    handle: u64,
    pattern: Pattern,
    handler: Handler<TestEvent, TestMatch>,
}

#[derive(Default)]
struct State {
    next_handle: u64,
    live: Vec<Registration>,
    rejected: Vec<String>,
    registered: u64,
    unregistered: u64,
    stale_unregisters: u64,
}

/// A matcher double driven entirely by the test.
#[derive(Default)]
pub struct ScriptedMatcher {
    state: RefCell<State>,
}

impl ScriptedMatcher {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Make future registrations of `pattern` fail.
    pub fn reject(&self, pattern: &str) {
        self.state.borrow_mut().rejected.push(pattern.to_string());
    }

    /// Fire a synthetic event at every handler registered under `pattern`.
    pub fn fire(&self, pattern: &str) {
        let event = TestEvent {
            pattern: pattern.to_string(),
        };
        let matched = TestMatch;
        let mut state = self.state.borrow_mut();
        for registration in &mut state.live {
            if registration.pattern.as_str() == pattern {
                (registration.handler)(&event, &matched);
            }
        }
    }

    /// Registrations currently live.
    pub fn live(&self) -> usize {
        self.state.borrow().live.len()
    }

    /// Total `register` calls that succeeded.
    pub fn registered(&self) -> u64 {
        self.state.borrow().registered
    }

    /// Total `unregister` calls that removed a live registration.
    pub fn unregistered(&self) -> u64 {
        self.state.borrow().unregistered
    }

    /// `unregister` calls for handles the matcher no longer knew.
    pub fn stale_unregisters(&self) -> u64 {
        self.state.borrow().stale_unregisters
    }
}

impl Matcher for ScriptedMatcher {
    type Event = TestEvent;
    type Match = TestMatch;
    type Handle = u64;

    fn register(
        &self,
        pattern: &Pattern,
        handler: Handler<TestEvent, TestMatch>,
    ) -> Result<u64> {
        let mut state = self.state.borrow_mut();
        if state.rejected.iter().any(|p| p == pattern.as_str()) {
            bail!("matcher rejected pattern `{pattern}`");
        }
        state.next_handle += 1;
        let handle = state.next_handle;
        state.live.push(Registration {
            handle,
            pattern: pattern.clone(),
            handler,
        });
        state.registered += 1;
        Ok(handle)
    }

    fn unregister(&self, handle: u64) {
        let mut state = self.state.borrow_mut();
        match state.live.iter().position(|r| r.handle == handle) {
            Some(index) => {
                state.live.remove(index);
                state.unregistered += 1;
            }
            // Unknown handle: contractually a no-op.
            None => state.stale_unregisters += 1,
        }
    }
}

/// A callback that counts its invocations.
pub fn counter() -> (Rc<Cell<u32>>, Callback<ScriptedMatcher>) {
    let hits = Rc::new(Cell::new(0u32));
    let callback = {
        let hits = Rc::clone(&hits);
        Box::new(move |_event: &TestEvent, _matched: &TestMatch| hits.set(hits.get() + 1))
    };
    (hits, callback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_unregister_is_a_noop() {
        let matcher = ScriptedMatcher::new();
        matcher.unregister(999);
        assert_eq!(matcher.stale_unregisters(), 1);
        assert_eq!(matcher.live(), 0);
    }

    #[test]
    fn fire_delivers_the_pattern_in_the_event() {
        let matcher = ScriptedMatcher::new();
        let seen = Rc::new(RefCell::new(String::new()));
        let handler = {
            let seen = Rc::clone(&seen);
            Box::new(move |event: &TestEvent, _matched: &TestMatch| {
                seen.borrow_mut().clone_from(&event.pattern);
            })
        };
        matcher.register(&Pattern::from("ctrl+a"), handler).unwrap();

        matcher.fire("ctrl+a");
        assert_eq!(*seen.borrow(), "ctrl+a");
    }
}
