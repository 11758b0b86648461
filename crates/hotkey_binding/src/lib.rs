//! Lifecycle-bound hotkey bindings with dependency-list memoization.
//!
//! The crate is a thin lifecycle adapter around an external
//! keystroke-matching engine, consumed through the [`Matcher`] trait as an
//! opaque capability. It does three things: register a key-combination
//! handler when a host UI component becomes active, keep the handler's
//! callback fresh according to an explicit dependency list, and deregister
//! when the component becomes inactive. Pattern grammar, modifier
//! matching, and scope handling all belong to the matcher and are passed
//! through untouched.
//!
//! # Example
//!
//! ```ignore
//! use hotkey_binding::{deps, HostScope};
//! use std::rc::Rc;
//!
//! let mut scope = HostScope::new(Rc::clone(&matcher));
//!
//! // Once per render pass of the host component:
//! scope.render();
//! scope.use_hotkey(
//!     "ctrl+s",
//!     Box::new(move |_event, _matched| save(document_id)),
//!     deps![document_id],
//! )?;
//!
//! // Dropping the scope (or calling `deactivate`) deregisters everything.
//! ```
//!
//! Dependency lists follow the memoization contract to the letter: an
//! unchanged list keeps the previously captured callback live, so a
//! forever-empty list pins the first capture for the whole activation.
//! That stale-capture behavior is documented and deliberate.

pub mod binding;
pub mod deps;
pub mod matcher;
pub mod scope;

#[cfg(test)]
mod test_support;

// Re-export main types
pub use binding::{Callback, HotkeyBinding};
pub use deps::{Dep, DepList};
pub use matcher::{Handler, Matcher, Pattern};
pub use scope::HostScope;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
