//! Dependency lists for callback memoization.
//!
//! A [`DepList`] is an ordered snapshot of the values a caller declares as
//! relevant to its callback. Two snapshots are equal when they have the
//! same length and every position compares equal; a changed snapshot is
//! what invalidates the memoized callback.

use smallvec::SmallVec;
use std::any::Any;
use std::fmt;

/// A single comparison value in a dependency list.
///
/// Implemented for every `PartialEq + 'static` type via the blanket impl.
/// Comparison is by runtime type and value: two deps of differing runtime
/// types are always unequal.
pub trait Dep: Any {
    /// Convert to `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Positional equality against another dependency value.
    fn dep_eq(&self, other: &dyn Dep) -> bool;
}

impl<T: PartialEq + 'static> Dep for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dep_eq(&self, other: &dyn Dep) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |other| self == other)
    }
}

/// An ordered list of dependency values, compared by position.
///
/// The empty list is legal and is the default; a binding whose deps stay
/// empty keeps its first captured callback for its entire activation.
#[derive(Default)]
pub struct DepList(SmallVec<[Box<dyn Dep>; 4]>);

impl DepList {
    /// Create an empty dependency list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a dependency value.
    pub fn push(&mut self, dep: impl Dep) {
        self.0.push(Box::new(dep));
    }

    /// Append a dependency value, builder style.
    pub fn with(mut self, dep: impl Dep) -> Self {
        self.push(dep);
        self
    }

    /// Number of values in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Positional equality: same length, every element `dep_eq` to its
    /// counterpart.
    pub fn same_as(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|(a, b)| a.dep_eq(b.as_ref()))
    }
}

impl fmt::Debug for DepList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DepList(len = {})", self.0.len())
    }
}

/// Build a [`DepList`] from comparison values.
///
/// # Example
/// ```
/// use hotkey_binding::deps;
///
/// let amount = 100u32;
/// let mode = "insert";
/// let list = deps![amount, mode];
/// assert_eq!(list.len(), 2);
/// ```
#[macro_export]
macro_rules! deps {
    () => {
        $crate::DepList::new()
    };
    ($($dep:expr),+ $(,)?) => {{
        let mut list = $crate::DepList::new();
        $(list.push($dep);)+
        list
    }};
}
