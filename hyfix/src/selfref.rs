//! Self-referential function values.
//!
//! Role
//! - A function taking *itself* as argument has the type `F = fn(F) -> T`, which cannot be
//!   written directly. [`SelfRef`] is the one-field wrapper breaking that cycle: the wrapped
//!   function receives a `&SelfRef<T>` instead of a bare function.
//! - [`apply_self`] is the self-applicator `f(f)`.
use std::{fmt, rc::Rc};

/// Shared function value of shape `(&SelfRef<T>) -> T`.
///
/// Cloning is cheap and shares the same underlying closure.
pub struct SelfRef<T>(Rc<dyn Fn(&SelfRef<T>) -> T>);

impl<T> SelfRef<T> {
    /// Wrap a closure expecting a self-reference value as its sole argument.
    pub fn new(f: impl Fn(&SelfRef<T>) -> T + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Call the wrapped function with `arg`.
    #[inline]
    pub fn apply_to(&self, arg: &SelfRef<T>) -> T {
        (self.0)(arg)
    }

    /// Whether both handles share the same underlying closure.
    pub fn ptr_eq(&self, other: &SelfRef<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for SelfRef<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for SelfRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SelfRef").finish_non_exhaustive()
    }
}

/// Apply `f` to itself, returning `f(f)`.
#[inline]
pub fn apply_self<T>(f: &SelfRef<T>) -> T {
    f.apply_to(f)
}
