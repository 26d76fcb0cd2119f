//! Shared function values exchanged with the combinator.
//!
//! Role
//! - [`Proxy`] is the stand-in a step function receives in place of a direct recursive call.
//! - [`Realized`] is the recursive function handed back to callers.
//! - [`StepFn`] names the shape `(proxy) -> (argument) -> result` of a step function.
//!
//! Both handles are reference counted; cloning never copies the underlying closure.
use std::{fmt, rc::Rc};

/// Stand-in for the recursive call, of shape `(A) -> R`.
///
/// Calling the proxy re-derives the realized function and invokes it with the argument. No
/// work happens until [`Proxy::call`] runs.
pub struct Proxy<A, R>(Rc<dyn Fn(A) -> R>);

impl<A, R> Proxy<A, R> {
    /// Wrap a closure as a proxy.
    pub fn new(f: impl Fn(A) -> R + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Perform the recursive call.
    #[inline]
    pub fn call(&self, arg: A) -> R {
        (self.0)(arg)
    }
}

impl<A, R> Clone for Proxy<A, R> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<A, R> fmt::Debug for Proxy<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Proxy").finish_non_exhaustive()
    }
}

/// Recursive function produced by the combinator, of shape `(A) -> R`.
///
/// May be called any number of times (including zero). Calls are independent: nothing is
/// cached or shared between two invocations.
pub struct Realized<A, R>(Rc<dyn Fn(A) -> R>);

impl<A, R> Realized<A, R> {
    /// Wrap a closure as a realized function.
    pub fn new(f: impl Fn(A) -> R + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the function.
    #[inline]
    pub fn call(&self, arg: A) -> R {
        (self.0)(arg)
    }

    /// Convert into a plain closure, e.g. to feed iterator adapters.
    pub fn into_fn(self) -> impl Fn(A) -> R {
        move |arg| (self.0)(arg)
    }
}

impl<A, R> Clone for Realized<A, R> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<A, R> fmt::Debug for Realized<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Realized").finish_non_exhaustive()
    }
}

/// One unfolding of a recursive computation, parameterized over a [`Proxy`].
///
/// Implemented for every closure `Fn(Proxy<A, R>) -> F` where `F: Fn(A) -> R`. The body
/// returned by [`StepFn::unfold`] must use the proxy wherever the computation would call itself
/// by name.
pub trait StepFn<A, R>: 'static {
    /// Computation returned for a given proxy.
    type Body: Fn(A) -> R + 'static;

    /// Build the one-argument computation around `proxy`.
    fn unfold(&self, proxy: Proxy<A, R>) -> Self::Body;
}

impl<A, R, S, F> StepFn<A, R> for S
where
    S: Fn(Proxy<A, R>) -> F + 'static,
    F: Fn(A) -> R + 'static,
{
    type Body = F;

    #[inline]
    fn unfold(&self, proxy: Proxy<A, R>) -> F {
        self(proxy)
    }
}
