//! Fixed-point combinator.
//!
//! Construction
//! - The generator `gen` maps a self-reference `f` to `step(proxy)`, where `proxy(arg)`
//!   evaluates `apply_self(f)` and calls the result with `arg`.
//! - The realized function is `apply_self(gen)`. Expanding it gives
//!   `R = step(|arg| R(arg))`, the fixed point of `step`, without `R` ever being named.
//!
//! The self-application inside `proxy` is deferred to the body of the proxy closure: it is the
//! first thing evaluated once the proxy is called, and never earlier. Evaluating it when the
//! proxy is built would unfold the generator forever before any base case gets a chance to
//! run.
//!
//! A value that is not a step function is rejected at compile time:
//! ```compile_fail
//! use hyfix::prelude::*;
//!
//! // The first argument must be a `Proxy`, not the recursive argument itself.
//! let broken = fix(|n: u64| move |m: u64| n + m);
//! ```
use std::rc::Rc;

use log::trace;

use crate::{
    func::{Proxy, Realized, StepFn},
    selfref::{SelfRef, apply_self},
};

/// Turn `step` into a recursive function.
///
/// `step` is called exactly once here, to build the outermost computation; the proxy it
/// receives is not invoked. Further unfoldings happen lazily, one per recursive call.
///
/// Errors returned by the step (with `R = Result<_, _>`) and panics raised inside it propagate
/// unchanged. Recursion that never reaches a base case exhausts the stack, just as a named
/// recursive function would.
///
/// ```
/// use hyfix::prelude::*;
///
/// let fib = fix(|rec: Proxy<u32, u64>| {
///     move |n: u32| if n <= 2 { 1 } else { rec.call(n - 1) + rec.call(n - 2) }
/// });
/// let values: Vec<u64> = (1..=12).map(fib.into_fn()).collect();
/// assert_eq!(values, [1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144]);
/// ```
pub fn fix<A, R, S>(step: S) -> Realized<A, R>
where
    A: 'static,
    R: 'static,
    S: StepFn<A, R>,
{
    trace!(
        "Realizing recursive function from step `{}`",
        std::any::type_name::<S>()
    );

    let generator = SelfRef::new(move |f: &SelfRef<Realized<A, R>>| {
        let f = f.clone();
        let proxy = Proxy::new(move |arg: A| apply_self(&f).call(arg));
        Realized::new(step.unfold(proxy))
    });

    apply_self(&generator)
}

/// Same as [`fix`], for a step written as a single two-argument function `(proxy, argument)`.
///
/// ```
/// use hyfix::prelude::*;
///
/// let gcd = fix_with(|rec: &Proxy<(u64, u64), u64>, (a, b): (u64, u64)| {
///     if b == 0 { a } else { rec.call((b, a % b)) }
/// });
/// assert_eq!(gcd.call((48, 18)), 6);
/// ```
pub fn fix_with<A, R, S>(step: S) -> Realized<A, R>
where
    A: 'static,
    R: 'static,
    S: Fn(&Proxy<A, R>, A) -> R + 'static,
{
    let step = Rc::new(step);
    fix(move |rec: Proxy<A, R>| {
        let step = Rc::clone(&step);
        move |arg: A| step(&rec, arg)
    })
}
