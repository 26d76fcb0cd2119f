//! Hyfix: anonymous recursion through a delayed self-application combinator.
//!
//! A recursive computation is described by a *step function*: one unfolding of the
//! recursion, parameterized over a stand-in ([`func::Proxy`]) for the recursive call. The
//! combinator ([`fix::fix`]) ties the knot without ever naming the recursive function.
//!
//! Evaluation order
//!  - The generator is applied to itself ([`selfref::apply_self`]) exactly once when the
//!    function is realized.
//!  - Every further self-application is deferred inside the body of the proxy and only runs
//!    once the proxy is called with a concrete argument. Realizing a function therefore never
//!    recurses, even for step functions whose recursion is not well-founded.
//!
//! Resources
//!  - Each unfolding costs a small constant number of stack frames and one short-lived
//!    allocation. The maximum recursion depth is bounded by the host stack, exactly like a
//!    named recursive function.
//!  - Realized functions share no mutable state; calls are independent and re-entrant.
//!
//! Example
//! ```
//! use hyfix::prelude::*;
//!
//! let factorial = fix(|rec: Proxy<u64, u64>| {
//!     move |n: u64| if n <= 1 { 1 } else { n * rec.call(n - 1) }
//! });
//! assert_eq!(factorial.call(5), 120);
//! assert_eq!(factorial.call(10), 3_628_800);
//! ```
#![deny(missing_docs)]

/// Fixed-point combinator turning step functions into recursive functions.
pub mod fix;
/// Shared function values: proxies, realized functions and the step function trait.
pub mod func;
/// Boxed recursive function type and the self-applicator.
pub mod selfref;
/// Thread-safe (`Arc` based) counterpart of the combinator.
pub mod sync;

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - `fix` / `fix_with` and their thread-safe counterpart `fix_sync`
    //! - Proxy and realized function handles
    //! - The self-applicator and its wrapper type
    pub use crate::fix::{fix, fix_with};
    pub use crate::func::{Proxy, Realized, StepFn};
    pub use crate::selfref::{SelfRef, apply_self};
    pub use crate::sync::{SyncProxy, SyncRealized, SyncSelfRef, apply_self_sync, fix_sync};
}
