//! Thread-safe counterpart of [`crate::fix`].
//!
//! Same construction, with `Arc` instead of `Rc` and `Send + Sync` closures, so that a realized
//! function can be shared across threads. There is still no lock and no shared mutable state:
//! every call, from any thread, unfolds its own chain of proxies.
use std::{fmt, sync::Arc};

use log::trace;

/// Thread-safe [`crate::selfref::SelfRef`].
pub struct SyncSelfRef<T>(Arc<dyn Fn(&SyncSelfRef<T>) -> T + Send + Sync>);

impl<T> SyncSelfRef<T> {
    /// Wrap a closure expecting a self-reference value as its sole argument.
    pub fn new(f: impl Fn(&SyncSelfRef<T>) -> T + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Call the wrapped function with `arg`.
    #[inline]
    pub fn apply_to(&self, arg: &SyncSelfRef<T>) -> T {
        (self.0)(arg)
    }
}

impl<T> Clone for SyncSelfRef<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for SyncSelfRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SyncSelfRef").finish_non_exhaustive()
    }
}

/// Apply `f` to itself, returning `f(f)`.
#[inline]
pub fn apply_self_sync<T>(f: &SyncSelfRef<T>) -> T {
    f.apply_to(f)
}

/// Thread-safe [`crate::func::Proxy`].
pub struct SyncProxy<A, R>(Arc<dyn Fn(A) -> R + Send + Sync>);

impl<A, R> SyncProxy<A, R> {
    /// Wrap a closure as a proxy.
    pub fn new(f: impl Fn(A) -> R + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Perform the recursive call.
    #[inline]
    pub fn call(&self, arg: A) -> R {
        (self.0)(arg)
    }
}

impl<A, R> Clone for SyncProxy<A, R> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<A, R> fmt::Debug for SyncProxy<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SyncProxy").finish_non_exhaustive()
    }
}

/// Thread-safe [`crate::func::Realized`].
pub struct SyncRealized<A, R>(Arc<dyn Fn(A) -> R + Send + Sync>);

impl<A, R> SyncRealized<A, R> {
    /// Wrap a closure as a realized function.
    pub fn new(f: impl Fn(A) -> R + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the function.
    #[inline]
    pub fn call(&self, arg: A) -> R {
        (self.0)(arg)
    }

    /// Convert into a plain closure.
    pub fn into_fn(self) -> impl Fn(A) -> R + Send + Sync {
        move |arg| (self.0)(arg)
    }
}

impl<A, R> Clone for SyncRealized<A, R> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<A, R> fmt::Debug for SyncRealized<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SyncRealized").finish_non_exhaustive()
    }
}

/// Thread-safe [`crate::fix::fix`].
///
/// ```
/// use hyfix::prelude::*;
///
/// let factorial = fix_sync(|rec: SyncProxy<u64, u64>| {
///     move |n: u64| if n <= 1 { 1 } else { n * rec.call(n - 1) }
/// });
/// let handle = {
///     let factorial = factorial.clone();
///     std::thread::spawn(move || factorial.call(6))
/// };
/// assert_eq!(factorial.call(5), 120);
/// assert_eq!(handle.join().unwrap(), 720);
/// ```
pub fn fix_sync<A, R, S, F>(step: S) -> SyncRealized<A, R>
where
    A: 'static,
    R: 'static,
    S: Fn(SyncProxy<A, R>) -> F + Send + Sync + 'static,
    F: Fn(A) -> R + Send + Sync + 'static,
{
    trace!(
        "Realizing thread-safe recursive function from step `{}`",
        std::any::type_name::<S>()
    );

    let generator = SyncSelfRef::new(move |f: &SyncSelfRef<SyncRealized<A, R>>| {
        let f = f.clone();
        let proxy = SyncProxy::new(move |arg: A| apply_self_sync(&f).call(arg));
        SyncRealized::new(step(proxy))
    });

    apply_self_sync(&generator)
}
