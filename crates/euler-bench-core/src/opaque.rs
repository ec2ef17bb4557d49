//! Optimizer barrier around a computation.
//!
//! A pure function whose result is discarded can legally be removed by the
//! optimizer, which would make every measured loop collapse to zero time.
//! [`Opaque`] stores the callable behind a trait object and routes both the
//! callee and its result through [`std::hint::black_box`], so the call site
//! cannot be proven side-effect free.

use std::fmt;
use std::hint::black_box;

/// A zero-argument computation that can be invoked repeatedly.
pub trait Computation {
    /// Value produced by one invocation.
    type Answer;

    /// Run the computation once.
    fn invoke(&self) -> Self::Answer;
}

/// Boxed computation invoked through an indirection the optimizer cannot see past.
pub struct Opaque<'a, A> {
    call: Box<dyn Fn() -> A + 'a>,
}

impl<'a, A> Opaque<'a, A> {
    /// Wrap a zero-argument callable.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> A + 'a,
    {
        Self { call: Box::new(f) }
    }

    /// Wrap a callable with its arguments bound now.
    ///
    /// The arguments are copied as-is and fed through [`black_box`] on every
    /// call, so they cannot be constant-folded into the callee.
    pub fn bind<T, F>(f: F, args: T) -> Self
    where
        T: Copy + 'a,
        F: Fn(T) -> A + 'a,
    {
        Self::new(move || f(black_box(args)))
    }
}

impl<A> Computation for Opaque<'_, A> {
    type Answer = A;

    #[inline(never)]
    fn invoke(&self) -> A {
        let call: &dyn Fn() -> A = black_box(&*self.call);
        black_box(call())
    }
}

impl<A> fmt::Debug for Opaque<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opaque").finish_non_exhaustive()
    }
}
