//! Tell fallbacks that produce a value apart from fallbacks that are the value.
//!
//! When an extraction needs a fallback, the caller may hand over either the fallback itself,
//! or something that computes it.
//! A computed fallback is only invoked on the absent path.
//!
//! The distinction is made by the [Fallback] trait, using a marker type:
//! [ArgFunctor] for anything callable without arguments, [ArgValue] for the value itself.
//! The marker is inferred at the call site, so callers never name it.
//! ```
//! use optional_pipeline::classify::{is_callable, ArgFunctor, ArgValue, Fallback};
//!
//! assert!(is_callable::<i32, _, _>(&|| 7));
//! assert!(!is_callable::<i32, _, _>(&7_i32));
//! assert!(<fn() -> i32 as Fallback<i32, ArgFunctor>>::IS_CALLABLE);
//! assert!(!<i32 as Fallback<i32, ArgValue>>::IS_CALLABLE);
//! ```

/// Marker: the fallback is a zero-argument callable, producing the fallback value.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ArgFunctor;

/// Marker: the fallback is the fallback value.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ArgValue;

/// A fallback for an absent value of type `T`.
///
/// `Arg` is [ArgFunctor] or [ArgValue].
pub trait Fallback<T, Arg> {
    /// Compile-time flag: true if the fallback gets invoked to produce the value.
    const IS_CALLABLE: bool;

    /// Produce the fallback value.
    fn produce(self) -> T;
}

impl<T, F> Fallback<T, ArgFunctor> for F
where
    F: FnOnce() -> T,
{
    const IS_CALLABLE: bool = true;

    fn produce(self) -> T {
        self()
    }
}

impl<T> Fallback<T, ArgValue> for T {
    const IS_CALLABLE: bool = false;

    fn produce(self) -> T {
        self
    }
}

/// Report if `fallback` would be invoked, rather than used as is.
pub fn is_callable<T, Arg, F>(_fallback: &F) -> bool
where
    F: Fallback<T, Arg>,
{
    F::IS_CALLABLE
}
