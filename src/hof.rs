//! Higher-order steps.
//!
//! Each function here returns a [HigherOrder] step.
//! Those receive the whole optional, so they also run on an absent input,
//! and they can turn a present value into an absent one.
//! ```
//! use optional_pipeline::{hof, to_op};
//!
//! let outcome = to_op(String::from("hello"))
//!             | hof::filter_if_not(|s: &String| s.is_empty())
//!             | hof::match_none(|| panic!("not expected to be absent"));
//! assert_eq!(Some(String::from("hello")), outcome.into_inner());
//! ```

use crate::functor::HigherOrder;

/// Keep the value only if `predicate` holds for it.
///
/// An absent input stays absent, and the predicate is not invoked.
pub fn filter_if<T, P>(predicate: P) -> HigherOrder<impl FnOnce(Option<T>) -> Option<T>>
where
    P: FnOnce(&T) -> bool,
{
    HigherOrder::new(move |op: Option<T>| op.filter(predicate))
}

/// Keep the value only if `predicate` does not hold for it.
///
/// An absent input stays absent, and the predicate is not invoked.
pub fn filter_if_not<T, P>(predicate: P) -> HigherOrder<impl FnOnce(Option<T>) -> Option<T>>
where
    P: FnOnce(&T) -> bool,
{
    HigherOrder::new(move |op: Option<T>| op.filter(|v| !predicate(v)))
}

/// Invoke `on_some` with the value if present, or `on_none` if absent.
///
/// The input optional is passed on unchanged.
/// Use [noop] for a branch that has nothing to do.
/// ```
/// use optional_pipeline::{hof, to_op, Pipe};
/// use std::cell::Cell;
///
/// let absent = Cell::new(false);
/// let _ = Pipe::<i32>::none() | hof::match_with(|_: &i32| unreachable!(), || absent.set(true));
/// assert!(absent.get());
///
/// let outcome = to_op(3) | hof::match_with(|_: &i32| {}, hof::noop);
/// assert_eq!(Some(3), outcome.into_inner());
/// ```
pub fn match_with<T, S, N>(on_some: S, on_none: N) -> HigherOrder<impl FnOnce(Option<T>) -> Option<T>>
where
    S: FnOnce(&T),
    N: FnOnce(),
{
    HigherOrder::new(move |op: Option<T>| {
        match &op {
            Some(value) => on_some(value),
            None => on_none(),
        }
        op
    })
}

/// Invoke `on_some` with the value if present.
///
/// The input optional is passed on unchanged.
pub fn match_some<T, S>(on_some: S) -> HigherOrder<impl FnOnce(Option<T>) -> Option<T>>
where
    S: FnOnce(&T),
{
    HigherOrder::new(move |op: Option<T>| op.inspect(on_some))
}

/// Invoke `on_none` if the input is absent.
///
/// The input optional is passed on unchanged.
pub fn match_none<T, N>(on_none: N) -> HigherOrder<impl FnOnce(Option<T>) -> Option<T>>
where
    N: FnOnce(),
{
    HigherOrder::new(move |op: Option<T>| {
        if op.is_none() {
            on_none();
        }
        op
    })
}

/// A branch that does nothing.
pub fn noop() {}

/// Log the optional at trace level, and pass it on unchanged.
#[cfg(feature = "tracing")]
pub fn trace<T>(label: &'static str) -> HigherOrder<impl FnOnce(Option<T>) -> Option<T>>
where
    T: std::fmt::Debug,
{
    HigherOrder::new(move |op: Option<T>| {
        match &op {
            Some(value) => tracing::trace!(step = label, ?value, "present"),
            None => tracing::trace!(step = label, "absent"),
        }
        op
    })
}
