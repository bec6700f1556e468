//! The `functor` mod holds step wrappers.
//!
//! Most steps are plain functions or closures, and need no wrapping.
//! Three kinds of step do:
//! - higher-order steps, which receive the whole optional instead of its element ([HigherOrder]);
//! - steps whose result must be wrapped, whatever its type ([Map]);
//! - fallible steps, whose [Result] must be folded into absence ([ok]).

use std::fmt;

/// Marks a function as a higher-order step.
///
/// A higher-order step receives the optional itself (present or absent),
/// and returns the optional that continues the pipeline.
/// The step is always invoked, also when the input is absent.
///
/// This wrapper is what [filter_if](crate::hof::filter_if), [match_with](crate::hof::match_with)
/// and friends return. A wrapped step is never treated as an ordinary step.
/// ```
/// use optional_pipeline::{to_op, HigherOrder};
///
/// let keep_even = HigherOrder::from(|op: Option<i32>| op.filter(|v| v % 2 == 0));
/// assert_eq!(Some(4), (to_op(4) | keep_even).into_inner());
/// ```
#[derive(Clone, Copy)]
pub struct HigherOrder<FnType> {
    fn_impl: FnType,
}

impl<FnType> HigherOrder<FnType> {
    /// Wrap a function operating on the optional as a whole.
    pub fn new(fn_impl: FnType) -> Self {
        Self { fn_impl }
    }

    /// Invoke the wrapped function on the whole optional.
    pub fn invoke<T, U>(self, op: Option<T>) -> Option<U>
    where
        FnType: FnOnce(Option<T>) -> Option<U>,
    {
        (self.fn_impl)(op)
    }
}

impl<FnType> From<FnType> for HigherOrder<FnType> {
    fn from(fn_impl: FnType) -> Self {
        Self::new(fn_impl)
    }
}

impl<FnType> fmt::Debug for HigherOrder<FnType> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HigherOrder").finish_non_exhaustive()
    }
}

/// Create a higher-order step.
///
/// Same as [HigherOrder::new], but the bound on `fn_impl` lets the compiler check the function shape where it's written.
pub fn higher_order<T, U, FnType>(fn_impl: FnType) -> HigherOrder<FnType>
where
    FnType: FnOnce(Option<T>) -> Option<U>,
{
    HigherOrder::new(fn_impl)
}

/// Marks a function as a map-like step.
///
/// The result of a wrapped step is always wrapped into a present optional.
/// This works for any result type, including ones without a [StepOutput](crate::StepOutput) implementation.
/// An [Option] result is not flattened either: it becomes the element.
/// ```
/// use optional_pipeline::{functor::map, to_op};
///
/// let upper = to_op('ß') | map(|c: char| c.to_uppercase());
/// assert_eq!(Some(String::from("SS")), upper.into_inner().map(|u| u.collect::<String>()));
///
/// let nested = to_op(-1) | map(|v: i32| (v > 0).then_some(v));
/// assert_eq!(Some(None), nested.into_inner());
/// ```
#[derive(Clone, Copy)]
pub struct Map<FnType> {
    fn_impl: FnType,
}

impl<FnType> Map<FnType> {
    /// Wrap a function operating on the element.
    pub fn new(fn_impl: FnType) -> Self {
        Self { fn_impl }
    }

    /// Invoke the wrapped function on an element.
    pub fn invoke<T, U>(self, value: T) -> U
    where
        FnType: FnOnce(T) -> U,
    {
        (self.fn_impl)(value)
    }
}

impl<FnType> From<FnType> for Map<FnType> {
    fn from(fn_impl: FnType) -> Self {
        Self::new(fn_impl)
    }
}

impl<FnType> fmt::Debug for Map<FnType> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").finish_non_exhaustive()
    }
}

/// Create a map-like step.
pub fn map<T, U, FnType>(fn_impl: FnType) -> Map<FnType>
where
    FnType: FnOnce(T) -> U,
{
    Map::new(fn_impl)
}

/// Turn a fallible step into a step returning an optional.
///
/// An [Err] from the step becomes an absent value.
/// With the `tracing` feature, the error is logged at debug level.
/// ```
/// use optional_pipeline::{ok, to_op};
///
/// let parse = ok(|s: &str| s.parse::<f64>());
/// assert_eq!(None, (to_op("not a number") | parse).into_inner());
/// assert_eq!(Some(2.5), (to_op("2.5") | ok(|s: &str| s.parse::<f64>())).into_inner());
/// ```
pub fn ok<T, U, E, FnType>(step: FnType) -> impl FnOnce(T) -> Option<U>
where
    FnType: FnOnce(T) -> Result<U, E>,
    E: fmt::Debug,
{
    move |value: T| match step(value) {
        Ok(v) => Some(v),
        Err(error) => {
            discard(error);
            None
        }
    }
}

#[cfg(feature = "tracing")]
fn discard<E: fmt::Debug>(error: E) {
    tracing::debug!(?error, "step failed, continuing with an absent value");
}

#[cfg(not(feature = "tracing"))]
fn discard<E: fmt::Debug>(_error: E) {}
