use crate::functor::{HigherOrder, Map};
use crate::output::{FlatMapLike, MapLike, Shape, StepOutput};

/// A step that can be applied to an optional with elements of type `T`.
///
/// The associated types describe, at compile time, what applying the step produces:
/// - [Transform::Invocation] is the raw result of invoking the step;
/// - [Transform::Shape] tells if that result is optional ([FlatMapLike]) or plain ([MapLike]);
/// - [Transform::Element] is the element type of the optional that continues the pipeline.
///
/// There are two kinds of transform:
/// - An ordinary step is any `FnOnce(T) -> R`, where `R` is a [StepOutput].
///   It is applied to the unwrapped element, and only when the element is present.
/// - A higher-order step is a [HigherOrder] wrapping an `FnOnce(Option<T>) -> Option<U>`.
///   It is applied to the optional itself.
/// - A [Map] step wraps an `FnOnce(T) -> U`, for any `U`.
///   It is applied like an ordinary step, but its result is always wrapped.
///
/// Closures and functions are never [HigherOrder] values, so a higher-order step is recognised
/// before the result shape is looked at.
///
/// A step that doesn't accept `T` does not implement `Transform<T>`, and the pipeline won't compile.
pub trait Transform<T> {
    /// Result type of invoking the step.
    type Invocation;
    /// Shape of [Transform::Invocation].
    type Shape: Shape;
    /// Element type of the resulting optional.
    type Element;
    /// True if the step receives the optional, rather than its element.
    const HIGHER_ORDER: bool;

    /// Apply the step to `input`.
    fn transform(self, input: Option<T>) -> Option<Self::Element>;
}

impl<T, FnType, R> Transform<T> for FnType
where
    FnType: FnOnce(T) -> R,
    R: StepOutput,
{
    type Invocation = R;
    type Shape = R::Shape;
    type Element = R::Element;
    const HIGHER_ORDER: bool = false;

    fn transform(self, input: Option<T>) -> Option<R::Element> {
        match input {
            Some(value) => self(value).into_optional(),
            None => None,
        }
    }
}

impl<T, FnType, U> Transform<T> for HigherOrder<FnType>
where
    FnType: FnOnce(Option<T>) -> Option<U>,
{
    type Invocation = Option<U>;
    type Shape = FlatMapLike;
    type Element = U;
    const HIGHER_ORDER: bool = true;

    fn transform(self, input: Option<T>) -> Option<U> {
        self.invoke(input)
    }
}

impl<T, FnType, U> Transform<T> for Map<FnType>
where
    FnType: FnOnce(T) -> U,
{
    type Invocation = U;
    type Shape = MapLike;
    type Element = U;
    const HIGHER_ORDER: bool = false;

    fn transform(self, input: Option<T>) -> Option<U> {
        input.map(|value| self.invoke(value))
    }
}
