use crate::classify::Fallback;
use crate::functor::{HigherOrder, Map};
use crate::ops::{extract_or_default, recover_if_absent, transform_if_present};
use crate::output::StepOutput;
use std::marker::PhantomData;
use std::ops::{BitOr, BitOrAssign, Deref};

/// An optional value, ready to be piped through steps.
///
/// `Pipe` wraps an [Option], and gives it the `|` operator.
/// Each `|` binds one step to the pipeline, and evaluates it right away.
/// ```
/// use optional_pipeline::{hof, to_op};
///
/// fn describe(v: i32) -> String {
///     format!("+{}", v)
/// }
///
/// let outcome = to_op(1)
///             | hof::filter_if(|v: &i32| *v > 0)
///             | describe;
/// assert_eq!(Some(String::from("+1")), outcome.into_inner());
/// ```
///
/// The element type decides the reference category of the pipeline:
/// a `Pipe<T>` owns its value, a `Pipe<&T>` and a `Pipe<&mut T>` refer to a value elsewhere.
/// Steps that pass a reference through hand back the same reference.
/// ```
/// use optional_pipeline::{hof, to_ref_op};
///
/// let op = Some(String::from("!"));
/// let outcome = to_ref_op(&op) | hof::filter_if(|s: &&String| !s.is_empty());
/// assert!(std::ptr::eq(op.as_ref().unwrap(), outcome.unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pipe<T> {
    op: Option<T>,
}

impl<T> Pipe<T> {
    /// Create a present pipeline.
    pub fn some(value: T) -> Self {
        Self { op: Some(value) }
    }

    /// Create an absent pipeline.
    pub fn none() -> Self {
        Self { op: None }
    }

    /// Test if the pipeline holds a value.
    pub fn is_present(&self) -> bool {
        self.op.is_some()
    }

    /// Unwrap the pipeline into its [Option].
    pub fn into_inner(self) -> Option<T> {
        self.op
    }

    /// Create a read-only reference pipeline into this one.
    pub fn as_ref(&self) -> Pipe<&T> {
        Pipe::from(self.op.as_ref())
    }

    /// Create a mutable reference pipeline into this one.
    pub fn as_mut(&mut self) -> Pipe<&mut T> {
        Pipe::from(self.op.as_mut())
    }

    /// Supply a value if the pipeline is absent.
    ///
    /// Same as `pipe | or_else(fallback)`.
    pub fn or_else<FnType, R>(self, fallback: FnType) -> Pipe<T>
    where
        FnType: FnOnce() -> R,
        R: StepOutput<Element = T>,
    {
        Pipe::from(recover_if_absent(self.op, fallback))
    }

    /// Unwrap the pipeline, using a fallback if it is absent.
    ///
    /// Same as `pipe | get_or(fallback)`.
    pub fn get_or<Arg, F>(self, fallback: F) -> T
    where
        F: Fallback<T, Arg>,
    {
        extract_or_default(self.op, fallback)
    }
}

impl<T> Default for Pipe<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Pipe<T> {
    fn from(op: Option<T>) -> Self {
        Self { op }
    }
}

impl<'a, T> From<&'a Option<T>> for Pipe<&'a T> {
    fn from(op: &'a Option<T>) -> Self {
        Self { op: op.as_ref() }
    }
}

impl<'a, T> From<&'a mut Option<T>> for Pipe<&'a mut T> {
    fn from(op: &'a mut Option<T>) -> Self {
        Self { op: op.as_mut() }
    }
}

impl<T> From<Pipe<T>> for Option<T> {
    fn from(pipe: Pipe<T>) -> Self {
        pipe.op
    }
}

impl<T> Deref for Pipe<T> {
    type Target = Option<T>;

    fn deref(&self) -> &Option<T> {
        &self.op
    }
}

/// Start a present pipeline from a value.
///
/// Passing a reference starts a reference pipeline: `to_op(&value)` is a `Pipe<&T>`.
pub fn to_op<T>(value: T) -> Pipe<T> {
    Pipe::some(value)
}

/// Start a read-only reference pipeline into an [Option].
pub fn to_ref_op<T>(op: &Option<T>) -> Pipe<&T> {
    Pipe::from(op)
}

/// Start a mutable reference pipeline into an [Option].
pub fn to_mut_op<T>(op: &mut Option<T>) -> Pipe<&mut T> {
    Pipe::from(op)
}

/// Start pipelines from an [Option].
pub trait OptionPipe<T> {
    /// Pipeline owning the value.
    fn pipe(self) -> Pipe<T>;
    /// Pipeline with read-only access to the value.
    fn pipe_ref(&self) -> Pipe<&T>;
    /// Pipeline with mutable access to the value.
    fn pipe_mut(&mut self) -> Pipe<&mut T>;
}

impl<T> OptionPipe<T> for Option<T> {
    fn pipe(self) -> Pipe<T> {
        Pipe::from(self)
    }

    fn pipe_ref(&self) -> Pipe<&T> {
        Pipe::from(self)
    }

    fn pipe_mut(&mut self) -> Pipe<&mut T> {
        Pipe::from(self)
    }
}

/// Something that can be bound to a [Pipe] using `|`.
///
/// Binding evaluates immediately.
/// The result is a new [Pipe] for transforms and recovery, or a plain value for extraction.
pub trait BindStep<T> {
    /// The result of binding.
    type Output;

    /// Apply this step to `input`.
    fn bind(self, input: Option<T>) -> Self::Output;
}

impl<T, FnType, R> BindStep<T> for FnType
where
    FnType: FnOnce(T) -> R,
    R: StepOutput,
{
    type Output = Pipe<R::Element>;

    fn bind(self, input: Option<T>) -> Self::Output {
        Pipe::from(transform_if_present(input, self))
    }
}

impl<T, FnType, U> BindStep<T> for HigherOrder<FnType>
where
    FnType: FnOnce(Option<T>) -> Option<U>,
{
    type Output = Pipe<U>;

    fn bind(self, input: Option<T>) -> Self::Output {
        Pipe::from(transform_if_present(input, self))
    }
}

impl<T, FnType, U> BindStep<T> for Map<FnType>
where
    FnType: FnOnce(T) -> U,
{
    type Output = Pipe<U>;

    fn bind(self, input: Option<T>) -> Self::Output {
        Pipe::from(transform_if_present(input, self))
    }
}

impl<T, BindStepImpl> BitOr<BindStepImpl> for Pipe<T>
where
    BindStepImpl: BindStep<T>,
{
    type Output = BindStepImpl::Output;

    fn bitor(self, rhs: BindStepImpl) -> Self::Output {
        rhs.bind(self.op)
    }
}

/// Supply a value in place, if the pipeline is absent.
///
/// The fallback takes no arguments, and returns either an element or an optional element.
/// ```
/// use optional_pipeline::Pipe;
///
/// let mut pipe = Pipe::<String>::none();
/// pipe |= || String::from("fallback");
/// assert_eq!(Some(String::from("fallback")), pipe.into_inner());
/// ```
impl<T, FnType, R> BitOrAssign<FnType> for Pipe<T>
where
    FnType: FnOnce() -> R,
    R: StepOutput<Element = T>,
{
    fn bitor_assign(&mut self, fallback: FnType) {
        let op = self.op.take();
        self.op = recover_if_absent(op, fallback);
    }
}

/// Recovery step, created by [or_else].
#[derive(Debug, Clone, Copy)]
pub struct OrElse<FnType> {
    fn_impl: FnType,
}

/// Supply a value if the pipeline is absent.
///
/// `fallback` takes no arguments. It is only invoked when the pipeline is absent.
/// It may return the element, or an optional element.
/// ```
/// use optional_pipeline::{or_else, to_op};
///
/// fn describe_positive(v: i32) -> Option<String> {
///     (v > 0).then(|| format!("+{}", v))
/// }
///
/// let outcome = to_op(-1)
///             | describe_positive
///             | or_else(|| String::from("not a positive number"));
/// assert_eq!(Some(String::from("not a positive number")), outcome.into_inner());
/// ```
pub fn or_else<FnType, R>(fallback: FnType) -> OrElse<FnType>
where
    FnType: FnOnce() -> R,
    R: StepOutput,
{
    OrElse { fn_impl: fallback }
}

impl<T, FnType, R> BindStep<T> for OrElse<FnType>
where
    FnType: FnOnce() -> R,
    R: StepOutput<Element = T>,
{
    type Output = Pipe<T>;

    fn bind(self, input: Option<T>) -> Self::Output {
        Pipe::from(recover_if_absent(input, self.fn_impl))
    }
}

/// Extraction step, created by [get_or].
pub struct GetOr<F, Arg> {
    fallback: F,
    phantom: PhantomData<fn() -> Arg>,
}

/// Unwrap the pipeline, falling back if it is absent.
///
/// `fallback` is either the fallback value, or a zero-argument callable producing it.
/// A callable is only invoked if the pipeline is absent.
/// ```
/// use optional_pipeline::{get_or, ok, to_op};
///
/// let parse = ok(|s: &str| s.parse::<i32>());
/// assert_eq!(i32::MAX, to_op("not a number") | parse | get_or(|| i32::MAX));
/// assert_eq!(12, to_op("12") | ok(|s: &str| s.parse::<i32>()) | get_or(0));
/// ```
pub fn get_or<F, Arg>(fallback: F) -> GetOr<F, Arg> {
    GetOr {
        fallback,
        phantom: PhantomData,
    }
}

impl<T, F, Arg> BindStep<T> for GetOr<F, Arg>
where
    F: Fallback<T, Arg>,
{
    type Output = T;

    fn bind(self, input: Option<T>) -> T {
        extract_or_default(input, self.fallback)
    }
}
