use crate::pipe::Pipe;

/// An optional-shaped input to a pipeline.
///
/// The element type carries the reference category of the input:
/// - `Option<T>` owns its value and yields `T`;
/// - `&'a Option<T>` is a read-only view, and yields `&'a T`;
/// - `&'a mut Option<T>` is a mutable view, and yields `&'a mut T`.
///
/// Elements taken from a borrowed optional point at the storage inside that optional.
/// ```
/// use optional_pipeline::Optional;
///
/// let op = Some(String::from("kept in place"));
/// let view = (&op).into_option();
/// assert!(std::ptr::eq(view.unwrap(), op.as_ref().unwrap()));
/// ```
pub trait Optional {
    /// The unwrapped element type.
    type Element;

    /// Convert into an [Option] over the element type.
    fn into_option(self) -> Option<Self::Element>;
}

impl<T> Optional for Option<T> {
    type Element = T;

    fn into_option(self) -> Option<T> {
        self
    }
}

impl<'a, T> Optional for &'a Option<T> {
    type Element = &'a T;

    fn into_option(self) -> Option<&'a T> {
        self.as_ref()
    }
}

impl<'a, T> Optional for &'a mut Option<T> {
    type Element = &'a mut T;

    fn into_option(self) -> Option<&'a mut T> {
        self.as_mut()
    }
}

impl<T> Optional for Pipe<T> {
    type Element = T;

    fn into_option(self) -> Option<T> {
        self.into_inner()
    }
}
