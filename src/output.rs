//! Classification of what a step returns.
//!
//! A step returning an [Option] is *flat_map-like*: its result is handed back as is,
//! so nested optionals never escape a pipeline.
//! A step returning anything else is *map-like*: its result is wrapped as present.
//!
//! Rust cannot express "every type except [Option]" without specialization,
//! so map-like results are the types implementing [StepOutput] with the [MapLike] shape.
//! The crate covers primitives, references, tuples and the common std containers.
//! Your own types can join in with [plain_value!](crate::plain_value).
//! For a type you don't own, wrap the step in [map](crate::functor::map):
//! its result is always wrapped, whatever the type.
//!
//! ```
//! use optional_pipeline::{plain_value, to_op};
//!
//! #[derive(Debug, PartialEq)]
//! struct Celsius(f64);
//! plain_value!(Celsius);
//!
//! let reading = to_op(21.5) | (|degrees: f64| Celsius(degrees));
//! assert_eq!(Some(Celsius(21.5)), reading.into_inner());
//! ```

use crate::macros::tuple_impls;
use crate::pipe::Pipe;
use std::borrow::{Cow, ToOwned};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::{CString, OsString};
use std::marker::PhantomData;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::num::{
    NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize, Wrapping,
};
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant, SystemTime};

/// The result class of a step.
///
/// Implemented by [MapLike] and [FlatMapLike] only.
pub trait Shape: private::Sealed {
    /// True if the step result is itself optional, and gets returned without re-wrapping.
    const FLATTENS: bool;
}

/// Shape of a step whose result is a plain value, wrapped into a present optional.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct MapLike;

/// Shape of a step whose result is itself an optional, returned directly.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct FlatMapLike;

impl Shape for MapLike {
    const FLATTENS: bool = false;
}

impl Shape for FlatMapLike {
    const FLATTENS: bool = true;
}

mod private {
    pub trait Sealed {}

    impl Sealed for super::MapLike {}
    impl Sealed for super::FlatMapLike {}
}

/// Something a step may return.
pub trait StepOutput {
    /// Element type of the optional this result turns into.
    type Element;
    /// Whether the result is map-like or flat_map-like.
    type Shape: Shape;

    /// Convert the step result into the optional that continues the pipeline.
    fn into_optional(self) -> Option<Self::Element>;
}

impl<T> StepOutput for Option<T> {
    type Element = T;
    type Shape = FlatMapLike;

    fn into_optional(self) -> Option<T> {
        self
    }
}

impl<T> StepOutput for Pipe<T> {
    type Element = T;
    type Shape = FlatMapLike;

    fn into_optional(self) -> Option<T> {
        self.into_inner()
    }
}

impl<'a, T: ?Sized> StepOutput for &'a T {
    type Element = &'a T;
    type Shape = MapLike;

    fn into_optional(self) -> Option<&'a T> {
        Some(self)
    }
}

impl<'a, T: ?Sized> StepOutput for &'a mut T {
    type Element = &'a mut T;
    type Shape = MapLike;

    fn into_optional(self) -> Option<&'a mut T> {
        Some(self)
    }
}

impl<T, const N: usize> StepOutput for [T; N] {
    type Element = [T; N];
    type Shape = MapLike;

    fn into_optional(self) -> Option<[T; N]> {
        Some(self)
    }
}

macro_rules! make_plain_unsized {
    ($($P:ident),+) => {
        $(
            impl<T: ?Sized> StepOutput for $P<T> {
                type Element = $P<T>;
                type Shape = MapLike;

                fn into_optional(self) -> Option<$P<T>> {
                    Some(self)
                }
            }
        )+
    };
}

make_plain_unsized!(Box, Rc, Arc, PhantomData);

impl<'a, B> StepOutput for Cow<'a, B>
where
    B: 'a + ToOwned + ?Sized,
{
    type Element = Cow<'a, B>;
    type Shape = MapLike;

    fn into_optional(self) -> Option<Cow<'a, B>> {
        Some(self)
    }
}

/// Declare types as plain (map-like) step results.
///
/// A step returning such a type has its result wrapped into a present optional.
///
/// ```
/// use optional_pipeline::{plain_value, to_op};
///
/// #[derive(Debug, PartialEq)]
/// struct Meters(u32);
/// #[derive(Debug, PartialEq)]
/// struct Tagged<T>(T, &'static str);
///
/// plain_value!(Meters);
/// plain_value!(impl<T> Tagged<T>);
///
/// assert_eq!(Some(Meters(3)), (to_op(3) | Meters).into_inner());
/// assert_eq!(
///     Some(Tagged(3, "three")),
///     (to_op(3) | (|n: i32| Tagged(n, "three"))).into_inner());
/// ```
#[macro_export]
macro_rules! plain_value {
    (impl<$($param:ident),+> $t:ty) => {
        impl<$($param),+> $crate::StepOutput for $t {
            type Element = $t;
            type Shape = $crate::MapLike;

            fn into_optional(self) -> ::core::option::Option<$t> {
                ::core::option::Option::Some(self)
            }
        }
    };
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::StepOutput for $t {
                type Element = $t;
                type Shape = $crate::MapLike;

                fn into_optional(self) -> ::core::option::Option<$t> {
                    ::core::option::Option::Some(self)
                }
            }
        )+
    };
}

plain_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
plain_value!(String, CString, OsString, PathBuf, Duration, Instant, SystemTime);
plain_value!(std::cmp::Ordering);
plain_value!(
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
);
plain_value!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6);
plain_value!(RangeFull);
plain_value!(impl<T> Range<T>);
plain_value!(impl<T> RangeInclusive<T>);
plain_value!(impl<T> RangeFrom<T>);
plain_value!(impl<T> RangeTo<T>);
plain_value!(impl<T> RangeToInclusive<T>);
plain_value!(impl<T> Wrapping<T>);
plain_value!(impl<T> Mutex<T>);
plain_value!(impl<T> RwLock<T>);
plain_value!(impl<T> Cell<T>);
plain_value!(impl<T> RefCell<T>);
plain_value!(impl<T> Vec<T>);
plain_value!(impl<T> VecDeque<T>);
plain_value!(impl<T> LinkedList<T>);
plain_value!(impl<T> BinaryHeap<T>);
plain_value!(impl<T> BTreeSet<T>);
plain_value!(impl<K, V> BTreeMap<K, V>);
plain_value!(impl<T, S> HashSet<T, S>);
plain_value!(impl<K, V, S> HashMap<K, V, S>);
plain_value!(impl<T, E> Result<T, E>);

macro_rules! make_plain_tuple {
    () => {
        plain_value!(());
    };
    ($($T:ident),+) => {
        plain_value!(impl<$($T),+> ($($T,)+));
    };
}

tuple_impls!(make_plain_tuple);

macro_rules! make_plain_fn_pointer {
    () => {
        plain_value!(impl<R> fn() -> R);
    };
    ($($T:ident),+) => {
        plain_value!(impl<R, $($T),+> fn($($T),+) -> R);
    };
}

tuple_impls!(make_plain_fn_pointer);

#[cfg(test)]
mod tests {
    use super::{FlatMapLike, MapLike, Shape, StepOutput};
    use crate::pipe::Pipe;
    use std::collections::HashMap;
    use std::marker::PhantomData;
    use std::net::Ipv4Addr;
    use std::num::NonZeroU32;
    use std::sync::Mutex;

    fn shape_of<R: StepOutput>(_: &R) -> bool {
        <R::Shape as Shape>::FLATTENS
    }

    #[test]
    fn optional_results_flatten() {
        assert!(shape_of(&Some(1)));
        assert!(shape_of(&None::<String>));
        assert!(FlatMapLike::FLATTENS);
    }

    #[test]
    fn plain_results_are_wrapped() {
        assert!(!shape_of(&1_u8));
        assert!(!shape_of(&String::from("x")));
        assert!(!shape_of(&(1, "one")));
        assert!(!shape_of(&HashMap::<i32, i32>::new()));
        assert!(!MapLike::FLATTENS);
        assert_eq!(Some(7), 7_i32.into_optional());
        assert_eq!(Some((1, 2, 3)), (1, 2, 3).into_optional());
    }

    #[test]
    fn std_value_types_are_plain() {
        assert!(!shape_of(&(0..3)));
        assert!(!shape_of(&(..=3)));
        assert!(!shape_of(&Ipv4Addr::LOCALHOST));
        assert!(!shape_of(&Mutex::new(1)));
        assert!(!shape_of(&PhantomData::<str>));
        assert!(!shape_of(&std::num::Wrapping(1_u8)));
        assert!(!shape_of(&(i32::abs as fn(i32) -> i32)));
        let four = NonZeroU32::MIN.saturating_add(3);
        assert!(!shape_of(&four));
        assert_eq!(Some(four), four.into_optional());
        assert_eq!(Some(0..3), (0..3).into_optional());
    }

    #[test]
    fn pipes_flatten_like_optionals() {
        assert!(shape_of(&Pipe::<i32>::none()));
        assert_eq!(Some(2), Pipe::some(2).into_optional());
        assert_eq!(None, Pipe::<i32>::none().into_optional());
    }

    #[test]
    fn nested_optional_flattens_one_level() {
        let nested: Option<Option<i32>> = Some(None);
        assert_eq!(Some(None), nested.into_optional());
        assert_eq!(None, None::<i32>.into_optional());
    }

    #[test]
    fn references_keep_identity() {
        let value = String::from("same");
        let out = (&value).into_optional().unwrap();
        assert!(std::ptr::eq(&value, out));

        let mut value = 5;
        let ptr: *const i32 = &value;
        let out = (&mut value).into_optional().unwrap();
        assert!(std::ptr::eq(ptr, out));
    }

    #[test]
    fn references_to_optionals_are_plain() {
        let inner = Some(3);
        assert!(!shape_of(&&inner));
        assert_eq!(Some(&inner), (&inner).into_optional());
    }
}
