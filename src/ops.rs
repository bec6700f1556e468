//! The pipeline operators, as plain functions.
//!
//! Each operator accepts any [Optional]: an owned `Option<T>`, a `&Option<T>`, a `&mut Option<T>`, or a [Pipe](crate::Pipe).
//! The `|` syntax of [Pipe](crate::Pipe) is built on top of these.

use crate::classify::Fallback;
use crate::optional::Optional;
use crate::output::StepOutput;
use crate::step::Transform;

/// Apply `step` to `input`.
///
/// For an ordinary step:
/// if `input` is absent, the step is not invoked and the result is absent.
/// Otherwise the step is invoked on the element.
/// An optional result is returned as is, a plain result is wrapped as present.
///
/// A [higher-order step](crate::HigherOrder) is always invoked, with the whole optional.
/// ```
/// use optional_pipeline::ops::transform_if_present;
///
/// assert_eq!(Some(4), transform_if_present(Some(2), |v: i32| v * 2));
/// assert_eq!(None, transform_if_present(Some(-2), |v: i32| (v > 0).then_some(v)));
/// assert_eq!(None, transform_if_present(None, |v: i32| v * 2));
/// ```
pub fn transform_if_present<O, S>(input: O, step: S) -> Option<S::Element>
where
    O: Optional,
    S: Transform<O::Element>,
{
    step.transform(input.into_option())
}

/// Supply a value, if `input` is absent.
///
/// A present `input` is returned unchanged, and `fallback` is not invoked.
/// If `input` is absent, `fallback` is invoked.
/// It may return the element itself, or an optional of the element.
/// ```
/// use optional_pipeline::ops::recover_if_absent;
///
/// assert_eq!(Some(1), recover_if_absent(Some(1), || 2));
/// assert_eq!(Some(2), recover_if_absent(None, || 2));
/// assert_eq!(None, recover_if_absent(None::<i32>, || None));
/// ```
pub fn recover_if_absent<O, FnType, R>(input: O, fallback: FnType) -> Option<O::Element>
where
    O: Optional,
    FnType: FnOnce() -> R,
    R: StepOutput<Element = O::Element>,
{
    match input.into_option() {
        Some(value) => Some(value),
        None => fallback().into_optional(),
    }
}

/// Unwrap `input`, using `fallback` when it is absent.
///
/// `fallback` is either the fallback value, or a zero-argument callable producing it.
/// A callable is only invoked if `input` is absent.
/// ```
/// use optional_pipeline::ops::extract_or_default;
///
/// assert_eq!(1, extract_or_default(Some(1), 0));
/// assert_eq!(0, extract_or_default(None, 0));
/// assert_eq!(i32::MAX, extract_or_default(None, || i32::MAX));
/// ```
pub fn extract_or_default<O, Arg, F>(input: O, fallback: F) -> O::Element
where
    O: Optional,
    F: Fallback<O::Element, Arg>,
{
    match input.into_option() {
        Some(value) => value,
        None => fallback.produce(),
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_or_default, recover_if_absent, transform_if_present};
    use crate::hof::{filter_if, match_some};
    use rand::Rng;
    use std::cell::Cell;

    fn same<T: ?Sized>(v: &T) -> &T {
        v
    }

    fn same_mut<T: ?Sized>(v: &mut T) -> &mut T {
        v
    }

    #[test]
    fn absence_propagates_without_invocation() {
        let calls = Cell::new(0);
        let count = |v: i32| {
            calls.set(calls.get() + 1);
            v
        };
        let count_optional = |v: i32| {
            calls.set(calls.get() + 1);
            Some(v)
        };

        assert_eq!(None, transform_if_present(None, count));
        assert_eq!(None, transform_if_present(None, count_optional));
        assert_eq!(None, transform_if_present(&None::<i32>, |v: &i32| *v));
        assert_eq!(0, calls.get());
    }

    #[test]
    fn absence_propagates_for_random_steps() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let offset: i64 = rng.gen();
            let invoked = Cell::new(false);
            let step = |v: i64| {
                invoked.set(true);
                v.wrapping_add(offset)
            };
            assert_eq!(None, transform_if_present(None, step));
            assert!(!invoked.get());
        }
    }

    #[test]
    fn shared_reference_passthrough_keeps_identity() {
        let op = Some(String::from("kept"));
        let out = transform_if_present(&op, same::<String>).unwrap();
        assert!(std::ptr::eq(op.as_ref().unwrap(), out));

        let out = transform_if_present(&op, Some::<&String>).unwrap();
        assert!(std::ptr::eq(op.as_ref().unwrap(), out));
    }

    #[test]
    fn mutable_reference_passthrough_keeps_identity() {
        let mut op = Some(1);
        let expected: *const i32 = op.as_ref().unwrap();
        let out = transform_if_present(&mut op, same_mut::<i32>).unwrap();
        *out += 1;
        assert!(std::ptr::eq(expected, out));
        assert_eq!(Some(2), op);
    }

    #[test]
    fn copying_step_does_not_keep_identity() {
        let op = Some(1);
        let out = transform_if_present(&op, |v: &i32| *v);
        assert_eq!(Some(1), out);
        assert!(!std::ptr::eq(op.as_ref().unwrap(), out.as_ref().unwrap()));

        let mut op = Some(1);
        let expected: *const i32 = op.as_ref().unwrap();
        let out = transform_if_present(&mut op, |v: &mut i32| *v);
        assert_eq!(Some(1), out);
        assert!(!std::ptr::eq(expected, out.as_ref().unwrap()));
    }

    #[test]
    fn flat_map_never_nests() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let v: i32 = rng.gen();
            let out: Option<i32> = transform_if_present(Some(v), |v: i32| v.checked_mul(2));
            assert_eq!(v.checked_mul(2), out);
        }
    }

    #[test]
    fn higher_order_steps_are_applied_to_the_optional() {
        assert_eq!(Some(5), transform_if_present(Some(5), filter_if(|v: &i32| *v > 0)));
        assert_eq!(None, transform_if_present(Some(-5), filter_if(|v: &i32| *v > 0)));

        let seen = Cell::new(0);
        assert_eq!(
            Some(5),
            transform_if_present(Some(5), match_some(|v: &i32| seen.set(*v)))
        );
        assert_eq!(5, seen.get());
    }

    #[test]
    fn recover_keeps_present_identity() {
        let op = Some(String::from("present"));
        let called = Cell::new(false);
        let out = recover_if_absent(&op, || {
            called.set(true);
            None
        })
        .unwrap();
        assert!(std::ptr::eq(op.as_ref().unwrap(), out));
        assert!(!called.get());
    }

    #[test]
    fn recover_accepts_plain_and_optional_fallbacks() {
        assert_eq!(
            Some(String::from("plain")),
            recover_if_absent(None, || String::from("plain"))
        );
        assert_eq!(
            Some(String::from("optional")),
            recover_if_absent(None, || Some(String::from("optional")))
        );
        assert_eq!(None, recover_if_absent(None::<String>, || None));
    }

    #[test]
    fn extract_is_lazy() {
        let calls = Cell::new(0);
        let fallback = || {
            calls.set(calls.get() + 1);
            -1
        };

        assert_eq!(7, extract_or_default(Some(7), fallback));
        assert_eq!(0, calls.get());
        assert_eq!(-1, extract_or_default(None, fallback));
        assert_eq!(1, calls.get());
    }

    #[test]
    fn extract_with_value() {
        assert_eq!(String::from("x"), extract_or_default(None, String::from("x")));
        assert_eq!(3.5, extract_or_default(Some(3.5), 0.0_f64));
    }

    #[test]
    fn extract_from_reference_returns_reference() {
        let op = Some(10);
        let fallback = 0;
        let out = extract_or_default(&op, &fallback);
        assert!(std::ptr::eq(op.as_ref().unwrap(), out));
        assert_eq!(&0, extract_or_default(&None, &fallback));
    }
}
