#![crate_name = "optional_pipeline"]
#![deny(missing_docs)]

//! # A Tiny Example
//! ```
//! use optional_pipeline::{get_or, to_op};
//!
//! let outcome = to_op("42")
//!             | (|s: &str| s.parse::<i32>().ok())
//!             | (|v: i32| v * 2)
//!             | get_or(0);
//! assert_eq!(84, outcome);
//! ```
//!
//! What this does:
//! - `to_op`: declares a present starting value for the pipeline.
//! - the closures: declare transformations on that value.
//! - `get_or`: unwraps the value, with a fallback for when it went missing.
//! - `|` (the pipe symbol): used to bind them together.
//!
//! Each step runs as soon as it is bound.
//!
//! # Presence and Absence
//! A pipeline holds either a present value, or nothing at all.
//! It is an [Option], wrapped in a [Pipe].
//!
//! Once the pipeline is absent, ordinary steps are skipped.
//! They are not invoked, and the pipeline stays absent.
//! There is no error state: a step that fails, makes the pipeline absent.
//!
//! # How To Use This
//! ## Starting a Pipeline
//! A pipeline starts from a value, or from an [Option].
//! ```
//! use optional_pipeline::{to_op, OptionPipe, Pipe};
//!
//! let from_value = to_op(1);
//! let from_option = Some(1).pipe();
//! let absent = Pipe::<i32>::none();
//! assert_eq!(from_value, from_option);
//! assert!(!absent.is_present());
//! ```
//!
//! ## Transforming the Value
//! Any function, closure, or associated function taking the element can be bound as a step.
//!
//! If the step returns a plain value, that value continues the pipeline (*map*).
//! If the step returns an [Option], that option continues the pipeline (*flat_map*):
//! optionals never nest.
//! ```
//! use optional_pipeline::to_op;
//!
//! let positive = |v: i32| (v > 0).then(|| format!("+{}", v));
//! assert_eq!(Some(String::from("+1")), (to_op(1) | positive).into_inner());
//! assert_eq!(None, (to_op(-1) | positive).into_inner());
//! ```
//!
//! Step results are classified by the [StepOutput] trait.
//! Your own types need a one-line opt in with [plain_value!], before steps can return them.
//! A step wrapped in [functor::map] has its result wrapped whatever the type.
//!
//! ## Recovering from Absence
//! [or_else] supplies a value when the pipeline is absent.
//! The fallback may return the element, or an optional element.
//! `|=` does the same thing in place.
//! ```
//! use optional_pipeline::{or_else, to_op};
//!
//! let positive = |v: i32| (v > 0).then(|| format!("+{}", v));
//!
//! let outcome = to_op(-1) | positive | or_else(|| String::from("not a positive number"));
//! assert_eq!(Some(String::from("not a positive number")), outcome.into_inner());
//!
//! let mut outcome = to_op(-1) | positive;
//! outcome |= || String::from("not a positive number");
//! assert_eq!(Some(String::from("not a positive number")), outcome.into_inner());
//! ```
//!
//! ## Extracting the Value
//! [get_or] ends the pipeline, producing a plain value.
//! The fallback is either the value to use, or a function computing it.
//! A function is only invoked if the pipeline is absent.
//! ```
//! use optional_pipeline::{get_or, ok, to_op};
//!
//! let parse = ok(|s: &str| s.parse::<i32>());
//! assert_eq!(i32::MAX, to_op("not a number") | parse | get_or(|| i32::MAX));
//! assert_eq!(-1, to_op("not a number") | ok(|s: &str| s.parse::<i32>()) | get_or(-1));
//! ```
//!
//! ## Higher-Order Steps
//! Some steps need to see the optional itself.
//! Those are wrapped in [HigherOrder], and they run also when the pipeline is absent.
//! The [hof] module has the common ones: filtering and inspection.
//! ```
//! use optional_pipeline::{hof, to_op};
//! use std::cell::Cell;
//!
//! let missing = Cell::new(false);
//! let outcome = to_op(String::from("false"))
//!             | hof::filter_if(|s: &String| s == "true")
//!             | hof::match_with(|s: &String| println!("got {}", s), || missing.set(true));
//! assert_eq!(None, outcome.into_inner());
//! assert!(missing.get());
//! ```
//!
//! ## References
//! A pipeline can run over a borrowed [Option], using [to_ref_op] or [to_mut_op].
//! Steps that pass their argument through hand back the very same reference,
//! not a copy.
//! ```
//! use optional_pipeline::{hof, to_mut_op};
//!
//! let mut op = Some(String::from("abc"));
//! let _ = to_mut_op(&mut op)
//!       | hof::filter_if(|s: &&mut String| s.len() == 3)
//!       | (|s: &mut String| s.push('d'));
//! assert_eq!(Some(String::from("abcd")), op);
//! ```
//!
//! # Features
//! - `tracing` (default): log discarded errors of [ok] steps, and enable [hof::trace].

mod macros;

pub mod classify;
pub mod functor;
pub mod hof;
pub mod ops;
mod optional;
mod output;
mod pipe;
mod step;

pub use functor::{higher_order, ok, HigherOrder, Map};
pub use optional::Optional;
pub use output::{FlatMapLike, MapLike, Shape, StepOutput};
pub use pipe::{
    get_or, or_else, to_mut_op, to_op, to_ref_op, BindStep, GetOr, OptionPipe, OrElse, Pipe,
};
pub use step::Transform;
