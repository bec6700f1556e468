// Copying the trick from https://doc.rust-lang.org/src/core/tuple.rs.html to implement lots of implementations.
macro_rules! tuple_impls_ {
    // Stopping critera (0-ary tuple)
    ($macro:ident) => {
        $macro!();
    };
    // Running criteria (1-ary tuple)
    ($macro:ident, $T:ident) => {
        crate::macros::tuple_impls_!($macro);
        $macro!($T);
    };
    // Running criteria (n-ary tuple)
    ($macro:ident, $T:ident , $($TailT:ident),*) => {
        crate::macros::tuple_impls_!($macro, $($TailT),*);
        $macro!($T, $($TailT),*);
    };
}
pub(crate) use tuple_impls_;

/// This macro invokes another macro repeatedly, each time with one more type parameter.
/// This is used to generate tuple specializations.
macro_rules! tuple_impls {
    ($macro:ident) => {
        crate::macros::tuple_impls_!($macro, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16);
    };
}
pub(crate) use tuple_impls;
