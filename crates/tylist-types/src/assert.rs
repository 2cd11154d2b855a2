/// Implemented only when `Self` and `T` are the same type.
pub trait SameAs<T: ?Sized> {}

impl<T: ?Sized> SameAs<T> for T {}

#[doc(hidden)]
pub const fn assert_same<A, B>()
where
    A: ?Sized + SameAs<B>,
    B: ?Sized,
{
}

/// Fails the compilation unless both arguments name the same type.
///
/// ```compile_fail
/// tylist_types::assert_type_eq!(tylist_types::HList![bool], tylist_types::HList![u8]);
/// ```
#[macro_export]
macro_rules! assert_type_eq {
    ($left:ty, $right:ty $(,)?) => {
        const _: () = $crate::assert_same::<$left, $right>();
    };
}

/// Fails the compilation unless the `const` condition holds.
///
/// ```compile_fail
/// tylist_types::const_assert!(<tylist_types::HList![bool] as tylist_types::HList>::LEN == 0);
/// ```
#[macro_export]
macro_rules! const_assert {
    ($cond:expr $(,)?) => {
        const _: () = ::core::assert!($cond);
    };
    ($cond:expr, $msg:literal $(,)?) => {
        const _: () = ::core::assert!($cond, $msg);
    };
}
