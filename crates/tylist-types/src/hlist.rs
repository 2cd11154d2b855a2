mod as_refs;
pub use as_refs::*;

mod back;
pub use back::*;

mod front;
pub use front::*;

mod emptiness;
pub use emptiness::*;

mod size;
pub use size::{len, HListLen};

mod pop;
pub use pop::*;

mod push;
pub use push::*;

mod type_names;
pub use type_names::TypeNames;


/// The empty list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nil;

/// A list of `H` followed by the list `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cons<H, T>(H, T);

/// Returned by [`Front`] and [`Back`] of [`Nil`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoneType;

pub trait HList: Sized {
    /// the number of elements
    const LEN: usize;
}

impl HList for Nil {
    const LEN: usize = 0;
}

impl<H, T> HList for Cons<H, T>
where
    T: HList,
{
    const LEN: usize = 1 + T::LEN;
}

impl<H, T> Cons<H, T>
where
    T: HList,
{
    pub fn new(head: H, tail: T) -> Self {
        Self(head, tail)
    }

    pub fn head(&self) -> &H {
        &self.0
    }

    pub fn tail(&self) -> &T {
        &self.1
    }

    pub fn split_front(self) -> (H, T) {
        (self.0, self.1)
    }
}

/// Names a list type: `HList![A, B]` is `Cons<A, Cons<B, Nil>>`.
#[macro_export]
macro_rules! HList {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::HList![$($tail),*]>
    };
}

/// Builds a list value: `hlist![a, b]` has the type `HList![A, B]`.
#[macro_export]
macro_rules! hlist {
    () => { $crate::Nil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::Cons::new($head, $crate::hlist![$($tail),*])
    };
}
