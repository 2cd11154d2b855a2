//! Type lists evaluated entirely at compile time.
//!
//! A type list is either [`Nil`] or [`Cons<H, T>`](Cons), where `T` is a type list itself.
//! The [`HList!`] macro spells such types conveniently:
//!
//! ```
//! use tylist_types::{assert_type_eq, Cons, HList, Nil};
//!
//! assert_type_eq!(HList![bool, f64], Cons<bool, Cons<f64, Nil>>);
//! ```
//!
//! Every operation is a trait with an associated `Output` type, so the result of an operation is
//! again a type, resolved by the compiler:
//! - [`HList::LEN`] and [`IsEmpty`];
//! - [`Front`] and [`Back`], yielding [`NoneType`] for the empty list;
//! - [`PushFront`], [`PushBack`], [`PopFront`] and [`PopBack`], popping from [`Nil`] yields
//!   [`Nil`].
//!
//! ```
//! use tylist_types::{assert_type_eq, const_assert, BackT, HList, PopBackT, PushBackT};
//!
//! type L = HList![bool, f64];
//!
//! assert_type_eq!(BackT<L>, f64);
//! assert_type_eq!(PopBackT<L>, HList![bool]);
//! assert_type_eq!(PushBackT<L, i32>, HList![bool, f64, i32]);
//! const_assert!(<PushBackT<L, i32> as tylist_types::HList>::LEN == 3);
//! ```
//!
//! The lists may also carry values (one per element type), in which case the same traits
//! operate on the values:
//!
//! ```
//! use tylist_types::{hlist, Back, Front, NoneType, PopBack, PushBack};
//!
//! let list = hlist![true, 2.5_f64];
//! assert_eq!(list.push_back(3_i32).back(), 3);
//! assert_eq!(list.pop_back().front(), true);
//! assert_eq!(hlist![].back(), NoneType);
//! ```

mod assert;
mod hlist;
mod logic;
mod select;

mod exports {
    pub use crate::assert::{assert_same, SameAs};
    pub use crate::hlist::{
        is_empty, len, AsRefs, Back, BackT, Cons, Front, FrontT, HList, HListLen, IsEmpty,
        IsEmptyT, Nil, NoneType, PopBack, PopBackT, PopFront, PopFrontT, PushBack, PushBackT,
        PushFront, PushFrontT, TypeNames,
    };
    pub use crate::logic::{And, Bool, False, Not, Or, True};
    pub use crate::select::{select, If, Select};
}

pub use exports::*;
