//! tylist — lists of types, evaluated while the program compiles.
//!
//! # [Type lists](crate::types)
//!
//! A type list is an ordered sequence of types, possibly with repetitions, that exists only for
//! the compiler. It is built out of [`Nil`](crate::types::Nil) and
//! [`Cons`](crate::types::Cons), usually spelled with [`HList!`](crate::types::HList!):
//!
//! ```
//! use tylist::types::{assert_type_eq, const_assert, HList};
//! use tylist::types::{BackT, FrontT, NoneType, PopBackT, PopFrontT, PushBackT, PushFrontT};
//!
//! type L = HList![bool, f64];
//!
//! assert_type_eq!(FrontT<L>, bool);
//! assert_type_eq!(BackT<L>, f64);
//! assert_type_eq!(PushFrontT<L, u8>, HList![u8, bool, f64]);
//! assert_type_eq!(PushBackT<L, i32>, HList![bool, f64, i32]);
//! assert_type_eq!(PopFrontT<L>, HList![f64]);
//! assert_type_eq!(PopBackT<L>, HList![bool]);
//!
//! // the operations are total
//! assert_type_eq!(FrontT<HList![]>, NoneType);
//! assert_type_eq!(PopBackT<HList![]>, HList![]);
//! const_assert!(tylist::types::is_empty::<PopBackT<HList![i32]>>());
//! ```
//!
//! A violated assertion is a compilation error; nothing of the above exists at run-time.
//!
//! # [Sequences](crate::seq)
//!
//! The same operations on run-time values are provided by [`Seq`](crate::seq::Seq), an
//! immutable sequence that shares its structure between versions. Front and back of an empty
//! sequence are `None`.
//!
//! ```
//! use tylist::seq::Seq;
//!
//! let seq = Seq::from(vec!["bool", "double"]);
//! assert_eq!(seq.back(), Some(&"double"));
//! assert_eq!(seq.pop_back(), Seq::from(vec!["bool"]));
//! ```
//!
//! [`reify`] connects both: it turns a type list into the sequence of its type names.

pub mod utils {
    pub use tylist_utils::*;
}

pub mod types {
    pub use tylist_types::*;
}

#[cfg(feature = "seq")]
pub mod seq {
    pub use tylist_seq::*;
}

#[cfg(feature = "seq")]
mod reflect;
#[cfg(feature = "seq")]
pub use reflect::reify;
