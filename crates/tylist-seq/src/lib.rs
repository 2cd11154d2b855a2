//! An immutable, persistent double-ended sequence.
//!
//! [`Seq`] offers the operations of a type list on runtime values: every operation returns a new
//! sequence and leaves the one it was applied to untouched, sharing as much of the structure as
//! possible. Accessing the front or the back of an empty sequence yields `None`, popping from an
//! empty sequence yields an empty sequence.
//!
//! ```
//! use tylist_seq::Seq;
//!
//! let empty = Seq::new();
//! let seq = empty.push_back(false).push_back(true);
//!
//! assert_eq!(seq.back(), Some(&true));
//! assert_eq!(seq.pop_back(), Seq::from(vec![false]));
//! assert_eq!(seq.push_back(true).len(), 3);
//!
//! assert_eq!(empty.front(), None);
//! assert_eq!(empty.pop_front(), empty);
//! ```

mod config;
mod error;
mod seq;
mod tree;

mod exports {
    pub use crate::config::SeqConfig;
    pub use crate::error::{ConfigError, SeqError};
    pub use crate::seq::{Iter, Seq};
}

pub use exports::*;
