use super::*;
use crate::logic::{Bool, False, True};

/// Emptiness by the shape of the list alone, without counting its elements.
pub trait IsEmpty: HList {
    type Output: Bool;
}

impl IsEmpty for Nil {
    type Output = True;
}

impl<H, T> IsEmpty for Cons<H, T>
where
    T: HList,
{
    type Output = False;
}

pub type IsEmptyT<L> = <L as IsEmpty>::Output;

pub const fn is_empty<L: IsEmpty>() -> bool {
    <L::Output as Bool>::VALUE
}

crate::assert_type_eq!(IsEmptyT<crate::HList![]>, True);
crate::assert_type_eq!(IsEmptyT<crate::HList![i32]>, False);
crate::const_assert!(is_empty::<crate::HList![]>());
crate::const_assert!(!is_empty::<crate::HList![(), ()]>());
