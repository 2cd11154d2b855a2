use super::*;
use crate::select::{If, Select};

/// The last element.
///
/// The tail is descended until it is empty, at which point [`If`] picks the head; otherwise the
/// back of the tail is taken.
pub trait Back: HList {
    type Output;

    fn back(self) -> Self::Output;
}

impl Back for Nil {
    type Output = NoneType;

    fn back(self) -> Self::Output {
        NoneType
    }
}

impl<H, T> Back for Cons<H, T>
where
    T: IsEmpty + Back,
    <T as IsEmpty>::Output: If<H, <T as Back>::Output>,
{
    type Output = Select<<T as IsEmpty>::Output, H, <T as Back>::Output>;

    fn back(self) -> Self::Output {
        let Cons(head, tail) = self;
        <<T as IsEmpty>::Output as If<H, <T as Back>::Output>>::select(head, tail.back())
    }
}

pub type BackT<L> = <L as Back>::Output;

crate::assert_type_eq!(BackT<crate::HList![]>, NoneType);
crate::assert_type_eq!(BackT<crate::HList![i32]>, i32);
crate::assert_type_eq!(BackT<crate::HList![bool, f64]>, f64);
