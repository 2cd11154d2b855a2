use super::*;
use crate::select::{If, Select};

pub trait PopFront: HList {
    type Output: HList;

    fn pop_front(self) -> Self::Output;
}

/// Everything but the last element.
///
/// The head is set aside, the tail is popped, and the head is put back in front of the result;
/// a list with a single element becomes [`Nil`].
pub trait PopBack: HList {
    type Output: HList;

    fn pop_back(self) -> Self::Output;
}

impl PopFront for Nil {
    type Output = Nil;

    fn pop_front(self) -> Self::Output {
        self
    }
}

impl<H, T> PopFront for Cons<H, T>
where
    T: HList,
{
    type Output = T;

    fn pop_front(self) -> Self::Output {
        self.1
    }
}

impl PopBack for Nil {
    type Output = Nil;

    fn pop_back(self) -> Self::Output {
        self
    }
}

impl<H, T> PopBack for Cons<H, T>
where
    T: IsEmpty + PopBack,
    <T as IsEmpty>::Output: If<Nil, Cons<H, <T as PopBack>::Output>>,
    Select<<T as IsEmpty>::Output, Nil, Cons<H, <T as PopBack>::Output>>: HList,
{
    type Output = Select<<T as IsEmpty>::Output, Nil, Cons<H, <T as PopBack>::Output>>;

    fn pop_back(self) -> Self::Output {
        let Cons(head, tail) = self;
        <<T as IsEmpty>::Output as If<Nil, Cons<H, <T as PopBack>::Output>>>::select(
            Nil,
            Cons(head, tail.pop_back()),
        )
    }
}

pub type PopFrontT<L> = <L as PopFront>::Output;
pub type PopBackT<L> = <L as PopBack>::Output;

crate::assert_type_eq!(PopFrontT<crate::HList![]>, crate::HList![]);
crate::assert_type_eq!(PopFrontT<crate::HList![i32]>, crate::HList![]);
crate::assert_type_eq!(PopFrontT<crate::HList![i32, f64]>, crate::HList![f64]);

crate::assert_type_eq!(PopBackT<crate::HList![]>, crate::HList![]);
crate::assert_type_eq!(PopBackT<crate::HList![i32]>, crate::HList![]);
crate::assert_type_eq!(PopBackT<crate::HList![i32, f64]>, crate::HList![i32]);
crate::assert_type_eq!(PopBackT<crate::HList![i32, f64, bool]>, crate::HList![i32, f64]);
