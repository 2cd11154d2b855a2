use super::*;

pub trait Front: HList {
    type Output;

    fn front(self) -> Self::Output;
}

impl Front for Nil {
    type Output = NoneType;

    fn front(self) -> Self::Output {
        NoneType
    }
}

impl<H, T> Front for Cons<H, T>
where
    T: HList,
{
    type Output = H;

    fn front(self) -> Self::Output {
        self.0
    }
}

pub type FrontT<L> = <L as Front>::Output;

crate::assert_type_eq!(FrontT<crate::HList![]>, NoneType);
crate::assert_type_eq!(FrontT<crate::HList![i32]>, i32);
