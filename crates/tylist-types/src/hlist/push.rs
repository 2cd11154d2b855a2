use super::{Cons, HList, Nil};

pub trait PushFront<I>: HList {
    type Output: HList;

    fn push_front(self, item: I) -> Self::Output;
}

pub trait PushBack<I>: HList {
    type Output: HList;

    fn push_back(self, item: I) -> Self::Output;
}

impl<I, L> PushFront<I> for L
where
    L: HList,
{
    type Output = Cons<I, Self>;

    fn push_front(self, item: I) -> Self::Output {
        Cons(item, self)
    }
}

impl<I> PushBack<I> for Nil {
    type Output = Cons<I, Self>;

    fn push_back(self, item: I) -> Self::Output {
        Cons(item, self)
    }
}

impl<I, H, T> PushBack<I> for Cons<H, T>
where
    T: PushBack<I>,
{
    type Output = Cons<H, <T as PushBack<I>>::Output>;

    fn push_back(self, item: I) -> Self::Output {
        Cons(self.0, self.1.push_back(item))
    }
}

pub type PushFrontT<L, I> = <L as PushFront<I>>::Output;
pub type PushBackT<L, I> = <L as PushBack<I>>::Output;

crate::assert_type_eq!(PushFrontT<crate::HList![], i32>, crate::HList![i32]);
crate::assert_type_eq!(PushFrontT<crate::HList![i32], f64>, crate::HList![f64, i32]);

crate::assert_type_eq!(PushBackT<crate::HList![], i32>, crate::HList![i32]);
crate::assert_type_eq!(PushBackT<crate::HList![i32], f64>, crate::HList![i32, f64]);
crate::assert_type_eq!(PushBackT<crate::HList![i32, f64], bool>, crate::HList![i32, f64, bool]);
