use super::HList;

pub trait HListLen {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<L> HListLen for L
where
    L: HList,
{
    fn len(&self) -> usize {
        <Self as HList>::LEN
    }
}

pub const fn len<L: HList>() -> usize {
    L::LEN
}

crate::const_assert!(len::<crate::HList![]>() == 0);
crate::const_assert!(len::<crate::HList![i32]>() == 1);
crate::const_assert!(len::<crate::HList![i32, f64]>() == 2);
crate::const_assert!(len::<crate::HList![i32, i32]>() == 2);
