use super::*;

/// Borrows every element, giving a list of references with the same shape.
///
/// The operations consume the list they are applied to; applying them to `as_refs()` leaves the
/// original list in place.
pub trait AsRefs<'a>: HList {
    type Refs: HList + 'a;

    fn as_refs(&'a self) -> Self::Refs;
}

impl<'a> AsRefs<'a> for Nil {
    type Refs = Nil;

    fn as_refs(&'a self) -> Self::Refs {
        Nil
    }
}

impl<'a, H, T> AsRefs<'a> for Cons<H, T>
where
    T: AsRefs<'a>,
    H: 'a,
{
    type Refs = Cons<&'a H, T::Refs>;

    fn as_refs(&'a self) -> Self::Refs {
        Cons(&self.0, self.1.as_refs())
    }
}
