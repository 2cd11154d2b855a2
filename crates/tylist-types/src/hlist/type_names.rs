use std::any;

use super::*;

/// The names of the element types, front to back, as given by [`std::any::type_name`].
pub trait TypeNames: HList {
    fn type_names() -> Vec<&'static str> {
        let mut names = Vec::with_capacity(Self::LEN);
        Self::collect_type_names(&mut names);
        names
    }

    fn collect_type_names(into: &mut Vec<&'static str>);
}

impl TypeNames for Nil {
    fn collect_type_names(_into: &mut Vec<&'static str>) {}
}

impl<H, T> TypeNames for Cons<H, T>
where
    T: TypeNames,
{
    fn collect_type_names(into: &mut Vec<&'static str>) {
        into.push(any::type_name::<H>());
        T::collect_type_names(into);
    }
}
