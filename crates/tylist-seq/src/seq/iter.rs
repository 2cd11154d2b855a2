use crate::tree::TreeIter;

/// Iterator over the elements of a [`Seq`](crate::Seq), front to back, or back to front when
/// reversed.
pub struct Iter<'a, T>(pub(super) TreeIter<'a, T>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
