use std::sync::Arc;

type Link<T> = Option<Arc<Node<T>>>;

/// A persistent binary tree holding a sequence in order, with the first element leftmost.
///
/// Every node knows the length and the height of its subtree. The heights of the two subtrees of
/// a node differ by at most `slack`, so the tree is O(log n) deep. An update rebuilds the path
/// from the root to the changed end and shares every other subtree with the original tree.
pub(crate) struct Tree<T> {
    root: Link<T>,
}

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
    len: usize,
    height: usize,
}

impl<T> Tree<T> {
    pub(crate) fn new() -> Self {
        Self { root: None }
    }

    /// A perfectly balanced tree holding `items` in order.
    pub(crate) fn build(items: Vec<T>) -> Self {
        let len = items.len();
        Self { root: build(len, &mut items.into_iter()) }
    }

    pub(crate) fn len(&self) -> usize {
        len(&self.root)
    }

    #[cfg(test)]
    pub(crate) fn height(&self) -> usize {
        height(&self.root)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn first(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    pub(crate) fn last(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    pub(crate) fn iter(&self) -> TreeIter<'_, T> {
        TreeIter::new(&self.root)
    }

    /// Whether every node respects `slack` and carries the right length and height.
    #[cfg(test)]
    pub(crate) fn is_balanced(&self, slack: usize) -> bool {
        fn check<T>(link: &Link<T>, slack: usize) -> bool {
            match link.as_deref() {
                None => true,
                Some(node) => {
                    let (lh, rh) = (height(&node.left), height(&node.right));
                    lh.abs_diff(rh) <= slack &&
                        node.height == lh.max(rh) + 1 &&
                        node.len == len(&node.left) + len(&node.right) + 1 &&
                        check(&node.left, slack) &&
                        check(&node.right, slack)
                },
            }
        }
        check(&self.root, slack)
    }
}

impl<T> Tree<T>
where
    T: Clone,
{
    pub(crate) fn push_first(&self, value: T, slack: usize) -> Self {
        Self { root: Some(push_first(&self.root, value, slack)) }
    }

    pub(crate) fn push_last(&self, value: T, slack: usize) -> Self {
        Self { root: Some(push_last(&self.root, value, slack)) }
    }

    pub(crate) fn pop_first(&self, slack: usize) -> Self {
        Self { root: pop_first(&self.root, slack) }
    }

    pub(crate) fn pop_last(&self, slack: usize) -> Self {
        Self { root: pop_last(&self.root, slack) }
    }
}

impl<T> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Self { root: self.root.clone() }
    }
}

fn len<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.len)
}

fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

fn node<T>(left: Link<T>, value: T, right: Link<T>) -> Arc<Node<T>> {
    Arc::new(Node {
        len: len(&left) + len(&right) + 1,
        height: height(&left).max(height(&right)) + 1,
        value,
        left,
        right,
    })
}

fn build<T, I>(len: usize, items: &mut I) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None
    }
    let left_len = (len - 1) / 2;
    let left = build(left_len, items);
    let value = items.next()?;
    let right = build(len - 1 - left_len, items);
    Some(node(left, value, right))
}

fn push_first<T: Clone>(link: &Link<T>, value: T, slack: usize) -> Arc<Node<T>> {
    match link.as_deref() {
        None => node(None, value, None),
        Some(n) => balance(
            Some(push_first(&n.left, value, slack)),
            n.value.clone(),
            n.right.clone(),
            slack,
        ),
    }
}

fn push_last<T: Clone>(link: &Link<T>, value: T, slack: usize) -> Arc<Node<T>> {
    match link.as_deref() {
        None => node(None, value, None),
        Some(n) => balance(
            n.left.clone(),
            n.value.clone(),
            Some(push_last(&n.right, value, slack)),
            slack,
        ),
    }
}

fn pop_first<T: Clone>(link: &Link<T>, slack: usize) -> Link<T> {
    let n = link.as_deref()?;
    if n.left.is_none() {
        return n.right.clone()
    }
    Some(balance(pop_first(&n.left, slack), n.value.clone(), n.right.clone(), slack))
}

fn pop_last<T: Clone>(link: &Link<T>, slack: usize) -> Link<T> {
    let n = link.as_deref()?;
    if n.right.is_none() {
        return n.left.clone()
    }
    Some(balance(n.left.clone(), n.value.clone(), pop_last(&n.right, slack), slack))
}

/// Joins two subtrees whose heights differ by at most `slack + 1` into a tree whose heights
/// differ by at most `slack` at every node.
fn balance<T: Clone>(left: Link<T>, value: T, right: Link<T>, slack: usize) -> Arc<Node<T>> {
    let (lh, rh) = (height(&left), height(&right));
    if lh > rh + slack {
        log::trace!("rotating right [left-height: {}, right-height: {}]", lh, rh);
        rotate_right(left, value, right)
    } else if rh > lh + slack {
        log::trace!("rotating left [left-height: {}, right-height: {}]", lh, rh);
        rotate_left(left, value, right)
    } else {
        node(left, value, right)
    }
}

fn rotate_right<T: Clone>(left: Link<T>, value: T, right: Link<T>) -> Arc<Node<T>> {
    let Some(pivot) = left else { return node(None, value, right) };

    if height(&pivot.left) >= height(&pivot.right) {
        return node(
            pivot.left.clone(),
            pivot.value.clone(),
            Some(node(pivot.right.clone(), value, right)),
        )
    }
    match pivot.right.clone() {
        Some(inner) => node(
            Some(node(pivot.left.clone(), pivot.value.clone(), inner.left.clone())),
            inner.value.clone(),
            Some(node(inner.right.clone(), value, right)),
        ),
        None => node(Some(pivot), value, right),
    }
}

fn rotate_left<T: Clone>(left: Link<T>, value: T, right: Link<T>) -> Arc<Node<T>> {
    let Some(pivot) = right else { return node(left, value, None) };

    if height(&pivot.right) >= height(&pivot.left) {
        return node(
            Some(node(left, value, pivot.left.clone())),
            pivot.value.clone(),
            pivot.right.clone(),
        )
    }
    match pivot.left.clone() {
        Some(inner) => node(
            Some(node(left, value, inner.left.clone())),
            inner.value.clone(),
            Some(node(inner.right.clone(), pivot.value.clone(), pivot.right.clone())),
        ),
        None => node(left, value, Some(pivot)),
    }
}

/// In-order iterator from both ends. Each end keeps the path to its next node, so creating one
/// costs O(log n).
pub(crate) struct TreeIter<'a, T> {
    front: Vec<&'a Node<T>>,
    back: Vec<&'a Node<T>>,
    left: usize,
}

impl<'a, T> TreeIter<'a, T> {
    fn new(root: &'a Link<T>) -> Self {
        let mut iter = Self { front: Vec::new(), back: Vec::new(), left: len(root) };
        iter.descend_left(root.as_deref());
        iter.descend_right(root.as_deref());
        iter
    }

    fn descend_left(&mut self, mut next: Option<&'a Node<T>>) {
        while let Some(node) = next {
            self.front.push(node);
            next = node.left.as_deref();
        }
    }

    fn descend_right(&mut self, mut next: Option<&'a Node<T>>) {
        while let Some(node) = next {
            self.back.push(node);
            next = node.right.as_deref();
        }
    }
}

impl<'a, T> Clone for TreeIter<'a, T> {
    fn clone(&self) -> Self {
        Self { front: self.front.clone(), back: self.back.clone(), left: self.left }
    }
}

impl<'a, T> Iterator for TreeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None
        }
        let node = self.front.pop()?;
        self.descend_left(node.right.as_deref());
        self.left -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<'a, T> DoubleEndedIterator for TreeIter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None
        }
        let node = self.back.pop()?;
        self.descend_right(node.left.as_deref());
        self.left -= 1;
        Some(&node.value)
    }
}

impl<'a, T> ExactSizeIterator for TreeIter<'a, T> {}
