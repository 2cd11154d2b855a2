use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use tylist_utils::std_error_pp::StdErrorPP;

use crate::config::SeqConfig;
use crate::error::SeqError;
use crate::tree::Tree;

mod iter;
pub use iter::Iter;

#[cfg(feature = "serde")]
mod serde_impls;


/// An immutable sequence with cheap access to both ends.
///
/// The elements are kept in a persistent height-balanced tree, first element leftmost. Every
/// `push_*`/`pop_*` copies the nodes on the path to the affected end and shares the rest of the
/// tree with the original sequence. Hence `push_*`/`pop_*` are O(log n) in the worst case, also
/// when applied over and over to the same version, `front` and `back` are O(log n), and `len` is
/// O(1).
///
/// Equality, ordering and hashing only consider the elements, in order.
pub struct Seq<T> {
    tree: Tree<T>,
    config: SeqConfig,
}

impl<T> Seq<T> {
    pub fn new() -> Self {
        Self::empty(SeqConfig::default())
    }

    pub fn with_config(config: SeqConfig) -> Result<Self, SeqError> {
        if let Err(reason) = config.validate() {
            log::warn!("rejecting {:?}: {}", config, reason.pp());
            return Err(reason.into())
        }
        Ok(Self::empty(config))
    }

    pub fn config(&self) -> SeqConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The first element, `None` if the sequence is empty.
    pub fn front(&self) -> Option<&T> {
        self.tree.first()
    }

    /// The last element, `None` if the sequence is empty.
    pub fn back(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Iterates front to back. Creating the iterator costs O(log n), each step O(1) amortised.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.tree.iter())
    }

    fn empty(config: SeqConfig) -> Self {
        Self { tree: Tree::new(), config }
    }

    fn with_tree(&self, tree: Tree<T>) -> Self {
        Self { tree, config: self.config }
    }
}

impl<T> Seq<T>
where
    T: Clone,
{
    pub fn push_front(&self, item: T) -> Self {
        self.with_tree(self.tree.push_first(item, self.config.balance_factor))
    }

    pub fn push_back(&self, item: T) -> Self {
        self.with_tree(self.tree.push_last(item, self.config.balance_factor))
    }

    /// The sequence without its first element; the empty sequence stays empty.
    pub fn pop_front(&self) -> Self {
        self.with_tree(self.tree.pop_first(self.config.balance_factor))
    }

    /// The sequence without its last element; the empty sequence stays empty.
    pub fn pop_back(&self) -> Self {
        self.with_tree(self.tree.pop_last(self.config.balance_factor))
    }
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        self.with_tree(self.tree.clone())
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Seq<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for Seq<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Seq<T> where T: Eq {}

impl<T> PartialOrd for Seq<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T> Ord for Seq<T>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Hash for Seq<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|item| item.hash(state));
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        Self { tree: Tree::build(items), config: SeqConfig::default() }
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, const N: usize> TryFrom<&Seq<T>> for [T; N]
where
    T: Clone,
{
    type Error = SeqError;

    fn try_from(seq: &Seq<T>) -> Result<Self, Self::Error> {
        if seq.len() != N {
            return Err(SeqError::LengthMismatch { expected: N, actual: seq.len() })
        }
        seq.iter()
            .cloned()
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|items: Vec<T>| SeqError::LengthMismatch { expected: N, actual: items.len() })
    }
}
