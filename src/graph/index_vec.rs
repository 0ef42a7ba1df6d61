//! Tables keyed by node or edge ids. A `NodeId` indexes only node tables,
//! an `EdgeId` only edge tables.
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Dense identifier: a position in some [`IndexVec`].
pub trait Idx: Copy + Ord + fmt::Debug {
    fn index(self) -> usize;
    fn from_index(index: usize) -> Self;
}

/// A `Vec<T>` addressed by `I` instead of `usize`. Serializes as a plain
/// sequence.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexVec<I, T> {
    raw: Vec<T>,
    #[serde(skip)]
    _key: PhantomData<fn(I)>,
}

impl<I: Idx, T> IndexVec<I, T> {
    fn wrap(raw: Vec<T>) -> Self {
        IndexVec {
            raw,
            _key: PhantomData,
        }
    }

    pub fn new() -> Self {
        Self::wrap(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::wrap(Vec::with_capacity(capacity))
    }

    pub fn from_elem(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        Self::wrap(vec![value; len])
    }

    /// Slot `i` holds `init(I::from_index(i))`.
    pub fn from_fn(len: usize, init: impl FnMut(I) -> T) -> Self {
        Self::wrap((0..len).map(I::from_index).map(init).collect())
    }

    /// Appends `value` and returns its id.
    pub fn push(&mut self, value: T) -> I {
        let id = I::from_index(self.raw.len());
        self.raw.push(value);
        id
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn contains_index(&self, id: I) -> bool {
        id.index() < self.raw.len()
    }

    /// Every id in the table, in order. Does not borrow the table.
    pub fn indices(&self) -> impl Iterator<Item = I> + use<I, T> {
        (0..self.raw.len()).map(I::from_index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.raw.iter()
    }

    pub fn iter_enumerated(&self) -> impl Iterator<Item = (I, &T)> {
        self.indices().zip(self.raw.iter())
    }

    pub fn get(&self, id: I) -> Option<&T> {
        self.raw.get(id.index())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.raw
    }

    pub fn into_vec(self) -> Vec<T> {
        self.raw
    }
}

impl<I: Idx, T: fmt::Debug> fmt::Debug for IndexVec<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter_enumerated()).finish()
    }
}

impl<I: Idx, T> Index<I> for IndexVec<I, T> {
    type Output = T;

    fn index(&self, id: I) -> &T {
        &self.raw[id.index()]
    }
}

impl<I: Idx, T> IndexMut<I> for IndexVec<I, T> {
    fn index_mut(&mut self, id: I) -> &mut T {
        &mut self.raw[id.index()]
    }
}

impl<I, T> IntoIterator for IndexVec<I, T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.raw.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ids::{EdgeId, NodeId};

    #[test]
    fn from_fn_assigns_values_in_index_order() {
        let table: IndexVec<NodeId, usize> = IndexVec::from_fn(4, |node: NodeId| node.index() * 10);
        assert_eq!(table.as_slice(), &[0, 10, 20, 30]);
        assert_eq!(table[NodeId::new(2)], 20);
    }

    #[test]
    fn contains_index_guards_the_upper_bound() {
        let table: IndexVec<NodeId, u8> = IndexVec::from_elem(0, 3);
        assert!(table.contains_index(NodeId::new(2)));
        assert!(!table.contains_index(NodeId::new(3)));
        assert!(table.get(NodeId::new(3)).is_none());
    }

    #[test]
    fn push_hands_out_consecutive_ids() {
        let mut table: IndexVec<EdgeId, char> = IndexVec::new();
        assert_eq!(table.push('a'), EdgeId::new(0));
        assert_eq!(table.push('b'), EdgeId::new(1));
        let ids: Vec<EdgeId> = table.indices().collect();
        assert_eq!(ids, vec![EdgeId::new(0), EdgeId::new(1)]);
        assert_eq!(format!("{table:?}"), "{e0: 'a', e1: 'b'}");
    }

    #[test]
    fn serializes_as_a_plain_sequence() {
        let table: IndexVec<NodeId, i64> = IndexVec::from_elem(7, 2);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, "[7,7]");
        let back: IndexVec<NodeId, i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
