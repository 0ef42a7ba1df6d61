//! Disjoint-set forest with path compression and union by rank.
//!
//! Parent pointers only ever link a root beneath another root, so every
//! chain ends at a self-parented node and [`DisjointSet::find`] terminates.
//! Compression rewrites pointers along a chain to its root; it never changes
//! which root a node resolves to.
use serde::Serialize;

use crate::graph::core::GraphError;
use crate::graph::ids::NodeId;
use crate::graph::index_vec::{Idx, IndexVec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subset {
    pub parent: NodeId,
    pub rank: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DisjointSet {
    subsets: IndexVec<NodeId, Subset>,
    sets: usize,
}

impl DisjointSet {
    /// `len` singleton sets, each node its own root with rank 0.
    pub fn new(len: usize) -> Self {
        Self {
            subsets: IndexVec::from_fn(len, |node| Subset {
                parent: node,
                rank: 0,
            }),
            sets: len,
        }
    }

    pub fn len(&self) -> usize {
        self.subsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }

    /// Number of disjoint sets currently in the partition.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    fn check(&self, node: NodeId) -> Result<(), GraphError> {
        if self.subsets.contains_index(node) {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node: node.index(),
                node_count: self.subsets.len(),
            })
        }
    }

    /// Representative root of the set containing `node`, compressing the
    /// visited chain so every node on it points straight at the root.
    pub fn find(&mut self, node: NodeId) -> Result<NodeId, GraphError> {
        self.check(node)?;

        let mut root = node;
        while self.subsets[root].parent != root {
            root = self.subsets[root].parent;
        }

        let mut current = node;
        while current != root {
            let next = self.subsets[current].parent;
            self.subsets[current].parent = root;
            current = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `a` and `b`. Returns `false` without
    /// touching anything when they already share a root.
    ///
    /// The lower-ranked root goes beneath the higher-ranked one; on a tie `a`'s
    /// root becomes the parent and gains one rank.
    pub fn union(&mut self, a: NodeId, b: NodeId) -> Result<bool, GraphError> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(false);
        }

        let rank_a = self.subsets[root_a].rank;
        let rank_b = self.subsets[root_b].rank;
        if rank_a < rank_b {
            self.subsets[root_a].parent = root_b;
        } else if rank_a > rank_b {
            self.subsets[root_b].parent = root_a;
        } else {
            self.subsets[root_b].parent = root_a;
            self.subsets[root_a].rank += 1;
        }
        self.sets -= 1;

        Ok(true)
    }

    pub fn same_set(&mut self, a: NodeId, b: NodeId) -> Result<bool, GraphError> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Parent links between `node` and its root, without compressing.
    pub fn depth(&self, node: NodeId) -> Result<usize, GraphError> {
        self.check(node)?;
        let mut depth = 0;
        let mut current = node;
        while self.subsets[current].parent != current {
            current = self.subsets[current].parent;
            depth += 1;
        }
        Ok(depth)
    }

    pub fn rank(&self, node: NodeId) -> Result<u32, GraphError> {
        self.check(node)?;
        Ok(self.subsets[node].rank)
    }

    pub fn subsets(&self) -> &IndexVec<NodeId, Subset> {
        &self.subsets
    }

    /// Every set as a sorted member list, ordered by smallest member.
    pub fn groups(&mut self) -> Vec<Vec<NodeId>> {
        let mut by_root: IndexVec<NodeId, Vec<NodeId>> =
            IndexVec::from_elem(Vec::new(), self.subsets.len());
        for node in self.subsets.indices() {
            if let Ok(root) = self.find(node) {
                by_root[root].push(node);
            }
        }
        let mut groups: Vec<Vec<NodeId>> = by_root
            .into_iter()
            .filter(|group| !group.is_empty())
            .collect();
        groups.sort_by_key(|group| group[0]);
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(raw: u32) -> NodeId {
        NodeId::new(raw)
    }

    #[test]
    fn new_creates_singletons() {
        let mut set = DisjointSet::new(5);
        for raw in 0..5 {
            assert_eq!(set.find(n(raw)).unwrap(), n(raw));
            assert_eq!(set.rank(n(raw)).unwrap(), 0);
        }
        assert_eq!(set.set_count(), 5);
    }

    #[test]
    fn union_of_equal_ranks_bumps_the_parent() {
        let mut set = DisjointSet::new(2);
        assert!(set.union(n(0), n(1)).unwrap());
        assert_eq!(set.find(n(1)).unwrap(), n(0));
        assert_eq!(set.rank(n(0)).unwrap(), 1);
        assert_eq!(set.rank(n(1)).unwrap(), 0);
    }

    #[test]
    fn lower_rank_goes_under_higher_rank() {
        let mut set = DisjointSet::new(3);
        set.union(n(1), n(2)).unwrap();
        // {1, 2} has rank 1, {0} has rank 0: 0 must go beneath 1.
        set.union(n(0), n(1)).unwrap();
        assert_eq!(set.find(n(0)).unwrap(), n(1));
        assert_eq!(set.rank(n(1)).unwrap(), 1);
    }

    #[test]
    fn union_within_one_set_is_a_noop() {
        let mut set = DisjointSet::new(3);
        set.union(n(0), n(1)).unwrap();
        let before = set.subsets().clone();
        assert!(!set.union(n(1), n(0)).unwrap());
        assert_eq!(set.subsets(), &before);
        assert_eq!(set.set_count(), 2);
    }

    #[test]
    fn find_is_idempotent_and_compresses() {
        // Build a chain of depth 3 by hand-ordering unions of growing trees.
        let mut set = DisjointSet::new(8);
        set.union(n(0), n(1)).unwrap();
        set.union(n(2), n(3)).unwrap();
        set.union(n(0), n(2)).unwrap();
        set.union(n(4), n(5)).unwrap();
        set.union(n(6), n(7)).unwrap();
        set.union(n(4), n(6)).unwrap();
        set.union(n(0), n(4)).unwrap();

        assert_eq!(set.depth(n(7)).unwrap(), 3);
        let first = set.find(n(7)).unwrap();
        assert_eq!(set.depth(n(7)).unwrap(), 1);
        let second = set.find(n(7)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, n(0));
    }

    #[test]
    fn out_of_range_nodes_are_rejected() {
        let mut set = DisjointSet::new(2);
        assert_eq!(
            set.find(n(2)),
            Err(GraphError::NodeOutOfRange {
                node: 2,
                node_count: 2
            })
        );
        assert!(set.union(n(0), n(9)).is_err());
        assert_eq!(set.set_count(), 2);
    }

    #[test]
    fn groups_list_members_by_smallest_node() {
        let mut set = DisjointSet::new(5);
        set.union(n(3), n(1)).unwrap();
        set.union(n(4), n(0)).unwrap();
        assert_eq!(
            set.groups(),
            vec![vec![n(0), n(4)], vec![n(1), n(3)], vec![n(2)]]
        );
    }
}
