//! Utilities to traverse the finished tree structure.

use std::collections::VecDeque;

use crate::kdtree::index::KdTree;
use crate::r#type::CoordNum;

/// One node surfaced by [`KdTree::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalItem {
    /// Depth below the root; the root is at depth 0.
    pub depth: usize,
    /// The dimension this node splits on.
    pub split_dim: usize,
    /// Index into the point table of the point defining this node's split.
    pub point_index: usize,
}

/// A lazy level-order walk over a tree.
///
/// Finite, and read-only: consumers such as pretty-printers see every node
/// exactly once, top to bottom and left to right, without being able to
/// touch tree state.
pub struct LevelOrder<'t, 'a, N: CoordNum, const K: usize> {
    tree: &'t KdTree<'a, N, K>,
    /// Pending (arena id, depth) pairs.
    queue: VecDeque<(usize, usize)>,
}

impl<N: CoordNum, const K: usize> Iterator for LevelOrder<'_, '_, N, K> {
    type Item = TraversalItem;

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.queue.pop_front()?;
        let node = &self.tree.nodes[id];
        if let Some(left) = node.left {
            self.queue.push_back((left, depth + 1));
        }
        if let Some(right) = node.right {
            self.queue.push_back((right, depth + 1));
        }
        Some(TraversalItem {
            depth,
            split_dim: node.split_dim,
            point_index: node.point_index,
        })
    }
}

impl<'a, N: CoordNum, const K: usize> KdTree<'a, N, K> {
    /// Walk the tree in level order.
    ///
    /// Each call returns a fresh iterator, so traversal is restartable.
    pub fn traverse(&self) -> LevelOrder<'_, 'a, N, K> {
        let mut queue = VecDeque::new();
        if let Some(root) = self.root {
            queue.push_back((root, 0));
        }
        LevelOrder { tree: self, queue }
    }
}
