use tinyvec::TinyVec;

use crate::error::{KdIndexError, Result};
use crate::kdtree::index::KdTree;
use crate::points::axis_sq_dist;
use crate::r#type::CoordNum;

impl<N: CoordNum, const K: usize> KdTree<'_, N, K> {
    /// Find the stored point closest to `target`.
    ///
    /// Returns the point's index into the point table and its squared
    /// Euclidean distance to the target, or
    /// [`KdIndexError::EmptyTree`] if the tree was built from zero points.
    ///
    /// Descends to the last reachable node, then backtracks toward the root,
    /// searching a far-side subtree only when the squared distance from the
    /// target to its splitting hyperplane is strictly below the best squared
    /// distance so far. All comparisons are strict, so on an exact distance
    /// tie the candidate discovered first (the one nearest the initial
    /// descent leaf) is kept.
    ///
    /// Expected O(log n) per query; worst case O(n) on degenerate inputs
    /// such as all points sharing every coordinate.
    pub fn nearest(&self, target: &[N; K]) -> Result<(usize, N)> {
        let root = self.root.ok_or(KdIndexError::EmptyTree)?;

        let mut best = self.nodes[root].point_index;
        let mut best_dist = N::max_value();

        // Subtree roots still worth searching. Use TinyVec to avoid heap
        // allocations at typical depths.
        let mut stack: TinyVec<[usize; 33]> = TinyVec::new();
        stack.push(root);

        while let Some(subtree) = stack.pop() {
            // Descend: ≤ goes left, > goes right, stop where the chosen
            // side is absent.
            let mut cur = subtree;
            loop {
                let node = &self.nodes[cur];
                let chosen = if target[node.split_dim] <= node.split_value {
                    node.left
                } else {
                    node.right
                };
                match chosen {
                    Some(child) => cur = child,
                    None => break,
                }
            }

            // Backtrack along parent links up to the subtree root. `prev` is
            // the child we ascended out of; any other child is an unvisited
            // subtree guarded by the plane-distance test. At the deepest
            // node `prev` is `None`, which also covers the child on the far
            // side of the plane that the descent did not choose.
            let mut prev: Option<usize> = None;
            loop {
                let node = &self.nodes[cur];

                let dist = self.points.sq_dist(node.point_index, target);
                if dist < best_dist {
                    best_dist = dist;
                    best = node.point_index;
                }

                for child in [node.left, node.right] {
                    if let Some(child) = child {
                        if Some(child) != prev
                            && axis_sq_dist(target[node.split_dim], node.split_value) < best_dist
                        {
                            stack.push(child);
                        }
                    }
                }

                if cur == subtree {
                    break;
                }
                prev = Some(cur);
                match node.parent {
                    Some(parent) => cur = parent,
                    None => break,
                }
            }
        }

        Ok((best, best_dist))
    }
}
