use std::cmp::Ordering;

use crate::kdtree::index::{KdTree, TreeNode};
use crate::points::ColumnPoints;
use crate::r#type::CoordNum;

impl<'a, N: CoordNum, const K: usize> KdTree<'a, N, K> {
    /// Build a balanced tree over `points` by recursive median partitioning.
    ///
    /// An empty point table yields an empty tree, which is a valid value;
    /// querying it returns [`KdIndexError::EmptyTree`][crate::KdIndexError].
    /// Construction otherwise always succeeds, in O(n log²n) time and O(n)
    /// extra space.
    ///
    /// The median never moves backward past a run of equal coordinates, so
    /// inputs whose duplicates dominate the upper half of a range can degrade
    /// depth toward O(n). Queries stay correct; only balance suffers.
    pub fn build(points: ColumnPoints<'a, N, K>) -> Self {
        let n = points.len();
        let mut state = BuildState {
            points,
            perm: (0..n).collect(),
            nodes: Vec::with_capacity(n),
        };
        let root = state.build_range(0, 0, n, None);

        // Each point defines exactly one node, so the table is total.
        let mut node_of_point = vec![0; n];
        for (id, node) in state.nodes.iter().enumerate() {
            node_of_point[node.point_index] = id;
        }

        KdTree {
            points,
            nodes: state.nodes,
            root,
            node_of_point,
        }
    }
}

/// Transient construction state: the index permutation being partitioned and
/// the arena under construction. The permutation is not retained after the
/// build; every node stores its point index directly.
struct BuildState<'a, N: CoordNum, const K: usize> {
    points: ColumnPoints<'a, N, K>,
    perm: Vec<usize>,
    nodes: Vec<TreeNode<N>>,
}

impl<N: CoordNum, const K: usize> BuildState<'_, N, K> {
    /// Build the subtree over permutation slice `[start, end)`, splitting on
    /// `dim` at this level and cycling dimensions below.
    fn build_range(
        &mut self,
        dim: usize,
        start: usize,
        end: usize,
        parent: Option<usize>,
    ) -> Option<usize> {
        if end <= start {
            return None;
        }
        if end - start == 1 {
            return Some(self.push_node(dim, self.perm[start], parent));
        }

        let mid = self.median(dim, start, end);
        let next_dim = (dim + 1) % K;

        // Allocate the node first so children can link back to it.
        let id = self.push_node(dim, self.perm[mid], parent);
        let left = self.build_range(next_dim, start, mid, Some(id));
        let right = self.build_range(next_dim, mid + 1, end, Some(id));
        self.nodes[id].left = left;
        self.nodes[id].right = right;
        Some(id)
    }

    /// Rearrange `perm[start..end)` so coordinate `dim` is in order and
    /// return the median position, advanced past any run of duplicates so
    /// that everything left of it is ≤ and everything right of it is
    /// strictly greater.
    fn median(&mut self, dim: usize, start: usize, end: usize) -> usize {
        let points = &self.points;
        self.perm[start..end].sort_unstable_by(|&a, &b| {
            points
                .coord(a, dim)
                .partial_cmp(&points.coord(b, dim))
                .unwrap_or(Ordering::Equal)
        });

        let mut mid = (start + end) / 2;
        while mid + 1 < end
            && self.points.coord(self.perm[mid], dim) == self.points.coord(self.perm[mid + 1], dim)
        {
            mid += 1;
        }
        mid
    }

    fn push_node(&mut self, dim: usize, point_index: usize, parent: Option<usize>) -> usize {
        let id = self.nodes.len();
        self.nodes.push(TreeNode {
            split_dim: dim,
            point_index,
            split_value: self.points.coord(point_index, dim),
            left: None,
            right: None,
            parent,
        });
        id
    }
}
