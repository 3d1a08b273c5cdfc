use crate::error::{KdIndexError, Result};
use crate::points::ColumnPoints;
use crate::r#type::CoordNum;

/// One split in the node arena, or a leaf when both children are absent.
///
/// `left`, `right` and `parent` are indices into the owning tree's arena, so
/// dropping the arena drops every node in one step and links can never
/// dangle.
#[derive(Debug)]
pub(crate) struct TreeNode<N: CoordNum> {
    /// Dimension this node compares targets on.
    pub(crate) split_dim: usize,
    /// Index into the point table of the point defining the split.
    pub(crate) point_index: usize,
    /// Coordinate `split_dim` of that point; the ≤/> boundary.
    pub(crate) split_value: N,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
    pub(crate) parent: Option<usize>,
}

/// A balanced k-d tree over a borrowed column-major point table.
///
/// Built once via [`KdTree::build`] and immutable afterwards: every query
/// takes `&self`, so an arbitrary number of threads may search the same tree
/// concurrently. The point table is borrowed, never copied, and must outlive
/// the tree.
///
/// For every node with split dimension `d` and splitting value `v`, every
/// point under its left child has coordinate `d` ≤ `v` and every point under
/// its right child has coordinate `d` strictly greater, including when many
/// points share a coordinate. Split dimensions cycle with depth.
#[derive(Debug)]
pub struct KdTree<'a, N: CoordNum, const K: usize> {
    pub(crate) points: ColumnPoints<'a, N, K>,
    pub(crate) nodes: Vec<TreeNode<N>>,
    pub(crate) root: Option<usize>,
    /// Maps each original point index to its arena node.
    pub(crate) node_of_point: Vec<usize>,
}

impl<'a, N: CoordNum, const K: usize> KdTree<'a, N, K> {
    /// The number of indexed points.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree was built from zero points.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The borrowed point table this tree indexes.
    pub fn points(&self) -> &ColumnPoints<'a, N, K> {
        &self.points
    }

    /// The height of the tree: 0 when empty, 1 for a single point.
    pub fn height(&self) -> usize {
        self.traverse().map(|item| item.depth + 1).max().unwrap_or(0)
    }

    /// The depth of the node whose split is defined by point `point_index`,
    /// or `None` when the index is out of bounds (including any query
    /// against an empty tree).
    pub fn depth_of(&self, point_index: usize) -> Option<usize> {
        let mut id = *self.node_of_point.get(point_index)?;
        let mut depth = 0;
        while let Some(parent) = self.nodes[id].parent {
            id = parent;
            depth += 1;
        }
        Some(depth)
    }

    /// Attempt to deep-copy this tree.
    ///
    /// Always returns [`KdIndexError::UnsupportedOperation`]. Parent links
    /// and fresh arena identities make a structural copy equivalent to a
    /// rebuild, so callers who need a second tree should run
    /// [`KdTree::build`] again over the same point table.
    pub fn try_clone(&self) -> Result<Self> {
        Err(KdIndexError::UnsupportedOperation(
            "Deep copy of a built tree; rebuild from the point table instead.".to_string(),
        ))
    }
}
