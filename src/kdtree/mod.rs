//! An implementation of an immutable, arena-backed k-d tree.

#![warn(missing_docs)]

mod builder;
mod index;
mod search;
mod traversal;

pub use index::KdTree;
pub use traversal::{LevelOrder, TraversalItem};
