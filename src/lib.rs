#![doc = include_str!("../README.md")]

mod error;
pub mod kdtree;
pub mod points;
mod r#type;

pub use error::{KdIndexError, Result};
pub use r#type::CoordNum;
