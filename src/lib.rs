mod entry;
mod map;

pub mod avl_tree;
pub mod bst;
pub mod error;
pub mod words;

pub use crate::error::{Error, Result};
pub use crate::map::OrderedMap;
