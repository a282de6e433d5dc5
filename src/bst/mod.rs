//! Binary search tree without any rebalancing. Operations run in time proportional to the height
//! of the tree, which degrades to the number of keys when they are inserted in sorted order.

mod map;
mod node;
mod tree;

pub use self::map::{BstMap, BstMapIntoIter, BstMapIter};
