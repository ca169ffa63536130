//! Heap-ordered binary tree where the null-path-length of every left child is at least that of
//! its sibling, keeping the right spine logarithmic.

mod heap;
mod node;
mod tree;

pub use self::heap::{LeftistTree, LeftistTreeIntoIter, LeftistTreeIter};
