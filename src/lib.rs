//! Mergeable min-priority queues.
//!
//! Two interchangeable implementations of the same contract, [`MergeableHeap`]:
//!
//! - [`BinomialQueue`]: a forest of binomial trees merged by carry propagation.
//! - [`LeftistTree`]: a heap-ordered binary tree whose right spine is kept short.
//!
//! Both support `push`, `pop` and `merge` in `O(log n)`.

pub mod binomial_queue;
mod heap;
pub mod leftist_tree;

pub use crate::binomial_queue::BinomialQueue;
pub use crate::heap::MergeableHeap;
pub use crate::leftist_tree::LeftistTree;
