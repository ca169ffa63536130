//! The operations shared by every mergeable priority queue in this crate.

/// A min-priority queue that can absorb another queue of the same type faster than rebuilding
/// it from scratch.
///
/// Each implementation exclusively owns its keys. Merging moves every key out of `other` and
/// into `self`, so `other` is always empty afterwards.
///
/// # Examples
///
/// ```
/// use mergeable_heaps::{BinomialQueue, LeftistTree, MergeableHeap};
///
/// fn drain<H: MergeableHeap<u32>>(mut heap: H) -> Vec<u32> {
///     let mut ret = Vec::new();
///     while let Some(key) = heap.pop() {
///         ret.push(key);
///     }
///     ret
/// }
///
/// let mut queue = BinomialQueue::new();
/// queue.push(2);
/// queue.push(1);
/// assert_eq!(drain(queue), vec![1, 2]);
///
/// let mut tree = LeftistTree::new();
/// tree.push(2);
/// tree.push(1);
/// assert_eq!(drain(tree), vec![1, 2]);
/// ```
pub trait MergeableHeap<T>
where
    T: Ord,
{
    /// Returns the number of keys in the heap.
    fn len(&self) -> usize;

    /// Returns `true` if the heap contains no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the minimum key, or `None` if the heap is empty.
    fn peek(&self) -> Option<&T>;

    /// Inserts a key into the heap.
    fn push(&mut self, key: T);

    /// Removes and returns the minimum key, or `None` if the heap is empty.
    fn pop(&mut self) -> Option<T>;

    /// Moves every key of `other` into `self`, leaving `other` empty.
    fn merge(&mut self, other: &mut Self);

    /// Removes every key from the heap.
    fn clear(&mut self);
}
