use crate::binomial_queue::list::{self, List};
use crate::binomial_queue::node::Node;
use crate::heap::MergeableHeap;
use log::trace;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

/// A mergeable min-priority queue implemented using a binomial queue.
///
/// A binomial queue is a forest of binomial trees, at most one of each degree, kept in a root
/// list ordered by increasing degree. Merging two queues combines equal-degree trees the same way
/// binary addition propagates carries, so `push`, `pop` and `merge` all run in `O(log n)`.
///
/// # Examples
///
/// ```
/// use mergeable_heaps::BinomialQueue;
///
/// let mut queue = BinomialQueue::new();
/// queue.push(3);
/// queue.push(1);
/// queue.push(2);
///
/// assert_eq!(queue.len(), 3);
/// assert_eq!(queue.peek(), Some(&1));
///
/// let mut other = BinomialQueue::from(vec![0, 4]);
/// queue.merge(&mut other);
/// assert!(other.is_empty());
///
/// assert_eq!(queue.pop(), Some(0));
/// assert_eq!(queue.pop(), Some(1));
/// ```
pub struct BinomialQueue<T> {
    root: List<T>,
    // position of the minimum root in `root`, recomputed after every mutation of the root list
    min: Option<usize>,
    len: usize,
}

impl<T> BinomialQueue<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BinomialQueue<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::BinomialQueue;
    ///
    /// let queue: BinomialQueue<u32> = BinomialQueue::new();
    /// ```
    pub fn new() -> Self {
        BinomialQueue {
            root: None,
            min: None,
            len: 0,
        }
    }

    /// Inserts a key into the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::BinomialQueue;
    ///
    /// let mut queue = BinomialQueue::new();
    /// queue.push(1);
    /// assert_eq!(queue.peek(), Some(&1));
    /// ```
    pub fn push(&mut self, key: T) {
        let node = Box::new(Node::new(key));
        self.root = list::merge(self.root.take(), Some(node));
        self.min = list::min_position(&self.root);
        self.len += 1;
    }

    /// Removes the minimum key of the queue and returns it. Returns `None` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::BinomialQueue;
    ///
    /// let mut queue = BinomialQueue::new();
    /// queue.push(2);
    /// queue.push(1);
    /// assert_eq!(queue.pop(), Some(1));
    /// assert_eq!(queue.pop(), Some(2));
    /// assert_eq!(queue.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        let index = self.min?;
        let node = list::remove(&mut self.root, index)?;
        let Node { key, child, .. } = *node;

        self.root = list::merge(self.root.take(), list::reverse(child));
        self.min = list::min_position(&self.root);
        self.len -= 1;
        Some(key)
    }

    /// Returns a reference to the minimum key of the queue, or `None` if the queue is empty.
    ///
    /// Only the position of the minimum root is cached, so this walks the root list and runs in
    /// `O(log n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::BinomialQueue;
    ///
    /// let mut queue = BinomialQueue::new();
    /// assert_eq!(queue.peek(), None);
    /// queue.push(1);
    /// assert_eq!(queue.peek(), Some(&1));
    /// ```
    pub fn peek(&self) -> Option<&T> {
        self.min
            .and_then(|index| list::get(&self.root, index))
            .map(|node| &node.key)
    }

    /// Moves every key of `other` into the queue, leaving `other` empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::BinomialQueue;
    ///
    /// let mut q1 = BinomialQueue::from(vec![1, 2, 3]);
    /// let mut q2 = BinomialQueue::from(vec![4, 5, 6]);
    ///
    /// q1.merge(&mut q2);
    /// assert_eq!(q1.len(), 6);
    /// assert!(q2.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self) {
        if !self.is_empty() && !other.is_empty() {
            trace!("merging binomial queues of sizes {} and {}", self.len, other.len);
        }
        self.root = list::merge(self.root.take(), other.root.take());
        self.min = list::min_position(&self.root);
        self.len += mem::replace(&mut other.len, 0);
        other.min = None;
    }

    /// Replaces the contents of the queue with the keys of `iter`, pushed in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::BinomialQueue;
    ///
    /// let mut queue = BinomialQueue::from(vec![0]);
    /// queue.assign(vec![3, 1, 2]);
    /// assert_eq!(queue.len(), 3);
    /// assert_eq!(queue.peek(), Some(&1));
    /// ```
    pub fn assign<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        self.extend(iter);
        trace!("assigned {} keys to binomial queue", self.len);
    }

    /// Returns an iterator over the queue. The iterator yields keys in arbitrary order.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::BinomialQueue;
    ///
    /// let queue = BinomialQueue::from(vec![2, 1, 3]);
    /// let mut keys: Vec<&u32> = queue.iter().collect();
    /// keys.sort();
    /// assert_eq!(keys, vec![&1, &2, &3]);
    /// ```
    pub fn iter(&self) -> BinomialQueueIter<'_, T> {
        BinomialQueueIter {
            stack: self.root.iter().map(|node| &**node).collect(),
            remaining: self.len,
        }
    }

    /// Consumes the queue and returns its keys in non-decreasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::BinomialQueue;
    ///
    /// let queue = BinomialQueue::from(vec![5, 3, 8, 1, 9, 2]);
    /// assert_eq!(queue.into_sorted_vec(), vec![1, 2, 3, 5, 8, 9]);
    /// ```
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T> BinomialQueue<T> {
    /// Returns the number of keys in the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::BinomialQueue;
    ///
    /// let mut queue = BinomialQueue::new();
    /// queue.push(1);
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::BinomialQueue;
    ///
    /// let queue: BinomialQueue<u32> = BinomialQueue::new();
    /// assert!(queue.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the queue, removing all keys. Calling this on an empty queue does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::BinomialQueue;
    ///
    /// let mut queue = BinomialQueue::from(vec![1, 2]);
    /// queue.clear();
    /// assert_eq!(queue.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        if self.len > 0 {
            trace!("clearing binomial queue of size {}", self.len);
        }
        list::free(&mut self.root);
        self.min = None;
        self.len = 0;
    }
}

impl<T> Drop for BinomialQueue<T> {
    fn drop(&mut self) {
        list::free(&mut self.root);
    }
}

impl<T> MergeableHeap<T> for BinomialQueue<T>
where
    T: Ord,
{
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    fn peek(&self) -> Option<&T> {
        self.peek()
    }

    fn push(&mut self, key: T) {
        self.push(key)
    }

    fn pop(&mut self) -> Option<T> {
        self.pop()
    }

    fn merge(&mut self, other: &mut Self) {
        self.merge(other)
    }

    fn clear(&mut self) {
        self.clear()
    }
}

impl<T> Default for BinomialQueue<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BinomialQueue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut stack: Vec<&Node<T>> = self.root.iter().map(|node| &**node).collect();
        let mut list = f.debug_list();
        while let Some(node) = stack.pop() {
            stack.extend(node.child.as_ref().map(|child| &**child));
            stack.extend(node.sibling.as_ref().map(|sibling| &**sibling));
            list.entry(&node.key);
        }
        list.finish()
    }
}

impl<T> Extend<T> for BinomialQueue<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.push(key);
        }
    }
}

impl<T> FromIterator<T> for BinomialQueue<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut queue = BinomialQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> From<Vec<T>> for BinomialQueue<T>
where
    T: Ord,
{
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T> IntoIterator for BinomialQueue<T>
where
    T: Ord,
{
    type IntoIter = BinomialQueueIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { queue: self }
    }
}

impl<'a, T> IntoIterator for &'a BinomialQueue<T>
where
    T: 'a + Ord,
{
    type IntoIter = BinomialQueueIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `BinomialQueue<T>`.
///
/// This iterator pops keys from the queue, so it yields them in non-decreasing order.
pub struct BinomialQueueIntoIter<T> {
    queue: BinomialQueue<T>,
}

impl<T> Iterator for BinomialQueueIntoIter<T>
where
    T: Ord,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T> ExactSizeIterator for BinomialQueueIntoIter<T> where T: Ord {}

/// An iterator for `BinomialQueue<T>`.
///
/// This iterator walks every tree of the queue and yields immutable references in arbitrary order.
pub struct BinomialQueueIter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for BinomialQueueIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().map(|node| {
            self.stack.extend(node.child.as_ref().map(|child| &**child));
            self.stack.extend(node.sibling.as_ref().map(|sibling| &**sibling));
            self.remaining -= 1;
            &node.key
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for BinomialQueueIter<'a, T> where T: 'a {}

#[cfg(test)]
mod tests {
    use super::BinomialQueue;
    use crate::binomial_queue::list::{Iter, List};
    use crate::binomial_queue::node::Node;
    use std::cmp::Ordering;

    // Ordered by the first field only, so the second field tells equal keys apart.
    #[derive(Debug)]
    struct Tagged(u32, u32);

    impl Ord for Tagged {
        fn cmp(&self, other: &Tagged) -> Ordering {
            self.0.cmp(&other.0)
        }
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Tagged) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Tagged) -> bool {
            self.0 == other.0
        }
    }

    impl Eq for Tagged {}

    // Returns the number of nodes in the binomial tree rooted at `node`.
    fn check_tree(node: &Node<u32>) -> usize {
        let mut size = 1;
        let mut expected_degree = node.degree;
        for child in Iter::new(&node.child) {
            assert!(expected_degree > 0);
            expected_degree -= 1;
            assert_eq!(child.degree, expected_degree);
            assert!(node.key <= child.key);
            size += check_tree(child);
        }
        assert_eq!(expected_degree, 0);
        assert_eq!(size, 1 << node.degree);
        size
    }

    fn check_root_list(root: &List<u32>) -> usize {
        let mut prev_degree = None;
        let mut size = 0;
        for node in Iter::new(root) {
            if let Some(prev_degree) = prev_degree {
                assert!(prev_degree < node.degree);
            }
            prev_degree = Some(node.degree);
            size += check_tree(node);
        }
        size
    }

    fn check_queue(queue: &BinomialQueue<u32>) {
        assert_eq!(check_root_list(&queue.root), queue.len());
        assert_eq!(queue.is_empty(), queue.len() == 0);
        assert_eq!(queue.peek(), Iter::new(&queue.root).map(|node| &node.key).min());
    }

    #[test]
    fn test_len_empty() {
        let queue: BinomialQueue<u32> = BinomialQueue::new();
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let queue: BinomialQueue<u32> = BinomialQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn test_pop_empty() {
        let mut queue: BinomialQueue<u32> = BinomialQueue::new();
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_push() {
        let mut queue = BinomialQueue::new();
        for key in 0..64 {
            queue.push(64 - key);
            check_queue(&queue);
            assert_eq!(queue.peek(), Some(&(64 - key)));
        }
        // 64 keys form a single tree of degree 6
        assert_eq!(Iter::new(&queue.root).count(), 1);
        assert_eq!(queue.root.as_ref().map(|node| node.degree), Some(6));
    }

    #[test]
    fn test_root_list_matches_binary_len() {
        let mut queue = BinomialQueue::new();
        for key in 0..100 {
            queue.push(key);
        }
        let degrees: Vec<usize> = Iter::new(&queue.root).map(|node| node.degree).collect();
        // 100 = 0b1100100
        assert_eq!(degrees, vec![2, 5, 6]);
    }

    #[test]
    fn test_pop() {
        let mut queue = BinomialQueue::new();
        for key in &[5, 3, 8, 1, 9, 2, 3, 7] {
            queue.push(*key);
        }
        let mut ret = Vec::new();
        while let Some(key) = queue.pop() {
            check_queue(&queue);
            ret.push(key);
        }
        assert_eq!(ret, vec![1, 2, 3, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn test_merge() {
        let mut q1 = BinomialQueue::new();
        let mut q2 = BinomialQueue::new();
        for key in 0..13 {
            q1.push(key * 2);
        }
        for key in 0..7 {
            q2.push(key * 3 + 1);
        }
        q1.merge(&mut q2);
        check_queue(&q1);
        check_queue(&q2);
        assert_eq!(q1.len(), 20);
        assert!(q2.is_empty());
        assert_eq!(q2.peek(), None);
        assert_eq!(q1.peek(), Some(&0));
    }

    #[test]
    fn test_merge_empty() {
        let mut q1 = BinomialQueue::new();
        let mut q2 = BinomialQueue::new();
        q2.push(1);
        q1.merge(&mut q2);
        assert_eq!(q1.peek(), Some(&1));
        q2.merge(&mut q1);
        assert_eq!(q2.peek(), Some(&1));
        assert!(q1.is_empty());
        check_queue(&q1);
        check_queue(&q2);
    }

    #[test]
    fn test_clear() {
        let mut queue = BinomialQueue::from(vec![1, 2, 3]);
        queue.clear();
        check_queue(&queue);
        assert!(queue.is_empty());
        queue.clear();
        assert_eq!(queue.len(), 0);
        queue.push(4);
        assert_eq!(queue.pop(), Some(4));
    }

    #[test]
    fn test_assign() {
        let mut queue = BinomialQueue::from(vec![100, 200]);
        queue.assign(vec![1, 2, 3, 4, 5, 9, 0]);
        assert_eq!(queue.len(), 7);
        assert_eq!(queue.pop(), Some(0));
        assert_eq!(queue.pop(), Some(1));
        queue.assign(Vec::new());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_iter() {
        let queue = BinomialQueue::from(vec![4, 1, 3, 2, 5]);
        assert_eq!(queue.iter().len(), 5);
        let mut keys: Vec<&u32> = queue.iter().collect();
        keys.sort();
        assert_eq!(keys, vec![&1, &2, &3, &4, &5]);
    }

    #[test]
    fn test_into_iter() {
        let queue = BinomialQueue::from(vec![4, 1, 3, 2, 5]);
        assert_eq!(queue.into_iter().collect::<Vec<u32>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_push_equal_keys_keeps_new_root() {
        let mut queue = BinomialQueue::new();
        queue.push(Tagged(1, 0));
        queue.push(Tagged(1, 1));
        assert_eq!(queue.root.as_ref().map(|node| node.key.1), Some(1));
        assert_eq!(queue.peek().map(|key| key.1), Some(1));
        assert_eq!(queue.pop().map(|key| key.1), Some(1));
        assert_eq!(queue.pop().map(|key| key.1), Some(0));
    }

    #[test]
    fn test_debug() {
        let queue = BinomialQueue::from(vec![1]);
        assert_eq!(format!("{:?}", queue), "[1]");
    }
}
