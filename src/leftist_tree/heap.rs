use crate::heap::MergeableHeap;
use crate::leftist_tree::node::Node;
use crate::leftist_tree::tree::{self, Tree};
use log::trace;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

/// A mergeable min-priority queue implemented using a leftist tree.
///
/// A leftist tree is a heap-ordered binary tree that maintains the invariant that the
/// null-path-length of a node's left child is at least that of its right child. Merging only
/// walks right spines, which are logarithmic in length, so `push`, `pop` and `merge` all run in
/// `O(log n)`. Bulk construction through `assign`, `from` or `collect` runs in `O(n)`.
///
/// # Examples
///
/// ```
/// use mergeable_heaps::LeftistTree;
///
/// let mut tree = LeftistTree::new();
/// tree.push(3);
/// tree.push(1);
/// tree.push(2);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.peek(), Some(&1));
///
/// let mut other = LeftistTree::from(vec![0, 4]);
/// tree.merge(&mut other);
/// assert!(other.is_empty());
///
/// assert_eq!(tree.pop(), Some(0));
/// assert_eq!(tree.pop(), Some(1));
/// ```
pub struct LeftistTree<T> {
    tree: Tree<T>,
    len: usize,
}

impl<T> LeftistTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `LeftistTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::LeftistTree;
    ///
    /// let tree: LeftistTree<u32> = LeftistTree::new();
    /// ```
    pub fn new() -> Self {
        LeftistTree { tree: None, len: 0 }
    }

    /// Inserts a key into the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::LeftistTree;
    ///
    /// let mut tree = LeftistTree::new();
    /// tree.push(1);
    /// assert_eq!(tree.peek(), Some(&1));
    /// ```
    pub fn push(&mut self, key: T) {
        let node = Box::new(Node::new(key));
        self.tree = tree::merge(self.tree.take(), Some(node));
        self.len += 1;
    }

    /// Removes the minimum key of the tree and returns it. Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::LeftistTree;
    ///
    /// let mut tree = LeftistTree::new();
    /// tree.push(2);
    /// tree.push(1);
    /// assert_eq!(tree.pop(), Some(1));
    /// assert_eq!(tree.pop(), Some(2));
    /// assert_eq!(tree.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        let node = self.tree.take()?;
        let Node { key, left, right, .. } = *node;
        self.tree = tree::merge(left, right);
        self.len -= 1;
        Some(key)
    }

    /// Returns a reference to the minimum key of the tree, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::LeftistTree;
    ///
    /// let mut tree = LeftistTree::new();
    /// assert_eq!(tree.peek(), None);
    /// tree.push(1);
    /// assert_eq!(tree.peek(), Some(&1));
    /// ```
    pub fn peek(&self) -> Option<&T> {
        self.tree.as_ref().map(|node| &node.key)
    }

    /// Moves every key of `other` into the tree, leaving `other` empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::LeftistTree;
    ///
    /// let mut t1 = LeftistTree::from(vec![1, 2, 3]);
    /// let mut t2 = LeftistTree::from(vec![4, 5, 6]);
    ///
    /// t1.merge(&mut t2);
    /// assert_eq!(t1.len(), 6);
    /// assert!(t2.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self) {
        if !self.is_empty() && !other.is_empty() {
            trace!("merging leftist trees of sizes {} and {}", self.len, other.len);
        }
        self.tree = tree::merge(self.tree.take(), other.tree.take());
        self.len += mem::replace(&mut other.len, 0);
    }

    /// Replaces the contents of the tree with the keys of `iter`. The new tree is built in linear
    /// time by merging trees pairwise rather than pushing keys one at a time.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::LeftistTree;
    ///
    /// let mut tree = LeftistTree::from(vec![0]);
    /// tree.assign(vec![1, 2, 3, 4, 5, -1, -2, -3, -4, -5]);
    /// assert_eq!(tree.len(), 10);
    /// assert_eq!(tree.pop(), Some(-5));
    /// assert_eq!(tree.pop(), Some(-4));
    /// ```
    pub fn assign<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        let (tree, len) = tree::build(iter);
        self.tree = tree;
        self.len = len;
        trace!("assigned {} keys to leftist tree", len);
    }

    /// Returns an iterator over the tree. The iterator yields keys in arbitrary order.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::LeftistTree;
    ///
    /// let tree = LeftistTree::from(vec![2, 1, 3]);
    /// let mut keys: Vec<&u32> = tree.iter().collect();
    /// keys.sort();
    /// assert_eq!(keys, vec![&1, &2, &3]);
    /// ```
    pub fn iter(&self) -> LeftistTreeIter<'_, T> {
        LeftistTreeIter {
            stack: self.tree.iter().map(|node| &**node).collect(),
            remaining: self.len,
        }
    }

    /// Consumes the tree and returns its keys in non-decreasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::LeftistTree;
    ///
    /// let tree = LeftistTree::from(vec![5, 3, 8, 1, 9, 2]);
    /// assert_eq!(tree.into_sorted_vec(), vec![1, 2, 3, 5, 8, 9]);
    /// ```
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T> LeftistTree<T> {
    /// Returns the number of keys in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::LeftistTree;
    ///
    /// let mut tree = LeftistTree::new();
    /// tree.push(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::LeftistTree;
    ///
    /// let tree: LeftistTree<u32> = LeftistTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Clears the tree, removing all keys. Calling this on an empty tree does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeable_heaps::LeftistTree;
    ///
    /// let mut tree = LeftistTree::from(vec![1, 2]);
    /// tree.clear();
    /// assert_eq!(tree.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        if self.len > 0 {
            trace!("clearing leftist tree of size {}", self.len);
        }
        tree::free(&mut self.tree);
        self.len = 0;
    }
}

impl<T> Drop for LeftistTree<T> {
    fn drop(&mut self) {
        tree::free(&mut self.tree);
    }
}

impl<T> MergeableHeap<T> for LeftistTree<T>
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

impl<T> Default for LeftistTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for LeftistTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut stack: Vec<&Node<T>> = self.tree.iter().map(|node| &**node).collect();
        let mut list = f.debug_list();
        while let Some(node) = stack.pop() {
            stack.extend(node.right.as_ref().map(|right| &**right));
            stack.extend(node.left.as_ref().map(|left| &**left));
            list.entry(&node.key);
        }
        list.finish()
    }
}

impl<T> Extend<T> for LeftistTree<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        let (tree, len) = tree::build(iter);
        self.tree = tree::merge(self.tree.take(), tree);
        self.len += len;
    }
}

impl<T> FromIterator<T> for LeftistTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = LeftistTree::new();
        tree.assign(iter);
        tree
    }
}

impl<T> From<Vec<T>> for LeftistTree<T>
where
    T: Ord,
{
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T> IntoIterator for LeftistTree<T>
where
    T: Ord,
{
    type IntoIter = LeftistTreeIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { tree: self }
    }
}

impl<'a, T> IntoIterator for &'a LeftistTree<T>
where
    T: 'a + Ord,
{
    type IntoIter = LeftistTreeIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `LeftistTree<T>`.
///
/// This iterator pops keys from the tree, so it yields them in non-decreasing order.
pub struct LeftistTreeIntoIter<T> {
    tree: LeftistTree<T>,
}

impl<T> Iterator for LeftistTreeIntoIter<T>
where
    T: Ord,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len(), Some(self.tree.len()))
    }
}

impl<T> ExactSizeIterator for LeftistTreeIntoIter<T> where T: Ord {}

/// An iterator for `LeftistTree<T>`.
///
/// This iterator traverses the tree in pre-order and yields immutable references, so keys come
/// out in arbitrary order.
pub struct LeftistTreeIter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for LeftistTreeIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().map(|node| {
            self.stack.extend(node.right.as_ref().map(|right| &**right));
            self.stack.extend(node.left.as_ref().map(|left| &**left));
            self.remaining -= 1;
            &node.key
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for LeftistTreeIter<'a, T> where T: 'a {}
