use crate::leftist_tree::node::Node;
use std::collections::VecDeque;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

/// Returns the null-path-length of `tree` counted in nodes: `0` for an empty tree and
/// `dist + 1` otherwise.
pub fn rank<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.dist + 1,
    }
}

/// Merges two leftist trees. On equal keys the root of `lhs` stays on top.
///
/// The recursion only follows right spines, whose lengths are logarithmic in the tree sizes.
pub fn merge<T>(lhs: Tree<T>, rhs: Tree<T>) -> Tree<T>
where
    T: Ord,
{
    match (lhs, rhs) {
        (None, tree) | (tree, None) => tree,
        (Some(mut lhs), Some(mut rhs)) => {
            if lhs.key > rhs.key {
                mem::swap(&mut lhs, &mut rhs);
            }
            lhs.right = merge(lhs.right.take(), Some(rhs));
            lhs.update();
            Some(lhs)
        },
    }
}

/// Builds a leftist tree from `iter` in linear time by repeatedly merging the two oldest trees
/// of a queue of singletons. Returns the tree along with its size.
pub fn build<T, I>(iter: I) -> (Tree<T>, usize)
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut queue: VecDeque<Box<Node<T>>> = iter
        .into_iter()
        .map(|key| Box::new(Node::new(key)))
        .collect();
    let len = queue.len();

    while queue.len() > 1 {
        let lhs = queue.pop_front();
        let rhs = queue.pop_front();
        queue.extend(merge(lhs, rhs));
    }

    (queue.pop_front(), len)
}

/// Frees every node of `tree` without recursing.
pub fn free<T>(tree: &mut Tree<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
