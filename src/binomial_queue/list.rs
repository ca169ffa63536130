use crate::binomial_queue::node::Node;
use std::cmp;

/// A singly linked list of binomial trees chained through their `sibling` pointers.
pub type List<T> = Option<Box<Node<T>>>;

pub fn pop_front<T>(list: &mut List<T>) -> Option<Box<Node<T>>> {
    list.take().map(|mut node| {
        *list = node.sibling.take();
        node
    })
}

// Yields the nodes of two degree-sorted lists in non-decreasing degree order. On a tie the head
// of `rhs` is yielded first.
struct Interleave<T> {
    lhs: List<T>,
    rhs: List<T>,
}

impl<T> Interleave<T> {
    fn peek_degree(&self) -> Option<usize> {
        match (&self.lhs, &self.rhs) {
            (Some(lhs), Some(rhs)) => Some(cmp::min(lhs.degree, rhs.degree)),
            (Some(node), None) | (None, Some(node)) => Some(node.degree),
            (None, None) => None,
        }
    }
}

impl<T> Iterator for Interleave<T> {
    type Item = Box<Node<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let take_lhs = match (&self.lhs, &self.rhs) {
            (Some(lhs), Some(rhs)) => lhs.degree < rhs.degree,
            (Some(_), None) => true,
            _ => false,
        };
        if take_lhs {
            pop_front(&mut self.lhs)
        } else {
            pop_front(&mut self.rhs)
        }
    }
}

/// Merges two root lists sorted by strictly increasing degree into a single root list with at
/// most one tree of each degree.
///
/// Equal-degree neighbours are linked like a carry in binary addition. A pair is only linked when
/// no third tree of the same degree follows it, so a carry never produces three trees of one
/// degree. When both roots hold equal keys, the earlier node becomes the parent.
pub fn merge<T>(lhs: List<T>, rhs: List<T>) -> List<T>
where
    T: Ord,
{
    let mut nodes = Interleave { lhs, rhs };
    let mut curr = match nodes.next() {
        Some(node) => node,
        None => return None,
    };

    let mut head = None;
    let mut tail = &mut head;
    while let Some(mut next) = nodes.next() {
        if curr.degree != next.degree || nodes.peek_degree() == Some(curr.degree) {
            tail = &mut tail.insert(curr).sibling;
            curr = next;
        } else if curr.key <= next.key {
            curr.link(next);
        } else {
            next.link(curr);
            curr = next;
        }
    }
    *tail = Some(curr);
    head
}

/// Reverses a list in place. Applied to a child list, this turns decreasing degrees into a valid
/// root list.
pub fn reverse<T>(mut list: List<T>) -> List<T> {
    let mut ret = None;
    while let Some(mut node) = list {
        list = node.sibling.take();
        node.sibling = ret;
        ret = Some(node);
    }
    ret
}

/// Detaches and returns the node at `index`, or `None` if the list is shorter than that.
pub fn remove<T>(list: &mut List<T>, index: usize) -> Option<Box<Node<T>>> {
    let mut curr = list;
    for _ in 0..index {
        curr = match curr {
            Some(node) => &mut node.sibling,
            None => return None,
        };
    }
    pop_front(curr)
}

/// Returns a reference to the node at `index`.
pub fn get<T>(list: &List<T>, index: usize) -> Option<&Node<T>> {
    Iter::new(list).nth(index)
}

/// Returns the position of the first node holding the smallest key.
pub fn min_position<T>(list: &List<T>) -> Option<usize>
where
    T: Ord,
{
    let mut ret: Option<(usize, &Node<T>)> = None;
    for (index, node) in Iter::new(list).enumerate() {
        match ret {
            Some((_, min)) if min.key <= node.key => {},
            _ => ret = Some((index, node)),
        }
    }
    ret.map(|(index, _)| index)
}

/// Frees every node reachable from `list` without recursing.
pub fn free<T>(list: &mut List<T>) {
    let mut stack: Vec<Box<Node<T>>> = list.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.child.take());
        stack.extend(node.sibling.take());
    }
}

/// Iterates over the nodes of a single list, without descending into children.
pub struct Iter<'a, T> {
    current: &'a List<T>,
}

impl<'a, T> Iter<'a, T> {
    pub fn new(list: &'a List<T>) -> Self {
        Iter { current: list }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.as_ref().map(|node| {
            self.current = &node.sibling;
            &**node
        })
    }
}
