use crate::binomial_queue::list::List;

/// A struct representing the root of a binomial tree inside a root list or a child list.
pub struct Node<T> {
    pub key: T,
    pub degree: usize,
    pub child: List<T>,
    pub sibling: List<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            degree: 0,
            child: None,
            sibling: None,
        }
    }

    // precondition: `child` is detached and has the same degree as `self`
    pub fn link(&mut self, mut child: Box<Node<T>>) {
        debug_assert_eq!(self.degree, child.degree);
        child.sibling = self.child.take();
        self.child = Some(child);
        self.degree += 1;
    }
}
