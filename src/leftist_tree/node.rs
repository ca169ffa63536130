use crate::leftist_tree::tree;
use std::mem;

/// A struct representing an internal node of a leftist tree.
pub struct Node<T> {
    pub key: T,
    pub dist: usize,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            dist: 0,
            left: None,
            right: None,
        }
    }

    // Restores the leftist property after `right` was replaced.
    pub fn update(&mut self) {
        let Node {
            ref mut dist,
            ref mut left,
            ref mut right,
            ..
        } = self;
        if tree::rank(left) < tree::rank(right) {
            mem::swap(left, right);
        }
        *dist = tree::rank(right);
    }
}
