//! An ordered set backed by an unbalanced Binary Search Tree. Each element is
//! stored in its own boxed node and every node exclusively owns its children.
//!
//! # Examples
//!
//! ```
//! use bst_set::OrderedSet;
//!
//! let mut set = OrderedSet::new();
//!
//! // Nothing in here yet.
//! assert!(!set.contains(&1));
//!
//! assert!(set.insert(1));
//! assert!(set.contains(&1));
//!
//! // Elements are unique.
//! assert!(!set.insert(1));
//! assert_eq!(set.size(), 1);
//!
//! assert!(set.remove(&1));
//! assert!(!set.contains(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::node::{self, Link, Node};

/// A set of unique, totally ordered elements stored in a Binary Search Tree.
pub struct OrderedSet<T> {
    pub(crate) root: Link<T>,
}

impl<T: Clone> Clone for OrderedSet<T> {
    fn clone(&self) -> Self {
        Self {
            root: node::clone_tree(&self.root),
        }
    }
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedSet<T> {
    fn drop(&mut self) {
        // Unlink children before each node drops so deep trees don't recurse.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for OrderedSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements = Vec::with_capacity(self.size());
        self.traverse(|x| elements.push(x));
        f.debug_set().entries(elements).finish()
    }
}

impl<T: Ord> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> OrderedSet<T> {
    /// Generates a new, empty `OrderedSet`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns the number of elements in the set.
    ///
    /// Every node caches the size of its subtree so this is `O(1)`.
    pub fn size(&self) -> usize {
        node::size(&self.root)
    }

    /// Returns `true` if the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of nodes on the longest path from the root down to
    /// a leaf. An empty set has a height of 0 and a single element set has a
    /// height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert_eq!(set.height(), 0);
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Calls `f` on every element in ascending order. Each call is a fresh
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::OrderedSet;
    ///
    /// let set: OrderedSet<_> = [3, 1, 2].into_iter().collect();
    /// let mut seen = Vec::new();
    /// set.traverse(|x| seen.push(*x));
    ///
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    pub fn traverse<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a T),
    {
        if let Some(root) = &self.root {
            root.traverse(&mut f);
        }
    }

    /// Returns the element of rank `i` in ascending order, `0` being the
    /// smallest element and `size() - 1` the largest. Returns `None` when `i`
    /// is out of range.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::OrderedSet;
    ///
    /// let set: OrderedSet<_> = [10, 30, 20].into_iter().collect();
    ///
    /// assert_eq!(set.find_by_order(1), Some(&20));
    /// assert_eq!(set.find_by_order(3), None);
    /// ```
    pub fn find_by_order(&self, i: usize) -> Option<&T> {
        let mut rank = i;
        let mut current = self.root.as_deref();
        while let Some(n) = current {
            let left_len = node::size(&n.left);
            current = match rank.cmp(&left_len) {
                Ordering::Less => n.left.as_deref(),
                Ordering::Equal => return Some(&n.value),
                Ordering::Greater => {
                    rank -= left_len + 1;
                    n.right.as_deref()
                }
            };
        }
        None
    }

    /// Among the nodes farthest from the root, returns the element of the one
    /// reached by preferring right turns. Returns `None` for an empty set.
    ///
    /// At each node we go right if the right subtree is non-empty and at least
    /// as tall as the left one, left if the left subtree is strictly taller,
    /// and otherwise stop.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::OrderedSet;
    ///
    /// // 5 -> 3 -> 4 is the only path of length 3.
    /// let set: OrderedSet<_> = [5, 3, 8, 4].into_iter().collect();
    /// assert_eq!(set.find_rightmost_lowest(), Some(&4));
    /// ```
    pub fn find_rightmost_lowest(&self) -> Option<&T> {
        let mut current = self.root.as_deref()?;
        loop {
            let left_height = node::height(&current.left);
            let right_height = node::height(&current.right);
            current = match (current.left.as_deref(), current.right.as_deref()) {
                (_, Some(right)) if left_height <= right_height => right,
                (Some(left), _) if left_height > right_height => left,
                _ => return Some(&current.value),
            };
        }
    }

    /// Rebuilds the tree so its root holds the element of rank `size() / 2`
    /// and, recursively, every subtree is rooted at its own rank `len / 2`
    /// element.
    ///
    /// Existing nodes are re-linked in place; no node is allocated or freed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::OrderedSet;
    ///
    /// let mut set: OrderedSet<_> = (0..7).collect();
    /// assert_eq!(set.height(), 7);
    ///
    /// set.balance();
    /// assert_eq!(set.height(), 3);
    /// assert_eq!(set.reaches_both(&0, &6), Some(&3));
    /// ```
    pub fn balance(&mut self) {
        let len = self.size();
        log::debug!("balancing {} nodes, height before: {}", len, self.height());

        let mut nodes = Vec::with_capacity(len);
        node::unlink_in_order(self.root.take(), &mut nodes);
        let mut slots: Vec<Link<T>> = nodes.into_iter().map(Some).collect();
        self.root = node::link_medians(&mut slots);

        log::debug!("balanced {} nodes, height after: {}", len, self.height());
    }
}

impl<T: Ord> OrderedSet<T> {
    /// Adds `value` to the set. Returns `false`, leaving the tree untouched, if
    /// it was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    ///
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        match &mut self.root {
            Some(root) => root.insert(value),
            None => {
                self.root = Some(Node::new_boxed(value));
                true
            }
        }
    }

    /// Returns `true` if `value` is in the set.
    pub fn contains(&self, value: &T) -> bool {
        self.root.as_ref().map_or(false, |root| root.contains(value))
    }

    /// Removes `value` from the set. Returns `false` if it was not present.
    ///
    /// A node with two children is not spliced out. Instead its in-order
    /// successor's element moves into it and the successor's node is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::OrderedSet;
    ///
    /// let mut set: OrderedSet<_> = [5, 8].into_iter().collect();
    ///
    /// assert!(set.remove(&5));
    /// assert!(!set.remove(&5));
    /// assert_eq!(set.find_by_order(0), Some(&8));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes `value` from the set and returns the element that was stored,
    /// if any.
    pub fn take(&mut self, value: &T) -> Option<T> {
        Node::remove(&mut self.root, value)
    }

    /// Returns the element of the deepest node whose subtree holds both `a`
    /// and `b` (their lowest common ancestor). Returns `None` if either is
    /// missing from the set.
    ///
    /// Subtree membership is re-checked at every step, so this is
    /// `O(height^2)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::OrderedSet;
    ///
    /// let set: OrderedSet<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(set.reaches_both(&1, &4), Some(&3));
    /// assert_eq!(set.reaches_both(&1, &8), Some(&5));
    /// assert_eq!(set.reaches_both(&1, &2), None);
    /// ```
    pub fn reaches_both(&self, a: &T, b: &T) -> Option<&T> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }

        let holds_both = |n: &Node<T>| n.contains(a) && n.contains(b);
        let mut current = self.root.as_deref()?;
        loop {
            current = match (current.left.as_deref(), current.right.as_deref()) {
                (Some(left), _) if holds_both(left) => left,
                (_, Some(right)) if holds_both(right) => right,
                _ => return Some(&current.value),
            };
        }
    }
}
