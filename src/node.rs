use std::cmp::Ordering;

/// An owned, possibly absent, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` stores one element and exclusively owns its two (possibly absent)
/// children. There is no parent pointer.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many nodes are in the subtree rooted at this node, itself included.
    pub(crate) len: usize,
}

/// Number of nodes in the given subtree.
pub(crate) fn size<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |n| n.len)
}

/// Number of nodes on the longest path down from the root of the given subtree.
pub(crate) fn height<T>(link: &Link<T>) -> usize {
    match link {
        None => 0,
        Some(n) => height(&n.left).max(height(&n.right)) + 1,
    }
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            len: 1,
        })
    }

    /// Inserts `value` into the subtree rooted at this node. Returns `false`
    /// (leaving the tree untouched) if it is already present.
    pub(crate) fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let child = match value.cmp(&self.value) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return false,
            Ordering::Greater => &mut self.right,
        };

        let inserted = match child {
            Some(c) => c.insert(value),
            None => {
                *child = Some(Self::new_boxed(value));
                true
            }
        };
        if inserted {
            self.len += 1;
        }
        inserted
    }

    pub(crate) fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let child = match value.cmp(&self.value) {
            Ordering::Less => &self.left,
            Ordering::Equal => return true,
            Ordering::Greater => &self.right,
        };
        child.as_ref().map_or(false, |c| c.contains(value))
    }

    /// Removes `value` from the subtree behind `link` and returns it. The link
    /// is reassigned to whatever replaces the removed node, so no empty node is
    /// ever left behind.
    pub(crate) fn remove(link: &mut Link<T>, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let node = link.as_mut()?;
        let removed = match value.cmp(&node.value) {
            Ordering::Less => Self::remove(&mut node.left, value),
            Ordering::Greater => Self::remove(&mut node.right, value),
            Ordering::Equal => {
                let target = link.take()?;
                let (removed, replacement) = target.remove_self();
                *link = replacement;
                return Some(removed);
            }
        };

        if removed.is_some() {
            node.len -= 1;
        }
        removed
    }

    /// Removes this node's element, returning it together with the subtree
    /// that takes this node's place.
    fn remove_self(mut self: Box<Self>) -> (T, Link<T>) {
        match self.right.take() {
            None => {
                log::trace!("removing node without right child, promoting left child");
                let Self { value, left, .. } = *self;
                (value, left)
            }
            Some(right) => {
                log::trace!("removing node by promoting its in-order successor");
                let (successor, rest) = right.take_min();
                let removed = std::mem::replace(&mut self.value, successor);
                self.right = rest;
                self.len -= 1;
                (removed, Some(self))
            }
        }
    }

    /// Detaches the smallest element of this subtree. Its node's right child
    /// takes its place under the former parent.
    fn take_min(mut self: Box<Self>) -> (T, Link<T>) {
        match self.left.take() {
            None => {
                let Self { value, right, .. } = *self;
                (value, right)
            }
            Some(left) => {
                let (min, rest) = left.take_min();
                self.left = rest;
                self.len -= 1;
                (min, Some(self))
            }
        }
    }

    /// Visits every element of this subtree in ascending order.
    pub(crate) fn traverse<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a T),
    {
        if let Some(left) = &self.left {
            left.traverse(f);
        }
        f(&self.value);
        if let Some(right) = &self.right {
            right.traverse(f);
        }
    }

    /// Visits every node of this subtree in reverse order (right, self, left)
    /// along with its depth below this node.
    pub(crate) fn traverse_rev_with_depth<F>(&self, depth: usize, f: &mut F) -> crate::Result<()>
    where
        F: FnMut(&T, usize) -> crate::Result<()>,
    {
        if let Some(right) = &self.right {
            right.traverse_rev_with_depth(depth + 1, f)?;
        }
        f(&self.value, depth)?;
        if let Some(left) = &self.left {
            left.traverse_rev_with_depth(depth + 1, f)?;
        }
        Ok(())
    }

    /// Recomputes the cached subtree size from the children's cached sizes.
    pub(crate) fn fix_len(&mut self) {
        self.len = size(&self.left) + size(&self.right) + 1;
    }
}

/// Deep copies the given subtree, keeping its shape. Nodes are built
/// bottom-up from an explicit stack so deep trees don't recurse.
pub(crate) fn clone_tree<T: Clone>(root: &Link<T>) -> Link<T> {
    enum Step<'a, T> {
        Visit(&'a Node<T>),
        Build(&'a Node<T>),
    }

    let mut work: Vec<Step<'_, T>> = root.as_deref().map(Step::Visit).into_iter().collect();
    let mut built: Vec<Box<Node<T>>> = Vec::new();
    while let Some(step) = work.pop() {
        match step {
            Step::Visit(n) => {
                work.push(Step::Build(n));
                if let Some(right) = n.right.as_deref() {
                    work.push(Step::Visit(right));
                }
                if let Some(left) = n.left.as_deref() {
                    work.push(Step::Visit(left));
                }
            }
            Step::Build(n) => {
                // The left child was built first, so it sits below the right one.
                let right = n.right.as_ref().and_then(|_| built.pop());
                let left = n.left.as_ref().and_then(|_| built.pop());
                built.push(Box::new(Node {
                    value: n.value.clone(),
                    left,
                    right,
                    len: n.len,
                }));
            }
        }
    }
    built.pop()
}

/// Detaches every node of `root` into `out` in ascending order. Every pushed
/// node has both children unlinked.
pub(crate) fn unlink_in_order<T>(root: Link<T>, out: &mut Vec<Box<Node<T>>>) {
    let mut stack = Vec::new();
    let mut current = root;
    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }
        match stack.pop() {
            Some(mut node) => {
                current = node.right.take();
                out.push(node);
            }
            None => break,
        }
    }
}

/// Links the given sorted, childless nodes into a tree where every subtree is
/// rooted at the node of rank `len / 2` within it.
pub(crate) fn link_medians<T>(nodes: &mut [Link<T>]) -> Link<T> {
    if nodes.is_empty() {
        return None;
    }
    let mid = nodes.len() / 2;
    let (lower, rest) = nodes.split_at_mut(mid);
    let (root, upper) = rest.split_at_mut(1);

    let mut root = root[0].take()?;
    root.left = link_medians(lower);
    root.right = link_medians(upper);
    root.fix_len();
    Some(root)
}
