//! This crate exposes an ordered set backed by a plain (unbalanced) Binary
//! Search Tree (BST), mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element
//! and may have a left and a right child `Node`. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for elements in the tree takes `O(height)` (where `height` is the
//! number of `Node`s on the longest path from the root `Node` to a leaf `Node`).
//! [`OrderedSet`] does not rebalance itself, so inserting sorted input gives a
//! tree shaped like a linked list. Calling [`OrderedSet::balance`] rebuilds the
//! tree so every subtree is rooted at its median element.
//!
//! # Examples
//!
//! ```
//! use bst_set::OrderedSet;
//!
//! let mut set: OrderedSet<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(set.size(), 7);
//! assert_eq!(set.height(), 3);
//! assert_eq!(set.reaches_both(&1, &4), Some(&3));
//! assert_eq!(set.find_rightmost_lowest(), Some(&9));
//! assert_eq!(set.find_by_order(0), Some(&1));
//!
//! assert!(set.remove(&5));
//! assert!(!set.contains(&5));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
pub mod ordered_set;
mod print;


pub use error::{Error, Result};
pub use ordered_set::OrderedSet;
pub use print::StructureStyle;
