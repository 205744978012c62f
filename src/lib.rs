//! This crate exposes a Binary Search Tree (BST) whose ordering is supplied by the caller rather
//! than by the stored type.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The [`Tree`] here does nothing to limit its
//! height, so the order values are inserted in decides its shape: shuffled input gives a height
//! around `O(lg N)` while sorted input gives a chain of height `N`. BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Ordering
//!
//! "Less than" above means whatever the tree's [`Comparator`] says it means. [`Tree::new`] uses
//! [`Ord`] and [`Tree::with_comparator`] accepts anything else, including closures.
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut words = Tree::with_comparator(|a: &&str, b: &&str| a.len() < b.len());
//! words.insert("kiwi");
//! words.insert("fig");
//! // Same length as "kiwi" so it is treated as a duplicate.
//! assert!(!words.insert("pear"));
//!
//! assert_eq!(words.to_string(), "fig kiwi");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod comparator;
mod error;
pub mod tree;

pub use comparator::{Comparator, NaturalOrder};
pub use error::InvariantError;
pub use tree::Tree;
