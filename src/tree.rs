//! An unbalanced BST whose values are placed by a [`Comparator`] handed to it on construction.
//!
//! Each `Node` owns its children through a `Box` and there are no parent pointers, so every
//! node is reachable from exactly one place. Nothing rebalances the tree, so its shape depends
//! only on insertion order and inserting sorted values produces a chain as tall as the tree is
//! long. To survive that, all operations walk the tree with loops and explicit stacks rather than
//! recursion. That includes dropping it.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new();
//! for value in [5, 11, 8, 9, 15, 2] {
//!     tree.insert(value);
//! }
//! assert_eq!(tree.inorder(), vec![&2, &5, &8, &9, &11, &15]);
//!
//! // Equivalent values are ignored rather than overwritten.
//! assert!(!tree.insert(5));
//! assert_eq!(tree.len(), 6);
//!
//! // 5 has two children so its in-order successor, 8, takes its place.
//! assert_eq!(tree.delete(&5), Some(5));
//! assert_eq!(tree.root(), Some(&8));
//! assert!(!tree.find(&5));
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::mem;

use crate::comparator::{Comparator, NaturalOrder};
use crate::error::InvariantError;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    /// The node holding the smallest value of the subtree rooted here. Found by following left
    /// links until there are none.
    fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }

    fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }

    /// Unlinks the minimum of the subtree rooted at `root`, returning what remains of the subtree
    /// and the unlinked node. The walk is the same as [`Node::leftmost`]. The minimum never has a
    /// left child so its right child (if any) is promoted into its place.
    fn split_minimum(mut root: Box<Self>) -> (Link<T>, Box<Self>) {
        // Stop one level early so that `parent.left` is the minimum.
        let mut parent = &mut root;
        while parent.left.as_ref().map_or(false, |left| left.left.is_some()) {
            parent = match parent.left {
                Some(ref mut left) => left,
                None => break,
            };
        }

        match parent.left.take() {
            Some(mut minimum) => {
                parent.left = minimum.right.take();
                (Some(root), minimum)
            }
            // No left child means the root itself is the minimum.
            None => {
                let rest = root.right.take();
                (rest, root)
            }
        }
    }
}

/// Which child to descend into from a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    /// The side of a node holding `node_value` that `value` belongs on, or `None` if the two are
    /// equivalent.
    fn toward<T, C>(less: &C, value: &T, node_value: &T) -> Option<Self>
    where
        C: Comparator<T>,
    {
        if less.less(value, node_value) {
            Some(Side::Left)
        } else if less.less(node_value, value) {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Walks down from `link` to the link that either holds a value equivalent to `value` or is the
/// empty spot where `value` would be inserted.
fn descend<'a, T, C>(mut link: &'a mut Link<T>, value: &T, less: &C) -> &'a mut Link<T>
where
    C: Comparator<T>,
{
    loop {
        let side = link
            .as_deref()
            .and_then(|node| Side::toward(less, value, &node.value));
        link = match (side, link) {
            (Some(Side::Left), Some(node)) => &mut node.left,
            (Some(Side::Right), Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

/// A Binary Search Tree of `T`s ordered by the comparator `C`. This can be used for inserting,
/// finding, and deleting values and for listing them in order.
///
/// Values the comparator considers equivalent are stored once: the first one inserted wins.
pub struct Tree<T, C = NaturalOrder> {
    root: Link<T>,
    len: usize,
    less: C,
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Generates a new, empty `Tree` ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> Default for Tree<T, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new, empty `Tree` ordered by `less`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::with_comparator(|a: &String, b: &String| a < b);
    /// for fruit in ["banana", "apple", "cherry"] {
    ///     tree.insert(fruit.to_string());
    /// }
    ///
    /// assert_eq!(tree.inorder(), vec!["apple", "banana", "cherry"]);
    /// ```
    pub fn with_comparator(less: C) -> Self {
        Self {
            root: None,
            len: 0,
            less,
        }
    }

    /// The comparator this tree was built with.
    pub fn comparator(&self) -> &C {
        &self.less
    }

    /// How many values are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no values are stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The value held by the root node.
    pub fn root(&self) -> Option<&T> {
        self.root.as_deref().map(|root| &root.value)
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root.as_deref().map(|root| &root.leftmost().value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root.as_deref().map(|root| &root.rightmost().value)
    }

    /// Number of nodes on the longest path from the root to a leaf. An empty tree has a height
    /// of 0 and a tree with just a root has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }
        height
    }

    /// Returns every value in ascending order. Each call walks the whole tree again.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree: Tree<_> = vec![3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.inorder(), vec![&1, &2, &3]);
    /// ```
    pub fn inorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        self.for_each_inorder(|value| values.push(value));
        values
    }

    /// Drops every value in the tree.
    pub fn clear(&mut self) {
        if self.len > 0 {
            log::debug!("Tree::clear: dropping {} values", self.len);
        }

        // Dropping the root directly would recurse once per level.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Calls `visit` on each value, left subtree then node then right subtree.
    fn for_each_inorder<'a>(&'a self, mut visit: impl FnMut(&'a T)) {
        let mut stack = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            visit(&node.value);
            current = node.right.as_deref();
        }
    }
}

impl<T, C> Tree<T, C>
where
    C: Comparator<T>,
{
    /// Inserts `value` into the tree. Returns `false`, leaving the tree untouched, if an
    /// equivalent value is already stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let slot = descend(&mut self.root, &value, &self.less);
        if slot.is_some() {
            log::trace!("Tree::insert: equivalent value already stored");
            return false;
        }

        *slot = Some(Node::new_boxed(value));
        self.len += 1;
        log::trace!("Tree::insert: new leaf, len {}", self.len);
        true
    }

    /// Potentially finds the stored value equivalent to `value` under the comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// // Only the first field takes part in the ordering.
    /// let mut tree = Tree::with_comparator(|a: &(u8, char), b: &(u8, char)| a.0 < b.0);
    /// tree.insert((1, 'a'));
    ///
    /// assert_eq!(tree.get(&(1, 'z')), Some(&(1, 'a')));
    /// assert_eq!(tree.get(&(2, 'a')), None);
    /// ```
    pub fn get(&self, value: &T) -> Option<&T> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match Side::toward(&self.less, value, &node.value) {
                Some(Side::Left) => node.left.as_deref(),
                Some(Side::Right) => node.right.as_deref(),
                None => return Some(&node.value),
            };
        }
        None
    }

    /// Whether `value` is stored in the tree. The descent is driven by the comparator but the
    /// node it lands on must also be `==` to `value`: a stored value that is merely equivalent
    /// doesn't count. Use [`Tree::get`] for a lookup based on the comparator alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.find(&1));
    /// assert!(!tree.find(&42));
    /// ```
    pub fn find(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.get(value).map_or(false, |stored| stored == value)
    }

    /// Deletes the value equivalent to `value` from the tree and returns it. If the tree holds no
    /// such value, nothing happens.
    ///
    /// A node with two children isn't unlinked. Its in-order successor (the minimum of its right
    /// subtree) is unlinked instead and the successor's value moves into the node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.delete(&1), Some(1));
    /// assert_eq!(tree.delete(&1), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let slot = descend(&mut self.root, value, &self.less);
        let mut target = slot.take()?;

        let removed = match (target.left.take(), target.right.take()) {
            (None, None) => {
                log::trace!("Tree::delete: removing leaf");
                target.value
            }
            (Some(child), None) | (None, Some(child)) => {
                log::trace!("Tree::delete: promoting only child");
                *slot = Some(child);
                target.value
            }
            (Some(left), Some(right)) => {
                log::trace!("Tree::delete: two children, splicing in-order successor");
                let (rest, successor) = Node::split_minimum(right);
                target.left = Some(left);
                target.right = rest;
                let removed = mem::replace(&mut target.value, successor.value);
                *slot = Some(target);
                removed
            }
        };

        self.len -= 1;
        Some(removed)
    }

    /// Verifies that the in-order sequence is strictly increasing under the comparator (which
    /// holds exactly when every node sits between its left and right subtrees) and that
    /// [`Tree::len`] matches the number of reachable nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree: Tree<_> = (0..100).rev().collect();
    /// assert_eq!(tree.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let values = self.inorder();
        if let Some(position) = values
            .windows(2)
            .position(|pair| !self.less.less(pair[0], pair[1]))
        {
            return Err(InvariantError::OutOfOrder {
                position: position + 1,
            });
        }

        if values.len() != self.len {
            return Err(InvariantError::LengthMismatch {
                recorded: self.len,
                reachable: values.len(),
            });
        }

        Ok(())
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C> FromIterator<T> for Tree<T, C>
where
    C: Comparator<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

/// Renders the values in order, separated by single spaces.
impl<T, C> fmt::Display for Tree<T, C>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.inorder().into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        Ok(())
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}
