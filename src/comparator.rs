//! Orderings used to place values in a [`Tree`][crate::Tree].
//!
//! A [`Tree`][crate::Tree] never asks its values how they compare. Instead it is handed a
//! `Comparator` when it is built and every placement, lookup, and deletion decision goes through
//! [`Comparator::less`]. Two values `a` and `b` are treated as the same key when neither
//! `less(a, b)` nor `less(b, a)` holds.
//!
//! Any `Fn(&T, &T) -> bool` closure is a comparator:
//!
//! ```
//! use ordered_tree::Tree;
//!
//! // Largest first.
//! let mut tree = Tree::with_comparator(|a: &i32, b: &i32| b < a);
//! tree.extend([1, 3, 2]);
//!
//! assert_eq!(tree.inorder(), vec![&3, &2, &1]);
//! ```

/// A strict weak ordering over `T`.
///
/// Implementations must be irreflexive (`less(a, a)` is false) and transitive, and
/// incomparability must be transitive as well. A comparator breaking these rules won't cause
/// undefined behavior but the tree it is used in may lose or misplace values.
pub trait Comparator<T: ?Sized> {
    /// Returns true if `a` is ordered strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Returns true if neither value is ordered before the other.
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Orders values by their [`Ord`] implementation. This is the comparator used by
/// [`Tree::new`][crate::Tree::new].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T> Comparator<T> for NaturalOrder
where
    T: Ord + ?Sized,
{
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}
