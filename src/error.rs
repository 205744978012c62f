/// Ways a [`Tree`][crate::Tree] can be found to be structurally broken by
/// [`Tree::check_invariants`][crate::Tree::check_invariants].
///
/// A tree built with a valid comparator never produces these. Seeing one means the comparator
/// isn't a strict weak ordering (or it changed its mind about some values after they were
/// inserted).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    /// The value at `position` of the in-order sequence isn't strictly greater than the one
    /// before it.
    #[error("in-order sequence is not strictly increasing at position {position}")]
    OutOfOrder {
        /// Index into the in-order sequence of the offending value.
        position: usize,
    },
    /// The tree's recorded length doesn't match the number of nodes reachable from the root.
    #[error("tree records {recorded} values but {reachable} are reachable")]
    LengthMismatch {
        /// What [`Tree::len`][crate::Tree::len] reports.
        recorded: usize,
        /// How many nodes a full traversal visited.
        reachable: usize,
    },
}
