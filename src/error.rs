/// Errors reported when a treap does not satisfy its structural invariants.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TreapError {
    #[error("binary search tree order is violated")]
    OrderViolation,

    #[error("heap order is violated: parent priority {parent} is below child priority {child}")]
    HeapViolation { parent: u32, child: u32 },

    #[error("subtree length is {found}, expected {expected}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("cannot join treaps whose key ranges overlap")]
    OverlappingRanges,
}
