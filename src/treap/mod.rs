//! Probabilistic binary search tree where each node also maintains the heap invariant.

mod multiset;
mod node;
mod serialize;
mod tree;

pub use self::multiset::{Treap, TreapIntoIter, TreapIter};
pub use self::node::NodeView;
