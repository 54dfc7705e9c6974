//! An ordered multiset implemented by a treap: a binary search tree on keys that is also a
//! max-heap on randomly drawn priorities.

extern crate rand;
extern crate serde;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod error;
mod render;
pub mod priority;
pub mod treap;

pub use crate::error::TreapError;
pub use crate::treap::{NodeView, Treap};
