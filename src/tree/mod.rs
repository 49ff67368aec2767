//! Immutable binary decision tree over a [`crate::catalog::Catalog`].
//!
//! Construction is a deterministic recursive partition driven by a balance
//! heuristic (see [`best_split`]), expressed with an explicit work stack.
mod builder;
mod dump;
mod node;
mod split;

pub use builder::*;
pub use dump::*;
pub use node::*;
pub use split::*;
