//! Labeled records and the catalog they are loaded into.
//!
//! A catalog is the only input the tree builder needs: an ordered list of
//! feature names plus the records carrying a boolean flag for each of them.
mod catalog;
mod parse;
mod record;

pub use catalog::*;
pub use record::*;
