//! Interactive play over a built [`crate::tree::Node`].
//!
//! - [`Session`]: walks the tree, counts questions, handles replay
//! - [`Respondent`]: whoever answers the questions
//! - [`Script`]: canned answers, for tests and replays
//! - [`Human`]: terminal player (requires `cli` feature)
mod answer;
#[cfg(feature = "cli")]
mod human;
mod outcome;
mod respondent;
mod script;
mod session;

pub use answer::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use outcome::*;
pub use respondent::*;
pub use script::*;
pub use session::*;
