//! Refilling empty cells.
//!
//! [`RefillPlanner`] spawns new tokens into empty cells from a
//! [`TokenSource`]. The initial board is filled with the no-immediate-match
//! constraint; cascade refills are unconstrained so fresh tokens can set
//! off chain reactions.

mod planner;
mod source;

pub use planner::{RefillPlanner, RefillReport};
pub use source::{ScriptedSource, TokenSource};
