//! Player swaps.
//!
//! A swap exchanges the full contents of two adjacent cells, then runs
//! detection. If nothing matched, the swap is undone from a
//! [`PendingSwap`] snapshot and the board is left exactly as it was.

mod resolver;

pub use resolver::{PendingSwap, SwapOutcome, SwapReport, SwapResolver};
