//! Engine phases and resolution bookkeeping.

use serde::{Deserialize, Serialize};

/// Whether the board takes input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Stable; swap and bomb requests are accepted.
    #[default]
    AcceptingInput,
    /// A cascade is in flight; requests are rejected with `Busy`.
    Resolving,
}

/// Status returned by a resolution step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionStatus {
    /// The board is stable and accepting input.
    Complete,
    /// The last pass left new matches; call again.
    Processing,
}

/// Counts for one clear -> compact -> refill -> detect pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassSummary {
    pub cleared: usize,
    pub moved: usize,
    pub spawned: usize,
    /// Matches found by the detection that closed the pass.
    pub next_matches: usize,
}

/// Totals for a run of passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionReport {
    pub passes: usize,
    pub cleared: usize,
}

impl ResolutionReport {
    pub(crate) fn record(&mut self, pass: &PassSummary) {
        self.passes += 1;
        self.cleared += pass.cleared;
    }
}
