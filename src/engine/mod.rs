//! Orchestration: swap -> detect -> (clear -> compact -> refill -> detect)*.
//!
//! ## State Machine
//!
//! ```text
//!  AcceptingInput --swap, Reverted--> AcceptingInput
//!  AcceptingInput --swap, Applied---> Resolving
//!  Resolving ------pass, matches----> Resolving
//!  Resolving ------pass, no match---> AcceptingInput  (+ BoardStable)
//! ```
//!
//! The engine is synchronous and owns no timers. Callers that want to
//! pace animations drive it with [`Engine::step`]; everyone else calls
//! [`Engine::resolve`].
//!
//! ## Example
//!
//! ```
//! use match3_engine::engine::{Engine, ResolutionStatus};
//! use match3_engine::core::{Direction, Position};
//!
//! let mut engine = Engine::initialize(8, 8, 5, 42).unwrap();
//! engine.drain_events();
//!
//! // Whatever the outcome, the engine is stable again once resolved.
//! let _ = engine.request_move(Position::new(3, 3), Direction::Right);
//! while engine.step() == ResolutionStatus::Processing {}
//! assert!(engine.is_accepting_input());
//! ```

mod orchestrator;
mod phase;

pub use orchestrator::Engine;
pub use phase::{PassSummary, Phase, ResolutionReport, ResolutionStatus};
