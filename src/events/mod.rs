//! Output event stream.
//!
//! The engine owns no timers or screen coordinates. Instead it records
//! every state change as a [`BoardEvent`] that a rendering collaborator
//! can animate at its own pace.

mod event;

pub use event::BoardEvent;
