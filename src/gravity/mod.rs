//! Gravity: collapse surviving tokens toward row 0 after a clear.

mod compactor;

pub use compactor::{Fall, GravityCompactor};
