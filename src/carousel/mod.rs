//! Toolkit-independent carousel core: shared state, strip geometry, the
//! drag gesture state machine and spring transitions.

pub mod constants;
pub mod geometry;
pub mod gesture;
pub mod spring;
pub mod state;
