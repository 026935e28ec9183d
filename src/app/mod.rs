//! Demo host: owns the carousel state, turns terminal input into gesture
//! transitions, and draws the carousel every time something changes.

pub mod action;
pub mod card;
pub mod event;
pub mod handler;
pub mod state;
pub mod view;
