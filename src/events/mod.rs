//! Event handling module.
//!
//! Terminal events are the only event source: user input is polled on a
//! dedicated thread and dispatched against the current screen.

pub mod terminal;
