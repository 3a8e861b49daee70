//! Application state management module.
//!
//! This module contains the state for the application, including:
//! - The `State` struct holding the current screen, query, and app snapshot
//! - Navigation types (`Screen`)

mod navigation;

pub use navigation::Screen;

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
