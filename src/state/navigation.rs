//! Navigation-related state types.

/// Specifying the different screens.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Screen {
    Landing,
    Search,
}
