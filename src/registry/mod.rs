//! Installed-application access module.
//!
//! This module defines the data model for installed applications and the two
//! capability traits the rest of the application goes through:
//! - `AppRegistry`: enumerating the host's installed applications
//! - `AppLauncher`: bringing one of them to the foreground
//!
//! The desktop-entry implementations live in `desktop` and `launch`; keeping
//! the traits here lets the state machine be exercised without a host.

mod desktop;
mod launch;

pub use desktop::DesktopRegistry;
pub use launch::DesktopLauncher;

/// A single installed application as reported by the host registry.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledApp {
    /// Human-readable display label. Not guaranteed unique.
    pub name: String,
    /// Unique identifier for the application on the host.
    pub identifier: String,
}

/// Read access to the host's installed-application registry.
///
pub trait AppRegistry {
    /// Return a point-in-time snapshot of the installed applications, sorted
    /// ascending by case-insensitive name with ties kept in enumeration
    /// order. Fails closed: any host failure yields an empty vector.
    ///
    fn list(&self) -> Vec<InstalledApp>;
}

/// Access to the host's application-launch facility.
///
pub trait AppLauncher {
    /// Ask the host to start the application named by `identifier`. Returns
    /// false without any other effect when no launchable entry can be
    /// resolved or the launch request fails.
    ///
    fn launch(&self, identifier: &str) -> bool;
}
