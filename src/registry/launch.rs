//! Desktop-entry launch backend.
//!
//! Resolves an application identifier back to its desktop file, extracts the
//! `Exec` line, and spawns it detached. Unresolvable identifiers (no desktop
//! file, or one without a usable `Exec`) report failure without any other
//! effect; the caller decides what that means.

use super::desktop::{application_dirs, parse_desktop_file};
use super::AppLauncher;
use log::*;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Field codes that desktop files may embed in `Exec` lines. None of them
/// apply when launching without files or URLs, so they are dropped.
///
const FIELD_CODES: [&str; 7] = ["%f", "%F", "%u", "%U", "%c", "%k", "%i"];

/// Remove field codes from an `Exec` value and normalize the whitespace left
/// behind.
///
pub(super) fn strip_field_codes(exec: &str) -> String {
    let mut command = exec.to_string();
    for code in FIELD_CODES {
        command = command.replace(code, "");
    }
    command.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Launcher over the desktop entries installed on the host.
///
pub struct DesktopLauncher {
    dirs: Vec<PathBuf>,
}

impl DesktopLauncher {
    /// Return a launcher over the host's XDG application directories.
    ///
    pub fn new() -> DesktopLauncher {
        DesktopLauncher {
            dirs: application_dirs(),
        }
    }

    /// Return a launcher over the given directories, in precedence order.
    ///
    pub fn with_dirs(dirs: Vec<PathBuf>) -> DesktopLauncher {
        DesktopLauncher { dirs }
    }

    /// Resolve the launch command for an identifier, if the host has one.
    ///
    fn resolve_command(&self, identifier: &str) -> Option<String> {
        for dir in &self.dirs {
            let path = dir.join(format!("{}.desktop", identifier));
            if !path.is_file() {
                continue;
            }
            // The first directory holding the entry decides; a file without
            // a usable Exec means the application is not launchable.
            let exec = parse_desktop_file(&path)?.exec?;
            let command = strip_field_codes(&exec);
            if command.is_empty() {
                return None;
            }
            return Some(command);
        }
        None
    }
}

impl Default for DesktopLauncher {
    fn default() -> DesktopLauncher {
        DesktopLauncher::new()
    }
}

impl AppLauncher for DesktopLauncher {
    fn launch(&self, identifier: &str) -> bool {
        let command = match self.resolve_command(identifier) {
            Some(command) => command,
            None => {
                debug!("No launchable entry for '{}'", identifier);
                return false;
            }
        };
        debug!("Launching '{}' via '{}'", identifier, command);
        Command::new("sh")
            .arg("-c")
            .arg(&command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .is_ok()
    }
}
