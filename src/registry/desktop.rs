//! Desktop-entry registry backend.
//!
//! Enumerates freedesktop `.desktop` files across the XDG application
//! directories and turns them into `InstalledApp` values. The identifier of
//! an application is the stem of its desktop file (e.g.
//! `org.gnome.Calculator`).

use super::{AppRegistry, InstalledApp};
use log::*;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Return the XDG application directories in precedence order: the user data
/// home first, then each entry of `XDG_DATA_DIRS` (or the usual default).
///
pub(super) fn application_dirs() -> Vec<PathBuf> {
    let mut dirs_out = Vec::new();
    match env::var_os("XDG_DATA_HOME") {
        Some(dir) if !dir.is_empty() => {
            dirs_out.push(PathBuf::from(dir).join("applications"));
        }
        _ => {
            if let Some(home) = dirs::home_dir() {
                dirs_out.push(home.join(".local/share/applications"));
            }
        }
    }
    let data_dirs =
        env::var("XDG_DATA_DIRS").unwrap_or_else(|_| "/usr/local/share:/usr/share".to_string());
    for dir in data_dirs.split(':').filter(|dir| !dir.is_empty()) {
        dirs_out.push(Path::new(dir).join("applications"));
    }
    dirs_out
}

/// The fields of a desktop file the application cares about.
///
pub(super) struct DesktopFile {
    pub name: Option<String>,
    pub exec: Option<String>,
}

/// Parse the `[Desktop Entry]` group of a desktop file. Returns None when the
/// file cannot be read or does not describe an application.
///
pub(super) fn parse_desktop_file(path: &Path) -> Option<DesktopFile> {
    let contents = fs::read_to_string(path).ok()?;
    let mut in_entry_group = false;
    let (mut name, mut exec, mut entry_type) = (None, None, None);
    for line in contents.lines() {
        let line = line.trim();
        if line.starts_with('[') {
            // Only the main group holds the fields we read; actions and
            // other groups may repeat the same keys.
            in_entry_group = line == "[Desktop Entry]";
            continue;
        }
        if !in_entry_group {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            match key.trim() {
                "Name" if name.is_none() => name = Some(value.trim().to_string()),
                "Exec" if exec.is_none() => exec = Some(value.trim().to_string()),
                "Type" if entry_type.is_none() => entry_type = Some(value.trim().to_string()),
                _ => {}
            }
        }
    }
    if entry_type.as_deref() != Some("Application") {
        return None;
    }
    Some(DesktopFile { name, exec })
}

/// Registry over the desktop entries installed on the host.
///
pub struct DesktopRegistry {
    dirs: Vec<PathBuf>,
}

impl DesktopRegistry {
    /// Return a registry over the host's XDG application directories.
    ///
    pub fn new() -> DesktopRegistry {
        DesktopRegistry {
            dirs: application_dirs(),
        }
    }

    /// Return a registry over the given directories, in precedence order.
    ///
    pub fn with_dirs(dirs: Vec<PathBuf>) -> DesktopRegistry {
        DesktopRegistry { dirs }
    }
}

impl Default for DesktopRegistry {
    fn default() -> DesktopRegistry {
        DesktopRegistry::new()
    }
}

impl AppRegistry for DesktopRegistry {
    fn list(&self) -> Vec<InstalledApp> {
        let mut seen = HashSet::new();
        let mut apps = Vec::new();
        for dir in &self.dirs {
            let entries = match fs::read_dir(dir) {
                Ok(entries) => entries,
                // Unreadable or absent directories contribute nothing.
                Err(_) => continue,
            };
            let mut paths: Vec<PathBuf> = entries
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|path| path.extension().map_or(false, |ext| ext == "desktop"))
                .collect();
            // read_dir order is unspecified; fix the enumeration order so
            // snapshots are reproducible.
            paths.sort();
            for path in paths {
                let identifier = match path.file_stem().and_then(|stem| stem.to_str()) {
                    Some(stem) => stem.to_string(),
                    None => continue,
                };
                if seen.contains(&identifier) {
                    continue;
                }
                let file = match parse_desktop_file(&path) {
                    Some(file) => file,
                    None => continue,
                };
                let name = match file.name {
                    Some(name) => name,
                    None => continue,
                };
                seen.insert(identifier.clone());
                apps.push(InstalledApp { name, identifier });
            }
        }
        // Stable sort keeps the enumeration order for names that compare
        // equal case-insensitively.
        apps.sort_by_key(|app| app.name.to_lowercase());
        debug!(
            "Enumerated {} installed applications from {} directories",
            apps.len(),
            self.dirs.len()
        );
        apps
    }
}
