//! Ambient environment access
//!
//! Resolution reads launcher-supplied runtime properties, process
//! environment variables and bundled resource files. All three are
//! process-wide ambient state, so they sit behind the [`Environment`]
//! trait and tests supply fixed values instead of mutating the real
//! process.

use std::collections::HashMap;
use std::path::PathBuf;

/// Read access to the ambient state consulted while building a loader.
pub trait Environment {
    /// Launcher-supplied runtime property, `stratum.configuration` style.
    fn property(&self, name: &str) -> Option<String>;

    /// Process environment variable.
    fn var(&self, name: &str) -> Option<String>;

    /// Resolve a conventional resource file name to a path, if one is
    /// present on the resource path.
    fn resource(&self, name: &str) -> Option<PathBuf>;
}

/// Default [`Environment`] backed by the real process state.
///
/// Runtime properties are collected by the application bootstrap (command
/// line, launcher) and handed over up front; variables come from
/// [`std::env`]; resources are regular files under a configurable
/// directory, the current directory unless changed.
#[derive(Debug, Clone)]
pub struct ProcessEnvironment {
    properties: HashMap<String, String>,
    resource_dir: PathBuf,
}

impl ProcessEnvironment {
    /// Environment with no runtime properties, resolving resources against
    /// the current directory.
    pub fn new() -> Self {
        Self {
            properties: HashMap::new(),
            resource_dir: PathBuf::from("."),
        }
    }

    /// Replace the runtime property table.
    pub fn with_properties(mut self, properties: HashMap<String, String>) -> Self {
        self.properties = properties;
        self
    }

    /// Set a single runtime property.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Change where conventional resource files are looked up.
    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = dir.into();
        self
    }
}

impl Default for ProcessEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for ProcessEnvironment {
    fn property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }

    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn resource(&self, name: &str) -> Option<PathBuf> {
        let path = self.resource_dir.join(name);
        path.is_file().then_some(path)
    }
}
