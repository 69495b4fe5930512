//! Route table binding URL paths to views.
//!
//! SYSTEM CONTEXT
//! ==============
//! The table is built once at startup from [`ROUTES`] and shared read-only for
//! the life of the page. Each entry names the view it mounts and whether that
//! view is resolved up front ([`LoadStrategy::Eager`]) or on first navigation
//! ([`LoadStrategy::Lazy`]). Resolution lives in [`loader`], the navigation
//! state machine in [`navigator`].

pub mod loader;
pub mod navigator;
pub mod path;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::collections::HashSet;
use std::fmt;

use path::MatchOptions;

/// Views the application can mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Landing,
    CustomerDashboard,
    StaffDashboard,
}

impl ViewId {
    pub const ALL: [Self; 3] = [Self::Landing, Self::CustomerDashboard, Self::StaffDashboard];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Landing => "Landing",
            Self::CustomerDashboard => "CustomerDashboard",
            Self::StaffDashboard => "StaffDashboard",
        }
    }

    /// Human-facing label for navigation links.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Landing => "Home",
            Self::CustomerDashboard => "Customer",
            Self::StaffDashboard => "Staff",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// When a route's view module is resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStrategy {
    /// Resolved while the table is registered.
    #[default]
    Eager,
    /// Resolved on first navigation, then cached for the session.
    Lazy,
}

/// One path-to-view binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view: ViewId,
    pub load: LoadStrategy,
}

impl RouteEntry {
    #[must_use]
    pub const fn eager(path: &'static str, view: ViewId) -> Self {
        Self { path, view, load: LoadStrategy::Eager }
    }

    #[must_use]
    pub const fn lazy(path: &'static str, view: ViewId) -> Self {
        Self { path, view, load: LoadStrategy::Lazy }
    }
}

/// The application's routes. The landing page ships with the initial load;
/// both dashboards resolve on demand.
pub const ROUTES: [RouteEntry; 3] = [
    RouteEntry::eager("/", ViewId::Landing),
    RouteEntry::lazy("/dashboard/customer", ViewId::CustomerDashboard),
    RouteEntry::lazy("/dashboard/staff", ViewId::StaffDashboard),
];

/// Error returned by [`RouteTable::register`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("route path is empty")]
    EmptyPath,
    #[error("route path must start with '/': {path}")]
    MissingLeadingSlash { path: String },
    #[error("route path {path} contains invalid character {ch:?}")]
    InvalidCharacter { path: String, ch: char },
    #[error("duplicate route path: {path}")]
    DuplicatePath { path: String },
}

/// Validated, immutable, ordered list of routes.
#[derive(Clone, Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    keys: Vec<String>,
    options: MatchOptions,
}

impl RouteTable {
    /// Build a table with default (non-strict, case-sensitive) matching.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] for malformed or duplicate paths.
    pub fn register(entries: &[RouteEntry]) -> Result<Self, RouteError> {
        Self::with_options(entries, MatchOptions::default())
    }

    /// Build a table with explicit matching options.
    ///
    /// Duplicates are detected on normalized keys, so `/a` and `/A/` collide
    /// under default options.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] for malformed or duplicate paths.
    pub fn with_options(entries: &[RouteEntry], options: MatchOptions) -> Result<Self, RouteError> {
        let mut seen = HashSet::with_capacity(entries.len());
        let mut keys = Vec::with_capacity(entries.len());
        for entry in entries {
            path::validate(entry.path)?;
            let key = path::normalize(entry.path, options);
            if !seen.insert(key.clone()) {
                return Err(RouteError::DuplicatePath { path: entry.path.to_owned() });
            }
            log::debug!("route registered: {} -> {} ({:?})", entry.path, entry.view, entry.load);
            keys.push(key);
        }
        Ok(Self { entries: entries.to_vec(), keys, options })
    }

    /// First entry whose pattern matches `requested`.
    pub fn resolve(&self, requested: &str) -> Option<&RouteEntry> {
        let key = path::normalize(requested, self.options);
        self.keys
            .iter()
            .position(|k| *k == key)
            .and_then(|idx| self.entries.get(idx))
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.path)
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }
}
