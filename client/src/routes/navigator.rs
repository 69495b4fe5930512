//! Navigation state machine: which view is mounted and how to get to the next.
//!
//! SYSTEM CONTEXT
//! ==============
//! `leptos_router` owns browser history and picks the `<Route>` for the current
//! location. Each route's view calls [`Navigator::navigate`] with its declared
//! path: plan the step with [`Navigator::begin`] (mount a cached module now, or
//! fetch first), then record the mount with [`Navigator::commit`].
//! [`Outlet::settle`] turns the outcome into what the page shows.
//!
//! ERROR HANDLING
//! ==============
//! An unmatched path unmounts the current view. A failed fetch leaves the
//! current view mounted, shown with an error notice, and is retried on the
//! next navigation.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use std::sync::{Arc, Mutex, PoisonError};

use super::loader::{LoadError, ModuleCache, ViewModule};
use super::{RouteEntry, RouteError, RouteTable, ViewId};

/// Error returned by [`Navigator::register`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Error returned by [`Navigator::begin`] and [`Navigator::navigate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("no route matches {path}")]
    NoRoute { path: String },
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// What it takes to show the view bound to a path.
#[derive(Clone, Copy, Debug)]
pub enum Step {
    /// Module is resolved; mount it now.
    Mount(ViewModule),
    /// Module must be fetched before mounting.
    Fetch(ViewId),
}

/// A completed navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: Option<ViewId>,
    pub to: ViewId,
    /// Whether reaching `to` required a module fetch.
    pub fetched: bool,
}

/// What the route outlet shows after a navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outlet {
    /// Fetch in flight; keep showing the previous view, if any.
    Loading { kept: Option<ViewId> },
    /// Navigation succeeded; show the new view.
    Show(ViewId),
    /// Fetch failed; keep showing the previous view with an error notice.
    Kept { kept: Option<ViewId>, error: LoadError },
    /// Nothing matched.
    NotFound,
}

impl Outlet {
    /// Outlet while the navigation away from `previous` is pending.
    pub fn pending(previous: Option<ViewId>) -> Self {
        Self::Loading { kept: previous }
    }

    /// Outlet once a navigation away from `previous` has finished.
    pub fn settle(outcome: Result<Transition, NavigationError>, previous: Option<ViewId>) -> Self {
        match outcome {
            Ok(transition) => Self::Show(transition.to),
            Err(NavigationError::NoRoute { .. }) => Self::NotFound,
            Err(NavigationError::Load(error)) => Self::Kept { kept: previous, error },
        }
    }

    /// View whose module the outlet renders, if any.
    pub fn visible(&self) -> Option<ViewId> {
        match self {
            Self::Show(view) => Some(*view),
            Self::Loading { kept } | Self::Kept { kept, .. } => *kept,
            Self::NotFound => None,
        }
    }
}

/// Route table, module cache, and the currently mounted view.
///
/// Clones share the mounted-view slot, so every route view sees the same
/// navigation state.
#[derive(Clone)]
pub struct Navigator {
    table: Arc<RouteTable>,
    cache: ModuleCache,
    current: Arc<Mutex<Option<ViewId>>>,
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator").field("table", &self.table).field("current", &self.current).finish_non_exhaustive()
    }
}

impl Navigator {
    /// Validate `entries`, resolve eager modules, and return a navigator with
    /// nothing mounted yet.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError`] for an invalid table or a failing eager module.
    pub fn register(entries: &[RouteEntry], cache: ModuleCache) -> Result<Self, RegisterError> {
        let table = RouteTable::register(entries)?;
        cache.preload(&table)?;
        log::debug!("router ready with {} routes", table.entries().len());
        Ok(Self::new(Arc::new(table), cache))
    }

    pub fn new(table: Arc<RouteTable>, cache: ModuleCache) -> Self {
        Self { table, cache, current: Arc::new(Mutex::new(None)) }
    }

    pub fn table(&self) -> &Arc<RouteTable> {
        &self.table
    }

    pub fn cache(&self) -> &ModuleCache {
        &self.cache
    }

    /// View currently mounted, if any.
    pub fn current(&self) -> Option<ViewId> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Plan the navigation to `path` without changing state.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::NoRoute`] when no entry matches.
    pub fn begin(&self, path: &str) -> Result<Step, NavigationError> {
        let entry = self
            .table
            .resolve(path)
            .ok_or_else(|| NavigationError::NoRoute { path: path.to_owned() })?;
        Ok(match self.cache.get(entry.view) {
            Some(module) => Step::Mount(module),
            None => Step::Fetch(entry.view),
        })
    }

    /// Record `view` as mounted. Returns the view it replaced.
    pub fn commit(&self, view: ViewId) -> Option<ViewId> {
        let previous = self.current.lock().unwrap_or_else(PoisonError::into_inner).replace(view);
        if previous != Some(view) {
            log::debug!("mounted {view} (was {previous:?})");
        }
        previous
    }

    /// Unmount whatever is mounted, as for an unmatched path.
    pub fn unmount(&self) -> Option<ViewId> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner).take()
    }

    /// Navigate to `path`, fetching its module first when needed.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::NoRoute`] (and unmounts) when nothing
    /// matches, or [`NavigationError::Load`] (keeping the mounted view) when
    /// the fetch fails.
    pub async fn navigate(&self, path: &str) -> Result<Transition, NavigationError> {
        let step = match self.begin(path) {
            Ok(step) => step,
            Err(e) => {
                self.unmount();
                return Err(e);
            }
        };
        let (to, fetched) = match step {
            Step::Mount(module) => (module.view, false),
            Step::Fetch(view) => {
                let resolved = self.cache.load(view).await?;
                (resolved.module.view, resolved.fetched)
            }
        };
        let from = self.commit(to);
        Ok(Transition { from, to, fetched })
    }
}
