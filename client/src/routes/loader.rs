//! View module resolution and the session module cache.
//!
//! DESIGN
//! ======
//! A [`ModuleSource`] knows how to produce a [`ViewModule`]: synchronously for
//! eager routes, through a future for lazy ones. [`ModuleCache`] sits in front
//! of the source and remembers every module it has resolved, so each view is
//! fetched at most once per session. Failed fetches are not remembered and the
//! next navigation asks the source again.
//!
//! The cache is a cheap cloneable handle over shared state so it can live in
//! Leptos context. The lock is never held across an await.

#[cfg(test)]
#[path = "loader_test.rs"]
pub(crate) mod loader_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::BoxFuture;
use leptos::prelude::*;

use super::{LoadStrategy, RouteTable, ViewId};
use crate::pages::{customer_dashboard::CustomerDashboardPage, landing::LandingPage, staff_dashboard::StaffDashboardPage};

/// A resolved view, ready to mount.
#[derive(Clone, Copy, Debug)]
pub struct ViewModule {
    pub view: ViewId,
    render: fn() -> AnyView,
}

impl ViewModule {
    #[must_use]
    pub fn new(view: ViewId, render: fn() -> AnyView) -> Self {
        Self { view, render }
    }

    /// Build the view's markup.
    pub fn render(&self) -> AnyView {
        (self.render)()
    }
}

/// Error returned when a view module cannot be produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The source has no module for this view.
    #[error("no module available for view {view}")]
    Unavailable { view: ViewId },
    /// The source tried and failed.
    #[error("loading view {view} failed: {reason}")]
    Failed { view: ViewId, reason: String },
}

/// Where view modules come from.
pub trait ModuleSource: Send + Sync {
    /// Produce a module immediately, for eager routes.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the module cannot be produced.
    fn resolve(&self, view: ViewId) -> Result<ViewModule, LoadError>;

    /// Produce a module through a deferred fetch, for lazy routes.
    fn fetch(&self, view: ViewId) -> BoxFuture<'static, Result<ViewModule, LoadError>>;
}

/// Views compiled into the application bundle.
///
/// Lazy fetches defer construction to the first poll instead of doing it when
/// the navigation is planned.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompiledModules;

impl CompiledModules {
    fn module(view: ViewId) -> ViewModule {
        match view {
            ViewId::Landing => ViewModule::new(view, || view! { <LandingPage/> }.into_any()),
            ViewId::CustomerDashboard => {
                ViewModule::new(view, || view! { <CustomerDashboardPage/> }.into_any())
            }
            ViewId::StaffDashboard => ViewModule::new(view, || view! { <StaffDashboardPage/> }.into_any()),
        }
    }
}

impl ModuleSource for CompiledModules {
    fn resolve(&self, view: ViewId) -> Result<ViewModule, LoadError> {
        Ok(Self::module(view))
    }

    fn fetch(&self, view: ViewId) -> BoxFuture<'static, Result<ViewModule, LoadError>> {
        Box::pin(async move { Ok(Self::module(view)) })
    }
}

/// Outcome of [`ModuleCache::load`].
#[derive(Clone, Copy, Debug)]
pub struct Resolved {
    pub module: ViewModule,
    /// Whether this call went to the source rather than the cache.
    pub fetched: bool,
}

/// Session-lifetime cache of resolved view modules.
#[derive(Clone)]
pub struct ModuleCache {
    source: Arc<dyn ModuleSource>,
    modules: Arc<Mutex<HashMap<ViewId, ViewModule>>>,
}

impl ModuleCache {
    pub fn new(source: Arc<dyn ModuleSource>) -> Self {
        Self { source, modules: Arc::new(Mutex::new(HashMap::new())) }
    }

    /// Cache backed by the views compiled into this bundle.
    pub fn compiled() -> Self {
        Self::new(Arc::new(CompiledModules))
    }

    /// Resolve every eager entry of `table`. Returns how many modules were
    /// resolved by this call.
    ///
    /// # Errors
    ///
    /// Returns the first [`LoadError`] raised by the source.
    pub fn preload(&self, table: &RouteTable) -> Result<usize, LoadError> {
        let mut resolved = 0;
        for entry in table.entries().iter().filter(|e| e.load == LoadStrategy::Eager) {
            if self.is_loaded(entry.view) {
                continue;
            }
            let module = self.source.resolve(entry.view)?;
            log::debug!("eager module resolved: {}", entry.view);
            self.store(module);
            resolved += 1;
        }
        Ok(resolved)
    }

    /// Module already in the cache, if any.
    pub fn get(&self, view: ViewId) -> Option<ViewModule> {
        self.modules
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&view)
            .copied()
    }

    pub fn is_loaded(&self, view: ViewId) -> bool {
        self.get(view).is_some()
    }

    /// Return the cached module for `view`, fetching it from the source on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns the source's [`LoadError`]; nothing is cached in that case.
    pub async fn load(&self, view: ViewId) -> Result<Resolved, LoadError> {
        if let Some(module) = self.get(view) {
            return Ok(Resolved { module, fetched: false });
        }
        log::debug!("fetching module: {view}");
        match self.source.fetch(view).await {
            Ok(module) => {
                // A concurrent navigation may have finished first; keep its result.
                let module = self.store(module);
                Ok(Resolved { module, fetched: true })
            }
            Err(e) => {
                log::warn!("module fetch failed: {e}");
                Err(e)
            }
        }
    }

    fn store(&self, module: ViewModule) -> ViewModule {
        *self
            .modules
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(module.view)
            .or_insert(module)
    }
}
