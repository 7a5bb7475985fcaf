//! Deferred page loading.
//!
//! Pages are fetched on first demand and cached per [`PageId`]; navigating
//! back to a loaded page reuses the cached module without fetching again.
//!
//! # Navigations and stale completions
//!
//! Every call to [`PageLoader::navigate`] starts a new generation. What the
//! content region shows is always derived from the *latest* navigation and
//! the cache ([`PageLoader::content`]), so a fetch that settles after the
//! user has moved on only fills the cache. It never replaces the newer
//! navigation's content.
//!
//! A navigation whose page is already being fetched by an earlier one does
//! not fetch again; [`PageLoader::load`] waits for that fetch to settle.
//!
//! The loader is single-threaded: state sits behind `Cell`/`RefCell` and no
//! borrow is held across an `.await`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::{self, Future};
use std::task::{Poll, Waker};

use crate::error::LoadError;
use crate::page::PageId;
use crate::route::{RouteMatch, RouteTable};

/// Resolves a page's bundle into a module the shell can mount.
pub trait ModuleFetcher<M> {
    fn fetch(&self, page: PageId) -> impl Future<Output = Result<M, LoadError>>;
}

/// Cache state of a single page.
#[derive(Clone, Debug, PartialEq)]
pub enum ModuleState<M> {
    NotLoaded,
    Loading,
    Loaded(M),
    Failed(LoadError),
}

/// Per-page module cache.
#[derive(Clone, Debug)]
pub struct ModuleCache<M> {
    entries: HashMap<PageId, ModuleState<M>>,
}

impl<M: Clone> ModuleCache<M> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn state(&self, page: PageId) -> ModuleState<M> {
        self.entries
            .get(&page)
            .cloned()
            .unwrap_or(ModuleState::NotLoaded)
    }

    /// Mark `page` as loading if nothing is cached for it.
    ///
    /// Returns `true` when the caller is responsible for fetching. Pages that
    /// are loading, loaded or failed are left untouched.
    pub fn begin(&mut self, page: PageId) -> bool {
        match self.entries.get(&page) {
            None | Some(ModuleState::NotLoaded) => {
                self.entries.insert(page, ModuleState::Loading);
                true
            }
            Some(_) => false,
        }
    }

    /// Record the outcome of a fetch started with [`ModuleCache::begin`].
    pub fn complete(&mut self, page: PageId, result: Result<M, LoadError>) {
        let state = match result {
            Ok(module) => ModuleState::Loaded(module),
            Err(err) => ModuleState::Failed(err),
        };
        self.entries.insert(page, state);
    }

    /// Forget whatever is cached for `page` so the next demand fetches again.
    pub fn reset(&mut self, page: PageId) {
        self.entries.remove(&page);
    }

    pub fn is_loading(&self, page: PageId) -> bool {
        matches!(self.entries.get(&page), Some(ModuleState::Loading))
    }

    pub fn loaded_count(&self) -> usize {
        self.entries
            .values()
            .filter(|s| matches!(s, ModuleState::Loaded(_)))
            .count()
    }
}

impl<M: Clone> Default for ModuleCache<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// A navigation issued by [`PageLoader::navigate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub generation: u64,
    pub route: Option<RouteMatch>,
    /// The caller must fetch `route.page` and report it via
    /// [`PageLoader::complete`].
    pub needs_fetch: bool,
}

impl Navigation {
    /// The page to fetch, when this navigation is responsible for one.
    pub fn fetch_target(&self) -> Option<PageId> {
        self.route
            .as_ref()
            .filter(|_| self.needs_fetch)
            .map(|r| r.page)
    }
}

/// What the content region should show for the latest navigation.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentView<M> {
    /// Nothing has been navigated to, or no route matched.
    Empty,
    /// The page bundle is being fetched (spinner).
    Loading,
    Ready { module: M, route: RouteMatch },
    /// Handed to the enclosing error boundary.
    Failed(LoadError),
}

/// Outcome of [`PageLoader::load`].
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome<M> {
    Mounted { module: M, route: RouteMatch },
    /// A newer navigation started before this one settled.
    Superseded,
    /// The page was reset while this navigation waited for another fetch.
    Pending,
    NotFound,
    Failed(LoadError),
}

/// Route resolution plus deferred loading.
pub struct PageLoader<M> {
    table: RouteTable,
    cache: RefCell<ModuleCache<M>>,
    current: RefCell<Option<RouteMatch>>,
    generation: Cell<u64>,
    /// Tasks in [`PageLoader::load`] waiting for a fetch they did not start.
    waiters: RefCell<Vec<Waker>>,
}

impl<M: Clone> PageLoader<M> {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            cache: RefCell::new(ModuleCache::new()),
            current: RefCell::new(None),
            generation: Cell::new(0),
            waiters: RefCell::new(Vec::new()),
        }
    }

    /// Switch to `path`, reserving a fetch if its page is not cached yet.
    pub fn navigate(&self, path: &str) -> Navigation {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let route = self.table.resolve(path);
        let needs_fetch = route
            .as_ref()
            .is_some_and(|r| self.cache.borrow_mut().begin(r.page));

        *self.current.borrow_mut() = route.clone();

        Navigation {
            generation,
            route,
            needs_fetch,
        }
    }

    /// Whether `generation` is still the latest navigation.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    /// Store a fetch result. Returns `true` if the page is the one currently
    /// shown, i.e. the content region needs to re-render.
    pub fn complete(&self, page: PageId, result: Result<M, LoadError>) -> bool {
        self.cache.borrow_mut().complete(page, result);
        self.wake_waiters();
        self.current
            .borrow()
            .as_ref()
            .is_some_and(|r| r.page == page)
    }

    /// Drop a cached failure (or module) so the next navigation refetches.
    pub fn reset(&self, page: PageId) {
        self.cache.borrow_mut().reset(page);
        self.wake_waiters();
    }

    fn wake_waiters(&self) {
        let waiters = std::mem::take(&mut *self.waiters.borrow_mut());
        for waker in waiters {
            waker.wake();
        }
    }

    /// Resolves once `page` is no longer loading.
    fn settled(&self, page: PageId) -> impl Future<Output = ()> + '_ {
        future::poll_fn(move |cx| {
            if self.cache.borrow().is_loading(page) {
                self.waiters.borrow_mut().push(cx.waker().clone());
                Poll::Pending
            } else {
                Poll::Ready(())
            }
        })
    }

    pub fn module_state(&self, page: PageId) -> ModuleState<M> {
        self.cache.borrow().state(page)
    }

    pub fn current_route(&self) -> Option<RouteMatch> {
        self.current.borrow().clone()
    }

    pub fn content(&self) -> ContentView<M> {
        let Some(route) = self.current_route() else {
            return ContentView::Empty;
        };

        match self.module_state(route.page) {
            // Reset by an error boundary but not navigated again yet
            ModuleState::NotLoaded | ModuleState::Loading => ContentView::Loading,
            ModuleState::Loaded(module) => ContentView::Ready { module, route },
            ModuleState::Failed(err) => ContentView::Failed(err),
        }
    }

    /// Navigate to `path` and drive its fetch to completion.
    ///
    /// If an earlier navigation is already fetching the page, waits for that
    /// fetch instead of starting another one.
    pub async fn load<F: ModuleFetcher<M>>(&self, path: &str, fetcher: &F) -> LoadOutcome<M> {
        let navigation = self.navigate(path);
        let Some(route) = navigation.route.clone() else {
            return LoadOutcome::NotFound;
        };

        if navigation.needs_fetch {
            let result = fetcher.fetch(route.page).await;
            self.complete(route.page, result);
        } else {
            self.settled(route.page).await;
        }

        if !self.is_current(navigation.generation) {
            return LoadOutcome::Superseded;
        }

        match self.module_state(route.page) {
            ModuleState::Loaded(module) => LoadOutcome::Mounted { module, route },
            ModuleState::Failed(err) => LoadOutcome::Failed(err),
            ModuleState::Loading | ModuleState::NotLoaded => LoadOutcome::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RouteParams;

    #[test]
    fn test_cache_begin_is_idempotent() {
        let mut cache: ModuleCache<&str> = ModuleCache::new();
        assert!(cache.begin(PageId::Settings));
        assert!(!cache.begin(PageId::Settings));
        cache.complete(PageId::Settings, Ok("settings"));
        assert!(!cache.begin(PageId::Settings));
        assert_eq!(cache.state(PageId::Settings), ModuleState::Loaded("settings"));
        assert_eq!(cache.loaded_count(), 1);
    }

    #[test]
    fn test_cache_is_loading_only_between_begin_and_complete() {
        let mut cache: ModuleCache<&str> = ModuleCache::new();
        assert!(!cache.is_loading(PageId::Settings));
        cache.begin(PageId::Settings);
        assert!(cache.is_loading(PageId::Settings));
        cache.complete(PageId::Settings, Ok("settings"));
        assert!(!cache.is_loading(PageId::Settings));
    }

    #[test]
    fn test_cache_failure_sticks_until_reset() {
        let mut cache: ModuleCache<&str> = ModuleCache::new();
        cache.begin(PageId::ServiceMap);
        cache.complete(PageId::ServiceMap, Err(LoadError::Timeout));
        assert!(!cache.begin(PageId::ServiceMap));
        assert_eq!(
            cache.state(PageId::ServiceMap),
            ModuleState::Failed(LoadError::Timeout)
        );

        cache.reset(PageId::ServiceMap);
        assert_eq!(cache.state(PageId::ServiceMap), ModuleState::NotLoaded);
        assert!(cache.begin(PageId::ServiceMap));
    }

    #[test]
    fn test_navigate_then_complete() {
        let loader: PageLoader<&str> = PageLoader::new(RouteTable::standard());
        assert_eq!(loader.content(), ContentView::Empty);

        let nav = loader.navigate("/application/acme");
        assert!(nav.needs_fetch);
        assert_eq!(nav.fetch_target(), Some(PageId::ServiceMetrics));
        assert_eq!(loader.content(), ContentView::Loading);

        assert!(loader.complete(PageId::ServiceMetrics, Ok("metrics")));
        match loader.content() {
            ContentView::Ready { module, route } => {
                assert_eq!(module, "metrics");
                assert_eq!(route.params, RouteParams::from([("servicename", "acme")]));
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_same_page_new_params_needs_no_fetch() {
        let loader: PageLoader<&str> = PageLoader::new(RouteTable::standard());
        loader.navigate("/application/a");
        loader.complete(PageId::ServiceMetrics, Ok("metrics"));

        let nav = loader.navigate("/application/b");
        assert!(!nav.needs_fetch);
        assert_eq!(nav.fetch_target(), None);
        match loader.content() {
            ContentView::Ready { route, .. } => {
                assert_eq!(route.params.get("servicename"), Some("b"));
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_late_completion_does_not_replace_newer_content() {
        let loader: PageLoader<&str> = PageLoader::new(RouteTable::standard());
        let first = loader.navigate("/traces");
        let second = loader.navigate("/traces/7");
        assert!(!loader.is_current(first.generation));
        assert!(loader.is_current(second.generation));

        // The first page resolves after the user moved on
        assert!(!loader.complete(PageId::TraceDetail, Ok("list")));
        assert_eq!(loader.content(), ContentView::Loading);
        assert_eq!(
            loader.module_state(PageId::TraceDetail),
            ModuleState::Loaded("list")
        );

        loader.complete(PageId::TraceGraph, Ok("graph"));
        assert!(matches!(
            loader.content(),
            ContentView::Ready { module: "graph", .. }
        ));
    }

    #[test]
    fn test_failure_is_surfaced_then_reset() {
        let loader: PageLoader<&str> = PageLoader::new(RouteTable::standard());
        loader.navigate("/settings");
        loader.complete(PageId::Settings, Err(LoadError::Http(404)));
        assert_eq!(loader.content(), ContentView::Failed(LoadError::Http(404)));

        loader.reset(PageId::Settings);
        assert_eq!(loader.content(), ContentView::Loading);
        assert!(loader.navigate("/settings").needs_fetch);
    }
}
