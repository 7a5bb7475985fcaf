//! Root application module.
//!
//! Contains the main App component, AppContext definition, ContentState,
//! and application-level setup logic following Leptos conventions.

use std::rc::Rc;

use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use signoz_core::nav::unresolved_links;
use signoz_core::{
    ContentView, ModuleFetcher, PageLoader, RouteTable, ShellAction, ShellConfig, ShellState,
    Theme, ThemeController, TimeRange,
};
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::config::shell_config;
use crate::pages::PageModule;
use crate::services::{BundleFetcher, StylesheetThemeService};
use crate::utils::dom;

// ============================================================================
// ContentState
// ============================================================================

/// Deferred page loading for the content region.
///
/// The [`PageLoader`] itself is not reactive; `version` is bumped whenever
/// something it would report changes, and [`ContentState::current`] tracks it.
///
/// # Note
///
/// This struct is `Copy` because all fields are reactive handles. The loader
/// and fetcher are `!Send`, so they live in local stored values.
#[derive(Clone, Copy)]
pub struct ContentState {
    loader: StoredValue<Rc<PageLoader<PageModule>>, LocalStorage>,
    fetcher: StoredValue<Rc<BundleFetcher>, LocalStorage>,
    version: RwSignal<u64>,
}

impl ContentState {
    pub fn new(table: RouteTable, fetcher: BundleFetcher) -> Self {
        Self {
            loader: StoredValue::new_local(Rc::new(PageLoader::new(table))),
            fetcher: StoredValue::new_local(Rc::new(fetcher)),
            version: RwSignal::new(0),
        }
    }

    /// Resolve `path` and start fetching its page if it isn't cached.
    pub fn navigate(&self, path: &str) {
        let navigation = self.loader.with_value(|loader| loader.navigate(path));
        self.bump();

        let Some(page) = navigation.fetch_target() else {
            return;
        };

        let loader = self.loader.get_value();
        let fetcher = self.fetcher.get_value();
        let version = self.version;

        spawn_local(async move {
            let result = fetcher.fetch(page).await;
            if let Err(err) = &result {
                error!("page bundle '{}' failed: {}", page, err);
            }

            if loader.complete(page, result) {
                version.update(|v| *v += 1);
            } else {
                log!("page bundle '{}' settled after navigation moved on", page);
            }
        });
    }

    /// Forget a failed page and load `path` again.
    pub fn retry(&self, path: &str) {
        if let Some(route) = self.loader.with_value(|loader| loader.current_route()) {
            self.loader.with_value(|loader| loader.reset(route.page));
        }
        self.navigate(path);
    }

    /// What the content region shows right now (reactive).
    pub fn current(&self) -> ContentView<PageModule> {
        self.version.track();
        self.loader.with_value(|loader| loader.content())
    }

    fn bump(&self) {
        self.version.update(|v| *v += 1);
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Shell state**: theme and sider flags, changed only through [`ShellAction`]s
/// - **Location**: current `pathname + search`, the router's source of truth
/// - **Content**: route resolution and deferred page loading
/// - **Time range**: header selector value shared with pages
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<ShellConfig>,
    pub shell: RwSignal<ShellState>,
    pub location: RwSignal<String>,
    pub time_range: RwSignal<TimeRange>,
    pub content: ContentState,
    theme: StoredValue<Rc<ThemeController<StylesheetThemeService>>, LocalStorage>,
}

impl AppContext {
    pub fn new(config: ShellConfig, table: RouteTable) -> Self {
        let theme = ThemeController::new(StylesheetThemeService::new(config.theme.clone()));
        let fetcher = BundleFetcher::new(config.pages.clone());

        Self {
            shell: RwSignal::new(ShellState::new()),
            location: RwSignal::new(dom::current_location()),
            time_range: RwSignal::new(config.time.default_range),
            content: ContentState::new(table, fetcher),
            theme: StoredValue::new_local(Rc::new(theme)),
            config: StoredValue::new(config),
        }
    }

    /// Apply a [`ShellAction`] to the shell state.
    pub fn dispatch(&self, action: ShellAction) {
        self.shell.update(|state| *state = state.reduce(action));
    }

    /// Handler for the theme switch.
    pub fn set_theme(&self, is_dark: bool) {
        self.activate_theme(Theme::from_dark_flag(is_dark));
    }

    fn activate_theme(&self, theme: Theme) {
        let controller = self.theme.get_value();
        let ctx = *self;
        let dispatch = move |action: ShellAction| ctx.dispatch(action);

        // State flips now; only the stylesheet load is deferred
        let request = controller.request(theme, &dispatch);

        spawn_local(async move {
            if let Err(err) = controller.settle(theme, request, dispatch).await {
                error!("theme switch failed: {}", err);
            }
        });
    }

    /// Client-side navigation: push a history entry and update the location.
    pub fn navigate(&self, path: &str) {
        if self.location.get_untracked() == path {
            return;
        }
        dom::push_location(path);
        self.location.set(path.to_string());
    }
}

/// Log route table entries that can never match and nav links without a route.
fn report_route_table(table: &RouteTable) {
    for shadowed in table.shadowed() {
        warn!(
            "route '{}' is unreachable: '{}' matches first",
            shadowed.pattern, shadowed.shadowed_by
        );
    }
    for link in unresolved_links(table) {
        warn!(
            "nav link '{}' points at undeclared route '{}'",
            link.label, link.target
        );
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts loading the initial (dark) theme
/// - Wraps the app in an ErrorBoundary; theme failures end up here
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let table = RouteTable::standard();
    report_route_table(&table);

    let ctx = AppContext::new(shell_config(), table);
    provide_context(ctx);
    ctx.activate_theme(Theme::Dark);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #141414;
                    color: rgba(255, 255, 255, 0.85);
                    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #ff4d4f; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: rgba(255, 255, 255, 0.45); margin-bottom: 2rem;">
                            "The dashboard could not finish loading. Please try reloading the page."
                        </p>
                        <ul style="
                            text-align: left;
                            margin: 0 0 2rem 0;
                            padding: 1rem 1rem 1rem 2rem;
                            background: #1f1f1f;
                            border-radius: 2px;
                            color: #ff4d4f;
                            font-size: 0.9rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #1890ff;
                                color: white;
                                border: none;
                                padding: 0.5rem 1.5rem;
                                border-radius: 2px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
