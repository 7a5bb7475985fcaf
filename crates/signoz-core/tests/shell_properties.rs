//! End-to-end behavior of the shell core: routing, deferred loading,
//! theme switching and sider state, driven without any rendering surface.

use std::cell::RefCell;
use std::rc::Rc;

use signoz_core::{
    ContentView, LoadError, LoadOutcome, ModuleFetcher, ModuleState, PageId, PageLoader,
    RouteTable, ShellAction, ShellState, Theme, ThemeController, ThemeError, ThemeService,
    ThemeStatus,
};

// ============================================================================
// Test doubles
// ============================================================================

/// Fetcher that records every request and can be told to stall or fail.
#[derive(Default)]
struct RecordingFetcher {
    calls: RefCell<Vec<PageId>>,
    /// Pages that yield to the executor this many times before resolving.
    stalls: Vec<(PageId, usize)>,
    failing: Vec<PageId>,
}

impl RecordingFetcher {
    fn calls_for(&self, page: PageId) -> usize {
        self.calls.borrow().iter().filter(|p| **p == page).count()
    }
}

impl ModuleFetcher<String> for RecordingFetcher {
    async fn fetch(&self, page: PageId) -> Result<String, LoadError> {
        self.calls.borrow_mut().push(page);

        let stalls = self
            .stalls
            .iter()
            .find(|(p, _)| *p == page)
            .map_or(0, |(_, n)| *n);
        for _ in 0..stalls {
            tokio::task::yield_now().await;
        }

        if self.failing.contains(&page) {
            Err(LoadError::Network("connection reset".to_string()))
        } else {
            Ok(format!("module:{}", page.slug()))
        }
    }
}

#[derive(Default)]
struct RecordingThemeService {
    requests: Rc<RefCell<Vec<Theme>>>,
    fail_light: bool,
}

impl ThemeService for RecordingThemeService {
    async fn activate(&self, theme: Theme) -> Result<(), ThemeError> {
        self.requests.borrow_mut().push(theme);
        tokio::task::yield_now().await;
        if self.fail_light && theme == Theme::Light {
            Err(ThemeError::StylesheetFailed(theme))
        } else {
            Ok(())
        }
    }
}

fn mounted_page(outcome: &LoadOutcome<String>) -> PageId {
    match outcome {
        LoadOutcome::Mounted { route, .. } => route.page,
        other => panic!("expected a mounted page, got {other:?}"),
    }
}

// ============================================================================
// Routing
// ============================================================================

#[tokio::test(flavor = "current_thread")]
async fn every_supported_path_mounts_one_page() {
    let cases = [
        ("/application/frontend", PageId::ServiceMetrics),
        ("/service-map", PageId::ServiceMap),
        ("/traces", PageId::TraceDetail),
        ("/traces/abc", PageId::TraceGraph),
        ("/settings", PageId::Settings),
        ("/add-instrumentation", PageId::Instrumentation),
        ("/usage-explorer", PageId::UsageExplorer),
        ("/", PageId::ServicesTable),
        ("/application", PageId::ServicesTable),
    ];

    let loader = PageLoader::new(RouteTable::standard());
    let fetcher = RecordingFetcher::default();

    for (path, expected) in cases {
        let outcome = loader.load(path, &fetcher).await;
        assert_eq!(mounted_page(&outcome), expected, "path {path}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn service_name_is_passed_to_metrics_page() {
    let loader = PageLoader::new(RouteTable::standard());
    let fetcher = RecordingFetcher::default();

    match loader.load("/application/acme", &fetcher).await {
        LoadOutcome::Mounted { module, route } => {
            assert_eq!(module, "module:service-metrics");
            assert_eq!(route.page, PageId::ServiceMetrics);
            assert_eq!(route.params.get("servicename"), Some("acme"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn trace_id_selects_graph_and_bare_traces_selects_list() {
    let loader = PageLoader::new(RouteTable::standard());
    let fetcher = RecordingFetcher::default();

    match loader.load("/traces/42", &fetcher).await {
        LoadOutcome::Mounted { route, .. } => {
            assert_eq!(route.page, PageId::TraceGraph);
            assert_eq!(route.params.get("id"), Some("42"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    let outcome = loader.load("/traces", &fetcher).await;
    assert_eq!(mounted_page(&outcome), PageId::TraceDetail);
}

// ============================================================================
// Deferred loading
// ============================================================================

#[tokio::test(flavor = "current_thread")]
async fn revisiting_a_loaded_route_does_not_fetch_again() {
    let loader = PageLoader::new(RouteTable::standard());
    let fetcher = RecordingFetcher::default();

    loader.load("/service-map", &fetcher).await;
    loader.load("/settings", &fetcher).await;
    loader.load("/service-map", &fetcher).await;
    loader.load("/service-map/", &fetcher).await;

    assert_eq!(fetcher.calls_for(PageId::ServiceMap), 1);
    assert_eq!(fetcher.calls_for(PageId::Settings), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn two_routes_sharing_a_page_share_one_fetch() {
    let loader = PageLoader::new(RouteTable::standard());
    let fetcher = RecordingFetcher::default();

    loader.load("/", &fetcher).await;
    loader.load("/application", &fetcher).await;

    assert_eq!(fetcher.calls_for(PageId::ServicesTable), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn late_resolution_does_not_clobber_newer_navigation() {
    let loader = PageLoader::new(RouteTable::standard());
    let fetcher = RecordingFetcher {
        stalls: vec![(PageId::TraceDetail, 3)],
        ..Default::default()
    };

    let (first, second) = tokio::join!(
        loader.load("/traces", &fetcher),
        loader.load("/traces/9", &fetcher),
    );

    assert_eq!(first, LoadOutcome::Superseded);
    assert_eq!(mounted_page(&second), PageId::TraceGraph);

    // The slow module was still cached, but the content is the newer page
    assert_eq!(
        loader.module_state(PageId::TraceDetail),
        ModuleState::Loaded("module:trace-detail".to_string())
    );
    match loader.content() {
        ContentView::Ready { route, .. } => assert_eq!(route.page, PageId::TraceGraph),
        other => panic!("unexpected content: {other:?}"),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn concurrent_demand_for_one_page_fetches_once() {
    let loader = PageLoader::new(RouteTable::standard());
    let fetcher = RecordingFetcher {
        stalls: vec![(PageId::UsageExplorer, 2)],
        ..Default::default()
    };

    let (first, second) = tokio::join!(
        loader.load("/usage-explorer", &fetcher),
        loader.load("/usage-explorer/daily", &fetcher),
    );

    // The latest navigation waits for the fetch it shares and mounts the page
    assert_eq!(first, LoadOutcome::Superseded);
    match second {
        LoadOutcome::Mounted { module, route } => {
            assert_eq!(module, "module:usage-explorer");
            assert_eq!(route.page, PageId::UsageExplorer);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(fetcher.calls_for(PageId::UsageExplorer), 1);
    assert!(matches!(loader.content(), ContentView::Ready { .. }));
}

#[tokio::test(flavor = "current_thread")]
async fn waiting_navigation_sees_shared_fetch_failure() {
    let loader = PageLoader::new(RouteTable::standard());
    let fetcher = RecordingFetcher {
        stalls: vec![(PageId::ServiceMap, 2)],
        failing: vec![PageId::ServiceMap],
        ..Default::default()
    };

    let (first, second) = tokio::join!(
        loader.load("/service-map", &fetcher),
        loader.load("/service-map/", &fetcher),
    );

    assert_eq!(first, LoadOutcome::Superseded);
    assert_eq!(
        second,
        LoadOutcome::Failed(LoadError::Network("connection reset".to_string()))
    );
    assert_eq!(fetcher.calls_for(PageId::ServiceMap), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn fetch_failure_is_handed_to_the_boundary() {
    let loader = PageLoader::new(RouteTable::standard());
    let fetcher = RecordingFetcher {
        failing: vec![PageId::Settings],
        ..Default::default()
    };

    let outcome = loader.load("/settings", &fetcher).await;
    let expected = LoadError::Network("connection reset".to_string());
    assert_eq!(outcome, LoadOutcome::Failed(expected.clone()));
    assert_eq!(loader.content(), ContentView::Failed(expected.clone()));

    // The failure stays cached until the boundary resets it
    loader.load("/settings", &fetcher).await;
    assert_eq!(fetcher.calls_for(PageId::Settings), 1);

    loader.reset(PageId::Settings);
    loader.load("/settings", &fetcher).await;
    assert_eq!(fetcher.calls_for(PageId::Settings), 2);
}

// ============================================================================
// Theme and sider
// ============================================================================

#[tokio::test(flavor = "current_thread")]
async fn toggling_theme_twice_returns_to_dark() {
    let service = RecordingThemeService::default();
    let requests = Rc::clone(&service.requests);
    let controller = ThemeController::new(service);
    let state = RefCell::new(ShellState::new());
    let dispatch = |action: ShellAction| {
        let next = state.borrow().reduce(action);
        *state.borrow_mut() = next;
    };

    controller.set_theme(false, dispatch).await.unwrap();
    assert_eq!(state.borrow().theme, Theme::Light);

    controller.set_theme(true, dispatch).await.unwrap();
    assert!(state.borrow().is_dark());
    assert_eq!(state.borrow().theme_status, ThemeStatus::Ready);

    assert_eq!(*requests.borrow(), vec![Theme::Light, Theme::Dark]);
}

#[tokio::test(flavor = "current_thread")]
async fn shell_is_blank_while_theme_is_loading() {
    let controller = ThemeController::new(RecordingThemeService::default());
    let state = RefCell::new(ShellState::new());
    let blank_seen = RefCell::new(Vec::new());
    let dispatch = |action: ShellAction| {
        let next = state.borrow().reduce(action);
        blank_seen.borrow_mut().push(next.is_blank());
        *state.borrow_mut() = next;
    };

    controller.activate(Theme::Dark, dispatch).await.unwrap();

    assert_eq!(*blank_seen.borrow(), vec![true, false]);
}

#[tokio::test(flavor = "current_thread")]
async fn theme_failure_is_surfaced() {
    let controller = ThemeController::new(RecordingThemeService {
        fail_light: true,
        ..Default::default()
    });
    let state = RefCell::new(ShellState::new());
    let dispatch = |action: ShellAction| {
        let next = state.borrow().reduce(action);
        *state.borrow_mut() = next;
    };

    let err = controller.set_theme(false, dispatch).await.unwrap_err();
    assert_eq!(err, ThemeError::StylesheetFailed(Theme::Light));
    assert_eq!(
        state.borrow().theme_status,
        ThemeStatus::Failed(ThemeError::StylesheetFailed(Theme::Light))
    );
}

#[tokio::test(flavor = "current_thread")]
async fn collapsing_sider_keeps_route_and_page() {
    let loader = PageLoader::new(RouteTable::standard());
    let fetcher = RecordingFetcher::default();
    loader.load("/traces/42", &fetcher).await;

    let before = loader.content();
    let state = ShellState::new()
        .reduce(ShellAction::ToggleSider)
        .reduce(ShellAction::ToggleSider)
        .reduce(ShellAction::ToggleSider);

    assert!(state.collapsed);
    assert_eq!(loader.content(), before);
    assert_eq!(fetcher.calls.borrow().len(), 1);
}
