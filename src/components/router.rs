//! Application router component.
//!
//! Handles path-based routing over the History API using native browser
//! events instead of leptos_router.
//!
//! # Architecture
//!
//! - **Location path is the source of truth**: [`Navigator`] holds it in a signal
//! - **Static route table**: the page is resolved with [`resolve`]
//! - **One page at a time**: the matched page is the only mounted view
//! - **popstate events**: Browser back/forward buttons work automatically
//! - **Error boundary per page**: a failing page is replaced by a fallback

use leptos::{ev, prelude::*};

use crate::components::icons::{AppIcon, IconName};
use crate::components::pages::{
    AlertManagementPage, CommunityAlertCenterPage, EnvironmentalDataAnalyticsPage, LoginPage,
    MainDashboardPage, NotFoundPage, SystemAdministrationPage,
};
use crate::components::ui::{Button, ButtonVariant};
use crate::config::{APP_NAME, TITLE_SEPARATOR};
use crate::models::{NavRequest, Page, resolve};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/router.module.css");

// ============================================================================
// Navigator
// ============================================================================

/// Navigation context shared by every view.
///
/// Views never touch `window.history` directly; they hand a [`NavRequest`]
/// to the navigator.
#[derive(Clone, Copy)]
pub struct Navigator {
    path: RwSignal<String>,
}

impl Navigator {
    /// Creates a navigator starting at `initial`.
    pub fn new(initial: String) -> Self {
        Self {
            path: RwSignal::new(initial),
        }
    }

    /// Current location path.
    pub fn path(&self) -> String {
        self.path.get()
    }

    /// Page matching the current location.
    pub fn page(&self) -> Page {
        self.path.with(|path| resolve(path))
    }

    /// Carry out a navigation request.
    ///
    /// Pushing the current path only scrolls to the top. If the History API
    /// rejects a push, the current page stays.
    pub fn request(&self, request: NavRequest) {
        match request {
            NavRequest::Push(path) => {
                if self.path.with_untracked(|current| *current == path) {
                    log::debug!("already at {path}");
                    dom::scroll_to_top();
                    return;
                }
                log::debug!("navigate to {path}");
                if dom::push_path(&path) {
                    self.path.set(path);
                }
            }
            NavRequest::Back => {
                log::debug!("navigate back");
                dom::history_back();
            }
        }
    }

    /// Push a new history entry for `path`.
    pub fn navigate(&self, path: impl Into<String>) {
        self.request(NavRequest::Push(path.into()));
    }

    /// Re-read the path after the browser changed the location itself.
    fn sync_from_location(&self) {
        let path = dom::current_path();
        log::debug!("location changed to {path}");
        self.path.set(path);
    }
}

/// Get the [`Navigator`] provided by [`AppRouter`].
pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().expect("Navigator must be provided by AppRouter")
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Routes:
/// - `/`, `/alert-management` → Alert management
/// - `/main-dashboard` → Main dashboard
/// - `/login` → Login
/// - `/system-administration` → System administration
/// - `/environmental-data-analytics` → Environmental data analytics
/// - `/community-alert-center` → Community alert center
/// - anything else → Not found
#[component]
pub fn AppRouter() -> impl IntoView {
    let navigator = Navigator::new(dom::current_path());
    provide_context(navigator);

    let popstate = window_event_listener(ev::popstate, move |_| navigator.sync_from_location());
    on_cleanup(move || popstate.remove());

    let page = Memo::new(move |_| navigator.page());

    // Every navigation starts at the top, even between paths sharing a page
    Effect::new(move |_| {
        navigator.path.track();
        dom::scroll_to_top();
    });

    Effect::new(move |_| {
        let title = format!("{}{}{}", page.get().title(), TITLE_SEPARATOR, APP_NAME);
        dom::set_document_title(&title);
    });

    view! {
        {move || {
            let page = page.get();
            view! { <PageBoundary page=page>{render_page(page)}</PageBoundary> }
        }}
    }
}

/// Render a page, swapping in [`PageErrorFallback`] if it fails.
#[component]
fn PageBoundary(page: Page, children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=move |errors| {
            let messages = Signal::derive(move || {
                errors
                    .get()
                    .into_iter()
                    .map(|(_, e)| e.to_string())
                    .collect::<Vec<_>>()
            });
            view! { <PageErrorFallback page=page messages=messages /> }
        }>
            {children()}
        </ErrorBoundary>
    }
}

/// Mount the view for `page`.
fn render_page(page: Page) -> AnyView {
    match page {
        Page::AlertManagement => view! { <AlertManagementPage /> }.into_any(),
        Page::MainDashboard => view! { <MainDashboardPage /> }.into_any(),
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::SystemAdministration => view! { <SystemAdministrationPage /> }.into_any(),
        Page::EnvironmentalDataAnalytics => {
            view! { <EnvironmentalDataAnalyticsPage /> }.into_any()
        }
        Page::CommunityAlertCenter => view! { <CommunityAlertCenterPage /> }.into_any(),
        Page::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

// ============================================================================
// Error Fallback
// ============================================================================

/// Fallback rendered in place of a page that failed to render.
#[component]
fn PageErrorFallback(page: Page, messages: Signal<Vec<String>>) -> impl IntoView {
    let navigator = use_navigator();

    Effect::new(move |_| {
        for message in messages.get() {
            log::error!("{} failed to render: {message}", page.title());
        }
    });

    view! {
        <div class=css::fallback role="alert">
            <div class=css::fallbackCard>
                <span class=css::fallbackIcon>
                    <AppIcon name=IconName::Warning size=40 />
                </span>
                <h1 class=css::fallbackTitle>"Something went wrong"</h1>
                <p class=css::fallbackText>
                    "This page could not be displayed. Please try reloading the page."
                </p>
                <details class=css::fallbackDetails>
                    <summary>"Error details"</summary>
                    <ul>
                        {move || messages
                            .get()
                            .into_iter()
                            .map(|message| view! { <li>{message}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </details>
                <div class=css::fallbackActions>
                    <Button on_click=Callback::new(move |_: ev::MouseEvent| dom::reload_page())>
                        "Reload Page"
                    </Button>
                    <Show when=move || page != Page::AlertManagement>
                        <Button
                            variant=ButtonVariant::Ghost
                            icon=IconName::Home
                            on_click=Callback::new(move |_: ev::MouseEvent| {
                                navigator.request(NavRequest::to_page(Page::AlertManagement))
                            })
                        >
                            "Go to Alerts"
                        </Button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
