//! Root application module.
//!
//! Contains the main App component, AppContext definition, the Settings
//! store, and application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::DEFAULT_LANGUAGE;
use crate::models::Language;
use crate::utils::dom;

// ============================================================================
// Settings
// ============================================================================

/// Application-level user settings.
///
/// The current language lives here, not in the language toggle. Views read
/// it and request changes through [`Settings::set_language`].
#[derive(Clone, Copy)]
pub struct Settings {
    /// Code of the interface language (e.g. `"en"`).
    pub language: RwSignal<String>,
}

impl Settings {
    /// Creates settings with the default language.
    pub fn new() -> Self {
        Self {
            language: RwSignal::new(DEFAULT_LANGUAGE.to_string()),
        }
    }

    /// Switch the interface language.
    ///
    /// Unknown codes are stored as given; every reader resolves them to the
    /// first configured language.
    pub fn set_language(&self, code: String) {
        if Language::lookup(&code).is_none() {
            log::warn!("switching to unknown language code {code:?}");
        }
        if self.language.with_untracked(|current| *current != code) {
            log::info!("interface language changed to {code}");
            self.language.set(code);
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
/// Navigation state is provided separately by the router.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// User settings (interface language).
    pub settings: Settings,
}

impl AppContext {
    /// Creates a new application context with default state.
    pub fn new() -> Self {
        Self {
            settings: Settings::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Mirrors the interface language onto `<html lang>`
/// - Renders the router, which owns the error boundary
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    let language = ctx.settings.language;
    Effect::new(move |_| {
        let code = language.get();
        dom::set_document_language(Language::find(&code).code);
    });

    view! { <AppRouter /> }
}
