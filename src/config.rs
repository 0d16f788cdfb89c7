//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Data assets are loaded at compile time using `include_str!`.

// =============================================================================
// Data Assets (loaded at compile time)
// =============================================================================

/// Sample dataset rendered by the dashboard pages.
pub const SAMPLE_DATASET: &str = include_str!("../assets/data/coastal.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header and document title.
pub const APP_NAME: &str = "CoastWatch";

/// Tagline displayed under the brand.
pub const APP_TAGLINE: &str = "Coastal hazard monitoring and community alerts";

/// Separator between the page title and [`APP_NAME`] in `document.title`.
pub const TITLE_SEPARATOR: &str = " | ";

// =============================================================================
// Language Configuration
// =============================================================================

/// Language code used when the caller does not supply one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Language every bulletin must carry; other translations fall back to it.
pub const FALLBACK_LANGUAGE: &str = "en";

// =============================================================================
// Layout Configuration
// =============================================================================

/// Viewports matching this query collapse the primary navigation.
pub const COMPACT_NAV_QUERY: &str = "(max-width: 768px)";

/// Default icon edge length in pixels.
pub const DEFAULT_ICON_SIZE: u32 = 20;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Logging
// =============================================================================

/// Console log level for debug builds.
pub const DEBUG_LOG_LEVEL: log::Level = log::Level::Debug;

/// Console log level for release builds.
pub const RELEASE_LOG_LEVEL: log::Level = log::Level::Info;

/// Log level for the current build profile.
pub const fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        DEBUG_LOG_LEVEL
    } else {
        RELEASE_LOG_LEVEL
    }
}
