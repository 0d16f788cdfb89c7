//! UI components built with Leptos.
//!
//! - [`router`] - Path routing and the page error boundary (main entry point)
//! - [`layout`] - Shared page chrome with navigation and language toggle
//! - [`pages`] - Routed page views
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`ui`] - Presentational building blocks (button, spinner, language toggle)

pub mod icons;
pub mod layout;
pub mod pages;
pub mod router;
pub mod ui;

pub use router::AppRouter;
