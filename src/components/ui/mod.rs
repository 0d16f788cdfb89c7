//! Reusable presentational components.
//!
//! - [`Button`] - Button with variants and an optional icon
//! - [`LanguageToggle`] - Interface language dropdown
//! - [`LoadingSpinner`] - Animated loading indicator

mod button;
mod language_toggle;
mod spinner;

pub use button::{Button, ButtonVariant};
pub use language_toggle::LanguageToggle;
pub use spinner::LoadingSpinner;
