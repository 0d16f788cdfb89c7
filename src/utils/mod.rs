//! Utility modules for DOM access and styling.
//!
//! Provides:
//! - [`dom`] - Browser navigation, scrolling and document helpers
//! - [`classes`], [`with_modifier`] - CSS class string merging

mod class;
pub mod dom;

pub use class::{classes, with_modifier};
