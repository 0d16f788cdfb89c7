//! Non-UI application logic.
//!
//! - [`data`] - Embedded sample dataset loading
//! - [`error`] - Domain error types
//! - [`i18n`] - Interface string translations

pub mod data;
pub mod error;
pub mod i18n;

pub use data::dataset;
pub use i18n::{Text, translate};
