//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Page`], [`NavRequest`] - Path-based route table
//! - [`Language`] - Fixed interface language list
//! - [`DropdownState`], [`DropdownEvent`] - Dropdown open/closed state machine
//! - [`Dataset`] and its records - Sample monitoring data for the dashboards

mod dataset;
mod language;
mod route;
mod toggle;

pub use dataset::{Bulletin, Dataset, Health, Metric, Reading, ReadingSummary, Severity, Station};
pub use language::Language;
pub use route::{NavRequest, Page, resolve};
pub use toggle::{DropdownEvent, DropdownState};
