//! Building blocks shared by the dashboard pages.
//!
//! Panels, stat cards, tables, lists and status badges. Pages compose these
//! instead of styling markup themselves.

use leptos::prelude::*;

use crate::components::icons::{AppIcon, IconName};
use crate::models::{Health, Severity};
use crate::utils::classes;

stylance::import_crate_style!(css, "src/components/pages/widgets.module.css");

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => css::toneInfo,
        Severity::Advisory => css::toneAdvisory,
        Severity::Warning => css::toneWarning,
        Severity::Critical => css::toneCritical,
    }
}

fn health_class(health: Health) -> &'static str {
    match health {
        Health::Online => css::toneOk,
        Health::Degraded => css::toneWarning,
        Health::Offline => css::toneCritical,
    }
}

// =============================================================================
// Containers
// =============================================================================

/// Titled section with an optional muted subtitle beside the title.
#[component]
pub fn Panel(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=css::panel>
            <div class=css::panelHeader>
                <h2 class=css::panelTitle>{title}</h2>
                {subtitle.map(|text| view! { <MutedText text=text /> })}
            </div>
            {children()}
        </section>
    }
}

#[component]
pub fn MutedText(#[prop(into)] text: String) -> impl IntoView {
    view! { <span class=css::muted>{text}</span> }
}

// =============================================================================
// Stat cards
// =============================================================================

#[component]
pub fn CardGrid(children: Children) -> impl IntoView {
    view! { <section class=css::cardGrid>{children()}</section> }
}

/// Headline figure. A severity tints the card.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(into, default = None)] detail: Option<String>,
    #[prop(optional)] severity: Option<Severity>,
) -> impl IntoView {
    let card_class = classes([css::card, severity.map_or("", severity_class)]);

    view! {
        <div class=card_class>
            {icon.map(|name| view! { <span class=css::cardIcon><AppIcon name=name size=22 /></span> })}
            <span class=css::cardLabel>{label}</span>
            <span class=css::cardValue>{value}</span>
            {detail.map(|text| view! { <MutedText text=text /> })}
        </div>
    }
}

// =============================================================================
// Tables
// =============================================================================

/// Table column header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    /// Right-aligned, tabular figures.
    pub numeric: bool,
}

impl Column {
    pub const fn text(label: &'static str) -> Self {
        Self {
            label,
            numeric: false,
        }
    }

    pub const fn numeric(label: &'static str) -> Self {
        Self {
            label,
            numeric: true,
        }
    }

    fn class(self) -> &'static str {
        if self.numeric { css::numeric } else { "" }
    }
}

/// Scrollable table; `children` are the body rows.
#[component]
pub fn DataTable(columns: &'static [Column], children: Children) -> impl IntoView {
    view! {
        <div class=css::tableWrap>
            <table class=css::table>
                <thead>
                    <tr>
                        {columns
                            .iter()
                            .map(|column| view! { <th class=column.class()>{column.label}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>{children()}</tbody>
            </table>
        </div>
    }
}

/// Body cell aligned like a [`Column::numeric`] header.
#[component]
pub fn NumericCell(#[prop(into)] value: String) -> impl IntoView {
    view! { <td class=css::numeric>{value}</td> }
}

// =============================================================================
// Lists
// =============================================================================

#[component]
pub fn ItemList(children: Children) -> impl IntoView {
    view! { <ul class=css::list>{children()}</ul> }
}

/// List row with a title, an optional muted line below it, and trailing
/// content on the right.
#[component]
pub fn ListItem(
    #[prop(into)] title: String,
    #[prop(optional, into)] meta: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <li class=css::listItem>
            <div>
                <div class=css::itemTitle>{title}</div>
                {meta.map(|text| view! { <MutedText text=text /> })}
            </div>
            {children.map(|trailing| trailing())}
        </li>
    }
}

// =============================================================================
// Badges
// =============================================================================

#[component]
pub fn SeverityBadge(severity: Severity) -> impl IntoView {
    view! {
        <span class=classes([css::badge, severity_class(severity)])>{severity.label()}</span>
    }
}

#[component]
pub fn HealthBadge(health: Health) -> impl IntoView {
    view! {
        <span class=classes([css::badge, health_class(health)])>
            <span class=css::dot></span>
            {health.label()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_columns_carry_alignment_class() {
        assert_eq!(Column::numeric("Tide (m)").class(), css::numeric);
        assert_eq!(Column::text("Station").class(), "");
    }

    #[test]
    fn test_tones_are_distinct_per_severity() {
        let tones: std::collections::HashSet<_> =
            Severity::DESCENDING.iter().map(|&s| severity_class(s)).collect();
        assert_eq!(tones.len(), Severity::DESCENDING.len());
    }
}
