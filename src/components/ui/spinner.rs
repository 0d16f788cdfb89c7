//! Loading spinner.
//!
//! A styled SVG indicator parameterised by [`SpinnerSize`] and
//! [`SpinnerVariant`], with an optional caption.

use leptos::prelude::*;

use crate::utils::classes;

stylance::import_crate_style!(css, "src/components/ui/spinner.module.css");

/// Spinner edge length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Xs,
    Sm,
    #[default]
    Default,
    Lg,
    Xl,
}

impl SpinnerSize {
    #[cfg(test)]
    pub const ALL: [SpinnerSize; 5] = [Self::Xs, Self::Sm, Self::Default, Self::Lg, Self::Xl];

    /// Parse a size name, using [`SpinnerSize::Default`] for unknown values.
    pub fn parse(name: &str) -> Self {
        match name {
            "xs" => Self::Xs,
            "sm" => Self::Sm,
            "default" => Self::Default,
            "lg" => Self::Lg,
            "xl" => Self::Xl,
            other => {
                log::warn!("unknown spinner size {other:?}, using default");
                Self::Default
            }
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Xs => css::sizeXs,
            Self::Sm => css::sizeSm,
            Self::Default => css::sizeDefault,
            Self::Lg => css::sizeLg,
            Self::Xl => css::sizeXl,
        }
    }
}

impl From<&str> for SpinnerSize {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

/// Spinner colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerVariant {
    #[default]
    Default,
    White,
    Gray,
    Primary,
    Secondary,
}

impl SpinnerVariant {
    #[cfg(test)]
    pub const ALL: [SpinnerVariant; 5] = [
        Self::Default,
        Self::White,
        Self::Gray,
        Self::Primary,
        Self::Secondary,
    ];

    /// Parse a variant name, using [`SpinnerVariant::Default`] for unknown values.
    pub fn parse(name: &str) -> Self {
        match name {
            "default" => Self::Default,
            "white" => Self::White,
            "gray" => Self::Gray,
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            other => {
                log::warn!("unknown spinner variant {other:?}, using default");
                Self::Default
            }
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Default => css::colorDefault,
            Self::White => css::colorWhite,
            Self::Gray => css::colorGray,
            Self::Primary => css::colorPrimary,
            Self::Secondary => css::colorSecondary,
        }
    }
}

impl From<&str> for SpinnerVariant {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

/// Class list for the SVG indicator.
fn indicator_class(size: SpinnerSize, variant: SpinnerVariant) -> String {
    classes([css::indicator, size.class(), variant.class()])
}

/// Caption to render, if any. Blank captions are not rendered.
fn caption(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

/// Animated loading indicator with an optional caption beside it.
#[component]
pub fn LoadingSpinner(
    #[prop(optional, into)] size: SpinnerSize,
    #[prop(optional, into)] variant: SpinnerVariant,
    #[prop(optional, into)] text: Option<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let container_class =
        move || classes([css::container, class.get().unwrap_or_default().as_str()]);

    view! {
        <div class=container_class role="status" aria-live="polite">
            <svg
                class=indicator_class(size, variant)
                xmlns="http://www.w3.org/2000/svg"
                fill="none"
                viewBox="0 0 24 24"
                aria-hidden="true"
            >
                <circle class=css::track cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                <path
                    class=css::arc
                    fill="currentColor"
                    d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
                ></path>
            </svg>
            {caption(text).map(|t| view! { <span class=css::caption>{t}</span> })}
        </div>
    }
}
