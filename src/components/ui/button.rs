//! Presentational button.

use leptos::{ev, prelude::*};

use crate::components::icons::{AppIcon, IconName};
use crate::utils::classes;

stylance::import_crate_style!(css, "src/components/ui/button.module.css");

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => css::primary,
            Self::Outline => css::outline,
            Self::Ghost => css::ghost,
        }
    }
}

/// Button with an optional leading icon.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional, into)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let button_class = move || {
        classes([
            css::button,
            variant.class(),
            class.get().unwrap_or_default().as_str(),
        ])
    };

    view! {
        <button
            type=button_type
            class=button_class
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |event| {
                if let Some(on_click) = on_click {
                    on_click.run(event);
                }
            }
        >
            {icon.map(|name| view! { <AppIcon name=name size=16 class=css::icon /> })}
            {children()}
        </button>
    }
}
