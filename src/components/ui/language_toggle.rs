//! Language toggle dropdown.
//!
//! Shows the current language and lets the user pick another one. The
//! current language is owned by the caller: a selection is only reported
//! through `on_language_change`.
//!
//! Escape and pointer-down outside the component close the menu. Both
//! listeners are attached to the window on mount and removed on cleanup.

use leptos::{ev, html, prelude::*};

use crate::components::icons::{AppIcon, IconName};
use crate::config::DEFAULT_LANGUAGE;
use crate::core::{Text, translate};
use crate::models::{DropdownEvent, DropdownState, Language};
use crate::utils::{classes, dom, with_modifier};

stylance::import_crate_style!(css, "src/components/ui/language_toggle.module.css");

/// Dropdown for switching the interface language.
///
/// # Props
/// - `current_language`: code of the active language (default `"en"`);
///   unknown codes display the first language
/// - `on_language_change`: invoked once per selection with the chosen code
/// - `class`: extra classes for the wrapper
#[component]
pub fn LanguageToggle(
    #[prop(optional, into)] current_language: MaybeProp<String>,
    #[prop(into)] on_language_change: Callback<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let (state, set_state) = signal(DropdownState::default());
    let container_ref = NodeRef::<html::Div>::new();

    let current = Memo::new(move |_| {
        let code = current_language
            .get()
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        *Language::find(&code)
    });

    let dispatch = move |event: DropdownEvent| {
        let (next, selected) = state.get_untracked().handle(event);
        if next != state.get_untracked() {
            set_state.set(next);
        }
        if let Some(code) = selected {
            log::debug!("language selected: {code}");
            on_language_change.run(code);
        }
    };

    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            dispatch(DropdownEvent::Escape);
        }
    });
    let mousedown = window_event_listener(ev::mousedown, move |event| {
        let inside = container_ref
            .get_untracked()
            .is_some_and(|container| dom::event_within(&container, &event));
        dispatch(DropdownEvent::PointerDown { inside });
    });
    on_cleanup(move || {
        keydown.remove();
        mousedown.remove();
    });

    let is_open = move || state.get().is_open();
    let wrapper_class = move || classes([css::toggle, class.get().unwrap_or_default().as_str()]);

    view! {
        <div node_ref=container_ref class=wrapper_class>
            <button
                type="button"
                class=css::trigger
                aria-haspopup="listbox"
                aria-expanded=move || is_open().to_string()
                title=move || translate(current.get().code, Text::SelectLanguage)
                on:click=move |_| dispatch(DropdownEvent::Activate)
            >
                <AppIcon name=IconName::Globe size=16 />
                <span class=css::symbol>{move || current.get().symbol}</span>
                <span class=css::label>{move || current.get().native_name}</span>
                <span class=move || with_modifier(css::chevron, css::chevronOpen, is_open())>
                    <AppIcon name=IconName::ChevronDown size=14 />
                </span>
            </button>

            <Show when=is_open>
                <ul class=css::menu role="listbox">
                    {Language::all()
                        .iter()
                        .map(|lang| {
                            let code = lang.code;
                            let selected = move || current.get().code == code;
                            view! {
                                <li role="option" aria-selected=move || selected().to_string()>
                                    <button
                                        type="button"
                                        class=move || with_modifier(css::option, css::optionActive, selected())
                                        on:click=move |_| dispatch(DropdownEvent::Select(code.to_string()))
                                    >
                                        <span class=css::symbol>{lang.symbol}</span>
                                        <span class=css::optionText>
                                            <span class=css::nativeName>{lang.native_name}</span>
                                            <span class=css::englishName>{lang.name}</span>
                                        </span>
                                        <Show when=selected>
                                            <AppIcon name=IconName::Check size=14 class=css::check />
                                        </Show>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use leptos::task::Executor;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const TRIGGER: &str = "button[aria-haspopup]";

    fn host() -> web_sys::HtmlElement {
        let document = dom::window().and_then(|w| w.document()).unwrap();
        let host = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&host).unwrap();
        host.unchecked_into()
    }

    fn click(host: &web_sys::HtmlElement, selector: &str) {
        host.query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("no element matches {selector}"))
            .unchecked_into::<web_sys::HtmlElement>()
            .click();
    }

    fn press_escape_on_window() {
        let init = web_sys::KeyboardEventInit::new();
        init.set_key("Escape");
        let event = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        dom::window().unwrap().dispatch_event(&event).unwrap();
    }

    fn mouse_down_on_window() {
        let event = web_sys::MouseEvent::new("mousedown").unwrap();
        dom::window().unwrap().dispatch_event(&event).unwrap();
    }

    async fn settle() {
        Executor::tick().await;
        Executor::tick().await;
    }

    #[wasm_bindgen_test]
    async fn test_window_listeners_follow_component_lifetime() {
        let _ = Executor::init_wasm_bindgen();
        let selections = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&selections);
        let host = host();
        let owner = Owner::new();
        let handle = owner.with(|| {
            mount_to(host.clone(), move || {
                let on_change = Callback::new(move |_code: String| {
                    counter.fetch_add(1, Ordering::SeqCst);
                });
                view! { <LanguageToggle on_language_change=on_change /> }
            })
        });
        let menu_open = || host.query_selector("[role='listbox']").unwrap().is_some();

        click(&host, TRIGGER);
        settle().await;
        assert!(menu_open());

        press_escape_on_window();
        settle().await;
        assert!(!menu_open());

        click(&host, TRIGGER);
        settle().await;
        mouse_down_on_window();
        settle().await;
        assert!(!menu_open());

        click(&host, TRIGGER);
        settle().await;
        click(&host, "[role='listbox'] li:last-child button");
        settle().await;
        assert_eq!(selections.load(Ordering::SeqCst), 1);
        assert!(!menu_open());

        drop(handle);
        owner.cleanup();

        // Listeners left behind would touch disposed signals here
        press_escape_on_window();
        mouse_down_on_window();
        settle().await;
        assert_eq!(selections.load(Ordering::SeqCst), 1);

        host.remove();
    }
}
