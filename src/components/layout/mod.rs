//! Shared page chrome.
//!
//! Every routed page except "not found" renders inside [`PageLayout`]: a
//! header with the brand, primary navigation and the language toggle,
//! followed by the page title and content.
//!
//! ## Responsive behavior
//!
//! | Breakpoint | Navigation |
//! |------------|------------|
//! | Desktop (> 768px) | Inline links |
//! | Mobile (<= 768px) | Collapsed behind a menu button |

use leptos::{ev, prelude::*};
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::icons::{AppIcon, IconName};
use crate::components::router::use_navigator;
use crate::components::ui::LanguageToggle;
use crate::config::{APP_NAME, APP_TAGLINE, COMPACT_NAV_QUERY};
use crate::core::{Text, translate};
use crate::models::Page;
use crate::utils::{dom, with_modifier};

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Pages listed in the primary navigation, in display order.
const NAV_PAGES: [Page; 6] = [
    Page::AlertManagement,
    Page::MainDashboard,
    Page::EnvironmentalDataAnalytics,
    Page::CommunityAlertCenter,
    Page::SystemAdministration,
    Page::Login,
];

fn nav_icon(page: Page) -> IconName {
    match page {
        Page::AlertManagement => IconName::Bell,
        Page::MainDashboard => IconName::Dashboard,
        Page::EnvironmentalDataAnalytics => IconName::Analytics,
        Page::CommunityAlertCenter => IconName::Community,
        Page::SystemAdministration => IconName::Settings,
        Page::Login => IconName::Login,
        Page::NotFound => IconName::Info,
    }
}

/// Header, navigation and title around a page's content.
#[component]
pub fn PageLayout(page: Page, children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let navigator = use_navigator();
    let language = ctx.settings.language;

    let compact = use_media_query(COMPACT_NAV_QUERY.to_string());
    let (menu_open, set_menu_open) = signal(false);

    // Leaving compact mode resets the menu
    Effect::new(move |_| {
        if !compact.get() {
            set_menu_open.set(false);
        }
    });

    let nav_hidden = move || compact.get() && !menu_open.get();
    let on_language_change = Callback::new(move |code: String| ctx.settings.set_language(code));

    let on_brand_click = move |event: ev::MouseEvent| {
        if !dom::is_modified_click(&event) {
            event.prevent_default();
            navigator.navigate("/");
        }
    };

    view! {
        <div class=css::page>
            <header class=css::header>
                <a href="/" class=css::brand on:click=on_brand_click>
                    <AppIcon name=IconName::Waves size=28 class=css::brandIcon />
                    <span class=css::brandText>
                        <span class=css::brandName>{APP_NAME}</span>
                        <span class=css::tagline>{APP_TAGLINE}</span>
                    </span>
                </a>

                <Show when=move || compact.get()>
                    <button
                        type="button"
                        class=css::menuButton
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <AppIcon name=IconName::Menu size=18 />
                        <span>{move || translate(&language.get(), Text::Menu)}</span>
                    </button>
                </Show>

                <nav class=move || with_modifier(css::nav, css::navHidden, nav_hidden())>
                    {NAV_PAGES
                        .iter()
                        .map(|&item| {
                            let href = item.path().unwrap_or("/");
                            let on_click = move |event: ev::MouseEvent| {
                                if !dom::is_modified_click(&event) {
                                    event.prevent_default();
                                    set_menu_open.set(false);
                                    navigator.navigate(href);
                                }
                            };
                            view! {
                                <a
                                    href=href
                                    class=with_modifier(css::navLink, css::navLinkActive, item == page)
                                    aria-current=(item == page).then_some("page")
                                    on:click=on_click
                                >
                                    <AppIcon name=nav_icon(item) size=16 />
                                    <span>{move || translate(&language.get(), Text::PageTitle(item))}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <LanguageToggle
                    current_language=Signal::derive(move || language.get())
                    on_language_change=on_language_change
                    class=css::language
                />
            </header>

            <main class=css::content>
                <h1 class=css::title>{move || translate(&language.get(), Text::PageTitle(page))}</h1>
                {children()}
            </main>
        </div>
    }
}
