//! Fallback view for paths outside the route table.
//!
//! Rendered without [`PageLayout`](crate::components::layout::PageLayout):
//! a short explanation, the unmatched path and a way back into the app.

use leptos::{ev, prelude::*};

use crate::app::AppContext;
use crate::components::icons::{AppIcon, IconName};
use crate::components::router::use_navigator;
use crate::components::ui::{Button, ButtonVariant};
use crate::core::{Text, translate};
use crate::models::{NavRequest, Page};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/pages/not_found.module.css");

/// Pages offered as quick links.
const QUICK_LINKS: [Page; 4] = [
    Page::MainDashboard,
    Page::EnvironmentalDataAnalytics,
    Page::CommunityAlertCenter,
    Page::Login,
];

/// Something the visitor can do from the not-found page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NotFoundAction {
    Home,
    Back,
    QuickLink(Page),
}

impl NotFoundAction {
    fn request(self) -> NavRequest {
        match self {
            Self::Home => NavRequest::Push("/".to_string()),
            Self::Back => NavRequest::Back,
            Self::QuickLink(page) => NavRequest::to_page(page),
        }
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let navigator = use_navigator();
    let language = ctx.settings.language;
    let text = move |key: Text| translate(&language.get(), key);

    let run = move |action: NotFoundAction| navigator.request(action.request());

    Effect::new(move |_| log::warn!("no route for {}", navigator.path()));

    view! {
        <div class=css::page>
            <div class=css::card>
                <span class=css::icon>
                    <AppIcon name=IconName::Warning size=56 />
                </span>
                <h1 class=css::heading>{move || text(Text::NotFoundHeading)}</h1>
                <p class=css::message>{move || text(Text::NotFoundMessage)}</p>
                <code class=css::path>{move || navigator.path()}</code>

                <div class=css::actions>
                    <Button
                        icon=IconName::Home
                        on_click=Callback::new(move |_: ev::MouseEvent| run(NotFoundAction::Home))
                    >
                        {move || text(Text::GoToDashboard)}
                    </Button>
                    <Button
                        variant=ButtonVariant::Outline
                        icon=IconName::ArrowLeft
                        on_click=Callback::new(move |_: ev::MouseEvent| run(NotFoundAction::Back))
                    >
                        {move || text(Text::GoBack)}
                    </Button>
                </div>

                <nav class=css::quickLinks>
                    <h2 class=css::quickTitle>{move || text(Text::QuickLinks)}</h2>
                    <ul>
                        {QUICK_LINKS
                            .iter()
                            .map(|&page| {
                                let href = page.path().unwrap_or("/");
                                view! {
                                    <li>
                                        <a
                                            href=href
                                            on:click=move |event: ev::MouseEvent| {
                                                if !dom::is_modified_click(&event) {
                                                    event.prevent_default();
                                                    run(NotFoundAction::QuickLink(page));
                                                }
                                            }
                                        >
                                            {move || text(Text::PageTitle(page))}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_pushes_root() {
        assert_eq!(
            NotFoundAction::Home.request(),
            NavRequest::Push("/".to_string())
        );
    }

    #[test]
    fn test_back_goes_one_step() {
        assert_eq!(NotFoundAction::Back.request(), NavRequest::Back);
    }

    #[test]
    fn test_quick_links() {
        let paths: Vec<_> = QUICK_LINKS
            .iter()
            .map(|&page| NotFoundAction::QuickLink(page).request())
            .collect();
        assert_eq!(
            paths,
            [
                NavRequest::Push("/main-dashboard".to_string()),
                NavRequest::Push("/environmental-data-analytics".to_string()),
                NavRequest::Push("/community-alert-center".to_string()),
                NavRequest::Push("/login".to_string()),
            ]
        );
    }
}
