//! Public bulletins in the reader's language.

use leptos::prelude::*;

use super::widgets::{MutedText, Panel, SeverityBadge};
use crate::app::AppContext;
use crate::components::layout::PageLayout;
use crate::components::ui::LoadingSpinner;
use crate::core::dataset;
use crate::models::{Bulletin, Page};

stylance::import_crate_style!(css, "src/components/pages/community_alert_center.module.css");

#[component]
fn BulletinEntry(bulletin: &'static Bulletin, language: RwSignal<String>) -> impl IntoView {
    let text = move || language.with(|code| bulletin.localized(code));

    view! {
        <article class=css::bulletin>
            <div class=css::bulletinHeader>
                <SeverityBadge severity=bulletin.severity />
                <span class=css::title>{move || text().map(|t| t.title.clone())}</span>
                <MutedText text=bulletin.published_at.clone() />
            </div>
            <p class=css::bulletinBody>{move || text().map(|t| t.body.clone())}</p>
        </article>
    }
}

#[component]
pub fn CommunityAlertCenterPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let language = ctx.settings.language;

    view! {
        <PageLayout page=Page::CommunityAlertCenter>
            {dataset().map(|data| view! {
                <Panel title="Public bulletins">
                    <LoadingSpinner size="xs" variant="gray" text="Checking for new bulletins" />
                    {if data.bulletins.is_empty() {
                        view! { <MutedText text="No bulletins have been published." /> }.into_any()
                    } else {
                        data.bulletins
                            .iter()
                            .map(|bulletin| view! {
                                <BulletinEntry bulletin=bulletin language=language />
                            })
                            .collect_view()
                            .into_any()
                    }}
                </Panel>
            })}
        </PageLayout>
    }
}
