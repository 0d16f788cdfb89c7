//! Main dashboard: headline metrics, station status and the live feed.

use leptos::prelude::*;

use super::widgets::{CardGrid, HealthBadge, ItemList, ListItem, Panel, StatCard};
use crate::components::icons::IconName;
use crate::components::layout::PageLayout;
use crate::components::ui::LoadingSpinner;
use crate::core::dataset;
use crate::models::{Health, Page};

#[component]
pub fn MainDashboardPage() -> impl IntoView {
    view! {
        <PageLayout page=Page::MainDashboard>
            {dataset().map(|data| {
                let online = data
                    .stations
                    .iter()
                    .filter(|station| station.health == Health::Online)
                    .count();

                view! {
                    <CardGrid>
                        {data
                            .metrics
                            .iter()
                            .map(|metric| {
                                let icon = metric
                                    .icon
                                    .as_deref()
                                    .map_or(IconName::Info, IconName::from_name);
                                view! {
                                    <StatCard
                                        label=metric.label.clone()
                                        value=metric.value.clone()
                                        icon=icon
                                        detail=metric.detail.clone()
                                    />
                                }
                            })
                            .collect_view()}
                    </CardGrid>

                    <Panel
                        title="Monitoring stations"
                        subtitle=format!("{online} of {} online", data.stations.len())
                    >
                        <ItemList>
                            {data
                                .stations
                                .iter()
                                .map(|station| view! {
                                    <ListItem title=station.name.clone() meta=station.region.clone()>
                                        <HealthBadge health=station.health />
                                    </ListItem>
                                })
                                .collect_view()}
                        </ItemList>
                    </Panel>

                    <Panel title="Live feed">
                        <LoadingSpinner size="sm" variant="primary" text="Waiting for sensor stream" />
                    </Panel>
                }
            })}
        </PageLayout>
    }
}
