//! Alert management page (`/` and `/alert-management`).

use leptos::prelude::*;

use super::widgets::{CardGrid, Column, DataTable, Panel, SeverityBadge, StatCard};
use crate::components::layout::PageLayout;
use crate::core::dataset;
use crate::models::Page;

const ALERT_COLUMNS: &[Column] = &[
    Column::text("ID"),
    Column::text("Alert"),
    Column::text("Station"),
    Column::text("Severity"),
    Column::text("Status"),
    Column::text("Issued"),
];

/// Severity totals followed by every issued alert, most severe first.
#[component]
pub fn AlertManagementPage() -> impl IntoView {
    view! {
        <PageLayout page=Page::AlertManagement>
            {dataset().map(|data| view! {
                <CardGrid>
                    {data
                        .severity_counts()
                        .into_iter()
                        .map(|(severity, count)| view! {
                            <StatCard label=severity.label() value=count.to_string() severity=severity />
                        })
                        .collect_view()}
                </CardGrid>

                <Panel title="Issued alerts" subtitle=format!("{} total", data.alerts.len())>
                    <DataTable columns=ALERT_COLUMNS>
                        {data
                            .alerts_by_severity()
                            .into_iter()
                            .map(|alert| view! {
                                <tr>
                                    <td>{alert.id.clone()}</td>
                                    <td>{alert.title.clone()}</td>
                                    <td>{data.station_name(&alert.station).to_string()}</td>
                                    <td><SeverityBadge severity=alert.severity /></td>
                                    <td>{alert.status.label()}</td>
                                    <td>{alert.issued_at.clone()}</td>
                                </tr>
                            })
                            .collect_view()}
                    </DataTable>
                </Panel>
            })}
        </PageLayout>
    }
}
