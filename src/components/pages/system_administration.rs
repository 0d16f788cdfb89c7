//! Backend service health and operator roster.

use leptos::prelude::*;

use super::widgets::{
    Column, DataTable, HealthBadge, ItemList, ListItem, MutedText, NumericCell, Panel,
};
use crate::components::layout::PageLayout;
use crate::core::dataset;
use crate::models::Page;

const SERVICE_COLUMNS: &[Column] = &[
    Column::text("Service"),
    Column::text("Status"),
    Column::numeric("Uptime"),
    Column::text("Version"),
];

fn format_uptime(pct: f64) -> String {
    format!("{pct:.2}%")
}

#[component]
pub fn SystemAdministrationPage() -> impl IntoView {
    view! {
        <PageLayout page=Page::SystemAdministration>
            {dataset().map(|data| view! {
                <Panel title="Services">
                    <DataTable columns=SERVICE_COLUMNS>
                        {data
                            .services
                            .iter()
                            .map(|service| view! {
                                <tr>
                                    <td>{service.name.clone()}</td>
                                    <td><HealthBadge health=service.health /></td>
                                    <NumericCell value=format_uptime(service.uptime_pct) />
                                    <td>{service.version.clone()}</td>
                                </tr>
                            })
                            .collect_view()}
                    </DataTable>
                </Panel>

                <Show when=move || !data.operators.is_empty()>
                    <Panel title="Operators">
                        <ItemList>
                            {data
                                .operators
                                .iter()
                                .map(|operator| view! {
                                    <ListItem title=operator.name.clone() meta=operator.role.clone()>
                                        <MutedText text=operator.region.clone() />
                                    </ListItem>
                                })
                                .collect_view()}
                        </ItemList>
                    </Panel>
                </Show>
            })}
        </PageLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(99.9), "99.90%");
        assert_eq!(format_uptime(100.0), "100.00%");
    }
}
