//! Sensor readings, summarised and then listed per station.

use leptos::prelude::*;

use super::widgets::{CardGrid, Column, DataTable, MutedText, NumericCell, Panel, StatCard};
use crate::components::layout::PageLayout;
use crate::core::dataset;
use crate::models::{Dataset, Page, Reading, ReadingSummary, Station};

const READING_COLUMNS: &[Column] = &[
    Column::text("Recorded"),
    Column::numeric("Tide (m)"),
    Column::numeric("Waves (m)"),
    Column::numeric("Water (°C)"),
    Column::numeric("Wind (km/h)"),
];

/// Card label and formatted value for each summary figure.
fn summary_cards(summary: &ReadingSummary) -> [(&'static str, String); 5] {
    [
        ("Readings", summary.readings.to_string()),
        ("Peak wave height", format!("{:.1} m", summary.max_wave_height_m)),
        ("Peak tide level", format!("{:.2} m", summary.max_tide_level_m)),
        ("Mean water temperature", format!("{:.1} °C", summary.mean_water_temp_c)),
        ("Peak wind speed", format!("{:.0} km/h", summary.max_wind_speed_kmh)),
    ]
}

/// Stations that have at least one reading, paired with their readings.
fn readings_by_station(data: &Dataset) -> Vec<(&Station, Vec<&Reading>)> {
    data.stations
        .iter()
        .map(|station| {
            let readings = data
                .readings
                .iter()
                .filter(|r| r.station == station.id)
                .collect::<Vec<_>>();
            (station, readings)
        })
        .filter(|(_, readings)| !readings.is_empty())
        .collect()
}

#[component]
fn StationReadings(station: &'static Station, readings: Vec<&'static Reading>) -> impl IntoView {
    view! {
        <Panel title=station.name.clone() subtitle=station.region.clone()>
            <DataTable columns=READING_COLUMNS>
                {readings
                    .into_iter()
                    .map(|r| view! {
                        <tr>
                            <td>{r.recorded_at.clone()}</td>
                            <NumericCell value=format!("{:.2}", r.tide_level_m) />
                            <NumericCell value=format!("{:.1}", r.wave_height_m) />
                            <NumericCell value=format!("{:.1}", r.water_temp_c) />
                            <NumericCell value=format!("{:.0}", r.wind_speed_kmh) />
                        </tr>
                    })
                    .collect_view()}
            </DataTable>
        </Panel>
    }
}

#[component]
pub fn EnvironmentalDataAnalyticsPage() -> impl IntoView {
    view! {
        <PageLayout page=Page::EnvironmentalDataAnalytics>
            {dataset().map(|data| match data.reading_summary() {
                None => view! {
                    <Panel title="Sensor readings">
                        <MutedText text="No sensor readings recorded yet." />
                    </Panel>
                }
                .into_any(),
                Some(summary) => view! {
                    <CardGrid>
                        {summary_cards(&summary)
                            .into_iter()
                            .map(|(label, value)| view! { <StatCard label=label value=value /> })
                            .collect_view()}
                    </CardGrid>
                    {readings_by_station(data)
                        .into_iter()
                        .map(|(station, readings)| view! {
                            <StationReadings station=station readings=readings />
                        })
                        .collect_view()}
                }
                .into_any(),
            })}
        </PageLayout>
    }
}
