//! Sample monitoring dataset shown by the dashboard pages.
//!
//! Decoded from TOML by [`crate::core::data`]. Everything here is read-only
//! display data.

use std::fmt;

use serde::Deserialize;

use crate::config::FALLBACK_LANGUAGE;

// =============================================================================
// Status Enums
// =============================================================================

/// Health of a station or backend service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Health {
    Online,
    Degraded,
    Offline,
}

impl Health {
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Degraded => "Degraded",
            Self::Offline => "Offline",
        }
    }
}

/// Alert severity, ordered from least to most severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Advisory,
    Warning,
    Critical,
}

impl Severity {
    /// All severities from most to least severe.
    pub const DESCENDING: [Severity; 4] = [
        Severity::Critical,
        Severity::Warning,
        Severity::Advisory,
        Severity::Info,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Advisory => "Advisory",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where an alert is in its handling workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Acknowledged,
    Resolved,
}

impl AlertStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Acknowledged => "Acknowledged",
            Self::Resolved => "Resolved",
        }
    }
}

// =============================================================================
// Records
// =============================================================================

/// Headline figure on the main dashboard.
#[derive(Clone, Debug, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    /// Short qualifier shown under the value (e.g. "vs. last week").
    #[serde(default)]
    pub detail: Option<String>,
    /// Icon name understood by `IconName::from_name`.
    #[serde(default)]
    pub icon: Option<String>,
}

/// A coastal monitoring station.
#[derive(Clone, Debug, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub region: String,
    pub health: Health,
}

/// Latest sensor reading for a station.
#[derive(Clone, Debug, Deserialize)]
pub struct Reading {
    pub station: String,
    pub recorded_at: String,
    pub tide_level_m: f64,
    pub wave_height_m: f64,
    pub water_temp_c: f64,
    pub wind_speed_kmh: f64,
}

/// An issued alert.
#[derive(Clone, Debug, Deserialize)]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub station: String,
    pub severity: Severity,
    pub status: AlertStatus,
    pub issued_at: String,
}

/// Public bulletin for the community alert center.
#[derive(Clone, Debug, Deserialize)]
pub struct Bulletin {
    pub id: String,
    pub severity: Severity,
    pub published_at: String,
    /// Title and body keyed by language code. Loading rejects bulletins
    /// without an `en` entry.
    pub text: Vec<LocalizedText>,
}

/// Bulletin text in one language.
#[derive(Clone, Debug, Deserialize)]
pub struct LocalizedText {
    pub lang: String,
    pub title: String,
    pub body: String,
}

impl Bulletin {
    /// Text for `lang`, falling back to English, then to the first entry.
    pub fn localized(&self, lang: &str) -> Option<&LocalizedText> {
        self.text
            .iter()
            .find(|t| t.lang == lang)
            .or_else(|| self.text.iter().find(|t| t.lang == FALLBACK_LANGUAGE))
            .or_else(|| self.text.first())
    }
}

/// Backend service shown on the administration page.
#[derive(Clone, Debug, Deserialize)]
pub struct Service {
    pub name: String,
    pub health: Health,
    pub uptime_pct: f64,
    pub version: String,
}

/// Operator account shown on the administration page.
#[derive(Clone, Debug, Deserialize)]
pub struct Operator {
    pub name: String,
    pub role: String,
    pub region: String,
}

/// Aggregate figures over all readings.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadingSummary {
    pub readings: usize,
    pub max_wave_height_m: f64,
    pub max_tide_level_m: f64,
    pub mean_water_temp_c: f64,
    pub max_wind_speed_kmh: f64,
}

// =============================================================================
// Dataset
// =============================================================================

/// Complete sample dataset.
#[derive(Clone, Debug, Deserialize)]
pub struct Dataset {
    pub metrics: Vec<Metric>,
    pub stations: Vec<Station>,
    pub readings: Vec<Reading>,
    pub alerts: Vec<Alert>,
    pub bulletins: Vec<Bulletin>,
    pub services: Vec<Service>,
    #[serde(default)]
    pub operators: Vec<Operator>,
}

impl Dataset {
    /// Station by id.
    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    /// Station display name, or the raw id when unknown.
    pub fn station_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.station(id).map(|s| s.name.as_str()).unwrap_or(id)
    }

    /// Number of alerts per severity, most severe first.
    pub fn severity_counts(&self) -> Vec<(Severity, usize)> {
        Severity::DESCENDING
            .iter()
            .map(|&severity| {
                let count = self
                    .alerts
                    .iter()
                    .filter(|a| a.severity == severity)
                    .count();
                (severity, count)
            })
            .collect()
    }

    /// Alerts most severe first, keeping file order within a severity.
    pub fn alerts_by_severity(&self) -> Vec<&Alert> {
        let mut alerts: Vec<_> = self.alerts.iter().collect();
        alerts.sort_by(|a, b| b.severity.cmp(&a.severity));
        alerts
    }

    /// Aggregate the readings, or `None` when there are none.
    pub fn reading_summary(&self) -> Option<ReadingSummary> {
        if self.readings.is_empty() {
            return None;
        }
        let max = |f: fn(&Reading) -> f64| {
            self.readings.iter().map(f).fold(f64::NEG_INFINITY, f64::max)
        };
        let total_temp: f64 = self.readings.iter().map(|r| r.water_temp_c).sum();
        Some(ReadingSummary {
            readings: self.readings.len(),
            max_wave_height_m: max(|r| r.wave_height_m),
            max_tide_level_m: max(|r| r.tide_level_m),
            mean_water_temp_c: total_temp / self.readings.len() as f64,
            max_wind_speed_kmh: max(|r| r.wind_speed_kmh),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulletin(texts: &[(&str, &str)]) -> Bulletin {
        Bulletin {
            id: "b1".into(),
            severity: Severity::Advisory,
            published_at: "2024-01-01".into(),
            text: texts
                .iter()
                .map(|(lang, title)| LocalizedText {
                    lang: lang.to_string(),
                    title: title.to_string(),
                    body: String::new(),
                })
                .collect(),
        }
    }

    fn reading(station: &str, wave: f64, tide: f64, temp: f64, wind: f64) -> Reading {
        Reading {
            station: station.into(),
            recorded_at: "2024-06-01 06:00".into(),
            tide_level_m: tide,
            wave_height_m: wave,
            water_temp_c: temp,
            wind_speed_kmh: wind,
        }
    }

    fn alert(id: &str, severity: Severity) -> Alert {
        Alert {
            id: id.into(),
            title: id.into(),
            station: "st-1".into(),
            severity,
            status: AlertStatus::Active,
            issued_at: "2024-06-01 06:00".into(),
        }
    }

    fn empty_dataset() -> Dataset {
        Dataset {
            metrics: vec![],
            stations: vec![],
            readings: vec![],
            alerts: vec![],
            bulletins: vec![],
            services: vec![],
            operators: vec![],
        }
    }

    #[test]
    fn test_reading_summary() {
        let mut data = empty_dataset();
        assert_eq!(data.reading_summary(), None);

        data.readings = vec![
            reading("a", 1.5, 2.0, 28.0, 20.0),
            reading("b", 3.0, 1.0, 26.0, 45.0),
        ];
        let summary = data.reading_summary().unwrap();
        assert_eq!(summary.readings, 2);
        assert_eq!(summary.max_wave_height_m, 3.0);
        assert_eq!(summary.max_tide_level_m, 2.0);
        assert_eq!(summary.mean_water_temp_c, 27.0);
        assert_eq!(summary.max_wind_speed_kmh, 45.0);
    }

    #[test]
    fn test_alerts_by_severity_is_stable() {
        let mut data = empty_dataset();
        data.alerts = vec![
            alert("a", Severity::Advisory),
            alert("b", Severity::Critical),
            alert("c", Severity::Advisory),
            alert("d", Severity::Warning),
        ];
        let ids: Vec<_> = data.alerts_by_severity().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);

        let counts = data.severity_counts();
        assert_eq!(
            counts,
            vec![
                (Severity::Critical, 1),
                (Severity::Warning, 1),
                (Severity::Advisory, 2),
                (Severity::Info, 0),
            ]
        );
    }

    #[test]
    fn test_severity_order() {
        assert!(Severity::Critical > Severity::Warning);
        assert!(Severity::Warning > Severity::Advisory);
        assert!(Severity::Advisory > Severity::Info);
    }

    #[test]
    fn test_bulletin_localized_prefers_requested_language() {
        let b = bulletin(&[("en", "High tide"), ("hi", "उच्च ज्वार")]);
        assert_eq!(b.localized("hi").map(|t| t.title.as_str()), Some("उच्च ज्वार"));
        assert_eq!(b.localized("en").map(|t| t.title.as_str()), Some("High tide"));
    }

    #[test]
    fn test_bulletin_localized_falls_back_to_english() {
        let b = bulletin(&[("hi", "उच्च ज्वार"), ("en", "High tide")]);
        assert_eq!(b.localized("fr").map(|t| t.title.as_str()), Some("High tide"));
    }

    #[test]
    fn test_bulletin_localized_without_english() {
        let b = bulletin(&[("hi", "उच्च ज्वार")]);
        assert_eq!(b.localized("en").map(|t| t.title.as_str()), Some("उच्च ज्वार"));
        assert!(bulletin(&[]).localized("en").is_none());
    }
}
