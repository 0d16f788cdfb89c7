//! Embedded sample dataset loading.
//!
//! The dataset is decoded on first access and cached for the session.

use std::sync::OnceLock;

use crate::config::{FALLBACK_LANGUAGE, SAMPLE_DATASET};
use crate::core::error::DataError;
use crate::models::Dataset;

static DATASET: OnceLock<Result<Dataset, DataError>> = OnceLock::new();

/// Get the decoded sample dataset.
pub fn dataset() -> Result<&'static Dataset, DataError> {
    DATASET
        .get_or_init(|| {
            let parsed = parse_dataset(SAMPLE_DATASET);
            match &parsed {
                Ok(data) => log::debug!(
                    "sample dataset loaded: {} stations, {} alerts",
                    data.stations.len(),
                    data.alerts.len()
                ),
                Err(e) => log::error!("{e}"),
            }
            parsed
        })
        .as_ref()
        .map_err(Clone::clone)
}

/// Decode and validate a dataset from TOML source.
pub fn parse_dataset(source: &str) -> Result<Dataset, DataError> {
    let data: Dataset =
        toml::from_str(source).map_err(|e| DataError::Malformed(e.message().to_string()))?;
    validate(&data)?;
    Ok(data)
}

/// Check cross-record references and bulletin text.
fn validate(data: &Dataset) -> Result<(), DataError> {
    let unknown = |record: &'static str, id: &str, station: &str| DataError::UnknownStation {
        record,
        id: id.to_string(),
        station: station.to_string(),
    };

    for reading in &data.readings {
        if data.station(&reading.station).is_none() {
            return Err(unknown("reading", &reading.recorded_at, &reading.station));
        }
    }
    for alert in &data.alerts {
        if data.station(&alert.station).is_none() {
            return Err(unknown("alert", &alert.id, &alert.station));
        }
    }
    for bulletin in &data.bulletins {
        if bulletin.text.is_empty() {
            return Err(DataError::EmptyBulletin(bulletin.id.clone()));
        }
        if !bulletin.text.iter().any(|t| t.lang == FALLBACK_LANGUAGE) {
            return Err(DataError::MissingEnglish(bulletin.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
metrics = []
readings = []
services = []
bulletins = []

[[stations]]
id = "st-1"
name = "North Pier"
region = "North"
health = "online"

[[alerts]]
id = "al-1"
title = "Storm surge"
station = "st-1"
severity = "critical"
status = "active"
issued_at = "2024-06-01 06:00"
"#;

    #[test]
    fn test_embedded_dataset_decodes() {
        let data = dataset().expect("embedded dataset must decode");
        assert!(!data.stations.is_empty());
        assert!(!data.alerts.is_empty());
        assert!(!data.bulletins.is_empty());
    }

    #[test]
    fn test_minimal_dataset() {
        let data = parse_dataset(MINIMAL).unwrap();
        assert_eq!(data.station_name("st-1"), "North Pier");
        assert_eq!(data.station_name("st-9"), "st-9");
        assert!(data.operators.is_empty());

        let counts = data.severity_counts();
        assert_eq!(counts[0], (crate::models::Severity::Critical, 1));
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 1);
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = parse_dataset("stations = 3").unwrap_err();
        assert!(matches!(err, DataError::Malformed(_)));
    }

    #[test]
    fn test_unknown_severity_rejected() {
        let source = MINIMAL.replace("\"critical\"", "\"catastrophic\"");
        assert!(matches!(
            parse_dataset(&source),
            Err(DataError::Malformed(_))
        ));
    }

    #[test]
    fn test_unknown_station_reference_rejected() {
        let source = MINIMAL.replace("station = \"st-1\"", "station = \"st-404\"");
        assert_eq!(
            parse_dataset(&source).unwrap_err(),
            DataError::UnknownStation {
                record: "alert",
                id: "al-1".to_string(),
                station: "st-404".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_bulletin_rejected() {
        let source = MINIMAL.replace(
            "bulletins = []\n",
            "",
        ) + r#"
[[bulletins]]
id = "bl-1"
severity = "info"
published_at = "2024-06-01"
text = []
"#;
        assert_eq!(
            parse_dataset(&source).unwrap_err(),
            DataError::EmptyBulletin("bl-1".to_string())
        );
    }

    fn with_bulletin_text(text: &str) -> String {
        MINIMAL.replace("bulletins = []\n", "")
            + &format!(
                r#"
[[bulletins]]
id = "bl-2"
severity = "warning"
published_at = "2024-06-01"
text = {text}
"#
            )
    }

    #[test]
    fn test_bulletin_without_english_rejected() {
        let source = with_bulletin_text(r#"[{ lang = "hi", title = "चेतावनी", body = "" }]"#);
        assert_eq!(
            parse_dataset(&source).unwrap_err(),
            DataError::MissingEnglish("bl-2".to_string())
        );
    }

    #[test]
    fn test_bulletin_with_english_accepted() {
        let source = with_bulletin_text(
            r#"[{ lang = "hi", title = "चेतावनी", body = "" }, { lang = "en", title = "Warning", body = "" }]"#,
        );
        let data = parse_dataset(&source).unwrap();
        assert_eq!(data.bulletins[0].localized("hi").unwrap().title, "चेतावनी");
    }
}
