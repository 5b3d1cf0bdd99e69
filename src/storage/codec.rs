//! Persistence codec
//!
//! Maps collections and single records to and from slot text. Encoding is
//! plain structural JSON. Decoding is typed: temporal fields (`date`,
//! `createdAt`, `updatedAt`, `dueDate`, `uploadedAt`, `startDate`,
//! `endDate`, `referenceDate`) are declared as `DateTime<Utc>` on the
//! entity types, so date revival is enforced by the schema rather than by
//! key-name matching, while the wire form stays RFC 3339 strings under the
//! same keys.
//!
//! Decoding never fails past this boundary: corrupt slot text is reported
//! through the log side-channel and handed back as a `Corrupt` outcome,
//! which callers treat as an empty collection.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// What a slot held when it was loaded
#[derive(Debug)]
pub enum LoadOutcome<T> {
    /// The slot has never been written
    Missing,
    /// The slot decoded cleanly
    Loaded(T),
    /// The slot held unparsable text; treated as empty, logged here
    Corrupt,
}

/// Encode a collection for storage
pub fn encode_collection<T: Serialize>(records: &[T]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

/// Decode a collection out of raw slot contents
pub fn decode_collection<T: DeserializeOwned>(
    slot: &str,
    raw: Option<&str>,
) -> LoadOutcome<Vec<T>> {
    let Some(raw) = raw else {
        return LoadOutcome::Missing;
    };

    match serde_json::from_str(raw) {
        Ok(records) => LoadOutcome::Loaded(records),
        Err(e) => {
            tracing::warn!("Slot '{}' holds unparsable data, treating as empty: {}", slot, e);
            LoadOutcome::Corrupt
        }
    }
}

/// Encode a single record for storage (settings)
pub fn encode_record<T: Serialize>(record: &T) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

/// Decode a single record out of raw slot contents
pub fn decode_record<T: DeserializeOwned>(slot: &str, raw: Option<&str>) -> LoadOutcome<T> {
    let Some(raw) = raw else {
        return LoadOutcome::Missing;
    };

    match serde_json::from_str(raw) {
        Ok(record) => LoadOutcome::Loaded(record),
        Err(e) => {
            tracing::warn!("Slot '{}' holds unparsable data, treating as default: {}", slot, e);
            LoadOutcome::Corrupt
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Planning, PlanningStatus, PlanningTask};
    use chrono::{TimeZone, Utc};

    fn sample_planning() -> Planning {
        Planning {
            id: "p1".to_string(),
            project_name: "Residential tower".to_string(),
            start_date: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 9, 30, 0, 0, 0).unwrap(),
            status: PlanningStatus::Active,
            total_budget: 250_000.0,
            tasks: vec![PlanningTask {
                name: "Foundations".to_string(),
                start_date: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
                end_date: Utc.with_ymd_and_hms(2025, 4, 15, 0, 0, 0).unwrap(),
                progress: 60.0,
                dependencies: None,
                assignee: Some("Crew A".to_string()),
            }],
            overall_progress: 60.0,
            created_at: Utc.with_ymd_and_hms(2025, 2, 20, 10, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 2, 21, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_round_trip_with_nested_dates() {
        let original = vec![sample_planning()];

        let encoded = encode_collection(&original).unwrap();
        let decoded = decode_collection::<Planning>("plannings", Some(&encoded));

        match decoded {
            LoadOutcome::Loaded(records) => assert_eq!(records, original),
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[test]
    fn test_round_trip_activity_log() {
        use crate::models::{Activity, ActivityLog, LogStatus, Weather};

        let original = vec![ActivityLog {
            id: "log1".to_string(),
            date: Utc.with_ymd_and_hms(2025, 6, 12, 0, 0, 0).unwrap(),
            project_name: "Warehouse".to_string(),
            weather: Weather::Rainy,
            team_count: 8,
            activities: vec![Activity {
                id: "a1".to_string(),
                description: "Formwork on level 2".to_string(),
                start_time: Some("07:30".to_string()),
                end_time: None,
            }],
            materials: vec!["plywood".to_string()],
            equipment: vec![],
            status: LogStatus::Productive,
            notes: None,
            created_at: Utc.with_ymd_and_hms(2025, 6, 12, 18, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 6, 12, 18, 0, 0).unwrap(),
        }];

        let encoded = encode_collection(&original).unwrap();
        let decoded = decode_collection::<ActivityLog>("activity_logs", Some(&encoded));

        match decoded {
            LoadOutcome::Loaded(records) => assert_eq!(records, original),
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[test]
    fn test_dates_are_rfc3339_under_camel_case_keys() {
        let encoded = encode_collection(&[sample_planning()]).unwrap();

        assert!(encoded.contains("\"createdAt\":\"2025-02-20T10:30:00Z\""));
        assert!(encoded.contains("\"startDate\":\"2025-03-01T00:00:00Z\""));
    }

    #[test]
    fn test_missing_slot() {
        let outcome = decode_collection::<Planning>("plannings", None);
        assert!(matches!(outcome, LoadOutcome::Missing));
    }

    #[test]
    fn test_corrupt_slot_is_recovered() {
        let outcome = decode_collection::<Planning>("plannings", Some("{not json"));
        assert!(matches!(outcome, LoadOutcome::Corrupt));

        let outcome = decode_collection::<Planning>("plannings", Some(r#"{"an":"object"}"#));
        assert!(matches!(outcome, LoadOutcome::Corrupt));
    }
}
