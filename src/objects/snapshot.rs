use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::JsError;

const SNAPSHOT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Value format of a `datetime-local` input.
const INPUT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: String,
    pub time: String,
    pub url: String,
}

impl Snapshot {
    pub fn taken_at(&self) -> Result<NaiveDateTime, JsError> {
        NaiveDateTime::parse_from_str(&self.time, SNAPSHOT_TIME_FORMAT)
            .map_err(|e| JsError::from(format!("invalid snapshot time \"{}\": {}", self.time, e)))
    }
}

/// Open interval with optional bounds, compared at minute granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SnapshotRange {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl SnapshotRange {
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, time: NaiveDateTime) -> bool {
        let time = truncate_to_minute(time);

        self.start.map_or(true, |start| time > truncate_to_minute(start))
            && self.end.map_or(true, |end| time < truncate_to_minute(end))
    }

    /// Snapshots inside the range; a snapshot with an unreadable time is dropped.
    pub fn apply<'a>(&self, snapshots: &'a [Snapshot]) -> Vec<&'a Snapshot> {
        match self.is_unbounded() {
            true => snapshots.iter().collect(),
            false => snapshots
                .iter()
                .filter(|s| match s.taken_at() {
                    Ok(time) => self.contains(time),
                    Err(e) => {
                        log::warn!("{}", e);
                        false
                    }
                })
                .collect(),
        }
    }
}

/// Parses the value of a `datetime-local` input; an empty value clears the bound.
pub fn parse_range_input(value: &str) -> Result<Option<NaiveDateTime>, JsError> {
    let value = value.trim();

    if value.is_empty() {
        return Ok(None);
    }

    NaiveDateTime::parse_from_str(value, INPUT_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map(Some)
        .map_err(|e| JsError::from(format!("invalid date \"{}\": {}", value, e)))
}

fn truncate_to_minute(time: NaiveDateTime) -> NaiveDateTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

pub fn mock_snapshots() -> Vec<Snapshot> {
    (1..=3)
        .map(|i| Snapshot {
            id: i.to_string(),
            time: format!("2024-03-15 {}:00:00", 9 + i),
            url: format!("https://placehold.co/320x180?text=Snapshot+{}", i),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(value: &str) -> Option<NaiveDateTime> {
        parse_range_input(value).unwrap()
    }

    #[test]
    fn mock_snapshots_are_hourly() {
        let times: Vec<String> = mock_snapshots().into_iter().map(|s| s.time).collect();

        assert_eq!(
            times,
            vec![
                "2024-03-15 10:00:00",
                "2024-03-15 11:00:00",
                "2024-03-15 12:00:00"
            ]
        );
    }

    #[test]
    fn unbounded_range_keeps_everything() {
        let snapshots = mock_snapshots();

        assert_eq!(SnapshotRange::default().apply(&snapshots).len(), 3);
    }

    #[test]
    fn bounds_are_exclusive() {
        let snapshots = mock_snapshots();
        let range = SnapshotRange {
            start: at("2024-03-15T10:00"),
            end: at("2024-03-15T12:00"),
        };
        let ids: Vec<&str> = range.apply(&snapshots).iter().map(|s| s.id.as_str()).collect();

        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn single_bound_ranges() {
        let snapshots = mock_snapshots();
        let after = SnapshotRange {
            start: at("2024-03-15T10:30"),
            end: None,
        };
        let before = SnapshotRange {
            start: None,
            end: at("2024-03-15T11:01"),
        };

        assert_eq!(after.apply(&snapshots).len(), 2);
        assert_eq!(before.apply(&snapshots).len(), 2);
    }

    #[test]
    fn seconds_are_ignored() {
        let range = SnapshotRange {
            start: at("2024-03-15T10:00:45"),
            end: None,
        };
        let time = NaiveDateTime::parse_from_str("2024-03-15 10:00:59", SNAPSHOT_TIME_FORMAT).unwrap();

        assert!(!range.contains(time));
    }

    #[test]
    fn empty_input_clears_bound() {
        assert_eq!(parse_range_input("").unwrap(), None);
        assert!(parse_range_input("yesterday").is_err());
    }
}
