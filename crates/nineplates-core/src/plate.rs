//! Plate types.
//!
//! A plate is one tracked task: a short title, a calendar deadline and a
//! consequence weight describing how bad it is to drop it. Plates carry no
//! stored motion state; spinning/wobbling/falling is always derived from the
//! deadline by [`crate::urgency`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::urgency::{classify_urgency, Urgency};

/// Maximum number of characters kept from a plate title.
pub const MAX_TITLE_CHARS: usize = 9;

/// Opaque plate identifier.
pub type PlateId = String;

/// Labels for consequence values 1 through 9.
pub const CONSEQUENCE_LABELS: [&str; 9] = [
    "Trivial",
    "Minor",
    "Moderate",
    "Important",
    "Significant",
    "Substantial",
    "Critical",
    "Vital",
    "Crucial",
];

/// Severity weight of dropping a plate, 1 (trivial) to 9 (crucial).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Consequence(u8);

impl Consequence {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 9;

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::ConsequenceOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        CONSEQUENCE_LABELS[(self.0 - 1) as usize]
    }

    /// All valid consequences in ascending order.
    pub fn all() -> impl Iterator<Item = Consequence> {
        (Self::MIN..=Self::MAX).map(Consequence)
    }
}

impl Default for Consequence {
    fn default() -> Self {
        Consequence(Self::MIN)
    }
}

impl TryFrom<i64> for Consequence {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Consequence::new(value)
    }
}

impl From<Consequence> for u8 {
    fn from(c: Consequence) -> Self {
        c.0
    }
}

impl fmt::Display for Consequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.0, self.label())
    }
}

/// An active plate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plate {
    /// Unique identifier
    pub id: PlateId,
    /// Title, at most [`MAX_TITLE_CHARS`] characters
    pub title: String,
    /// Calendar deadline
    pub deadline: NaiveDate,
    /// Fixed at creation
    pub consequence: Consequence,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Completion timestamp; carried through storage but never set today
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Plate {
    /// Create a plate with a fresh id.
    ///
    /// The title is trimmed and truncated to [`MAX_TITLE_CHARS`] characters.
    pub fn new(
        title: &str,
        deadline: NaiveDate,
        consequence: Consequence,
    ) -> Result<Self, ValidationError> {
        let title = normalize_title(title)?;
        let now = Utc::now();
        Ok(Plate {
            id: format!("plate-{}-{}", now.timestamp(), uuid::Uuid::new_v4()),
            title,
            deadline,
            consequence,
            created_at: now,
            completed_at: None,
        })
    }

    /// Urgency of this plate relative to `today`.
    pub fn urgency(&self, today: NaiveDate) -> Urgency {
        classify_urgency(self.deadline, today)
    }
}

/// Trim and truncate a title, rejecting empty input.
pub fn normalize_title(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(trimmed.chars().take(MAX_TITLE_CHARS).collect())
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_deadline(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_deadline(s).unwrap()
    }

    #[test]
    fn title_is_truncated_to_nine_chars() {
        let plate = Plate::new("Quarterly taxes", date("2026-01-01"), Consequence::default()).unwrap();
        assert_eq!(plate.title, "Quarterly");
    }

    #[test]
    fn title_truncation_counts_chars_not_bytes() {
        let title = normalize_title("ééééééééééé").unwrap();
        assert_eq!(title.chars().count(), 9);
    }

    #[test]
    fn blank_title_is_rejected() {
        assert_eq!(normalize_title("   "), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn consequence_bounds() {
        assert!(Consequence::new(0).is_err());
        assert!(Consequence::new(10).is_err());
        assert_eq!(Consequence::new(9).unwrap().label(), "Crucial");
        assert_eq!(Consequence::new(1).unwrap().label(), "Trivial");
        assert_eq!(Consequence::all().count(), 9);
    }

    #[test]
    fn ids_are_unique() {
        let a = Plate::new("a", date("2026-01-01"), Consequence::default()).unwrap();
        let b = Plate::new("b", date("2026-01-01"), Consequence::default()).unwrap();
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("plate-"));
    }

    #[test]
    fn plate_serializes_with_camel_case_keys() {
        let plate = Plate::new("Dentist", date("2026-03-04"), Consequence::new(4).unwrap()).unwrap();
        let json = serde_json::to_value(&plate).unwrap();
        assert_eq!(json["deadline"], "2026-03-04");
        assert_eq!(json["consequence"], 4);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("completedAt").is_none());
    }

    #[test]
    fn legacy_status_key_is_ignored() {
        let json = r#"{
            "id": "1712345678901",
            "title": "Gym",
            "deadline": "2026-05-01",
            "consequence": 3,
            "status": "spinning",
            "createdAt": "2026-04-01T10:00:00.000Z"
        }"#;
        let plate: Plate = serde_json::from_str(json).unwrap();
        assert_eq!(plate.title, "Gym");
        assert_eq!(plate.consequence.get(), 3);
    }

    #[test]
    fn out_of_range_consequence_fails_to_parse() {
        let json = r#"{"id":"x","title":"t","deadline":"2026-05-01","consequence":12,
            "createdAt":"2026-04-01T10:00:00Z"}"#;
        assert!(serde_json::from_str::<Plate>(json).is_err());
    }
}
