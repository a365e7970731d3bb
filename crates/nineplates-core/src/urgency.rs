//! Deadline urgency classification.
//!
//! Days remaining are counted in whole calendar days between `today` and the
//! deadline. A deadline of today is already overdue.
//!
//! ```text
//! days <= 0  Overdue     falling
//! days == 1  Today       wobbling
//! days == 2  VeryUrgent  wobbling
//! days 3..=5 Soon        wobbling
//! days > 5   Normal      spinning
//! ```

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::plate::Consequence;

/// Discrete urgency tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    Overdue,
    Today,
    VeryUrgent,
    Soon,
    Normal,
}

impl UrgencyTier {
    pub fn from_days(days_remaining: i64) -> Self {
        match days_remaining {
            i64::MIN..=0 => UrgencyTier::Overdue,
            1 => UrgencyTier::Today,
            2 => UrgencyTier::VeryUrgent,
            3..=5 => UrgencyTier::Soon,
            _ => UrgencyTier::Normal,
        }
    }

    /// Short indicator text, none for plates that are not urgent.
    pub fn indicator(self) -> Option<&'static str> {
        match self {
            UrgencyTier::Overdue => Some("OVERDUE"),
            UrgencyTier::Today => Some("TODAY"),
            UrgencyTier::VeryUrgent => Some("URGENT"),
            UrgencyTier::Soon => Some("SOON"),
            UrgencyTier::Normal => None,
        }
    }

    pub fn motion(self) -> PlateMotion {
        match self {
            UrgencyTier::Overdue => PlateMotion::Falling,
            UrgencyTier::Today | UrgencyTier::VeryUrgent | UrgencyTier::Soon => {
                PlateMotion::Wobbling
            }
            UrgencyTier::Normal => PlateMotion::Spinning,
        }
    }
}

/// Animation state of a plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlateMotion {
    Spinning,
    Wobbling,
    Falling,
}

/// Result of classifying a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Urgency {
    pub days_remaining: i64,
    pub tier: UrgencyTier,
}

impl Urgency {
    pub fn motion(&self) -> PlateMotion {
        self.tier.motion()
    }

    /// Deadlines may only be moved while the plate is not overdue.
    pub fn allows_deadline_edit(&self) -> bool {
        self.days_remaining > 0
    }
}

/// Today's date in the local timezone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole calendar days from `today` until `deadline`.
pub fn days_remaining(deadline: NaiveDate, today: NaiveDate) -> i64 {
    deadline.signed_duration_since(today).num_days()
}

pub fn classify_urgency(deadline: NaiveDate, today: NaiveDate) -> Urgency {
    let days_remaining = days_remaining(deadline, today);
    Urgency {
        days_remaining,
        tier: UrgencyTier::from_days(days_remaining),
    }
}

/// Display severity of a plate. Urgency overrides consequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Warning,
    Critical,
    Overdue,
}

pub fn severity(urgency: &Urgency, consequence: Consequence) -> Severity {
    match urgency.days_remaining {
        i64::MIN..=0 => Severity::Overdue,
        1..=2 => Severity::Critical,
        3..=5 => Severity::Warning,
        _ => match consequence.get() {
            1..=3 => Severity::Low,
            4..=6 => Severity::Medium,
            _ => Severity::High,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    fn in_days(n: i64) -> NaiveDate {
        today() + Duration::days(n)
    }

    #[test]
    fn deadline_today_is_overdue() {
        let u = classify_urgency(today(), today());
        assert_eq!(u.days_remaining, 0);
        assert_eq!(u.tier, UrgencyTier::Overdue);
        assert_eq!(u.motion(), PlateMotion::Falling);
        assert!(!u.allows_deadline_edit());
    }

    #[test]
    fn past_deadline_is_overdue() {
        let u = classify_urgency(in_days(-3), today());
        assert_eq!(u.days_remaining, -3);
        assert_eq!(u.tier, UrgencyTier::Overdue);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(classify_urgency(in_days(1), today()).tier, UrgencyTier::Today);
        assert_eq!(classify_urgency(in_days(2), today()).tier, UrgencyTier::VeryUrgent);
        assert_eq!(classify_urgency(in_days(3), today()).tier, UrgencyTier::Soon);
        assert_eq!(classify_urgency(in_days(5), today()).tier, UrgencyTier::Soon);
        assert_eq!(classify_urgency(in_days(6), today()).tier, UrgencyTier::Normal);
    }

    #[test]
    fn motion_follows_tier() {
        assert_eq!(classify_urgency(in_days(1), today()).motion(), PlateMotion::Wobbling);
        assert_eq!(classify_urgency(in_days(5), today()).motion(), PlateMotion::Wobbling);
        assert_eq!(classify_urgency(in_days(6), today()).motion(), PlateMotion::Spinning);
    }

    #[test]
    fn days_cross_month_and_year_boundaries() {
        let dec31 = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        let jan2 = NaiveDate::from_ymd_opt(2027, 1, 2).unwrap();
        assert_eq!(days_remaining(jan2, dec31), 2);
    }

    #[test]
    fn severity_prefers_urgency_over_consequence() {
        let crucial = Consequence::new(9).unwrap();
        let trivial = Consequence::new(1).unwrap();
        let mid = Consequence::new(5).unwrap();

        assert_eq!(severity(&classify_urgency(in_days(0), today()), trivial), Severity::Overdue);
        assert_eq!(severity(&classify_urgency(in_days(2), today()), trivial), Severity::Critical);
        assert_eq!(severity(&classify_urgency(in_days(4), today()), trivial), Severity::Warning);
        assert_eq!(severity(&classify_urgency(in_days(10), today()), trivial), Severity::Low);
        assert_eq!(severity(&classify_urgency(in_days(10), today()), mid), Severity::Medium);
        assert_eq!(severity(&classify_urgency(in_days(10), today()), crucial), Severity::High);
    }

    #[test]
    fn indicator_only_for_urgent_tiers() {
        assert_eq!(UrgencyTier::Overdue.indicator(), Some("OVERDUE"));
        assert_eq!(UrgencyTier::Today.indicator(), Some("TODAY"));
        assert_eq!(UrgencyTier::Normal.indicator(), None);
    }
}
