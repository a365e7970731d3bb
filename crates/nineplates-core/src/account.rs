//! User account: plan, capacity and lifetime counters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Subscription plan. Only capacity differs between plans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Business,
    Entrepreneur,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Free, Plan::Business, Plan::Entrepreneur];

    pub fn max_plates(self) -> usize {
        match self {
            Plan::Free => 9,
            Plan::Business => 18,
            Plan::Entrepreneur => 27,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Plan::Free => "9 Plates",
            Plan::Business => "18 Plates",
            Plan::Entrepreneur => "27 Plates",
        }
    }

    pub fn price(self) -> &'static str {
        match self {
            Plan::Free => "FREE",
            Plan::Business => "£1/month",
            Plan::Entrepreneur => "£3/month",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Business => "business",
            Plan::Entrepreneur => "entrepreneur",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Plan::Free),
            "business" => Ok(Plan::Business),
            "entrepreneur" => Ok(Plan::Entrepreneur),
            other => Err(ValidationError::UnknownPlan(other.to_string())),
        }
    }
}

/// The single local user.
///
/// Deserialization fills any missing field from [`Account::default`], so a
/// partially written record merges onto the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    pub plan: Plan,
    pub max_plates: usize,
    pub plates_smashed: u64,
    pub plates_saved: u64,
    /// Sum of the consequence of every smashed plate
    pub consequence_tally: u64,
}

impl Default for Account {
    fn default() -> Self {
        Account {
            plan: Plan::Free,
            max_plates: Plan::Free.max_plates(),
            plates_smashed: 0,
            plates_saved: 0,
            consequence_tally: 0,
        }
    }
}

impl Account {
    pub(crate) fn record_saved(&mut self) {
        self.plates_saved = self.plates_saved.saturating_add(1);
    }

    pub(crate) fn record_smashed(&mut self, consequence: u8) {
        self.plates_smashed = self.plates_smashed.saturating_add(1);
        self.consequence_tally = self.consequence_tally.saturating_add(u64::from(consequence));
    }

    pub(crate) fn switch_plan(&mut self, plan: Plan) {
        self.plan = plan;
        self.max_plates = plan.max_plates();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_capacities() {
        assert_eq!(Plan::Free.max_plates(), 9);
        assert_eq!(Plan::Business.max_plates(), 18);
        assert_eq!(Plan::Entrepreneur.max_plates(), 27);
    }

    #[test]
    fn plan_parses_case_insensitively() {
        assert_eq!("Business".parse::<Plan>().unwrap(), Plan::Business);
        assert!(matches!("gold".parse::<Plan>(), Err(ValidationError::UnknownPlan(_))));
    }

    #[test]
    fn account_uses_camel_case_keys() {
        let json = serde_json::to_value(Account::default()).unwrap();
        assert_eq!(json["plan"], "free");
        assert_eq!(json["maxPlates"], 9);
        assert_eq!(json["consequenceTally"], 0);
    }

    #[test]
    fn partial_account_merges_onto_defaults() {
        let account: Account = serde_json::from_str(r#"{"platesSaved": 4}"#).unwrap();
        assert_eq!(account.plates_saved, 4);
        assert_eq!(account.plan, Plan::Free);
        assert_eq!(account.max_plates, 9);
        assert_eq!(account.plates_smashed, 0);
    }

    #[test]
    fn smashing_accumulates_tally() {
        let mut account = Account::default();
        account.record_smashed(7);
        account.record_smashed(2);
        assert_eq!(account.plates_smashed, 2);
        assert_eq!(account.consequence_tally, 9);
    }

    #[test]
    fn switching_plan_updates_capacity() {
        let mut account = Account::default();
        account.switch_plan(Plan::Entrepreneur);
        assert_eq!(account.max_plates, 27);
    }

    #[test]
    fn counters_saturate_instead_of_overflowing() {
        let mut account = Account {
            plates_saved: u64::MAX,
            plates_smashed: u64::MAX,
            consequence_tally: u64::MAX - 3,
            ..Account::default()
        };
        account.record_saved();
        account.record_smashed(9);
        assert_eq!(account.plates_saved, u64::MAX);
        assert_eq!(account.plates_smashed, u64::MAX);
        assert_eq!(account.consequence_tally, u64::MAX);
    }

    #[test]
    fn default_plan_is_free() {
        assert_eq!(Plan::default(), Plan::Free);
    }
}
