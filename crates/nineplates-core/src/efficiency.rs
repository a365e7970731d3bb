//! Life efficiency scoring.
//!
//! The score summarises how many plates were saved versus smashed, minus a
//! capped penalty for the accumulated consequence of smashed plates:
//!
//! ```text
//! success_rate = saved / (saved + smashed) * 100
//! penalty      = min(consequence_tally * 2, 50)
//! score        = clamp(success_rate - penalty, 0, 100)
//! ```
//!
//! A board with no finished plates scores 0.
//!
//! ## Levels
//!
//! | Level       | Min score |
//! |-------------|-----------|
//! | Ineffective | 0         |
//! | Mediocre    | 20        |
//! | Adequate    | 40        |
//! | Competent   | 60        |
//! | Proficient  | 75        |
//! | Efficient   | 85        |
//! | Excellence  | 92        |
//! | Superiority | 96        |
//! | Mastery     | 99        |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::account::Account;

/// Penalty points per unit of consequence tally.
pub const PENALTY_PER_CONSEQUENCE: f64 = 2.0;
/// Upper bound on the consequence penalty.
pub const MAX_PENALTY: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EfficiencyLevel {
    Ineffective,
    Mediocre,
    Adequate,
    Competent,
    Proficient,
    Efficient,
    Excellence,
    Superiority,
    Mastery,
}

impl EfficiencyLevel {
    /// Levels in ascending order of minimum score.
    pub const ALL: [EfficiencyLevel; 9] = [
        EfficiencyLevel::Ineffective,
        EfficiencyLevel::Mediocre,
        EfficiencyLevel::Adequate,
        EfficiencyLevel::Competent,
        EfficiencyLevel::Proficient,
        EfficiencyLevel::Efficient,
        EfficiencyLevel::Excellence,
        EfficiencyLevel::Superiority,
        EfficiencyLevel::Mastery,
    ];

    pub fn min_score(self) -> f64 {
        match self {
            EfficiencyLevel::Ineffective => 0.0,
            EfficiencyLevel::Mediocre => 20.0,
            EfficiencyLevel::Adequate => 40.0,
            EfficiencyLevel::Competent => 60.0,
            EfficiencyLevel::Proficient => 75.0,
            EfficiencyLevel::Efficient => 85.0,
            EfficiencyLevel::Excellence => 92.0,
            EfficiencyLevel::Superiority => 96.0,
            EfficiencyLevel::Mastery => 99.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EfficiencyLevel::Ineffective => "Ineffective",
            EfficiencyLevel::Mediocre => "Mediocre",
            EfficiencyLevel::Adequate => "Adequate",
            EfficiencyLevel::Competent => "Competent",
            EfficiencyLevel::Proficient => "Proficient",
            EfficiencyLevel::Efficient => "Efficient",
            EfficiencyLevel::Excellence => "Excellence",
            EfficiencyLevel::Superiority => "Superiority",
            EfficiencyLevel::Mastery => "Mastery",
        }
    }

    /// Highest level whose minimum is at or below `score`.
    pub fn for_score(score: f64) -> Self {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|level| score >= level.min_score())
            .unwrap_or(EfficiencyLevel::Ineffective)
    }
}

impl fmt::Display for EfficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Score together with the terms it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Efficiency {
    /// 0.0 ..= 100.0
    pub score: f64,
    pub level: EfficiencyLevel,
    /// 0.0 ..= 100.0, zero when nothing has been finished
    pub success_rate: f64,
    pub penalty: f64,
}

impl Efficiency {
    /// Score rounded for display.
    pub fn rounded_score(&self) -> u32 {
        self.score.round() as u32
    }
}

pub fn compute_efficiency(plates_saved: u64, plates_smashed: u64, consequence_tally: u64) -> Efficiency {
    let total = plates_saved.saturating_add(plates_smashed);
    if total == 0 {
        return Efficiency {
            score: 0.0,
            level: EfficiencyLevel::for_score(0.0),
            success_rate: 0.0,
            penalty: 0.0,
        };
    }

    let success_rate = plates_saved as f64 / total as f64 * 100.0;
    let penalty = (consequence_tally as f64 * PENALTY_PER_CONSEQUENCE).min(MAX_PENALTY);
    let score = (success_rate - penalty).clamp(0.0, 100.0);

    Efficiency {
        score,
        level: EfficiencyLevel::for_score(score),
        success_rate,
        penalty,
    }
}

/// Efficiency of an account's running counters.
pub fn account_efficiency(account: &Account) -> Efficiency {
    compute_efficiency(
        account.plates_saved,
        account.plates_smashed,
        account.consequence_tally,
    )
}
