use nineplates_core::EfficiencyLevel;
use serde::Serialize;

use super::{open_store, CliResult};

#[derive(Serialize)]
struct LevelRow {
    name: &'static str,
    min_score: f64,
    current: bool,
}

#[derive(Serialize)]
struct ScoreReport {
    plates_saved: u64,
    plates_smashed: u64,
    consequence_tally: u64,
    score: f64,
    rounded_score: u32,
    level: EfficiencyLevel,
    success_rate: f64,
    penalty: f64,
    levels: Vec<LevelRow>,
}

pub fn run() -> CliResult {
    let (store, _config) = open_store()?;
    let user = store.user();
    let efficiency = store.efficiency();

    let report = ScoreReport {
        plates_saved: user.plates_saved,
        plates_smashed: user.plates_smashed,
        consequence_tally: user.consequence_tally,
        score: efficiency.score,
        rounded_score: efficiency.rounded_score(),
        level: efficiency.level,
        success_rate: efficiency.success_rate,
        penalty: efficiency.penalty,
        levels: EfficiencyLevel::ALL
            .iter()
            .map(|&level| LevelRow {
                name: level.name(),
                min_score: level.min_score(),
                current: level == efficiency.level,
            })
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
