use clap::Subcommand;
use nineplates_core::Plan;
use serde::Serialize;

use super::{open_store, CliResult};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Show the current plan and capacity
    Show,
    /// List available plans
    List,
    /// Switch plan (no payment is taken)
    Set {
        /// free, business or entrepreneur
        plan: String,
    },
}

#[derive(Serialize)]
struct PlanRow {
    plan: Plan,
    name: &'static str,
    price: &'static str,
    max_plates: usize,
}

impl From<Plan> for PlanRow {
    fn from(plan: Plan) -> Self {
        PlanRow {
            plan,
            name: plan.display_name(),
            price: plan.price(),
            max_plates: plan.max_plates(),
        }
    }
}

#[derive(Serialize)]
struct PlanStatus {
    #[serde(flatten)]
    plan: PlanRow,
    active: usize,
    free_slots: usize,
}

pub fn run(action: PlanAction) -> CliResult {
    match action {
        PlanAction::Show => {
            let (store, _config) = open_store()?;
            let mut row = PlanRow::from(store.user().plan);
            row.max_plates = store.user().max_plates;
            let status = PlanStatus {
                plan: row,
                active: store.plates().len(),
                free_slots: store.free_slots(),
            };
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        PlanAction::List => {
            let rows: Vec<PlanRow> = Plan::ALL.iter().copied().map(PlanRow::from).collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        PlanAction::Set { plan } => {
            let plan: Plan = plan.parse()?;
            let (mut store, _config) = open_store()?;
            store.change_plan(plan)?;
            println!(
                "Plan set to {} ({} plates)",
                plan.display_name(),
                store.user().max_plates
            );
        }
    }
    Ok(())
}
