//! Plate commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use nineplates_core::{
    parse_deadline, severity, Config, Consequence, DeadlineUpdate, Plate, PlateMotion, Severity,
    UrgencyTier,
};
use serde::Serialize;

use super::{open_store, resolve_today, CliResult};

#[derive(Subcommand)]
pub enum PlateAction {
    /// Add a new plate
    Add {
        /// Plate title (kept to 9 characters)
        title: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: String,
        /// Consequence of dropping it, 1 (trivial) to 9 (crucial)
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        consequence: i64,
    },
    /// List active plates
    List {
        /// Evaluate urgency as of this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
    /// Mark a plate as saved
    Complete {
        /// Plate ID
        id: String,
    },
    /// Mark a plate as smashed
    Smash {
        /// Plate ID
        id: String,
    },
    /// Move a plate's deadline (only while it is not overdue)
    Deadline {
        /// Plate ID
        id: String,
        /// New deadline (YYYY-MM-DD)
        deadline: String,
        /// Evaluate urgency as of this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
}

#[derive(Serialize)]
struct PlateView<'a> {
    id: &'a str,
    title: &'a str,
    deadline: NaiveDate,
    deadline_display: String,
    consequence: u8,
    consequence_label: &'static str,
    days_remaining: i64,
    tier: UrgencyTier,
    motion: PlateMotion,
    severity: Severity,
    indicator: Option<&'static str>,
}

impl<'a> PlateView<'a> {
    fn new(plate: &'a Plate, today: NaiveDate, config: &Config) -> Self {
        let urgency = plate.urgency(today);
        PlateView {
            id: &plate.id,
            title: &plate.title,
            deadline: plate.deadline,
            deadline_display: format_date(plate.deadline, &config.display.date_format),
            consequence: plate.consequence.get(),
            consequence_label: plate.consequence.label(),
            days_remaining: urgency.days_remaining,
            tier: urgency.tier,
            motion: urgency.motion(),
            severity: severity(&urgency, plate.consequence),
            indicator: urgency.tier.indicator(),
        }
    }
}

/// Falls back to ISO format when the configured pattern is invalid.
fn format_date(date: NaiveDate, pattern: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.to_string();
    }
    out
}

#[derive(Serialize)]
struct PlateListing<'a> {
    plates: Vec<PlateView<'a>>,
    active: usize,
    max_plates: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    empty_slots: Option<usize>,
}

pub fn run(action: PlateAction) -> CliResult {
    let (mut store, config) = open_store()?;

    match action {
        PlateAction::Add {
            title,
            deadline,
            consequence,
        } => {
            let deadline = parse_deadline(&deadline)?;
            let consequence = Consequence::new(consequence)?;
            let outcome = store.add_plate(&title, deadline, consequence)?;
            let id = outcome
                .plate_id()
                .ok_or("Maximum plates reached for your plan!")?;
            let plate = store.plate(id).ok_or("plate vanished after add")?;
            println!("Plate added: {id}");
            println!("{}", serde_json::to_string_pretty(plate)?);
        }
        PlateAction::List { today } => {
            let today = resolve_today(today.as_deref())?;
            let plates: Vec<PlateView> = store
                .plates()
                .iter()
                .map(|p| PlateView::new(p, today, &config))
                .collect();
            let listing = PlateListing {
                active: plates.len(),
                max_plates: store.user().max_plates,
                empty_slots: config.display.show_empty_slots.then(|| store.free_slots()),
                plates,
            };
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        PlateAction::Complete { id } => match store.complete_plate(&id)? {
            Some(plate) => println!("Plate saved: {} ({})", plate.id, plate.title),
            None => println!("Plate not found: {id}"),
        },
        PlateAction::Smash { id } => match store.smash_plate(&id)? {
            Some(plate) => println!(
                "Plate smashed: {} ({}), consequence {}",
                plate.id,
                plate.title,
                plate.consequence.get()
            ),
            None => println!("Plate not found: {id}"),
        },
        PlateAction::Deadline {
            id,
            deadline,
            today,
        } => {
            let deadline = parse_deadline(&deadline)?;
            let today = resolve_today(today.as_deref())?;
            match store.update_plate_deadline(&id, deadline, today)? {
                DeadlineUpdate::Updated => {
                    println!("Deadline updated:");
                    if let Some(plate) = store.plate(&id) {
                        println!("{}", serde_json::to_string_pretty(plate)?);
                    }
                }
                DeadlineUpdate::Unchanged => println!("Deadline unchanged: {deadline}"),
                DeadlineUpdate::Overdue => {
                    return Err(
                        format!("Plate {id} is overdue; its deadline can no longer be changed")
                            .into(),
                    )
                }
                DeadlineUpdate::NotFound => println!("Plate not found: {id}"),
            }
        }
    }
    Ok(())
}

pub fn consequences() -> CliResult {
    for c in Consequence::all() {
        println!("{c}");
    }
    Ok(())
}
