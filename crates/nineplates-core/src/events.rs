use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::account::Plan;
use crate::board::Board;
use crate::plate::PlateId;

/// Every successful store mutation produces an Event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoreEvent {
    PlateAdded {
        plate_id: PlateId,
        at: DateTime<Utc>,
    },
    PlateCompleted {
        plate_id: PlateId,
        plates_saved: u64,
        at: DateTime<Utc>,
    },
    PlateSmashed {
        plate_id: PlateId,
        consequence: u8,
        consequence_tally: u64,
        at: DateTime<Utc>,
    },
    DeadlineUpdated {
        plate_id: PlateId,
        previous: NaiveDate,
        deadline: NaiveDate,
        at: DateTime<Utc>,
    },
    PlanChanged {
        from: Plan,
        to: Plan,
        max_plates: usize,
        at: DateTime<Utc>,
    },
}

/// What subscribers receive: the event and the board right after it.
#[derive(Debug, Clone)]
pub struct StoreUpdate {
    pub event: StoreEvent,
    pub snapshot: Arc<Board>,
}
