//! Plate store: the canonical board and the commands that mutate it.
//!
//! The store owns its [`Persistence`] backend. It hydrates once in
//! [`PlateStore::open`] and writes the whole board after every successful
//! mutation. Commands that turn out to be no-ops (unknown id, full board,
//! rejected deadline edit) neither write nor notify.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = PlateStore::open(JsonFileStore::in_dir(&dir));
//! let updates = store.subscribe();
//! store.add_plate("Taxes", deadline, Consequence::new(7)?)?;
//! ```

use chrono::{NaiveDate, Utc};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::account::{Account, Plan};
use crate::board::Board;
use crate::efficiency::{account_efficiency, Efficiency};
use crate::error::{Result, ValidationError};
use crate::events::{StoreEvent, StoreUpdate};
use crate::plate::{Consequence, Plate, PlateId};
use crate::storage::Persistence;
use crate::urgency::Urgency;

/// Result of [`PlateStore::add_plate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(PlateId),
    /// The plan's capacity is used up; nothing was added.
    AtCapacity,
}

impl AddOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, AddOutcome::Added(_))
    }

    pub fn plate_id(&self) -> Option<&str> {
        match self {
            AddOutcome::Added(id) => Some(id),
            AddOutcome::AtCapacity => None,
        }
    }
}

/// Result of [`PlateStore::update_plate_deadline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineUpdate {
    Updated,
    /// New deadline equals the current one.
    Unchanged,
    /// The plate is already overdue; its deadline is frozen.
    Overdue,
    NotFound,
}

pub struct PlateStore<P: Persistence> {
    board: Board,
    persistence: P,
    subscribers: Vec<Sender<StoreUpdate>>,
}

impl<P: Persistence> PlateStore<P> {
    /// Hydrate from `persistence`.
    ///
    /// Missing or unreadable data is not an error: the store starts empty
    /// on the free plan and the failure is logged.
    pub fn open(persistence: P) -> Self {
        let board = match persistence.load() {
            Ok(Some(board)) => {
                debug!(plates = board.plates.len(), plan = %board.user.plan, "loaded board");
                board
            }
            Ok(None) => Board::default(),
            Err(e) => {
                warn!(error = %e, "discarding unreadable saved data");
                Board::default()
            }
        };
        Self {
            board,
            persistence,
            subscribers: Vec::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn plates(&self) -> &[Plate] {
        &self.board.plates
    }

    pub fn user(&self) -> &Account {
        &self.board.user
    }

    pub fn plate(&self, id: &str) -> Option<&Plate> {
        self.board.plates.iter().find(|p| p.id == id)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    pub fn free_slots(&self) -> usize {
        self.board.free_slots()
    }

    pub fn efficiency(&self) -> Efficiency {
        account_efficiency(&self.board.user)
    }

    pub fn urgency_of(&self, id: &str, today: NaiveDate) -> Option<Urgency> {
        self.plate(id).map(|p| p.urgency(today))
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Receive a [`StoreUpdate`] after every successful mutation.
    pub fn subscribe(&mut self) -> Receiver<StoreUpdate> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Add a plate if the plan has room.
    ///
    /// A full board is reported as [`AddOutcome::AtCapacity`], not as an
    /// error. A blank title is a validation error.
    pub fn add_plate(
        &mut self,
        title: &str,
        deadline: NaiveDate,
        consequence: Consequence,
    ) -> Result<AddOutcome> {
        if self.board.is_full() {
            debug!(max_plates = self.board.user.max_plates, "board full, plate not added");
            return Ok(AddOutcome::AtCapacity);
        }

        let plate = Plate::new(title, deadline, consequence)?;
        let id = plate.id.clone();
        debug!(plate_id = %id, title = %plate.title, %deadline, consequence = consequence.get(), "adding plate");
        self.board.plates.push(plate);

        self.commit(StoreEvent::PlateAdded {
            plate_id: id.clone(),
            at: Utc::now(),
        })?;
        Ok(AddOutcome::Added(id))
    }

    /// Remove a plate as saved. Returns the removed plate, or `None` if
    /// no plate has this id.
    pub fn complete_plate(&mut self, id: &str) -> Result<Option<Plate>> {
        let Some(index) = self.board.position(id) else {
            debug!(plate_id = id, "complete: no such plate");
            return Ok(None);
        };

        let plate = self.board.plates.remove(index);
        self.board.user.record_saved();
        debug!(plate_id = id, "plate completed");

        self.commit(StoreEvent::PlateCompleted {
            plate_id: plate.id.clone(),
            plates_saved: self.board.user.plates_saved,
            at: Utc::now(),
        })?;
        Ok(Some(plate))
    }

    /// Remove a plate as smashed and add its consequence to the tally.
    pub fn smash_plate(&mut self, id: &str) -> Result<Option<Plate>> {
        let Some(index) = self.board.position(id) else {
            debug!(plate_id = id, "smash: no such plate");
            return Ok(None);
        };

        let plate = self.board.plates.remove(index);
        self.board.user.record_smashed(plate.consequence.get());
        debug!(plate_id = id, consequence = plate.consequence.get(), "plate smashed");

        self.commit(StoreEvent::PlateSmashed {
            plate_id: plate.id.clone(),
            consequence: plate.consequence.get(),
            consequence_tally: self.board.user.consequence_tally,
            at: Utc::now(),
        })?;
        Ok(Some(plate))
    }

    /// Move a plate's deadline. Only plates with at least one day left
    /// relative to `today` can be moved.
    pub fn update_plate_deadline(
        &mut self,
        id: &str,
        new_deadline: NaiveDate,
        today: NaiveDate,
    ) -> Result<DeadlineUpdate> {
        let Some(index) = self.board.position(id) else {
            return Ok(DeadlineUpdate::NotFound);
        };

        let plate = &mut self.board.plates[index];
        if !plate.urgency(today).allows_deadline_edit() {
            debug!(plate_id = id, deadline = %plate.deadline, "deadline frozen, plate overdue");
            return Ok(DeadlineUpdate::Overdue);
        }
        if plate.deadline == new_deadline {
            return Ok(DeadlineUpdate::Unchanged);
        }

        let previous = std::mem::replace(&mut plate.deadline, new_deadline);
        debug!(plate_id = id, %previous, deadline = %new_deadline, "deadline updated");

        self.commit(StoreEvent::DeadlineUpdated {
            plate_id: id.to_string(),
            previous,
            deadline: new_deadline,
            at: Utc::now(),
        })?;
        Ok(DeadlineUpdate::Updated)
    }

    /// Switch plan. No payment is involved; only capacity changes.
    ///
    /// Refused when the active plates would not fit the new capacity.
    pub fn change_plan(&mut self, plan: Plan) -> Result<()> {
        let from = self.board.user.plan;
        if from == plan && self.board.user.max_plates == plan.max_plates() {
            return Ok(());
        }

        let active = self.board.plates.len();
        if active > plan.max_plates() {
            return Err(ValidationError::CapacityExceeded {
                active,
                capacity: plan.max_plates(),
            }
            .into());
        }

        self.board.user.switch_plan(plan);
        info!(%from, to = %plan, max_plates = plan.max_plates(), "plan changed");

        self.commit(StoreEvent::PlanChanged {
            from,
            to: plan,
            max_plates: plan.max_plates(),
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Write the whole board, then notify subscribers. Subscribers are
    /// notified even if the write fails since the in-memory board changed.
    fn commit(&mut self, event: StoreEvent) -> Result<()> {
        let saved = self.persistence.save(&self.board);
        if let Err(ref e) = saved {
            warn!(error = %e, "failed to persist board");
        }
        self.notify(event);
        saved.map_err(Into::into)
    }

    fn notify(&mut self, event: StoreEvent) {
        if self.subscribers.is_empty() {
            return;
        }
        let update = StoreUpdate {
            event,
            snapshot: Arc::new(self.board.clone()),
        };
        self.subscribers.retain(|tx| tx.send(update.clone()).is_ok());
    }
}
