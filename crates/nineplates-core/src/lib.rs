//! # Nine Plates Core Library
//!
//! Business logic for Nine Plates, a personal deadline tracker where every
//! task is a plate that has to be kept spinning. Plates are either saved
//! (completed) or smashed (dropped); the outcome history feeds a life
//! efficiency score.
//!
//! The `nineplates` CLI is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Plate Store**: owns the board (active plates plus the user record),
//!   applies commands and writes the whole board after each change
//! - **Urgency**: pure classification of a deadline into a tier and motion
//! - **Efficiency**: pure scoring of the saved/smashed history
//! - **Storage**: JSON board persistence and TOML configuration
//!
//! ## Key Components
//!
//! - [`PlateStore`]: the board and its commands
//! - [`Persistence`]: load/save contract with [`JsonFileStore`] and [`MemoryStore`]
//! - [`classify_urgency`] and [`compute_efficiency`]: derived state
//! - [`Config`]: application configuration management

pub mod account;
pub mod board;
pub mod efficiency;
pub mod error;
pub mod events;
pub mod plate;
pub mod storage;
pub mod store;
pub mod urgency;

pub use account::{Account, Plan};
pub use board::Board;
pub use efficiency::{account_efficiency, compute_efficiency, Efficiency, EfficiencyLevel};
pub use error::{ConfigError, CoreError, PersistenceError, ValidationError};
pub use events::{StoreEvent, StoreUpdate};
pub use plate::{parse_deadline, Consequence, Plate, PlateId, MAX_TITLE_CHARS};
pub use storage::{data_dir, Config, JsonFileStore, MemoryStore, Persistence, STORAGE_KEY};
pub use store::{AddOutcome, DeadlineUpdate, PlateStore};
pub use urgency::{
    classify_urgency, days_remaining, local_today, severity, PlateMotion, Severity, Urgency,
    UrgencyTier,
};
