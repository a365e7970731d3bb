//! Durable storage for the [`Board`].
//!
//! The store only ever reads the whole aggregate once at startup and rewrites
//! it after each mutation, so backends implement a two-call contract.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::warn;

use crate::account::Account;
use crate::board::Board;
use crate::error::PersistenceError;
use crate::plate::Plate;

/// Storage key of the aggregate. File backends use it as the file stem.
pub const STORAGE_KEY: &str = "nine-plates-data";

/// Load/save contract for the board.
pub trait Persistence {
    /// Read the stored board.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet and
    /// [`PersistenceError::Corrupt`] when the stored value does not parse.
    fn load(&self) -> Result<Option<Board>, PersistenceError>;

    /// Replace the stored board.
    fn save(&mut self, board: &Board) -> Result<(), PersistenceError>;
}

pub fn encode_board(board: &Board) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(board)?)
}

/// Parse a stored board.
///
/// Only a value that is not a JSON object is corrupt. Unreadable plates are
/// dropped one by one, and unreadable `user` fields keep their defaults, so a
/// single bad record never costs the account its counters.
pub fn decode_board(raw: &str) -> Result<Board, PersistenceError> {
    let mut root: Map<String, Value> = serde_json::from_str(raw)?;
    let plates = match root.remove("plates") {
        Some(Value::Array(items)) => items.into_iter().filter_map(decode_plate).collect(),
        None | Some(Value::Null) => Vec::new(),
        Some(other) => {
            warn!(found = %other, "ignoring non-list plates value");
            Vec::new()
        }
    };
    let user = match root.remove("user") {
        Some(Value::Object(fields)) => decode_account(fields),
        None | Some(Value::Null) => Account::default(),
        Some(other) => {
            warn!(found = %other, "ignoring non-object user value");
            Account::default()
        }
    };
    Ok(Board { plates, user })
}

fn decode_plate(item: Value) -> Option<Plate> {
    match serde_json::from_value(item) {
        Ok(plate) => Some(plate),
        Err(e) => {
            warn!(error = %e, "dropping unreadable plate");
            None
        }
    }
}

/// Merge stored fields onto the default account, skipping any field whose
/// value does not fit.
fn decode_account(fields: Map<String, Value>) -> Account {
    let mut merged = match serde_json::to_value(Account::default()) {
        Ok(Value::Object(defaults)) => defaults,
        _ => Map::new(),
    };
    for (key, value) in fields {
        let mut candidate = merged.clone();
        candidate.insert(key.clone(), value);
        match serde_json::from_value::<Account>(Value::Object(candidate.clone())) {
            Ok(_) => merged = candidate,
            Err(e) => warn!(field = %key, error = %e, "keeping default for unreadable account field"),
        }
    }
    serde_json::from_value(Value::Object(merged)).unwrap_or_default()
}

/// Board stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/nine-plates-data.json`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(format!("{STORAGE_KEY}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn write_atomic(&self, content: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)
    }
}

impl Persistence for JsonFileStore {
    fn load(&self) -> Result<Option<Board>, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => decode_board(&content).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistenceError::ReadFailed {
                location: self.location(),
                source,
            }),
        }
    }

    fn save(&mut self, board: &Board) -> Result<(), PersistenceError> {
        let content = serde_json::to_string_pretty(board)?;
        self.write_atomic(&content)
            .map_err(|source| PersistenceError::WriteFailed {
                location: self.location(),
                source,
            })
    }
}

/// In-process key-value slot holding the raw JSON string.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an arbitrary stored value, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            writes: 0,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Number of saves performed.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Persistence for MemoryStore {
    fn load(&self) -> Result<Option<Board>, PersistenceError> {
        self.raw.as_deref().map(decode_board).transpose()
    }

    fn save(&mut self, board: &Board) -> Result<(), PersistenceError> {
        self.raw = Some(encode_board(board)?);
        self.writes += 1;
        Ok(())
    }
}
