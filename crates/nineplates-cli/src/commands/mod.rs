pub mod config;
pub mod plan;
pub mod plate;
pub mod score;

use chrono::NaiveDate;
use nineplates_core::{data_dir, local_today, parse_deadline, Config, JsonFileStore, PlateStore};
use tracing::debug;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Open the board in the data directory using the configured file name.
pub fn open_store() -> Result<(PlateStore<JsonFileStore>, Config), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let dir = data_dir()?;
    let file = config.board_store(&dir);
    debug!(path = %file.path().display(), "opening board");
    let store = PlateStore::open(file);
    Ok((store, config))
}

/// `--today` override, falling back to the local date.
pub fn resolve_today(arg: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match arg {
        Some(s) => Ok(parse_deadline(s)?),
        None => Ok(local_today()),
    }
}
