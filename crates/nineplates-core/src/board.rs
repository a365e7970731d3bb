//! The persisted aggregate: active plates plus the user record.

use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::plate::Plate;

/// Everything the store persists, written as one unit.
///
/// Missing top-level keys fall back to an empty plate list and the default
/// account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub plates: Vec<Plate>,
    #[serde(default)]
    pub user: Account,
}

impl Board {
    pub fn free_slots(&self) -> usize {
        self.user.max_plates.saturating_sub(self.plates.len())
    }

    pub fn is_full(&self) -> bool {
        self.plates.len() >= self.user.max_plates
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.plates.iter().position(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default_board() {
        let board: Board = serde_json::from_str("{}").unwrap();
        assert_eq!(board, Board::default());
        assert_eq!(board.free_slots(), 9);
    }

    #[test]
    fn top_level_keys_match_storage_layout() {
        let json = serde_json::to_value(Board::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("plates"));
        assert!(obj.contains_key("user"));
        assert_eq!(obj.len(), 2);
    }
}
