//! Initial store contents
//!
//! A seed document lists the players and positions a store starts with. The
//! built-in sample roster is used when no seed file is given; a seed file can
//! be YAML or JSON and has the same shape as the sample:
//!
//! ```yaml
//! players:
//!   - { id: 1, name: "Cruz, Julius", squadNumber: 2 }
//! positions:
//!   - { id: 1, position: Defense, playerId: 1 }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::entities::{Identified, PlayerRecord, PositionRecord};
use crate::errors::{Result, RosterError};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub players: Vec<PlayerRecord>,
    #[serde(default)]
    pub positions: Vec<PositionRecord>,
}

impl Seed {
    /// The demonstration roster: four players and eleven positions.
    pub fn sample() -> Self {
        let players = [
            (1, "Cruz, Julius", 2),
            (2, "Fowler, Erik", 9),
            (3, "Turner, Rachel", 14),
            (4, "May, Dominic", 99),
        ]
        .into_iter()
        .map(|(id, name, squad_number)| PlayerRecord {
            id,
            name: name.to_string(),
            squad_number,
        })
        .collect();

        let positions = [
            (1, "Defense", 1),
            (2, "Winger", 1),
            (3, "Goal", 1),
            (4, "Forward", 2),
            (5, "Winger", 2),
            (6, "Midfield", 2),
            (7, "Winger", 3),
            (8, "Forward", 3),
            (9, "Home", 4),
            (10, "Couch", 4),
            (11, "Bar", 4),
        ]
        .into_iter()
        .map(|(id, position, player_id)| PositionRecord {
            id,
            position: position.to_string(),
            player_id,
        })
        .collect();

        Self { players, positions }
    }

    /// Load a seed document, choosing the parser from the file extension.
    /// Anything that is not `.json` is read as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let path_str = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| RosterError::SeedRead {
            path: path_str.clone(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let seed: Seed = if is_json {
            serde_json::from_str(&content).map_err(|e| RosterError::SeedParse {
                path: path_str.clone(),
                reason: e.to_string(),
            })?
        } else {
            serde_yaml::from_str(&content).map_err(|e| RosterError::SeedParse {
                path: path_str.clone(),
                reason: e.to_string(),
            })?
        };

        debug!(
            "Loaded seed {} with {} players and {} positions",
            path_str,
            seed.players.len(),
            seed.positions.len()
        );
        seed.validate()?;
        Ok(seed)
    }

    /// Identifiers must be unique within each list and below `i32::MAX`, so the
    /// store counter can resume after them. Dangling `playerId`s and repeated
    /// squad numbers are allowed.
    pub fn validate(&self) -> Result<()> {
        check_unique_ids("player", &self.players)?;
        check_unique_ids("position", &self.positions)
    }
}

fn check_unique_ids<T: Identified>(entity: &'static str, rows: &[T]) -> Result<()> {
    let mut seen = HashSet::with_capacity(rows.len());
    for row in rows {
        if row.id() == i32::MAX {
            return Err(RosterError::SeedIdOutOfRange {
                entity,
                id: row.id(),
            });
        }
        if !seen.insert(row.id()) {
            return Err(RosterError::DuplicateSeedId {
                entity,
                id: row.id(),
            });
        }
    }
    Ok(())
}
