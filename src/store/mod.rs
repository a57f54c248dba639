//! In-memory record store for players and positions.
//!
//! Each table keeps its rows in insertion order next to a monotonically
//! increasing id counter. Both live under one lock, so assigning an id and
//! appending the row happen as a single critical section.

pub mod entities;
pub mod seed;

use tokio::sync::RwLock;
use tracing::{debug, info};

pub use entities::{Identified, PlayerRecord, PositionRecord};
pub use seed::Seed;

use crate::errors::{Result, RosterError};

#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    next_id: i32,
}

impl<T: Identified + Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// Counter resumes after the highest seeded id.
    fn from_rows(rows: Vec<T>) -> Self {
        let next_id = rows
            .iter()
            .map(Identified::id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        Self { rows, next_id }
    }

    /// `i32::MAX` is never handed out; reaching it means the table is full.
    fn insert_with(&mut self, entity: &'static str, build: impl FnOnce(i32) -> T) -> Result<T> {
        let id = self.next_id;
        let next_id = id
            .checked_add(1)
            .ok_or(RosterError::IdsExhausted { entity })?;
        let row = build(id);
        self.rows.push(row.clone());
        self.next_id = next_id;
        Ok(row)
    }

    fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.iter().find(|row| predicate(row)).cloned()
    }

    fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.iter().filter(|row| predicate(row)).cloned().collect()
    }
}

#[derive(Debug)]
pub struct RecordStore {
    players: RwLock<Table<PlayerRecord>>,
    positions: RwLock<Table<PositionRecord>>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// An empty store; the first player and position both get id 1.
    pub fn new() -> Self {
        Self {
            players: RwLock::new(Table::new()),
            positions: RwLock::new(Table::new()),
        }
    }

    pub fn with_sample_data() -> Self {
        Self::from_validated(Seed::sample())
    }

    pub fn from_seed(seed: Seed) -> Result<Self> {
        seed.validate()?;
        Ok(Self::from_validated(seed))
    }

    fn from_validated(seed: Seed) -> Self {
        info!(
            "Seeding record store with {} players and {} positions",
            seed.players.len(),
            seed.positions.len()
        );
        Self {
            players: RwLock::new(Table::from_rows(seed.players)),
            positions: RwLock::new(Table::from_rows(seed.positions)),
        }
    }

    /// All players in insertion order
    pub async fn list_players(&self) -> Vec<PlayerRecord> {
        self.players.read().await.rows.clone()
    }

    pub async fn get_player(&self, id: i32) -> Option<PlayerRecord> {
        debug!("Looking up player {}", id);
        self.players.read().await.find(|p| p.id == id)
    }

    /// First player wearing `number`. Squad numbers are not unique, so the
    /// earliest insertion wins.
    pub async fn get_player_by_squad_number(&self, number: i32) -> Option<PlayerRecord> {
        debug!("Looking up player by squad number {}", number);
        self.players.read().await.find(|p| p.squad_number == number)
    }

    /// All positions in insertion order
    pub async fn list_positions(&self) -> Vec<PositionRecord> {
        self.positions.read().await.rows.clone()
    }

    pub async fn get_position(&self, id: i32) -> Option<PositionRecord> {
        debug!("Looking up position {}", id);
        self.positions.read().await.find(|p| p.id == id)
    }

    /// Positions whose `player_id` matches, in insertion order. Empty when the
    /// player has none or does not exist.
    pub async fn positions_for_player(&self, player_id: i32) -> Vec<PositionRecord> {
        self.positions
            .read()
            .await
            .filter(|p| p.player_id == player_id)
    }

    pub async fn add_player(&self, name: String, squad_number: i32) -> Result<PlayerRecord> {
        let player = self
            .players
            .write()
            .await
            .insert_with("player", |id| PlayerRecord {
                id,
                name,
                squad_number,
            })?;
        info!("Added player {} ({})", player.id, player.name);
        Ok(player)
    }

    /// Appends a position without checking that `player_id` exists.
    pub async fn add_position(&self, position: String, player_id: i32) -> Result<PositionRecord> {
        let record = self
            .positions
            .write()
            .await
            .insert_with("position", |id| PositionRecord {
                id,
                position,
                player_id,
            })?;
        info!(
            "Added position {} ({}) for player {}",
            record.id, record.position, record.player_id
        );
        Ok(record)
    }

    pub async fn player_count(&self) -> usize {
        self.players.read().await.rows.len()
    }

    pub async fn position_count(&self) -> usize {
        self.positions.read().await.rows.len()
    }
}
