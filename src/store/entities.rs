use serde::{Deserialize, Serialize};

/// A player row as held by the record store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: i32,
    pub name: String,
    pub squad_number: i32,
}

/// A preferred field position row. `player_id` is not checked against the
/// player table and may reference a player that does not exist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    pub id: i32,
    pub position: String,
    pub player_id: i32,
}

/// Rows that carry a store-assigned identifier.
pub trait Identified {
    fn id(&self) -> i32;
}

impl Identified for PlayerRecord {
    fn id(&self) -> i32 {
        self.id
    }
}

impl Identified for PositionRecord {
    fn id(&self) -> i32 {
        self.id
    }
}
