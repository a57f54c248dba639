use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Player;
use crate::store::PositionRecord;

/// A preferred field position held by a player
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(complex)]
pub struct Position {
    pub id: i32,
    pub position: String,
    pub player_id: i32,
}

impl From<PositionRecord> for Position {
    fn from(record: PositionRecord) -> Self {
        Self {
            id: record.id,
            position: record.position,
            player_id: record.player_id,
        }
    }
}

#[ComplexObject]
impl Position {
    /// The player holding this position; null when `playerId` matches no player
    async fn player(&self, ctx: &Context<'_>) -> Result<Option<Player>> {
        let context = ctx.data::<GraphQLContext>()?;
        let player = context.store.get_player(self.player_id).await;

        Ok(player.map(Player::from))
    }
}
