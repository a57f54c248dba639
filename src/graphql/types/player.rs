use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Position;
use crate::store::PlayerRecord;

/// A member of the squad
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(complex)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub squad_number: i32,
}

impl From<PlayerRecord> for Player {
    fn from(record: PlayerRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            squad_number: record.squad_number,
        }
    }
}

#[ComplexObject]
impl Player {
    /// Preferred field positions of this player, in the order they were added
    async fn positions(&self, ctx: &Context<'_>) -> Result<Vec<Position>> {
        let context = ctx.data::<GraphQLContext>()?;
        let positions = context.store.positions_for_player(self.id).await;

        Ok(positions.into_iter().map(Position::from).collect())
    }
}
