use async_graphql::*;
use tracing::debug;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Player, Position};

pub struct Mutation;

#[Object]
impl Mutation {
    /// Add a position for a player. The player is not required to exist.
    async fn add_position(
        &self,
        ctx: &Context<'_>,
        position: String,
        player_id: i32,
    ) -> Result<Position> {
        let context = ctx.data::<GraphQLContext>()?;
        debug!("addPosition({}, {})", position, player_id);
        let position = context
            .store
            .add_position(position, player_id)
            .await
            .map_err(|e| e.extend())?;

        Ok(Position::from(position))
    }

    /// Add a player
    async fn add_player(&self, ctx: &Context<'_>, name: String, squad_number: i32) -> Result<Player> {
        let context = ctx.data::<GraphQLContext>()?;
        debug!("addPlayer({}, {})", name, squad_number);
        let player = context
            .store
            .add_player(name, squad_number)
            .await
            .map_err(|e| e.extend())?;

        Ok(Player::from(player))
    }
}
