use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Player, Position};

pub struct Query;

#[Object]
impl Query {
    /// List of all players
    async fn players(&self, ctx: &Context<'_>) -> Result<Vec<Player>> {
        let context = ctx.data::<GraphQLContext>()?;
        let players = context.store.list_players().await;

        Ok(players.into_iter().map(Player::from).collect())
    }

    /// An individual player
    async fn player(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Player>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let context = ctx.data::<GraphQLContext>()?;
        let player = context.store.get_player(id).await;

        Ok(player.map(Player::from))
    }

    /// List of all positions
    async fn positions(&self, ctx: &Context<'_>) -> Result<Vec<Position>> {
        let context = ctx.data::<GraphQLContext>()?;
        let positions = context.store.list_positions().await;

        Ok(positions.into_iter().map(Position::from).collect())
    }

    /// An individual position
    async fn position(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Position>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let context = ctx.data::<GraphQLContext>()?;
        let position = context.store.get_position(id).await;

        Ok(position.map(Position::from))
    }

    /// The first player wearing a squad number
    async fn squad_number(&self, ctx: &Context<'_>, number: Option<i32>) -> Result<Option<Player>> {
        let Some(number) = number else {
            return Ok(None);
        };
        let context = ctx.data::<GraphQLContext>()?;
        let player = context.store.get_player_by_squad_number(number).await;

        Ok(player.map(Player::from))
    }
}
