//! Schema-level tests
//!
//! Executes GraphQL documents directly against the schema, without HTTP.

use std::sync::Arc;

use async_graphql::{Request, Variables};
use serde_json::{json, Value};
use squad_roster::graphql::{build_schema, schema_sdl, GraphQLSchema};
use squad_roster::store::{PlayerRecord, RecordStore, Seed};

fn sample_schema() -> (Arc<RecordStore>, GraphQLSchema) {
    let store = Arc::new(RecordStore::with_sample_data());
    let schema = build_schema(store.clone());
    (store, schema)
}

async fn execute(schema: &GraphQLSchema, query: &str) -> anyhow::Result<Value> {
    let response = schema.execute(query).await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    Ok(response.data.into_json()?)
}

#[tokio::test]
async fn list_players_with_nested_positions() -> anyhow::Result<()> {
    let (_, schema) = sample_schema();

    let data = execute(
        &schema,
        "{ players { id name squadNumber positions { position } } }",
    )
    .await?;

    let players = data["players"].as_array().expect("players list");
    assert_eq!(players.len(), 4);
    assert_eq!(
        players[0],
        json!({
            "id": 1,
            "name": "Cruz, Julius",
            "squadNumber": 2,
            "positions": [
                { "position": "Defense" },
                { "position": "Winger" },
                { "position": "Goal" }
            ]
        })
    );
    assert_eq!(players[3]["positions"].as_array().map(Vec::len), Some(3));

    Ok(())
}

#[tokio::test]
async fn player_by_id() -> anyhow::Result<()> {
    let (_, schema) = sample_schema();

    let data = execute(
        &schema,
        "{ player(id: 2) { name squadNumber positions { position } } }",
    )
    .await?;

    assert_eq!(
        data,
        json!({
            "player": {
                "name": "Fowler, Erik",
                "squadNumber": 9,
                "positions": [
                    { "position": "Forward" },
                    { "position": "Winger" },
                    { "position": "Midfield" }
                ]
            }
        })
    );

    Ok(())
}

#[tokio::test]
async fn missing_lookups_are_null_not_errors() -> anyhow::Result<()> {
    let (_, schema) = sample_schema();

    let data = execute(
        &schema,
        "{ player(id: 99) { name } position(id: 0) { position } squadNumber(number: 7) { name } }",
    )
    .await?;

    assert_eq!(
        data,
        json!({ "player": null, "position": null, "squadNumber": null })
    );

    Ok(())
}

#[tokio::test]
async fn omitted_lookup_argument_yields_null() -> anyhow::Result<()> {
    let (_, schema) = sample_schema();

    let data = execute(&schema, "{ player { name } position { id } }").await?;
    assert_eq!(data, json!({ "player": null, "position": null }));

    Ok(())
}

#[tokio::test]
async fn squad_number_lookup() -> anyhow::Result<()> {
    let (_, schema) = sample_schema();

    let data = execute(
        &schema,
        "{ squadNumber(number: 2) { id name squadNumber positions { position } } }",
    )
    .await?;

    assert_eq!(data["squadNumber"]["name"], "Cruz, Julius");
    assert_eq!(data["squadNumber"]["id"], 1);
    assert_eq!(data["squadNumber"]["squadNumber"], 2);

    Ok(())
}

#[tokio::test]
async fn position_resolves_its_player() -> anyhow::Result<()> {
    let (_, schema) = sample_schema();

    let data = execute(
        &schema,
        "{ position(id: 4) { position playerId player { name } } }",
    )
    .await?;

    assert_eq!(
        data,
        json!({
            "position": {
                "position": "Forward",
                "playerId": 2,
                "player": { "name": "Fowler, Erik" }
            }
        })
    );

    Ok(())
}

#[tokio::test]
async fn list_positions_in_insertion_order() -> anyhow::Result<()> {
    let (_, schema) = sample_schema();

    let data = execute(&schema, "{ positions { id } }").await?;
    let ids: Vec<i64> = data["positions"]
        .as_array()
        .expect("positions list")
        .iter()
        .filter_map(|p| p["id"].as_i64())
        .collect();
    assert_eq!(ids, (1..=11).collect::<Vec<i64>>());

    Ok(())
}

#[tokio::test]
async fn add_player_appends_with_next_id() -> anyhow::Result<()> {
    let (store, schema) = sample_schema();

    let data = execute(
        &schema,
        r#"mutation { addPlayer(name: "Lee, Sam", squadNumber: 35) { id name squadNumber } }"#,
    )
    .await?;

    assert_eq!(
        data,
        json!({ "addPlayer": { "id": 5, "name": "Lee, Sam", "squadNumber": 35 } })
    );

    let data = execute(&schema, "{ players { id name } }").await?;
    let players = data["players"].as_array().expect("players list");
    assert_eq!(players.len(), 5);
    assert_eq!(players[4], json!({ "id": 5, "name": "Lee, Sam" }));
    assert_eq!(store.player_count().await, 5);

    Ok(())
}

#[tokio::test]
async fn add_position_with_variables() -> anyhow::Result<()> {
    let (_, schema) = sample_schema();

    let mutation = r#"
        mutation AddPosition($position: String!, $playerId: Int!) {
            addPosition(position: $position, playerId: $playerId) {
                id
                position
                player { id name }
            }
        }
    "#;

    let request = Request::new(mutation).variables(Variables::from_json(json!({
        "position": "Coach",
        "playerId": 4
    })));
    let response = schema.execute(request).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json()?;
    assert_eq!(
        data,
        json!({
            "addPosition": {
                "id": 12,
                "position": "Coach",
                "player": { "id": 4, "name": "May, Dominic" }
            }
        })
    );

    Ok(())
}

#[tokio::test]
async fn dangling_player_reference_resolves_to_null() -> anyhow::Result<()> {
    let (_, schema) = sample_schema();

    let data = execute(
        &schema,
        r#"mutation { addPosition(position: "Coach", playerId: 5) { id player { name } } }"#,
    )
    .await?;

    assert_eq!(
        data,
        json!({ "addPosition": { "id": 12, "player": null } })
    );

    Ok(())
}

#[tokio::test]
async fn missing_required_argument_is_rejected() -> anyhow::Result<()> {
    let (store, schema) = sample_schema();

    let response = schema
        .execute(r#"mutation { addPlayer(name: "No Number") { id } }"#)
        .await;
    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("squadNumber"));

    let response = schema
        .execute("mutation { addPosition(playerId: 1) { id } }")
        .await;
    assert!(!response.errors.is_empty());

    assert_eq!(store.player_count().await, 4);
    assert_eq!(store.position_count().await, 11);

    Ok(())
}

#[tokio::test]
async fn null_for_required_argument_is_rejected() -> anyhow::Result<()> {
    let (store, schema) = sample_schema();

    let response = schema
        .execute("mutation { addPlayer(name: null, squadNumber: 3) { id } }")
        .await;
    assert!(!response.errors.is_empty());
    assert_eq!(store.player_count().await, 4);

    Ok(())
}

#[tokio::test]
async fn exhausted_ids_surface_as_graphql_error() -> anyhow::Result<()> {
    let seed = Seed {
        players: vec![PlayerRecord {
            id: i32::MAX - 1,
            name: "Near, Limit".to_string(),
            squad_number: 1,
        }],
        positions: Vec::new(),
    };
    let store = Arc::new(RecordStore::from_seed(seed)?);
    let schema = build_schema(store.clone());

    let response = schema
        .execute(r#"mutation { addPlayer(name: "One, More", squadNumber: 2) { id } }"#)
        .await;
    assert_eq!(response.errors.len(), 1);

    let errors = serde_json::to_value(&response.errors)?;
    assert_eq!(errors[0]["extensions"]["code"], "IDS_EXHAUSTED");
    assert_eq!(store.player_count().await, 1);

    Ok(())
}

#[tokio::test]
async fn stores_are_isolated_per_schema() -> anyhow::Result<()> {
    let (_, first) = sample_schema();
    let (_, second) = sample_schema();

    execute(
        &first,
        r#"mutation { addPlayer(name: "Only, Here", squadNumber: 1) { id } }"#,
    )
    .await?;

    let data = execute(&second, "{ players { id } }").await?;
    assert_eq!(data["players"].as_array().map(Vec::len), Some(4));

    Ok(())
}

#[test]
fn sdl_exposes_roster_types() {
    let sdl = schema_sdl();

    assert!(sdl.contains("type Player"));
    assert!(sdl.contains("squadNumber: Int!"));
    assert!(sdl.contains("positions: [Position!]!"));
    assert!(sdl.contains("type Position"));
    assert!(sdl.contains("player: Player"));
    assert!(sdl.contains("squadNumber(number: Int): Player"));
    assert!(sdl.contains("addPlayer(name: String!, squadNumber: Int!): Player!"));
    assert!(sdl.contains("addPosition(position: String!, playerId: Int!): Position!"));
}
