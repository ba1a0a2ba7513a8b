use std::sync::Arc;

use aciiverse_api::application::http::server::http_server::{router, state};
use aciiverse_api::args::Args;
use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use serde_json::{Value, json};

const GAMES_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/games.json");

fn server_with_data(file: &str) -> TestServer {
    let args = Args::parse_from(["aciiverse-api", "--data-file", file]);
    let router = router(state(Arc::new(args))).unwrap();
    TestServer::new(router).unwrap()
}

fn server() -> TestServer {
    server_with_data(GAMES_FILE)
}

fn ids(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|game| game["id"].as_i64().unwrap())
        .collect()
}

fn new_game() -> Value {
    json!({
        "title": "Assassin's Creed Shadows",
        "description": "The 14. Assassin's Creed in Japan",
        "release": "2024",
        "developingLanguage": "AnvilNext 2.0",
        "developer": "Ubisoft"
    })
}

#[tokio::test]
async fn test_get_all_games() {
    let response = server().get("/api/games").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Success");
    assert_eq!(ids(&body), (1..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_get_games_with_top() {
    let response = server()
        .get("/api/games")
        .add_query_param("$top", 15)
        .await;

    response.assert_status_ok();
    assert_eq!(ids(&response.json()), (1..=15).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_get_games_with_top_and_skip() {
    let response = server()
        .get("/api/games")
        .add_query_param("$top", 15)
        .add_query_param("$skip", 5)
        .await;

    response.assert_status_ok();
    assert_eq!(ids(&response.json()), (6..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_get_games_with_select() {
    let response = server()
        .get("/api/games")
        .add_query_param("$select", r#"["id","title","release"]"#)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let games = body["data"].as_array().unwrap();
    assert_eq!(games.len(), 20);
    for game in games {
        let keys: Vec<&String> = game.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["id", "title", "release"]);
    }
}

#[tokio::test]
async fn test_get_games_ordered_by_id_descending() {
    let response = server()
        .get("/api/games")
        .add_query_param("$orderBy", r#"{"property":"id","ascending":false}"#)
        .await;

    response.assert_status_ok();
    assert_eq!(ids(&response.json()), (1..=20).rev().collect::<Vec<_>>());
}

#[tokio::test]
async fn test_get_games_filtered_by_release() {
    let response = server()
        .get("/api/games")
        .add_query_param(
            "$filters",
            r#"{"property":"release","operator":"eq","value":"2020"}"#,
        )
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let games = body["data"].as_array().unwrap();
    assert_eq!(games.len(), 7);
    assert!(games.iter().all(|game| game["release"] == "2020"));
}

#[tokio::test]
async fn test_get_games_ignores_malformed_options() {
    let response = server()
        .get("/api/games")
        .add_query_param("$filters", "{not json")
        .add_query_param("$top", "many")
        .await;

    response.assert_status_ok();
    assert_eq!(ids(&response.json()).len(), 20);
}

#[tokio::test]
async fn test_get_games_without_data() {
    let response = server_with_data("/nonexistent/games.json")
        .get("/api/games")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({"message": "No data found"}));
}

#[tokio::test]
async fn test_get_single_game() {
    let response = server().get("/api/games/4").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["id"], 4);
    assert_eq!(body["data"]["title"], "Doom Eternal");
}

#[tokio::test]
async fn test_get_unknown_game() {
    let server = server();

    let response = server.get("/api/games/22").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({"message": "Game not exists"}));

    server
        .get("/api/games/abc")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_game() {
    let response = server().post("/api/games").json(&new_game()).await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Success");
    assert_eq!(body["data"]["id"], 21);
    assert_eq!(body["data"]["developer"], "Ubisoft");
}

#[tokio::test]
async fn test_create_game_with_missing_field() {
    let mut game = new_game();
    game.as_object_mut().unwrap().remove("developer");

    let response = server().post("/api/games").json(&game).await;

    response.assert_status(StatusCode::NOT_ACCEPTABLE);
    assert_eq!(response.json::<Value>(), json!({"message": "Invalid data"}));
}

#[tokio::test]
async fn test_create_game_with_blank_field() {
    let mut game = new_game();
    game["title"] = json!("");

    server()
        .post("/api/games")
        .json(&game)
        .await
        .assert_status(StatusCode::NOT_ACCEPTABLE);
}

#[tokio::test]
async fn test_update_game() {
    let server = server();

    let response = server.put("/api/games/19").json(&new_game()).await;
    response.assert_status(StatusCode::ACCEPTED);
    let body: Value = response.json();
    assert_eq!(body["data"]["id"], 19);
    assert_eq!(body["data"]["title"], "Assassin's Creed Shadows");

    server
        .put("/api/games/30")
        .json(&new_game())
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_writes_are_not_persisted() {
    let server = server();

    server
        .post("/api/games")
        .json(&new_game())
        .await
        .assert_status(StatusCode::CREATED);

    let body: Value = server.get("/api/games").await.json();
    assert_eq!(ids(&body).len(), 20);
}

#[tokio::test]
async fn test_delete_game() {
    let server = server();

    let response = server.delete("/api/games/20").await;
    response.assert_status(StatusCode::ACCEPTED);
    assert_eq!(response.json::<Value>(), json!({"message": "Success"}));

    server
        .delete("/api/games/31")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_status() {
    let server = server();

    for path in ["/api", "/api/"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("Service alive! Time: ")
        );
    }
}

#[tokio::test]
async fn test_readiness() {
    let response = server().get("/api/health/ready").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"], json!({"games": 20}));

    server_with_data("/nonexistent/games.json")
        .get("/api/health/ready")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
