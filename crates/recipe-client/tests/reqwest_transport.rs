//! End-to-end tests of `ReqwestTransport` against a loopback recipe server.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

use recipe_client::{
    ClientConfig, ClientError, HttpTransport, RecipeApi, ReqwestTransport, ResourceRequest,
};
use recipe_core::{FetchStatus, Recipe, RecipeDraft};

// =============================================================================
// Loopback Server
// =============================================================================

type Store = Arc<Mutex<Vec<Value>>>;

async fn list_recipes(State(store): State<Store>) -> Json<Value> {
    let recipes = store.lock().unwrap().clone();
    Json(Value::Array(recipes))
}

async fn get_recipe(State(store): State<Store>, Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    store
        .lock()
        .unwrap()
        .iter()
        .find(|r| r["_id"] == id.as_str())
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_recipe(State(store): State<Store>, Json(mut body): Json<Value>) -> (StatusCode, Json<Value>) {
    let mut recipes = store.lock().unwrap();
    body["_id"] = json!(format!("id-{}", recipes.len() + 1));
    recipes.push(body.clone());
    (StatusCode::CREATED, Json(body))
}

async fn delete_recipe(State(store): State<Store>, Path(id): Path<String>) -> StatusCode {
    let mut recipes = store.lock().unwrap();
    let before = recipes.len();
    recipes.retain(|r| r["_id"] != id.as_str());
    if recipes.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(3)).await;
    Json(json!([]))
}

/// Starts the server on an ephemeral port and returns its base URL.
async fn start_server() -> String {
    let store: Store = Arc::new(Mutex::new(vec![json!({
        "_id": "1",
        "title": "Toast",
        "description": "Bread, but better",
        "image": "toast.png",
        "ingredients": ["bread", "butter"],
        "preparation": [{"step": "Toast the bread"}]
    })]));

    let app = Router::new()
        .route("/api/recipes", get(list_recipes).post(create_recipe))
        .route("/api/recipes/{id}", get(get_recipe).delete(delete_recipe))
        .route("/api/slow", get(slow))
        .with_state(store);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    format!("http://{addr}")
}

fn api_for(base_url: &str) -> RecipeApi {
    let transport = ReqwestTransport::new(&ClientConfig::with_base_url(base_url)).unwrap();
    RecipeApi::new(Arc::new(transport))
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_list_resource_over_http() {
    let base_url = start_server().await;
    let api = api_for(&base_url);

    let resource = api.list_resource();
    let state = resource.settled().await;

    assert_eq!(state.status(), FetchStatus::Success);
    let recipes = state.data().unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].title, "Toast");
    assert_eq!(recipes[0].preparation[0].step, "Toast the bread");
}

#[tokio::test]
async fn test_missing_recipe_is_not_found_state() {
    let base_url = start_server().await;
    let api = api_for(&base_url);

    let resource = api.recipe_resource("nope").unwrap();
    let state = resource.settled().await;

    assert_eq!(state.status(), FetchStatus::Error);
    assert_eq!(state.error(), Some("Not Found"));
    assert!(state.data().is_none());

    // Switching to an existing recipe recovers
    resource.request(recipe_client::api::recipe("1").unwrap());
    let state = resource.settled().await;
    assert_eq!(state.data().map(|r| r.id.as_str()), Some("1"));
}

#[tokio::test]
async fn test_create_then_delete_over_http() {
    let base_url = start_server().await;
    let api = api_for(&base_url);

    let draft = RecipeDraft::new("Eggs")
        .with_ingredient("eggs")
        .with_step("Boil the eggs");
    let created: Recipe = api.create(&draft).await.unwrap();
    assert_eq!(created.id, "id-2");
    assert_eq!(created.title, "Eggs");

    assert_eq!(api.list().await.unwrap().len(), 2);
    assert_eq!(api.get("id-2").await.unwrap().ingredients, vec!["eggs".to_string()]);

    api.delete("id-2").await.unwrap();
    assert!(api.get("id-2").await.unwrap_err().is_not_found());
    assert!(api.delete("id-2").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_base_url_with_trailing_slash() {
    let base_url = start_server().await;
    let api = api_for(&format!("{base_url}/"));

    assert_eq!(api.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_timeout_is_reported() {
    let base_url = start_server().await;
    let mut config = ClientConfig::with_base_url(&base_url);
    config.api.timeout_secs = 1;
    let transport = ReqwestTransport::new(&config).unwrap();

    let err = transport
        .send(&ResourceRequest::get("/api/slow"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Timeout(1)));
    assert!(err.is_network_error());
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = api_for(&format!("http://{addr}"));
    let resource = api.list_resource();
    let state = resource.settled().await;

    assert_eq!(state.status(), FetchStatus::Error);
    assert!(state.error().unwrap().starts_with("Network failure"));
}
