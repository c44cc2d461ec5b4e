//! HTTP Endpoints
//!
//! REST API for the shopping list, catalog search, recommendations and voice commands.

use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderValue, Method},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use voice_cart_agent::CommandResponse;
use voice_cart_core::{Product, SearchQuery, ShoppingListEntry};

use crate::state::AppState;
use crate::ServerError;

const FALLBACK_ORIGIN: &str = "http://localhost:3000";

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let config = state.config.read();
    let cors_layer = build_cors_layer(&config.server.cors_origins, config.server.cors_enabled);
    let timeout = Duration::from_secs(config.server.timeout_seconds);
    drop(config); // Release lock before building router

    Router::new()
        // Shopping list
        .route("/api/list", get(get_list).post(add_item))
        .route("/api/list/:name", delete(remove_item))
        // Catalog
        .route("/api/search", get(search_products))
        .route("/api/recommend", get(get_recommendations))
        // Voice command
        .route("/api/command", post(handle_command))
        // Health check
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// When disabled every origin is allowed. An enabled layer with no usable
/// origins falls back to localhost.
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS restriction disabled - allowing all origins");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    if parsed_origins.is_empty() {
        tracing::info!("No usable CORS origins configured, defaulting to {}", FALLBACK_ORIGIN);
        return layer.allow_origin(HeaderValue::from_static(FALLBACK_ORIGIN));
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    layer.allow_origin(parsed_origins)
}

/// Add item request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddItemRequest {
    pub name: Option<String>,
    pub quantity: Option<u64>,
}

/// Catalog search query string
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub item: Option<String>,
    pub brand: Option<String>,
    /// Kept raw so a malformed value is ignored instead of rejected
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
}

impl SearchParams {
    fn into_query(self) -> SearchQuery {
        SearchQuery {
            item: self.item,
            brand: self.brand,
            max_price: self
                .max_price
                .and_then(|raw| raw.trim().parse::<f64>().ok())
                .filter(|price| price.is_finite()),
        }
    }
}

/// Voice command request
#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub transcript: String,
}

/// Get the shopping list
async fn get_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShoppingListEntry>>, ServerError> {
    Ok(Json(state.agent.list().await?))
}

/// Add an item, returning the updated list
async fn add_item(
    State(state): State<AppState>,
    payload: Result<Json<AddItemRequest>, JsonRejection>,
) -> Result<Json<Vec<ShoppingListEntry>>, ServerError> {
    let Json(request) = payload?;
    let name = request
        .name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| ServerError::InvalidRequest("Item name required".to_string()))?;

    state
        .dispatcher()
        .add_item(&name, request.quantity.unwrap_or(1))
        .await?;

    Ok(Json(state.agent.list().await?))
}

/// Remove every entry with this name, returning the updated list
///
/// A blank name matches nothing, so the list comes back unchanged.
async fn remove_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<ShoppingListEntry>>, ServerError> {
    if !name.trim().is_empty() {
        state.dispatcher().remove_item(&name).await?;
    }
    Ok(Json(state.agent.list().await?))
}

/// Filter the catalog
async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Product>>, ServerError> {
    let query = params.into_query();
    Ok(Json(state.dispatcher().search(&query, None).await?))
}

/// Suggestions for the current month
async fn get_recommendations(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ServerError> {
    Ok(Json(state.agent.recommendations().await?))
}

/// Interpret and apply a transcript
async fn handle_command(
    State(state): State<AppState>,
    payload: Result<Json<CommandRequest>, JsonRejection>,
) -> Result<Json<CommandResponse>, ServerError> {
    let Json(request) = payload?;
    Ok(Json(state.agent.handle_transcript(&request.transcript).await?))
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let config = state.get_config();
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": config.environment,
        "store": state.dispatcher().store().backend_name(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;
    use voice_cart_config::Settings;
    use voice_cart_core::FixedClock;
    use voice_cart_persistence::InMemoryShoppingStore;

    fn app(month: u32) -> Router {
        let state = AppState::with_clock(
            Settings::default(),
            Arc::new(InMemoryShoppingStore::new()),
            Arc::new(FixedClock(month)),
        );
        create_router(state)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[test]
    fn test_router_creation() {
        let _router = app(0);
    }

    #[test]
    fn test_cors_layer_variants() {
        let _ = build_cors_layer(&[], false);
        let _ = build_cors_layer(&[], true);
        let _ = build_cors_layer(&["not a header\n".to_string()], true);
        let _ = build_cors_layer(&["https://shop.example.com".to_string()], true);
    }

    #[tokio::test]
    async fn test_add_and_list() {
        let app = app(0);

        let (status, body) = send(&app, get("/api/list")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));

        let (status, body) = send(
            &app,
            post_json("/api/list", serde_json::json!({ "name": "Milk", "quantity": 2 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!([{ "name": "Milk", "quantity": 2, "category": "Dairy" }])
        );

        let (_, body) = send(
            &app,
            post_json("/api/list", serde_json::json!({ "name": "soap", "quantity": 0 })),
        )
        .await;
        assert_eq!(body[1]["quantity"], 1);
        assert_eq!(body[1]["category"], "Other");
    }

    #[tokio::test]
    async fn test_add_requires_name() {
        let app = app(0);

        for body in [serde_json::json!({}), serde_json::json!({ "name": "" })] {
            let (status, body) = send(&app, post_json("/api/list", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, serde_json::json!({ "error": "Item name required" }));
        }

        let (_, body) = send(&app, get("/api/list")).await;
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_remove_item() {
        let app = app(0);
        send(&app, post_json("/api/list", serde_json::json!({ "name": "Almond Milk" }))).await;
        send(&app, post_json("/api/list", serde_json::json!({ "name": "bread" }))).await;

        let request = Request::builder()
            .method("DELETE")
            .uri("/api/list/almond%20milk")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "bread");
    }

    #[tokio::test]
    async fn test_remove_blank_name_keeps_list() {
        let app = app(0);
        send(&app, post_json("/api/list", serde_json::json!({ "name": "bread" }))).await;

        let request = Request::builder()
            .method("DELETE")
            .uri("/api/list/%20")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "bread");
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_error() {
        let app = app(0);

        for body in [
            serde_json::json!({ "name": "milk", "quantity": "2" }),
            serde_json::json!({ "quantity": -1 }),
        ] {
            let (status, body) = send(&app, post_json("/api/list", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
        }

        let (status, body) =
            send(&app, post_json("/api/command", serde_json::json!({ "text": "add milk" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (_, body) = send(&app, get("/api/list")).await;
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_search() {
        let app = app(0);

        let (status, body) = send(&app, get("/api/search?item=tooth&brand=colgate")).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["toothpaste", "toothbrush"]);
        assert_eq!(body[0]["brand"], "Colgate");

        let (_, body) = send(&app, get("/api/search?maxPrice=3")).await;
        assert_eq!(body.as_array().unwrap().len(), 3);

        // Malformed ceiling is ignored
        let (status, body) = send(&app, get("/api/search?maxPrice=cheap")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_recommendations() {
        let app = app(6);

        let (_, body) = send(&app, get("/api/recommend")).await;
        assert_eq!(body, serde_json::json!(["mango"]));

        send(&app, post_json("/api/list", serde_json::json!({ "name": "milk" }))).await;
        let (_, body) = send(&app, get("/api/recommend")).await;
        assert_eq!(body, serde_json::json!(["bread", "mango", "almond milk"]));
    }

    #[tokio::test]
    async fn test_voice_command() {
        let app = app(0);

        let (status, body) = send(
            &app,
            post_json("/api/command", serde_json::json!({ "transcript": "add 3 dove soap" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "added");
        assert_eq!(body["list"][0]["quantity"], 3);
        assert_eq!(body["recommendations"], serde_json::json!([]));

        let (_, body) = send(
            &app,
            post_json(
                "/api/command",
                serde_json::json!({ "transcript": "find cheapest toothpaste" }),
            ),
        )
        .await;
        assert_eq!(body["command"]["sort"], "PRICE_ASC");
        assert_eq!(body["results"][0]["price"], 4.5);
        assert_eq!(body["results"][1]["price"], 5.5);

        let (status, body) = send(
            &app,
            post_json("/api/command", serde_json::json!({ "transcript": "sing a song" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "not_understood");
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(0), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["store"], "in-memory");
    }
}
