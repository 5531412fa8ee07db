//! HTTP boundary for the planner.
//!
//! The routes are thin: deserialize the profile, run the pipeline against
//! the shared read-only catalog, serialize the result. All state is
//! request-local, so the handlers need no locking.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::Profile;
use crate::planner::generate_plan;

/// Shared server state: the catalog loaded at startup plus the start time
/// reported by the health endpoint.
pub struct AppState {
    pub catalog: FoodCatalog,
    pub started: Instant,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/generate", post(handle_generate))
        .route("/health", get(handle_health))
        .route("/test", get(handle_test))
        .with_state(state)
}

async fn handle_generate(
    State(state): State<Arc<AppState>>,
    Json(profile): Json<Profile>,
) -> Response {
    info!(
        age = profile.age,
        gender = ?profile.gender,
        goal = ?profile.goal,
        "generating plan"
    );

    match generate_plan(&state.catalog, &profile) {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(e) if e.is_client_error() => {
            let body = json!({
                "status": "error",
                "message": "Invalid request",
                "error": e.to_string(),
            });
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
        Err(e) => {
            error!("plan generation failed: {e}");
            let body = json!({
                "status": "error",
                "message": "Internal server error",
                "error": e.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

async fn handle_health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "generate": "POST /api/generate",
            "health": "GET /health",
        },
        "food_items": state.catalog.len(),
        "uptime": state.started.elapsed().as_secs(),
    }))
}

async fn handle_test() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Use POST /api/generate with this sample data",
        "sample_data": {
            "age": 28,
            "gender": "female",
            "weight": 68,
            "height": 170,
            "activity": "moderately_active",
            "goal": "maintenance",
            "wake": "07:00",
            "sleep": "23:00",
        },
    }))
}

/// Bind and serve until shutdown.
pub async fn serve(catalog: FoodCatalog, port: u16) -> Result<()> {
    let state = Arc::new(AppState {
        catalog,
        started: Instant::now(),
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("listening on http://{addr}");
    info!("API: POST http://{addr}/api/generate");
    info!("health: GET http://{addr}/health");

    axum::serve(listener, router(state)).await?;
    Ok(())
}
