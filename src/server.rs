//! JSON API for the placement dashboard. Mirrors the frontend contract:
//! `/api/placements` returns `{ok, count, data}` with notices newest first.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::db;

const DEFAULT_DAYS: i64 = 30;
// Ten years; chrono rejects durations far outside this anyway.
const MAX_DAYS: i64 = 3650;

#[derive(Clone)]
struct AppState {
    db_path: Arc<str>,
}

fn app(db_path: Arc<str>) -> Router {
    let state = AppState { db_path };
    Router::new()
        .route("/", get(|| async { "Placement API OK" }))
        .route("/api/ping", get(ping))
        .route("/api/placements", get(placements))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(db_path: String, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("placement API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(db_path.into())).await?;
    Ok(())
}

async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "ts": chrono::Utc::now().timestamp_millis() }))
}

#[derive(Deserialize)]
struct PlacementsQuery {
    days: Option<i64>,
}

async fn placements(
    State(state): State<AppState>,
    Query(query): Query<PlacementsQuery>,
) -> impl IntoResponse {
    let days = query.days.unwrap_or(DEFAULT_DAYS).clamp(1, MAX_DAYS);
    let db_path = Arc::clone(&state.db_path);

    // rusqlite is blocking; keep it off the async worker.
    let result = tokio::task::spawn_blocking(move || {
        let conn = db::connect_at(&db_path)?;
        db::fetch_notices_since(&conn, days)
    })
    .await
    .map_err(anyhow::Error::from)
    .and_then(|inner| inner);

    match result {
        Ok(rows) => (
            StatusCode::OK,
            Json(json!({ "ok": true, "count": rows.len(), "data": rows })),
        ),
        Err(e) => {
            error!("placements query failed: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "ok": false, "error": "Failed to fetch notices" })),
            )
        }
    }
}

// ── Tests ──
