//! Database version lookup.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::db;
use crate::error::AppError;
use crate::ServerState;

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    #[serde(rename = "PostgreSQL Version")]
    pub version: String,
}

/// GET /data - Report the version string of the configured PostgreSQL server.
pub async fn get(State(state): State<Arc<ServerState>>) -> Result<Json<VersionResponse>, AppError> {
    let version = db::fetch_version(&state.db).await?;

    Ok(Json(VersionResponse { version }))
}
