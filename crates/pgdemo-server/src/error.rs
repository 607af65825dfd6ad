//! Turns request failures into responses. The underlying cause is logged and
//! never echoed to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::db::DbError;

pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Database(#[from] DbError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Database(e) => tracing::error!("Database request failed: {}", e),
        }
        (status, Json(ErrorResponse { error: INTERNAL_ERROR_BODY })).into_response()
    }
}
