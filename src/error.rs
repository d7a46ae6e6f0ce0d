//! Error types
//!
//! - `LoadError`: the aggregate content load failed as a whole
//! - `DetailError`: a detail document could not be fetched
//! - `AppError`: HTTP-facing errors, rendered as JSON bodies

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Reading or parsing one of the content collections failed
#[derive(Debug, Error)]
#[error("failed to load data")]
pub struct LoadError {
    #[source]
    pub cause: LoadCause,
}

/// What went wrong underneath a [`LoadError`]
#[derive(Debug, Error)]
pub enum LoadCause {
    #[error("cannot read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<LoadCause> for LoadError {
    fn from(cause: LoadCause) -> Self {
        Self { cause }
    }
}

/// Fetching a project detail document failed
#[derive(Debug, Error)]
pub enum DetailError {
    #[error("project detail not found: {0}")]
    NotFound(String),

    #[error("failed to fetch project detail: {0}")]
    Transport(String),
}

impl From<std::io::Error> for DetailError {
    fn from(e: std::io::Error) -> Self {
        DetailError::Transport(e.to_string())
    }
}

impl From<reqwest::Error> for DetailError {
    fn from(e: reqwest::Error) -> Self {
        DetailError::Transport(e.to_string())
    }
}

/// Errors returned by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Detail(#[from] DetailError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<tera::Error> for AppError {
    fn from(e: tera::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Internal(format!("{:#}", e))
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::Load(e) => {
                tracing::error!("Data load error: {}", e.cause);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load data")
            }
            AppError::Detail(DetailError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Project not found")
            }
            AppError::Detail(DetailError::Transport(msg)) => {
                tracing::error!("Detail fetch error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to load project details",
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_is_generic() {
        let err = LoadError::from(LoadCause::Read {
            path: PathBuf::from("data/skills.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });
        assert_eq!(err.to_string(), "failed to load data");
        assert!(err.cause.to_string().contains("skills.json"));
    }

    #[test]
    fn test_status_codes() {
        let not_found = AppError::Detail(DetailError::NotFound("x".into())).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let transport =
            AppError::Detail(DetailError::Transport("boom".into())).into_response();
        assert_eq!(transport.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let internal = AppError::Internal("boom".into()).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
