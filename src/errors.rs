use axum::http::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the data file backing the habit history.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read habit history from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("habit history at {} is corrupt: {source}", path.display())]
    CorruptHistory {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode habit history: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to persist habit history to {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
