use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("Invalid time range: {0}")]
    InvalidTimeRange(String),
    #[error("No authenticated principal on the request")]
    Unauthenticated,
    #[error("{0}")]
    Forbidden(String),
    #[error("Unknown venue: {0}")]
    UnknownVenue(String),
    #[error("Unknown club: {0}")]
    UnknownClub(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    SlotConflict(String),
    #[error("The reservation store is currently unavailable")]
    Unavailable(#[source] sqlx::Error),
    #[error("{0}")]
    NoRowsAffectedError(String),
    #[error("Database query error")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("Transaction error")]
    TransactionError(#[source] sqlx::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidTimeRange(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::UnknownVenue(_)
            | AppError::UnknownClub(_)
            | AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::SlotConflict(_) => StatusCode::CONFLICT,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NoRowsAffectedError(_)
            | AppError::SpecificOperationError(_)
            | AppError::TransactionError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, AppError::Unavailable(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            );
        } else {
            tracing::warn!(
                error.cause_chain = ?self,
                error.message = %self,
                "Request rejected"
            );
        }

        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));
        (status_code, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
