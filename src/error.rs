use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("studentID and eventID are required")]
    MissingFields,

    #[error("Student ID {0} does not exist. Please use a valid student ID.")]
    StudentNotFound(i32),

    #[error("Event ID {0} does not exist. Please use a valid event ID.")]
    EventNotFound(i32),

    #[error("This event has been archived and is no longer available for registration.")]
    EventArchived,

    #[error("This event is full and cannot accept more registrations.")]
    EventFull,

    #[error("You are already registered for this event.")]
    AlreadyRegistered,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MissingFields
            | AppError::StudentNotFound(_)
            | AppError::EventArchived
            | AppError::EventFull => StatusCode::BAD_REQUEST,
            AppError::EventNotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyRegistered => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
