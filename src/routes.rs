use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::{
    database::{fetch_event, fetch_registered_students},
    error::AppError,
    registration::register_student_for_event,
    state::State,
};

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "studentID")]
    student_id: Option<i32>,
    #[serde(rename = "eventID")]
    event_id: Option<i32>,
}

pub async fn register_handler(
    AxumState(state): AxumState<Arc<State>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(student_id), Some(event_id)) = (payload.student_id, payload.event_id) else {
        return Err(AppError::MissingFields);
    };

    info!("Registering student {student_id} for event {event_id}");

    register_student_for_event(&state.pool, student_id, event_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Successfully registered for event",
            "studentID": student_id,
            "eventID": event_id,
        })),
    ))
}

pub async fn event_handler(
    AxumState(state): AxumState<Arc<State>>,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    info!("Fetching event {event_id}");

    let event = fetch_event(&state.pool, event_id)
        .await?
        .ok_or(AppError::EventNotFound(event_id))?;

    Ok(Json(event))
}

pub async fn registered_students_handler(
    AxumState(state): AxumState<Arc<State>>,
    Path(event_id): Path<i32>,
) -> Result<Response, AppError> {
    info!("Fetching roster for event {event_id}");

    let students = fetch_registered_students(&state.pool, event_id).await?;

    if students.is_empty() {
        return Ok(Json(json!({ "message": "No registered students found" })).into_response());
    }

    Ok(Json(students).into_response())
}
