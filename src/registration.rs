//! # Registration Guard
//!
//! The one write path that touches `studentEvents` and the event's
//! denormalized counters.
//!
//! ## Atomicity
//!
//! The existence checks, capacity check, duplicate check, junction insert,
//! and counter update run inside a single transaction. The event row is
//! locked with `FOR UPDATE`, so concurrent registrations against the same
//! event serialize and an event with capacity k admits exactly k students
//! no matter how many callers race. Any early return drops the transaction
//! and rolls back, leaving zero partial writes.
//!
//! The duplicate check is a locking read so the loser of a same-pair race
//! sees the winner's committed row instead of its own stale snapshot, and
//! a unique-key violation on the insert still maps to the conflict error
//! in case both slip past the check.
use sqlx::MySqlPool;

use crate::{error::AppError, models::EventGate};

/// Whether a finite-capacity event has reached its cap. Zero capacity means
/// unlimited and never counts as full.
pub fn at_capacity(capacity: i32, num_registered: i32) -> bool {
    capacity > 0 && num_registered >= capacity
}

/// Precondition checks for one registration attempt, in reporting order:
/// archived beats full beats duplicate.
pub fn admit(event: &EventGate, already_registered: bool) -> Result<(), AppError> {
    if event.is_archived {
        return Err(AppError::EventArchived);
    }

    if event.is_full || at_capacity(event.capacity, event.num_registered) {
        return Err(AppError::EventFull);
    }

    if already_registered {
        return Err(AppError::AlreadyRegistered);
    }

    Ok(())
}

pub async fn register_student_for_event(
    pool: &MySqlPool,
    student_id: i32,
    event_id: i32,
) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    let student: Option<(i32,)> = sqlx::query_as("SELECT studentID FROM student WHERE studentID = ?")
        .bind(student_id)
        .fetch_optional(&mut *tx)
        .await?;

    if student.is_none() {
        return Err(AppError::StudentNotFound(student_id));
    }

    // Row lock: conflicting registrations for the same event queue up here.
    let event: Option<EventGate> = sqlx::query_as(
        "SELECT eventID AS event_id, capacity, numRegistered AS num_registered, \
         isFull AS is_full, isArchived AS is_archived \
         FROM event WHERE eventID = ? FOR UPDATE",
    )
    .bind(event_id)
    .fetch_optional(&mut *tx)
    .await?;

    let event = event.ok_or(AppError::EventNotFound(event_id))?;

    // Locking read: a plain SELECT here would read the transaction
    // snapshot and miss a concurrent registration of the same pair.
    let registered: Option<(i32,)> = sqlx::query_as(
        "SELECT studentID FROM studentEvents WHERE studentID = ? AND eventID = ? FOR UPDATE",
    )
    .bind(student_id)
    .bind(event_id)
    .fetch_optional(&mut *tx)
    .await?;

    admit(&event, registered.is_some())?;

    sqlx::query("INSERT INTO studentEvents (studentID, eventID) VALUES (?, ?)")
        .bind(student_id)
        .bind(event_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::AlreadyRegistered,
            e => AppError::Database(e),
        })?;

    let num_registered = event.num_registered + 1;

    sqlx::query("UPDATE event SET numRegistered = ?, isFull = ? WHERE eventID = ?")
        .bind(num_registered)
        .bind(at_capacity(event.capacity, num_registered))
        .bind(event_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(())
}
