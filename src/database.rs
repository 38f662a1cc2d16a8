//! # MySQL
//!
//! Relational store for the club schema.
//!
//! ## Tables
//!
//! - `student`: one row per student, never mutated by registration
//! - `studentEmails`: addresses per student, joined for rosters
//! - `event`: capacity, denormalized `numRegistered`/`isFull`, archive flag
//! - `studentEvents`: junction, composite key `(studentID, eventID)`
//!
//! ## Implementation
//!
//! - Pooled connections, reads go straight against the pool
//! - The registration write path opens its own transaction (see
//!   [`crate::registration`]); nothing else writes `numRegistered`/`isFull`
//! - Parameterized queries only, no string-assembled SQL
use std::time::Duration;

use sqlx::{MySqlPool, mysql::MySqlPoolOptions};

use crate::models::{Event, RegisteredStudent};

pub async fn init_pool(database_url: &str, max_connections: u32) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await
        .expect("Database misconfigured!")
}

pub async fn fetch_event(pool: &MySqlPool, event_id: i32) -> Result<Option<Event>, sqlx::Error> {
    sqlx::query_as(
        "SELECT eventID AS event_id, name, date, startTime AS start_time, \
         endTime AS end_time, location, description, capacity, \
         numRegistered AS num_registered, isFull AS is_full, \
         isArchived AS is_archived, tierRequirement AS tier_requirement \
         FROM event WHERE eventID = ?",
    )
    .bind(event_id)
    .fetch_optional(pool)
    .await
}

pub async fn fetch_registered_students(
    pool: &MySqlPool,
    event_id: i32,
) -> Result<Vec<RegisteredStudent>, sqlx::Error> {
    sqlx::query_as(
        "SELECT s.firstName AS first_name, s.lastName AS last_name, se2.email \
         FROM studentEvents se \
         JOIN student s ON se.studentID = s.studentID \
         JOIN studentEmails se2 ON s.studentID = se2.studentID \
         WHERE se.eventID = ? \
         ORDER BY s.lastName, s.firstName",
    )
    .bind(event_id)
    .fetch_all(pool)
    .await
}
