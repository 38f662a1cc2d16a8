use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use sqlx::FromRow;

/// The event columns the registration guard reads before admitting a student.
///
/// `capacity == 0` means unlimited. `is_full` is denormalized and must only
/// ever be written together with `num_registered`.
#[derive(Debug, Clone, FromRow)]
pub struct EventGate {
    pub event_id: i32,
    pub capacity: i32,
    pub num_registered: i32,
    pub is_full: bool,
    pub is_archived: bool,
}

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "eventID")]
    pub event_id: i32,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub capacity: i32,
    pub num_registered: i32,
    pub is_full: bool,
    pub is_archived: bool,
    pub tier_requirement: Option<i32>,
}

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
