//! Registration behavior against an in-memory registry that mirrors the
//! server's write path: same precondition checks, same counter update,
//! same `isFull` recompute. Lets the capacity and race properties run
//! without a live MySQL instance.
use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use tokio::sync::Mutex;

use clubs::{
    error::AppError,
    models::EventGate,
    registration::{admit, at_capacity},
};

#[derive(Default)]
struct Registry {
    students: HashSet<i32>,
    events: HashMap<i32, EventGate>,
    registrations: HashSet<(i32, i32)>,
}

impl Registry {
    fn with_event(student_count: i32, event: EventGate) -> Self {
        let mut registry = Self::default();

        for student_id in 1..=student_count {
            registry.students.insert(student_id);
        }

        registry.events.insert(event.event_id, event);
        registry
    }

    fn register(&mut self, student_id: i32, event_id: i32) -> Result<(), AppError> {
        if !self.students.contains(&student_id) {
            return Err(AppError::StudentNotFound(student_id));
        }

        let Some(event) = self.events.get(&event_id) else {
            return Err(AppError::EventNotFound(event_id));
        };

        admit(event, self.registrations.contains(&(student_id, event_id)))?;

        self.registrations.insert((student_id, event_id));

        let event = self.events.get_mut(&event_id).unwrap();
        event.num_registered += 1;
        event.is_full = at_capacity(event.capacity, event.num_registered);

        Ok(())
    }

    fn event(&self, event_id: i32) -> &EventGate {
        &self.events[&event_id]
    }
}

fn open_event(event_id: i32, capacity: i32, num_registered: i32) -> EventGate {
    EventGate {
        event_id,
        capacity,
        num_registered,
        is_full: at_capacity(capacity, num_registered),
        is_archived: false,
    }
}

#[test]
fn test_success_records_one_registration() {
    let mut registry = Registry::with_event(3, open_event(7, 10, 0));

    registry.register(1, 7).unwrap();

    assert_eq!(registry.registrations.len(), 1);
    assert!(registry.registrations.contains(&(1, 7)));
    assert_eq!(registry.event(7).num_registered, 1);
    assert!(!registry.event(7).is_full);
}

#[test]
fn test_duplicate_fails_and_leaves_count_unchanged() {
    let mut registry = Registry::with_event(3, open_event(7, 10, 0));

    registry.register(1, 7).unwrap();

    assert!(matches!(
        registry.register(1, 7),
        Err(AppError::AlreadyRegistered)
    ));
    assert_eq!(registry.registrations.len(), 1);
    assert_eq!(registry.event(7).num_registered, 1);
}

#[test]
fn test_last_seat_flips_full() {
    let mut registry = Registry::with_event(3, open_event(7, 5, 4));

    registry.register(1, 7).unwrap();

    assert_eq!(registry.event(7).num_registered, 5);
    assert!(registry.event(7).is_full);

    assert!(matches!(registry.register(2, 7), Err(AppError::EventFull)));
    assert_eq!(registry.event(7).num_registered, 5);
}

#[test]
fn test_unlimited_capacity_never_fills() {
    let mut registry = Registry::with_event(50, open_event(7, 0, 0));

    for student_id in 1..=50 {
        registry.register(student_id, 7).unwrap();
    }

    assert_eq!(registry.event(7).num_registered, 50);
    assert!(!registry.event(7).is_full);
}

#[test]
fn test_archived_event_rejects_all_attempts() {
    let mut event = open_event(7, 10, 0);
    event.is_archived = true;

    let mut registry = Registry::with_event(3, event);

    assert!(matches!(
        registry.register(1, 7),
        Err(AppError::EventArchived)
    ));
    assert!(registry.registrations.is_empty());
    assert_eq!(registry.event(7).num_registered, 0);
}

#[test]
fn test_unknown_ids_write_nothing() {
    let mut registry = Registry::with_event(3, open_event(7, 10, 0));

    assert!(matches!(
        registry.register(99, 7),
        Err(AppError::StudentNotFound(99))
    ));
    assert!(matches!(
        registry.register(1, 42),
        Err(AppError::EventNotFound(42))
    ));

    assert!(registry.registrations.is_empty());
    assert_eq!(registry.event(7).num_registered, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_attempts_admit_exactly_capacity() {
    let capacity = 5;
    let attempts = 16;

    let registry = Arc::new(Mutex::new(Registry::with_event(
        attempts,
        open_event(7, capacity, 0),
    )));

    let mut handles = Vec::new();

    for student_id in 1..=attempts {
        let registry = registry.clone();

        handles.push(tokio::spawn(async move {
            registry.lock().await.register(student_id, 7)
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successes += 1;
        }
    }

    let registry = registry.lock().await;
    assert_eq!(successes, capacity);
    assert_eq!(registry.event(7).num_registered, capacity);
    assert_eq!(registry.registrations.len(), capacity as usize);
    assert!(registry.event(7).is_full);
}
