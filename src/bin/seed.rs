use std::fs;

use clap::Parser;
use sqlx::MySqlPool;

use clubs::{config::Config, database::init_pool};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of sample students to insert
    #[arg(default_value_t = 8)]
    students: u32,

    /// Number of sample events to insert
    #[arg(default_value_t = 4)]
    events: u32,

    #[arg(long, default_value = "migrations/schema.sql")]
    schema: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = Config::load();
    let pool = init_pool(&config.database_url, config.max_connections).await;

    apply_schema(&pool, &args.schema).await;
    println!("Schema applied");

    seed_students(&pool, args.students).await;
    println!("Inserted {} students", args.students);

    seed_events(&pool, args.events).await;
    println!("Inserted {} events", args.events);
}

async fn apply_schema(pool: &MySqlPool, path: &str) {
    let schema = fs::read_to_string(path).unwrap();

    for statement in schema.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        #[cfg(feature = "verbose")]
        println!("Executing: {statement}");

        sqlx::query(statement).execute(pool).await.unwrap();
    }
}

async fn seed_students(pool: &MySqlPool, count: u32) {
    for i in 1..=count {
        sqlx::query(
            "INSERT INTO student (firstName, lastName, gradLevel, campus) VALUES (?, ?, ?, ?)",
        )
        .bind(format!("Student{i}"))
        .bind(format!("Sample{i}"))
        .bind(if i % 2 == 0 { "undergrad" } else { "grad" })
        .bind("Boston")
        .execute(pool)
        .await
        .unwrap();

        sqlx::query("INSERT INTO studentEmails (studentID, email) VALUES (LAST_INSERT_ID(), ?)")
            .bind(format!("student{i}@example.edu"))
            .execute(pool)
            .await
            .unwrap();
    }
}

async fn seed_events(pool: &MySqlPool, count: u32) {
    for i in 1..=count {
        // Every fourth event is unlimited.
        let capacity = if i % 4 == 0 { 0 } else { (i * 5) as i32 };

        sqlx::query(
            "INSERT INTO event (name, location, description, capacity) VALUES (?, ?, ?, ?)",
        )
        .bind(format!("Event {i}"))
        .bind("Curry Student Center")
        .bind(format!("Sample event {i}"))
        .bind(capacity)
        .execute(pool)
        .await
        .unwrap();
    }
}
