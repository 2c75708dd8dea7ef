// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Roster demo binary.
//!
//! Stands in for the presentation layer: loads the gateway configuration,
//! performs the fetch a table view issues on mount and prints the roster.

use anyhow::Context;
use student_roster::{config::Config, db::SupabaseDb, store::StudentStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(url = %config.supabase_url, "Starting roster client");

    let db = SupabaseDb::new(&config);
    let mut store = StudentStore::new(db);

    // The initial fetch a UI issues on mount
    store.fetch_students().await;
    if let Some(error) = store.error() {
        anyhow::bail!("Fetch failed: {}", error);
    }

    tracing::info!(
        cohort = store.selected_cohort(),
        grade = store.selected_grade(),
        count = store.students().len(),
        "Roster fetched"
    );

    for student in store.students() {
        println!(
            "{}\t{}\t{}\t{}",
            student.name,
            student.cohort,
            student.status.as_str(),
            student.courses.join(", ")
        );
    }

    Ok(())
}

/// Initialize logging, filterable via `RUST_LOG`.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("student_roster=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
