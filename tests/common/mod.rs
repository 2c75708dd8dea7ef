// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory stand-in for the Supabase REST endpoint.
//!
//! Serves just enough of the `students` table contract for the store and
//! gateway tests: equality filters, name ordering, single-object writes,
//! request recording and forced failures.

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use student_roster::config::Config;
use student_roster::db::SupabaseDb;

/// Shared state behind the mock endpoint.
#[derive(Default)]
pub struct BackendState {
    /// Rows in storage shape (snake_case columns).
    pub rows: Mutex<Vec<Value>>,
    /// Total requests received, across all methods.
    pub hits: AtomicUsize,
    /// Query parameters of every select received.
    pub selects: Mutex<Vec<HashMap<String, String>>>,
    /// Headers of the most recent request (lowercased names).
    pub last_headers: Mutex<HashMap<String, String>>,
    /// When set, every request fails with this message.
    pub fail_with: Mutex<Option<String>>,
    next_id: AtomicUsize,
}

/// A spawned mock backend and its shared state.
pub struct MockBackend {
    pub base_url: String,
    pub state: Arc<BackendState>,
}

impl MockBackend {
    /// Spawn the mock server on an ephemeral port.
    pub async fn spawn() -> Self {
        let state = Arc::new(BackendState::default());
        let app = Router::new()
            .route(
                "/rest/v1/students",
                get(select_students)
                    .post(insert_student)
                    .patch(update_students)
                    .delete(delete_students),
            )
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock backend");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Config pointing the gateway at this mock.
    #[allow(dead_code)]
    pub fn config(&self) -> Config {
        Config {
            supabase_url: self.base_url.clone(),
            supabase_key: "test-anon-key".to_string(),
        }
    }

    /// Gateway client wired to this mock.
    #[allow(dead_code)]
    pub fn db(&self) -> SupabaseDb {
        SupabaseDb::new(&self.config())
    }

    /// Seed a storage row. Returns the generated id.
    #[allow(dead_code)]
    pub fn seed_student(&self, name: &str, cohort: &str, grade: &str) -> String {
        let id = self.generate_id();
        self.state.rows.lock().unwrap().push(json!({
            "id": id,
            "name": name,
            "cohort": cohort,
            "courses": ["CBSE 9 Science"],
            "date_joined": "2024-04-01T00:00:00+00:00",
            "last_login": "2024-04-01T00:00:00+00:00",
            "status": "active",
            "grade": grade,
        }));
        id
    }

    /// Make every following request fail with this message.
    #[allow(dead_code)]
    pub fn fail_with(&self, message: &str) {
        *self.state.fail_with.lock().unwrap() = Some(message.to_string());
    }

    #[allow(dead_code)]
    pub fn clear_failure(&self) {
        *self.state.fail_with.lock().unwrap() = None;
    }

    /// Total requests received so far.
    #[allow(dead_code)]
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::Relaxed)
    }

    fn generate_id(&self) -> String {
        format!(
            "stu-{}",
            self.state.next_id.fetch_add(1, Ordering::Relaxed) + 1
        )
    }
}

/// Count the request, capture its headers, apply a forced failure.
fn record(state: &BackendState, headers: &HeaderMap) -> Option<Response> {
    state.hits.fetch_add(1, Ordering::Relaxed);

    let mut stored = state.last_headers.lock().unwrap();
    stored.clear();
    for (name, value) in headers {
        if let Ok(v) = value.to_str() {
            stored.insert(name.as_str().to_string(), v.to_string());
        }
    }
    drop(stored);

    state.fail_with.lock().unwrap().as_ref().map(|message| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": message })),
        )
            .into_response()
    })
}

/// Apply the `eq.` filters in the query string to a row.
fn matches_filters(row: &Value, params: &HashMap<String, String>) -> bool {
    params.iter().all(|(key, value)| {
        if key == "select" || key == "order" {
            return true;
        }
        let Some(expected) = value.strip_prefix("eq.") else {
            return true;
        };
        row.get(key).and_then(Value::as_str) == Some(expected)
    })
}

async fn select_students(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Some(failure) = record(&state, &headers) {
        return failure;
    }
    state.selects.lock().unwrap().push(params.clone());

    let mut rows: Vec<Value> = state
        .rows
        .lock()
        .unwrap()
        .iter()
        .filter(|row| matches_filters(row, &params))
        .cloned()
        .collect();

    if params.get("order").is_some_and(|order| order.starts_with("name")) {
        rows.sort_by_key(|row| {
            row.get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        });
    }

    Json(rows).into_response()
}

async fn insert_student(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Json(mut row): Json<Value>,
) -> Response {
    if let Some(failure) = record(&state, &headers) {
        return failure;
    }

    let id = format!(
        "stu-{}",
        state.next_id.fetch_add(1, Ordering::Relaxed) + 1
    );
    row["id"] = json!(id);
    state.rows.lock().unwrap().push(row.clone());

    (StatusCode::CREATED, Json(row)).into_response()
}

async fn update_students(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    Json(changes): Json<Value>,
) -> Response {
    if let Some(failure) = record(&state, &headers) {
        return failure;
    }

    let mut rows = state.rows.lock().unwrap();
    let mut updated = None;
    for row in rows.iter_mut().filter(|row| matches_filters(row, &params)) {
        if let (Some(target), Some(source)) = (row.as_object_mut(), changes.as_object()) {
            for (key, value) in source {
                target.insert(key.clone(), value.clone());
            }
        }
        updated = Some(row.clone());
    }

    match updated {
        Some(row) => Json(row).into_response(),
        // The single-object contract rejects a response with no matching row
        None => (
            StatusCode::NOT_ACCEPTABLE,
            Json(json!({
                "message": "JSON object requested, multiple (or no) rows returned"
            })),
        )
            .into_response(),
    }
}

async fn delete_students(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Some(failure) = record(&state, &headers) {
        return failure;
    }

    state
        .rows
        .lock()
        .unwrap()
        .retain(|row| !matches_filters(row, &params));

    StatusCode::NO_CONTENT.into_response()
}
