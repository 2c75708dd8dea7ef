// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Student store: in-memory list state backed by the remote `students`
//! table.
//!
//! The store owns the local copy of the list and proxies every mutation
//! through the gateway, mirroring the backend's response into local state.
//! Read failures land in the `error` field only; `add_student` also
//! re-signals its failure so a creation dialog can stay open and show the
//! message inline.

use crate::db::row::{NewStudentRow, StudentChangesRow, StudentRow};
use crate::db::{tables, Filter, SelectQuery, SupabaseDb};
use crate::error::{AppError, Result};
use crate::models::student::DEFAULT_COHORT;
use crate::models::{NewStudent, Student, StudentUpdate};

/// Grade filter applied until a consumer selects another one.
pub const DEFAULT_GRADE: &str = "CBSE 9";

/// State container for the student list.
///
/// Constructed explicitly with its gateway and handed to the presentation
/// layer. Operations take `&mut self`, so the store is the sole writer of
/// its state and no two operations can overlap.
pub struct StudentStore {
    db: SupabaseDb,
    students: Vec<Student>,
    is_loading: bool,
    error: Option<String>,
    selected_cohort: String,
    selected_grade: String,
}

impl StudentStore {
    /// Create an empty store with the default filter selection.
    pub fn new(db: SupabaseDb) -> Self {
        Self {
            db,
            students: Vec::new(),
            is_loading: false,
            error: None,
            selected_cohort: DEFAULT_COHORT.to_string(),
            selected_grade: DEFAULT_GRADE.to_string(),
        }
    }

    // ─── Read-only state ─────────────────────────────────────────

    /// Current list, in the order returned by the last fetch.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// True while a remote operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message of the last failed operation, cleared by the next success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_cohort(&self) -> &str {
        &self.selected_cohort
    }

    pub fn selected_grade(&self) -> &str {
        &self.selected_grade
    }

    // ─── Operations ──────────────────────────────────────────────

    /// Replace the list with the rows matching the current filter
    /// selection, sorted by name.
    ///
    /// Failures are absorbed into `error`; the previous list is kept.
    pub async fn fetch_students(&mut self) {
        self.is_loading = true;

        let query = SelectQuery::new()
            .eq("cohort", &self.selected_cohort)
            .eq("grade", &self.selected_grade)
            .order_by("name");

        match self.db.select::<StudentRow>(tables::STUDENTS, &query).await {
            Ok(rows) => {
                self.students = rows.into_iter().map(Student::from).collect();
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to fetch students");
                self.error = Some(err.message().to_string());
            }
        }

        self.is_loading = false;
    }

    /// Validate and insert a draft, appending the stored row to the list.
    ///
    /// An empty or whitespace-only name fails before any backend round
    /// trip. Backend failures are recorded in `error` and also returned,
    /// so the caller can keep its dialog open.
    pub async fn add_student(&mut self, draft: NewStudent) -> Result<()> {
        if draft.name.trim().is_empty() {
            return Err(AppError::Validation(
                "Student name is required".to_string(),
            ));
        }

        self.is_loading = true;
        let result = self
            .db
            .insert::<StudentRow, _>(tables::STUDENTS, &NewStudentRow::from(&draft))
            .await;
        self.is_loading = false;

        match result {
            Ok(row) => {
                // Append as returned; the list is not re-sorted or re-fetched.
                self.students.push(row.into());
                self.error = None;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to add student");
                self.error = Some(err.message().to_string());
                Err(err)
            }
        }
    }

    /// Send a partial update for `id` and merge the returned row into the
    /// matching local record, keeping its position.
    ///
    /// A missing row is reported by the backend and absorbed into `error`.
    pub async fn update_student(&mut self, id: &str, changes: StudentUpdate) {
        self.is_loading = true;
        let result = self
            .db
            .update::<StudentRow, _>(
                tables::STUDENTS,
                &[Filter::eq("id", id)],
                &StudentChangesRow::from(&changes),
            )
            .await;
        self.is_loading = false;

        match result {
            Ok(row) => {
                if let Some(student) = self.students.iter_mut().find(|s| s.id == id) {
                    *student = row.into();
                }
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "Failed to update student");
                self.error = Some(err.message().to_string());
            }
        }
    }

    /// Delete the remote row matching `id` and drop the local record.
    ///
    /// An id that is already gone is not an error at this level; the
    /// backend decides whether deleting a missing row fails.
    pub async fn delete_student(&mut self, id: &str) {
        self.is_loading = true;
        let result = self
            .db
            .delete(tables::STUDENTS, &[Filter::eq("id", id)])
            .await;
        self.is_loading = false;

        match result {
            Ok(()) => {
                self.students.retain(|s| s.id != id);
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "Failed to delete student");
                self.error = Some(err.message().to_string());
            }
        }
    }

    /// Select a cohort and re-synchronize the list from the backend.
    ///
    /// There is no local filtering; changing a filter always refetches.
    pub async fn set_selected_cohort(&mut self, cohort: impl Into<String>) {
        self.selected_cohort = cohort.into();
        self.fetch_students().await;
    }

    /// Select a grade and re-synchronize the list from the backend.
    pub async fn set_selected_grade(&mut self, grade: impl Into<String>) {
        self.selected_grade = grade.into();
        self.fetch_students().await;
    }
}
