// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wire-format rows for the `students` table.
//!
//! The stored column names differ from the entity model in exactly two
//! cases: `dateJoined` is stored as `date_joined` and `lastLogin` as
//! `last_login`. The table also carries a `grade` column that is not part
//! of the entity model; inserts pin it to a fixed value.

use crate::models::{NewStudent, Status, Student, StudentUpdate};
use serde::{Deserialize, Serialize};

/// Grade value attached to every inserted row.
pub(crate) const INSERT_GRADE: &str = "CBSE-9";

/// A `students` row as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRow {
    pub id: String,
    pub name: String,
    pub cohort: String,
    pub courses: Vec<String>,
    pub date_joined: String,
    pub last_login: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Storage-only column, dropped when mapping back to the entity model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student {
            id: row.id,
            name: row.name,
            cohort: row.cohort,
            courses: row.courses,
            date_joined: row.date_joined,
            last_login: row.last_login,
            status: row.status,
            avatar_url: row.avatar_url,
        }
    }
}

/// Insert payload for a draft, in storage column names.
#[derive(Debug, Clone, Serialize)]
pub struct NewStudentRow {
    pub name: String,
    pub cohort: String,
    pub courses: Vec<String>,
    pub status: Status,
    pub date_joined: String,
    pub last_login: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub grade: &'static str,
}

impl From<&NewStudent> for NewStudentRow {
    fn from(draft: &NewStudent) -> Self {
        Self {
            name: draft.name.clone(),
            cohort: draft.cohort.clone(),
            courses: draft.courses.clone(),
            status: draft.status,
            date_joined: draft.date_joined.clone(),
            last_login: draft.last_login.clone(),
            avatar_url: draft.avatar_url.clone(),
            grade: INSERT_GRADE,
        }
    }
}

/// Partial-update payload in storage column names; `None` fields are
/// omitted so the backend leaves them untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StudentChangesRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cohort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl From<&StudentUpdate> for StudentChangesRow {
    fn from(changes: &StudentUpdate) -> Self {
        Self {
            name: changes.name.clone(),
            cohort: changes.cohort.clone(),
            courses: changes.courses.clone(),
            status: changes.status,
            last_login: changes.last_login.clone(),
            avatar_url: changes.avatar_url.clone(),
        }
    }
}
