//! Student entity model.

use serde::{Deserialize, Serialize};

/// Cohort a draft is placed in unless the caller picks another one.
pub const DEFAULT_COHORT: &str = "AY 2024-25";
/// Course a draft starts out with.
pub const DEFAULT_COURSE: &str = "CBSE 9 Science";

/// Enrollment status of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
}

impl Status {
    /// Lowercase label, matching the stored representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
        }
    }
}

/// A persisted student record.
///
/// Serialized with camelCase field names for UI consumers; the storage row
/// shape lives in `db::row`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Backend-assigned identifier, present only once the row is stored
    pub id: String,
    /// Display name (non-empty)
    pub name: String,
    /// Cohort label, e.g. "AY 2024-25"
    pub cohort: String,
    /// Enrolled course labels
    pub courses: Vec<String>,
    /// When the student joined (ISO 8601)
    pub date_joined: String,
    /// Last login timestamp (ISO 8601)
    pub last_login: String,
    pub status: Status,
    /// Profile picture URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A student record under construction: every [`Student`] field except the
/// backend-assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: String,
    pub cohort: String,
    pub courses: Vec<String>,
    pub date_joined: String,
    pub last_login: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl NewStudent {
    /// A draft with the creation-dialog defaults: current timestamps for
    /// both date fields, the default cohort and course, status `active`.
    pub fn draft(name: impl Into<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            name: name.into(),
            cohort: DEFAULT_COHORT.to_string(),
            courses: vec![DEFAULT_COURSE.to_string()],
            date_joined: now.clone(),
            last_login: now,
            status: Status::Active,
            avatar_url: None,
        }
    }
}

/// A partial set of student fields for an update.
///
/// `None` fields are omitted from the payload and left untouched by the
/// backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentUpdate {
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
