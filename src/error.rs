// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type shared by the gateway and the store.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input rejected locally, before any backend round trip.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Failure reported by the persistence backend, message verbatim.
    #[error("Backend error: {0}")]
    Backend(String),
}

impl AppError {
    /// The bare message, without the error-kind prefix.
    ///
    /// The store mirrors this into its `error` field so a UI can show the
    /// backend's message unmodified.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(msg) | AppError::Backend(msg) => msg,
        }
    }

    /// True for errors detected locally (these never reach the backend).
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

/// Result type alias for gateway and store operations.
pub type Result<T> = std::result::Result<T, AppError>;
