// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod student;

pub use student::{NewStudent, Status, Student, StudentUpdate, DEFAULT_COHORT, DEFAULT_COURSE};
