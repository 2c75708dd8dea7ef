// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Student roster core: a typed gateway to the hosted `students` table and
//! the state store a presentation layer renders from.
//!
//! The presentation layer constructs a [`StudentStore`] around a configured
//! [`SupabaseDb`] gateway and drives it through its operations; every
//! mutation is proxied to the backend and the response is mirrored into the
//! local list.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod store;

pub use db::SupabaseDb;
pub use error::{AppError, Result};
pub use store::StudentStore;
