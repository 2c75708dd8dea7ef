// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! State layer consumed by the presentation components.

pub mod students;

pub use students::{StudentStore, DEFAULT_GRADE};
