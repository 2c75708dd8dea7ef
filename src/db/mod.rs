//! Persistence layer (Supabase REST).

pub mod row;
pub mod supabase;

pub use supabase::{Filter, SelectQuery, SupabaseDb};

/// Table names as constants.
pub mod tables {
    pub const STUDENTS: &str = "students";
}
