//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DbPool` as the first argument. Every method issues a single
//! statement except where a failure needs to be classified afterwards.

pub mod action_item_repo;
pub mod employee_repo;
pub mod manager_repo;
pub mod stats_repo;

pub use action_item_repo::ActionItemRepo;
pub use employee_repo::EmployeeRepo;
pub use manager_repo::ManagerRepo;
pub use stats_repo::StatsRepo;

/// SQLite expression producing an RFC 3339 UTC timestamp with milliseconds.
///
/// Matches the column defaults in the migrations so every stored timestamp
/// has the same textual shape.
pub(crate) const NOW_SQL: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";
