//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the table row
//! - Joined/aggregated row variants used by listings
//! - `Deserialize` + `Validate` DTOs for inserts and updates

pub mod action_item;
pub mod employee;
pub mod manager;
pub mod stats;
