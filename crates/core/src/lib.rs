//! Pure domain logic for the action item tracker.
//!
//! No I/O lives here: identifier and timestamp aliases, the shared
//! [`error::CoreError`], and the closed status/priority enumerations with
//! their ordering and filter rules.

pub mod action_item;
pub mod error;
pub mod types;
