//! Query parameter types for API handlers.

use actiontrack_core::action_item::{parse_priority_filter, parse_status_filter};
use actiontrack_core::error::CoreError;
use actiontrack_db::models::action_item::ActionItemFilter;
use serde::Deserialize;

/// `?status=&priority=` on the action item listing.
///
/// Values are kept as raw strings so `all` and unknown values can be told
/// apart: `all` (or absent) disables the filter, anything outside the
/// domain is a validation error.
#[derive(Debug, Default, Deserialize)]
pub struct ActionItemListParams {
    pub status: Option<String>,
    pub priority: Option<String>,
}

impl ActionItemListParams {
    /// Convert into a typed repository filter.
    pub fn to_filter(&self) -> Result<ActionItemFilter, CoreError> {
        Ok(ActionItemFilter {
            status: parse_status_filter(self.status.as_deref())?,
            priority: parse_priority_filter(self.priority.as_deref())?,
        })
    }
}
