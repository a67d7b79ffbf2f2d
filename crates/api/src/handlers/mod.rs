pub mod action_items;
pub mod dashboard;
pub mod employees;
pub mod managers;
