//! Column role detection for question spreadsheets.
//!
//! [`detect_roles`] turns a list of column headers into a
//! [`RoleMapping`](qti_model::RoleMapping) by case-insensitive substring
//! matching. It never fails; roles without a matching column stay `None`.

pub mod detector;
pub mod patterns;

pub use detector::{detect_roles, is_option_column, unclaimed_columns};
