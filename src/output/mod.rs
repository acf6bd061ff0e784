//! Output formatting for plan reports.
//!
//! This module handles formatting and outputting plan data:
//! - [`report`] - Plan rows, CSV / JSON / binary views
//! - [`terminal`] - Field and binary string formatting

mod report;
mod terminal;

pub use report::{binary_lines, print_binary, PlanReport, PlanRow};
pub use terminal::{binary_with_boundary, dotted_label, format_field};
