//! Service Module
//!
//! The public employee operations, expressed as upstream calls followed by
//! in-memory transforms. Nothing here keeps state between calls.

mod employees;
mod transforms;


// Re-export public types
pub use employees::EmployeeService;
pub use transforms::{filter_by_name, highest_salary, top_earner_names};

// == Public Constants ==
/// How many names the top earners query returns
pub const TOP_EARNERS_LIMIT: usize = 10;
