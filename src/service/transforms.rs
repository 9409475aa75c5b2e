//! Employee list transforms
//!
//! Pure functions over an already-fetched employee list.

use crate::models::Employee;

/// Employees whose name contains `needle`, ignoring case, in input order.
pub fn filter_by_name(employees: &[Employee], needle: &str) -> Vec<Employee> {
    let needle = needle.to_lowercase();
    employees
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// The largest salary, or `None` for an empty list.
pub fn highest_salary(employees: &[Employee]) -> Option<i32> {
    employees.iter().map(|e| e.salary).max()
}

/// Names of the `limit` best-paid employees, highest first.
///
/// Employees with equal salaries keep their input order.
pub fn top_earner_names(employees: &[Employee], limit: usize) -> Vec<String> {
    let mut ranked: Vec<&Employee> = employees.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.salary.cmp(&a.salary));
    ranked
        .into_iter()
        .take(limit)
        .map(|e| e.name.clone())
        .collect()
}
