//! Request DTOs for the employee gateway
//!
//! Defines the incoming create body and the outgoing delete body. Both are
//! forwarded to the upstream API unchanged.

use serde::{Deserialize, Serialize};

/// Youngest age accepted on create.
pub const MIN_AGE: i32 = 16;
/// Oldest age accepted on create.
pub const MAX_AGE: i32 = 75;

/// Request body for creating an employee (POST /)
///
/// # Fields
/// - `name`: Full name, must not be blank
/// - `salary`: Must be positive
/// - `age`: Between 16 and 75 inclusive
/// - `title`: Job title, must not be blank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub salary: i32,
    pub age: i32,
    pub title: String,
}

impl CreateEmployeeRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("name must not be blank".to_string());
        }
        if self.salary <= 0 {
            return Some("salary must be positive".to_string());
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Some(format!("age must be between {} and {}", MIN_AGE, MAX_AGE));
        }
        if self.title.trim().is_empty() {
            return Some("title must not be blank".to_string());
        }
        None
    }
}

/// Body of the upstream delete call, which deletes by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteEmployeeRequest {
    pub name: String,
}

impl DeleteEmployeeRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
