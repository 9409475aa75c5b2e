//! Request and Response models for the employee gateway
//!
//! This module defines the DTOs (Data Transfer Objects) exchanged with
//! inbound callers and with the upstream employee API.

pub mod employee;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use employee::Employee;
pub use requests::{CreateEmployeeRequest, DeleteEmployeeRequest};
pub use responses::{Envelope, ErrorResponse, HealthResponse};
