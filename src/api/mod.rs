//! API Module
//!
//! HTTP handlers and routing for the employee gateway REST API.
//!
//! # Endpoints
//! - `GET /` - List all employees
//! - `GET /search/:search_string` - Employees whose name contains a string
//! - `GET /:id` - A single employee
//! - `GET /highestSalary` - The highest salary
//! - `GET /topTenHighestEarningEmployeeNames` - Names of the ten best paid
//! - `POST /` - Create an employee
//! - `DELETE /:id` - Delete an employee
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
