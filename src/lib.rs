//! Employee Gateway - An HTTP facade over an upstream employee API
//!
//! Forwards employee CRUD to the upstream service, reshapes its responses
//! (search, highest salary, top earners) and retries through rate limiting.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use error::ApiError;
pub use service::EmployeeService;
pub use upstream::UpstreamClient;
