//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint. Handlers only extract
//! inputs, validate, and delegate to `EmployeeService`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{CreateEmployeeRequest, Employee, HealthResponse};
use crate::service::EmployeeService;
use crate::upstream::{ReqwestTransport, RetryPolicy, UpstreamClient};

/// Application state shared across all handlers.
///
/// The service is stateless, so a plain `Arc` is enough.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EmployeeService>,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: EmployeeService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds a reqwest transport with the configured per-attempt timeout
    /// and a retry policy with the configured attempts and delay.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn from_config(config: &Config) -> std::result::Result<Self, reqwest::Error> {
        let transport = ReqwestTransport::new(config.request_timeout())?;
        let policy = RetryPolicy::new(config.max_attempts, config.retry_delay());
        let client = UpstreamClient::new(
            Arc::new(transport),
            config.upstream_base_url.clone(),
            policy,
        );
        Ok(Self::new(EmployeeService::new(client)))
    }
}

/// Handler for GET /
pub async fn list_employees_handler(State(state): State<AppState>) -> Result<Json<Vec<Employee>>> {
    let employees = state.service.list_all().await?;
    Ok(Json(employees))
}

/// Handler for GET /search/:search_string
pub async fn search_employees_handler(
    State(state): State<AppState>,
    Path(search_string): Path<String>,
) -> Result<Json<Vec<Employee>>> {
    let employees = state.service.search_by_name(&search_string).await?;
    Ok(Json(employees))
}

/// Handler for GET /:id
pub async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>> {
    let employee = state.service.get_by_id(&id).await?;
    Ok(Json(employee))
}

/// Handler for GET /highestSalary
pub async fn highest_salary_handler(State(state): State<AppState>) -> Result<Json<i32>> {
    let salary = state.service.highest_salary().await?;
    Ok(Json(salary))
}

/// Handler for GET /topTenHighestEarningEmployeeNames
pub async fn top_ten_names_handler(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let names = state.service.top_ten_highest_earning_names().await?;
    Ok(Json(names))
}

/// Handler for POST /
///
/// Rejects undecodable or invalid bodies with 400 before anything is sent
/// upstream.
pub async fn create_employee_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<Json<Employee>> {
    let Json(req) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::Validation(error_msg));
    }

    let employee = state.service.create(&req).await?;
    Ok(Json(employee))
}

/// Handler for DELETE /:id
///
/// Responds with the upstream's verdict as plain text, `true` or `false`.
pub async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String> {
    let deleted = state.service.delete_by_id(&id).await?;
    Ok(deleted.to_string())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
