//! Employee Service
//!
//! Implements each public operation on top of `UpstreamClient`. Aggregate
//! queries always re-fetch the whole list.

use tracing::debug;

use super::transforms::{filter_by_name, highest_salary, top_earner_names};
use super::TOP_EARNERS_LIMIT;
use crate::error::{ApiError, Result};
use crate::models::{CreateEmployeeRequest, DeleteEmployeeRequest, Employee};
use crate::upstream::UpstreamClient;

/// Employee operations backed by the upstream API.
#[derive(Clone)]
pub struct EmployeeService {
    client: UpstreamClient,
}

impl EmployeeService {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    /// All employees, as listed upstream.
    pub async fn list_all(&self) -> Result<Vec<Employee>> {
        self.client.get(self.client.collection_url()).await
    }

    /// Employees whose name contains `search`, ignoring case.
    pub async fn search_by_name(&self, search: &str) -> Result<Vec<Employee>> {
        let employees = self.list_all().await?;
        let found = filter_by_name(&employees, search);
        debug!(
            "Search '{}' matched {} of {} employees",
            search,
            found.len(),
            employees.len()
        );
        Ok(found)
    }

    /// A single employee by id.
    pub async fn get_by_id(&self, id: &str) -> Result<Employee> {
        self.client.get(&self.client.record_url(id)).await
    }

    /// The largest salary across all employees.
    ///
    /// # Errors
    /// `NotFound` when the upstream has no employees.
    pub async fn highest_salary(&self) -> Result<i32> {
        let employees = self.list_all().await?;
        highest_salary(&employees)
            .ok_or_else(|| ApiError::NotFound("no employees available".to_string()))
    }

    /// Names of the ten best-paid employees, highest first.
    pub async fn top_ten_highest_earning_names(&self) -> Result<Vec<String>> {
        let employees = self.list_all().await?;
        Ok(top_earner_names(&employees, TOP_EARNERS_LIMIT))
    }

    /// Creates an employee upstream and returns the stored record.
    pub async fn create(&self, request: &CreateEmployeeRequest) -> Result<Employee> {
        self.client
            .post(self.client.collection_url(), request)
            .await
    }

    /// Deletes the employee with `id`.
    ///
    /// The upstream deletes by name, so the id is resolved to a name first.
    /// A missing id fails with `NotFound` before any delete is sent.
    pub async fn delete_by_id(&self, id: &str) -> Result<bool> {
        let employee = self.get_by_id(id).await?;
        debug!("Resolved employee {} to name '{}'", id, employee.name);

        let request = DeleteEmployeeRequest::new(employee.name);
        self.client
            .delete(self.client.collection_url(), &request)
            .await
    }
}
