//! Employee record
//!
//! The upstream API names every field with an `employee_` prefix except the
//! id; the same wire names are used on the inbound surface.

use serde::{Deserialize, Serialize};

/// A single employee as returned by the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Opaque identifier assigned upstream
    pub id: String,
    #[serde(rename = "employee_name")]
    pub name: String,
    #[serde(rename = "employee_salary")]
    pub salary: i32,
    #[serde(rename = "employee_age")]
    pub age: i32,
    #[serde(rename = "employee_title")]
    pub title: String,
    /// Generated upstream, so absent from anything written by this gateway
    #[serde(
        rename = "employee_email",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
}

impl Employee {
    /// Creates an employee without an email address.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        salary: i32,
        age: i32,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            salary,
            age,
            title: title.into(),
            email: None,
        }
    }

    /// Sets the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_deserialize_wire_names() {
        let json = r#"{
            "id": "4a3a170b-22cd-4ac2-aad1-9bb5b34a1507",
            "employee_name": "Tiger Nixon",
            "employee_salary": 320800,
            "employee_age": 61,
            "employee_title": "Vice Chair Executive Principal of Chief Operations Implementation Specialist",
            "employee_email": "tnixon@company.com"
        }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "4a3a170b-22cd-4ac2-aad1-9bb5b34a1507");
        assert_eq!(employee.name, "Tiger Nixon");
        assert_eq!(employee.salary, 320800);
        assert_eq!(employee.age, 61);
        assert_eq!(employee.email.as_deref(), Some("tnixon@company.com"));
    }

    #[test]
    fn test_employee_missing_email() {
        let json = r#"{"id":"1","employee_name":"A","employee_salary":1,"employee_age":20,"employee_title":"T"}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.email.is_none());

        let out = serde_json::to_value(&employee).unwrap();
        assert!(out.get("employee_email").is_none());
        assert_eq!(out["employee_name"], "A");
    }

    #[test]
    fn test_employee_serialize_uses_wire_names() {
        let employee = Employee::new("id-1", "Joe Shmo", 1_000_000, 60, "Dish washer")
            .with_email("joe.shmo@email.com");
        let out = serde_json::to_value(&employee).unwrap();
        assert_eq!(out["employee_salary"], 1_000_000);
        assert_eq!(out["employee_title"], "Dish washer");
        assert_eq!(out["employee_email"], "joe.shmo@email.com");
        assert!(out.get("name").is_none());
    }
}
