//! Employee model.
//!
//! Employees are immutable reference data within a pay period: a daily rate
//! and the set of projects they are assigned to.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a worker whose time is recorded on a time card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Amount earned for each day worked.
    pub daily_rate: Decimal,
    /// Projects the employee is assigned to.
    #[serde(default)]
    pub project_ids: Vec<String>,
}

impl Employee {
    /// Returns true if the employee is assigned to the given project.
    ///
    /// # Examples
    ///
    /// ```
    /// use site_ledger::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "E1".to_string(),
    ///     name: "Ana Ruiz".to_string(),
    ///     daily_rate: Decimal::new(500, 0),
    ///     project_ids: vec!["P1".to_string()],
    /// };
    /// assert!(employee.is_assigned_to("P1"));
    /// assert!(!employee.is_assigned_to("P2"));
    /// ```
    pub fn is_assigned_to(&self, project_id: &str) -> bool {
        self.project_ids.iter().any(|p| p == project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "E1",
            "name": "Ana Ruiz",
            "daily_rate": "500.00",
            "project_ids": ["P1", "P2"]
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "E1");
        assert_eq!(employee.daily_rate, Decimal::new(50000, 2));
        assert_eq!(employee.project_ids, vec!["P1", "P2"]);
    }

    #[test]
    fn test_project_ids_default_to_empty() {
        let json = r#"{"id": "E2", "name": "Li Wen", "daily_rate": "320"}"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.project_ids.is_empty());
        assert!(!employee.is_assigned_to("P1"));
    }

    #[test]
    fn test_daily_rate_serializes_as_string() {
        let employee = Employee {
            id: "E1".to_string(),
            name: "Ana Ruiz".to_string(),
            daily_rate: Decimal::new(45050, 2),
            project_ids: vec![],
        };

        let json = serde_json::to_string(&employee).unwrap();
        assert!(json.contains("\"daily_rate\":\"450.50\""));
    }
}
