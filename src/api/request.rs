//! Request types for the Site Labor Ledger API.
//!
//! This module defines the JSON request bodies for the API endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::AggregationInput;
use crate::models::{Employee, EmployeeTimeCard, EntryUpdate, Task};

/// Request body for `POST /period`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// First day of the pay period.
    pub start_date: NaiveDate,
}

/// Request body for `POST /aggregate`.
///
/// `employees` and `tasks` should already be narrowed to the project in view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateRequest {
    /// Stored time cards.
    #[serde(default)]
    pub time_cards: Vec<EmployeeTimeCard>,
    /// Employees in scope.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Tasks in scope.
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// The active window as `yyyy-MM-dd` strings.
    pub current_dates: Vec<String>,
}

/// Request body for `POST /time-cards/update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEntryRequest {
    /// The current time card snapshot.
    #[serde(default)]
    pub time_cards: Vec<EmployeeTimeCard>,
    /// The employee whose entry changes.
    pub employee_id: String,
    /// The date of the entry.
    pub date: NaiveDate,
    /// The field change, e.g. `{"field": "worked", "value": false}`.
    pub update: EntryUpdate,
}

/// Request body for `POST /projects/{project_id}/report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// First day of the pay period to report on.
    pub start_date: NaiveDate,
}

impl From<AggregateRequest> for AggregationInput {
    fn from(req: AggregateRequest) -> Self {
        AggregationInput {
            time_cards: req.time_cards,
            employees: req.employees,
            tasks: req.tasks,
            current_dates: req.current_dates,
        }
    }
}
