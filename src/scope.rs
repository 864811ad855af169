//! Project scoping.
//!
//! The aggregation engine expects employees and tasks already narrowed to the
//! project in view. [`ProjectScope`] does that narrowing against the full
//! [`Dataset`], and trims each time card to the entries charged to the
//! project's tasks.

use std::collections::HashSet;
use tracing::debug;

use crate::calculation::AggregationInput;
use crate::config::Dataset;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeTimeCard, Job, Project, Task};

/// The slice of a dataset belonging to one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectScope {
    /// The project in view.
    pub project: Project,
    /// The project's jobs, in dataset order.
    pub jobs: Vec<Job>,
    /// Tasks of those jobs, in dataset order.
    pub tasks: Vec<Task>,
    /// Employees assigned to the project.
    pub employees: Vec<Employee>,
    /// Every time card, keeping only entries on the project's tasks.
    pub time_cards: Vec<EmployeeTimeCard>,
}

impl ProjectScope {
    /// Narrows `dataset` to `project_id`.
    ///
    /// # Errors
    ///
    /// Returns `ProjectNotFound` if no project has that id.
    pub fn new(dataset: &Dataset, project_id: &str) -> EngineResult<Self> {
        let project = dataset
            .projects
            .iter()
            .find(|p| p.id == project_id)
            .cloned()
            .ok_or_else(|| EngineError::ProjectNotFound {
                project_id: project_id.to_string(),
            })?;

        let jobs: Vec<Job> = dataset
            .jobs
            .iter()
            .filter(|j| j.project_id == project.id)
            .cloned()
            .collect();
        let job_ids: HashSet<&str> = jobs.iter().map(|j| j.id.as_str()).collect();

        let tasks: Vec<Task> = dataset
            .tasks
            .iter()
            .filter(|t| job_ids.contains(t.job_id.as_str()))
            .cloned()
            .collect();
        let task_ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();

        let employees: Vec<Employee> = dataset
            .employees
            .iter()
            .filter(|e| e.is_assigned_to(&project.id))
            .cloned()
            .collect();

        let time_cards: Vec<EmployeeTimeCard> = dataset
            .time_cards
            .iter()
            .map(|card| EmployeeTimeCard {
                employee_id: card.employee_id.clone(),
                entries: card
                    .entries
                    .iter()
                    .filter(|e| {
                        e.task_id
                            .as_deref()
                            .is_some_and(|id| task_ids.contains(id))
                    })
                    .cloned()
                    .collect(),
            })
            .collect();

        debug!(
            project_id = %project.id,
            jobs = jobs.len(),
            tasks = tasks.len(),
            employees = employees.len(),
            "Built project scope"
        );

        Ok(Self {
            project,
            jobs,
            tasks,
            employees,
            time_cards,
        })
    }

    /// Builds the aggregation input for this scope over `current_dates`.
    pub fn aggregation_input(&self, current_dates: Vec<String>) -> AggregationInput {
        AggregationInput {
            time_cards: self.time_cards.clone(),
            employees: self.employees.clone(),
            tasks: self.tasks.clone(),
            current_dates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{aggregate, generate_period};
    use crate::config::{ConfigLoader, EngineSettings};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn dataset() -> Dataset {
        ConfigLoader::load("./config/sample")
            .expect("Failed to load config")
            .dataset()
            .clone()
    }

    #[test]
    fn test_scope_selects_project_records() {
        let scope = ProjectScope::new(&dataset(), "P1").unwrap();

        assert_eq!(scope.project.id, "P1");
        let job_ids: Vec<_> = scope.jobs.iter().map(|j| j.id.as_str()).collect();
        let task_ids: Vec<_> = scope.tasks.iter().map(|t| t.id.as_str()).collect();
        let employee_ids: Vec<_> = scope.employees.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(job_ids, vec!["J1", "J2"]);
        assert_eq!(task_ids, vec!["T1", "T2", "T3"]);
        assert_eq!(employee_ids, vec!["E1", "E2"]);
    }

    #[test]
    fn test_scope_trims_entries_to_project_tasks() {
        let scope = ProjectScope::new(&dataset(), "P1").unwrap();

        assert_eq!(scope.time_cards.len(), 3);
        let e2 = &scope.time_cards[1];
        assert_eq!(e2.employee_id, "E2");
        assert_eq!(e2.entries.len(), 2);
        assert!(
            e2.entries
                .iter()
                .all(|e| e.task_id.as_deref() == Some("T3"))
        );
        assert!(scope.time_cards[2].entries.is_empty());
    }

    #[test]
    fn test_unknown_project_is_an_error() {
        match ProjectScope::new(&dataset(), "P404") {
            Err(EngineError::ProjectNotFound { project_id }) => assert_eq!(project_id, "P404"),
            other => panic!("Expected ProjectNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_scope_feeds_aggregation() {
        let scope = ProjectScope::new(&dataset(), "P1").unwrap();
        let dates = generate_period(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()).unwrap();

        let result = aggregate(&scope.aggregation_input(dates), &EngineSettings::default()).unwrap();

        assert_eq!(result.payroll_summary.len(), 2);
        assert_eq!(result.payroll_summary["E1"].total_earned, Decimal::new(1500, 0));
        assert_eq!(result.payroll_summary["E1"].net_pay, Decimal::new(1400, 0));
        assert_eq!(result.payroll_summary["E2"].total_earned, Decimal::new(700, 0));
        assert_eq!(result.payroll_summary["E2"].total_borrowed, Decimal::ZERO);
        assert_eq!(result.budget_alerts.len(), 1);
        assert_eq!(result.budget_alerts[0].task_id, "T1");
        assert_eq!(result.invoice_summary.len(), 3);
    }
}
