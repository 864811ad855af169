//! Project, job and task models.
//!
//! A [`Project`] contains jobs, a [`Job`] contains tasks, and a [`Task`]
//! carries the labor budget that time-card cost is measured against.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status shared by projects and jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Not yet started.
    Planned,
    /// Work is underway.
    InProgress,
    /// Paused.
    OnHold,
    /// Finished.
    Completed,
    /// Abandoned before completion.
    Cancelled,
}

/// A client engagement containing zero or more jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for the project.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Client reference.
    pub client: String,
    /// Price quoted to the client.
    pub quoted_cost: Decimal,
    /// Planned start date.
    pub start_date: NaiveDate,
    /// Planned end date.
    pub end_date: NaiveDate,
    /// Current status.
    pub status: Status,
}

/// A unit of work within a project, containing zero or more tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique identifier for the job.
    pub id: String,
    /// The project this job belongs to.
    pub project_id: String,
    /// Job name.
    pub name: String,
    /// Budget allotted to the job.
    #[serde(default)]
    pub budget: Decimal,
    /// Planned start date.
    pub start_date: NaiveDate,
    /// Planned end date.
    pub end_date: NaiveDate,
    /// Current status.
    pub status: Status,
}

/// A task within a job; employees record days worked against tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for the task.
    pub id: String,
    /// The job this task belongs to.
    pub job_id: String,
    /// Task name.
    pub name: String,
    /// Ceiling for labor cost. `None` or zero means unconstrained.
    #[serde(default)]
    pub budget: Option<Decimal>,
    /// Completion percentage, 0 to 100.
    #[serde(default)]
    pub progress: u8,
}

impl Task {
    /// Returns the labor budget, treating an unset budget as zero.
    pub fn budget_ceiling(&self) -> Decimal {
        self.budget.unwrap_or(Decimal::ZERO)
    }

    /// Returns true if the task has a positive budget that cost can exceed.
    ///
    /// # Examples
    ///
    /// ```
    /// use site_ledger::models::Task;
    /// use rust_decimal::Decimal;
    ///
    /// let mut task = Task {
    ///     id: "T1".to_string(),
    ///     job_id: "J1".to_string(),
    ///     name: "Pour footings".to_string(),
    ///     budget: None,
    ///     progress: 0,
    /// };
    /// assert!(!task.has_budget());
    ///
    /// task.budget = Some(Decimal::ZERO);
    /// assert!(!task.has_budget());
    ///
    /// task.budget = Some(Decimal::new(800, 0));
    /// assert!(task.has_budget());
    /// ```
    pub fn has_budget(&self) -> bool {
        self.budget_ceiling() > Decimal::ZERO
    }
}
