//! Aggregation result models.
//!
//! This module contains the [`AggregationResult`] type and the derived records
//! it is made of. None of these are persisted; they are recomputed from time
//! cards, employees, tasks and the active date window on every change.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Task;
use crate::error::{EngineError, EngineResult};

/// Pay owed to one employee for the active window.
///
/// # Example
///
/// ```
/// use site_ledger::models::PayrollSummary;
/// use rust_decimal::Decimal;
///
/// let summary = PayrollSummary {
///     total_earned: Decimal::new(1000, 0),
///     total_borrowed: Decimal::new(100, 0),
///     net_pay: Decimal::new(900, 0),
///     total_days_worked: 2,
/// };
/// assert_eq!(summary.total_earned - summary.total_borrowed, summary.net_pay);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Daily rate times days worked.
    pub total_earned: Decimal,
    /// Advances taken, worked or not.
    pub total_borrowed: Decimal,
    /// `total_earned - total_borrowed`.
    pub net_pay: Decimal,
    /// Number of worked days in the window.
    pub total_days_worked: u32,
}

/// A task enriched with the labor cost accumulated against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCost {
    /// The task reference data.
    #[serde(flatten)]
    pub task: Task,
    /// Sum of daily rates for days worked on the task.
    pub actual_employee_cost: Decimal,
    /// Number of worked days recorded against the task.
    pub total_days_worked: u32,
    /// Pay attributed to the task. Tracks `actual_employee_cost`.
    pub total_employee_pay: Decimal,
}

impl TaskCost {
    /// Wraps a task with zeroed accumulators.
    pub fn new(task: Task) -> Self {
        Self {
            task,
            actual_employee_cost: Decimal::ZERO,
            total_days_worked: 0,
            total_employee_pay: Decimal::ZERO,
        }
    }

    /// Records one worked day at the given daily rate.
    ///
    /// # Errors
    ///
    /// Returns `AmountOverflow` if the task's cost leaves the range of
    /// `Decimal`. The accumulators are left unchanged in that case.
    pub fn record_day(&mut self, daily_rate: Decimal) -> EngineResult<()> {
        let overflow = || {
            EngineError::amount_overflow(format!("labor cost of task '{}'", self.task.id))
        };
        let cost = self
            .actual_employee_cost
            .checked_add(daily_rate)
            .ok_or_else(overflow)?;
        let pay = self
            .total_employee_pay
            .checked_add(daily_rate)
            .ok_or_else(overflow)?;

        self.actual_employee_cost = cost;
        self.total_employee_pay = pay;
        self.total_days_worked += 1;
        Ok(())
    }
}

/// Raised for a task whose labor cost has exceeded its budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAlert {
    /// The over-budget task.
    pub task_id: String,
    /// The task's name.
    pub task_name: String,
    /// Human-readable description of the overrun.
    pub message: String,
    /// The budget ceiling.
    pub budget: Decimal,
    /// Cost minus budget, at full precision.
    pub overage: Decimal,
}

/// A per-task rollup of labor cost eligible for client billing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    /// The billed task.
    pub task_id: String,
    /// The task's name.
    pub task_name: String,
    /// The task budget (zero when unset).
    pub task_budget: Decimal,
    /// Labor cost accumulated in the window.
    pub employee_cost: Decimal,
    /// Days worked on the task in the window.
    pub total_days: u32,
    /// `task_budget - employee_cost`; negative means over budget.
    pub budget_variance: Decimal,
}

/// Everything the aggregation engine derives for one pay window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationResult {
    /// Payroll keyed by employee id.
    pub payroll_summary: BTreeMap<String, PayrollSummary>,
    /// Tasks with their accumulated cost, in the order the tasks were supplied.
    pub task_map: Vec<TaskCost>,
    /// Over-budget tasks.
    pub budget_alerts: Vec<BudgetAlert>,
    /// Tasks with non-zero labor cost.
    pub invoice_summary: Vec<InvoiceLine>,
}

impl AggregationResult {
    /// Looks up the accumulated cost for a task.
    pub fn task_cost(&self, task_id: &str) -> Option<&TaskCost> {
        self.task_map.iter().find(|t| t.task.id == task_id)
    }

    /// Sum of all net pay in the payroll summary, `None` on overflow.
    pub fn total_net_pay(&self) -> Option<Decimal> {
        self.payroll_summary
            .values()
            .try_fold(Decimal::ZERO, |acc, s| acc.checked_add(s.net_pay))
    }
}

/// Labor cost and progress for one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRollup {
    /// The job.
    pub job_id: String,
    /// The job's name.
    pub job_name: String,
    /// The job budget.
    pub budget: Decimal,
    /// Sum of the labor cost of the job's tasks.
    pub labor_cost: Decimal,
    /// `budget - labor_cost`.
    pub budget_variance: Decimal,
    /// Number of tasks in the job.
    pub task_count: usize,
    /// Mean progress of the job's tasks, 0 when it has none.
    pub progress: Decimal,
}

/// Labor cost against the quote for a whole project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRollup {
    /// The project.
    pub project_id: String,
    /// The project's name.
    pub project_name: String,
    /// Price quoted to the client.
    pub quoted_cost: Decimal,
    /// Sum of job labor costs.
    pub labor_cost: Decimal,
    /// `quoted_cost - labor_cost`.
    pub margin: Decimal,
    /// Mean progress over jobs that have tasks.
    pub progress: Decimal,
}
