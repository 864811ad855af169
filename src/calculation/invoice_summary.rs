//! Invoice summary lines.
//!
//! Every task that accrued labor cost in the window becomes one billable
//! line, with its variance against budget.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{InvoiceLine, TaskCost};

/// Builds the invoice line for a task, or `None` if it has no labor cost.
///
/// # Errors
///
/// Returns `AmountOverflow` if the budget variance leaves the range of
/// `Decimal`.
pub fn invoice_line(cost: &TaskCost) -> EngineResult<Option<InvoiceLine>> {
    if cost.actual_employee_cost <= Decimal::ZERO {
        return Ok(None);
    }

    let task_budget = cost.task.budget_ceiling();
    let budget_variance = task_budget
        .checked_sub(cost.actual_employee_cost)
        .ok_or_else(|| {
            EngineError::amount_overflow(format!("budget variance of task '{}'", cost.task.id))
        })?;

    Ok(Some(InvoiceLine {
        task_id: cost.task.id.clone(),
        task_name: cost.task.name.clone(),
        task_budget,
        employee_cost: cost.actual_employee_cost,
        total_days: cost.total_days_worked,
        budget_variance,
    }))
}

/// Builds invoice lines for all tasks with labor cost, in task order.
pub fn build_invoice_summary(task_costs: &[TaskCost]) -> EngineResult<Vec<InvoiceLine>> {
    task_costs
        .iter()
        .filter_map(|cost| invoice_line(cost).transpose())
        .collect()
}
