//! Pay window aggregation.
//!
//! This module ties the period window, payroll accumulation, budget alerts
//! and invoice summary together into a single pure pass over a snapshot of
//! time cards and reference data.

use std::collections::HashMap;
use tracing::debug;

use crate::config::EngineSettings;
use crate::error::EngineResult;
use crate::models::{AggregationResult, Employee, EmployeeTimeCard, Task};

use super::budget_alerts::detect_budget_alerts;
use super::invoice_summary::build_invoice_summary;
use super::pay_period::PayWindow;
use super::payroll::accumulate_time_card;
use super::task_costs::TaskCostMap;

/// A snapshot of everything one aggregation pass reads.
///
/// `employees` and `tasks` are expected to be already narrowed to the
/// project in view; `time_cards` need not be.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationInput {
    /// Time cards for every employee who has recorded time.
    pub time_cards: Vec<EmployeeTimeCard>,
    /// Employees in scope.
    pub employees: Vec<Employee>,
    /// Tasks in scope.
    pub tasks: Vec<Task>,
    /// The active window as `yyyy-MM-dd` strings.
    pub current_dates: Vec<String>,
}

/// Computes payroll, task cost, budget alerts and invoice lines for a window.
///
/// Time cards for employees outside `employees` are skipped, as are worked
/// days against tasks outside `tasks`. Entries dated outside
/// `current_dates` never affect the result. Several cards for one employee
/// accumulate into a single payroll summary.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`](crate::error::EngineError::InvalidDate)
/// if any of `current_dates` is not a canonical `yyyy-MM-dd` date, and
/// [`EngineError::AmountOverflow`](crate::error::EngineError::AmountOverflow)
/// if a money total leaves the range of `Decimal`.
///
/// # Examples
///
/// ```
/// use site_ledger::calculation::{aggregate, generate_period, AggregationInput};
/// use site_ledger::config::EngineSettings;
/// use site_ledger::models::{DailyTimeEntry, Employee, EmployeeTimeCard, Task};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// let mut card = EmployeeTimeCard::new("E1");
/// card.entries.push(DailyTimeEntry {
///     worked: true,
///     task_id: Some("T1".to_string()),
///     ..DailyTimeEntry::blank(start)
/// });
///
/// let input = AggregationInput {
///     time_cards: vec![card],
///     employees: vec![Employee {
///         id: "E1".to_string(),
///         name: "Ana Ruiz".to_string(),
///         daily_rate: Decimal::new(500, 0),
///         project_ids: vec!["P1".to_string()],
///     }],
///     tasks: vec![Task {
///         id: "T1".to_string(),
///         job_id: "J1".to_string(),
///         name: "Excavation".to_string(),
///         budget: Some(Decimal::new(400, 0)),
///         progress: 10,
///     }],
///     current_dates: generate_period(start).unwrap(),
/// };
///
/// let result = aggregate(&input, &EngineSettings::default()).unwrap();
/// assert_eq!(result.payroll_summary["E1"].total_earned, Decimal::new(500, 0));
/// assert_eq!(result.budget_alerts.len(), 1);
/// assert_eq!(result.invoice_summary[0].budget_variance, Decimal::new(-100, 0));
/// ```
pub fn aggregate(
    input: &AggregationInput,
    settings: &EngineSettings,
) -> EngineResult<AggregationResult> {
    let window = PayWindow::from_date_strings(&input.current_dates)?;

    let employees: HashMap<&str, &Employee> = input
        .employees
        .iter()
        .map(|e| (e.id.as_str(), e))
        .collect();
    let mut task_costs = TaskCostMap::from_tasks(&input.tasks);
    let mut result = AggregationResult::default();

    for card in &input.time_cards {
        let Some(employee) = employees.get(card.employee_id.as_str()) else {
            debug!(
                employee_id = %card.employee_id,
                "Skipping time card for employee outside the report"
            );
            continue;
        };

        let summary = result
            .payroll_summary
            .entry(card.employee_id.clone())
            .or_default();
        accumulate_time_card(card, employee, &window, summary, &mut task_costs)?;
    }

    result.budget_alerts = detect_budget_alerts(task_costs.as_slice(), settings);
    result.invoice_summary = build_invoice_summary(task_costs.as_slice())?;
    result.task_map = task_costs.into_vec();

    debug!(
        window_days = window.len(),
        employees = result.payroll_summary.len(),
        tasks = result.task_map.len(),
        alerts = result.budget_alerts.len(),
        invoice_lines = result.invoice_summary.len(),
        "Aggregation completed"
    );

    Ok(result)
}
