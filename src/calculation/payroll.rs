//! Payroll accumulation for a single time card.
//!
//! Walks one employee's entries inside the pay window, adding the daily rate
//! for worked days and every borrowed amount to the employee's summary, and
//! charging worked days to the task they were recorded against.

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeTimeCard, PayrollSummary};

use super::pay_period::PayWindow;
use super::task_costs::TaskCostMap;

/// Adds one time card's in-window entries to `summary` and `task_costs`.
///
/// Borrowed amounts count whether or not the day was worked. Worked days on
/// an unknown task still earn pay but are not charged to any task.
/// `summary.net_pay` is recomputed after the card is processed.
///
/// Each entry is taken as recorded, so two entries on one date both count.
/// Such dates are logged with `warn!`.
///
/// # Errors
///
/// Returns `AmountOverflow` if a payroll or task total leaves the range of
/// `Decimal`.
///
/// # Examples
///
/// ```
/// use site_ledger::calculation::{accumulate_time_card, PayWindow, TaskCostMap};
/// use site_ledger::models::{DailyTimeEntry, Employee, EmployeeTimeCard, PayrollSummary};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// let employee = Employee {
///     id: "E1".to_string(),
///     name: "Ana Ruiz".to_string(),
///     daily_rate: Decimal::new(500, 0),
///     project_ids: vec![],
/// };
/// let mut card = EmployeeTimeCard::new("E1");
/// card.entries.push(DailyTimeEntry { worked: true, ..DailyTimeEntry::blank(day) });
///
/// let mut summary = PayrollSummary::default();
/// let mut tasks = TaskCostMap::from_tasks(&[]);
/// accumulate_time_card(&card, &employee, &PayWindow::from_dates([day]), &mut summary, &mut tasks)
///     .unwrap();
///
/// assert_eq!(summary.total_earned, Decimal::new(500, 0));
/// assert_eq!(summary.total_days_worked, 1);
/// ```
pub fn accumulate_time_card(
    card: &EmployeeTimeCard,
    employee: &Employee,
    window: &PayWindow,
    summary: &mut PayrollSummary,
    task_costs: &mut TaskCostMap,
) -> EngineResult<()> {
    let overflow = |total: &str| {
        EngineError::amount_overflow(format!("{total} for employee '{}'", employee.id))
    };

    for date in card.duplicate_dates() {
        warn!(
            employee_id = %card.employee_id,
            date = %date,
            "Time card has more than one entry for a date"
        );
    }

    for entry in card.entries.iter().filter(|e| window.contains(e.date)) {
        summary.total_borrowed = summary
            .total_borrowed
            .checked_add(entry.borrowed)
            .ok_or_else(|| overflow("total borrowed"))?;

        if !entry.worked {
            continue;
        }

        summary.total_earned = summary
            .total_earned
            .checked_add(employee.daily_rate)
            .ok_or_else(|| overflow("total earned"))?;
        summary.total_days_worked += 1;

        if let Some(task_id) = entry.task_id.as_deref() {
            match task_costs.get_mut(task_id) {
                Some(cost) => cost.record_day(employee.daily_rate)?,
                None => debug!(
                    employee_id = %employee.id,
                    task_id,
                    date = %entry.date,
                    "Worked day references a task outside the report"
                ),
            }
        }
    }

    summary.net_pay = summary
        .total_earned
        .checked_sub(summary.total_borrowed)
        .ok_or_else(|| overflow("net pay"))?;
    Ok(())
}

/// Convenience for the common single-card case.
pub fn payroll_for_card(
    card: &EmployeeTimeCard,
    employee: &Employee,
    window: &PayWindow,
    task_costs: &mut TaskCostMap,
) -> EngineResult<PayrollSummary> {
    let mut summary = PayrollSummary::default();
    accumulate_time_card(card, employee, window, &mut summary, task_costs)?;
    Ok(summary)
}
