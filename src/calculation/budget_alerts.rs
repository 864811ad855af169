//! Budget overrun detection.
//!
//! A task raises an alert when its accumulated labor cost is strictly greater
//! than a positive budget. Tasks with no budget, or a budget of zero, never
//! alert.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::EngineSettings;
use crate::models::{BudgetAlert, TaskCost};

/// Formats a money amount for display, e.g. `$1250.50` or `-$2.35`.
///
/// Rounds half away from zero to `settings.display_decimals` places. Only
/// display strings are rounded; aggregation keeps full precision. A sign goes
/// before the symbol, and an amount that rounds to zero is shown unsigned.
///
/// # Examples
///
/// ```
/// use site_ledger::calculation::format_currency;
/// use site_ledger::config::EngineSettings;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let settings = EngineSettings::default();
/// assert_eq!(format_currency(Decimal::from_str("200").unwrap(), &settings), "$200.00");
/// assert_eq!(format_currency(Decimal::from_str("0.005").unwrap(), &settings), "$0.01");
/// assert_eq!(format_currency(Decimal::from_str("-200").unwrap(), &settings), "-$200.00");
/// ```
pub fn format_currency(amount: Decimal, settings: &EngineSettings) -> String {
    let mut rounded = amount.round_dp_with_strategy(
        settings.display_decimals,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(settings.display_decimals);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}{}", sign, settings.currency_symbol, rounded.abs())
}

/// Checks a single task for a budget overrun.
pub fn check_budget(cost: &TaskCost, settings: &EngineSettings) -> Option<BudgetAlert> {
    let budget = cost.task.budget_ceiling();
    if !cost.task.has_budget() || cost.actual_employee_cost <= budget {
        return None;
    }

    let overage = cost.actual_employee_cost - budget;
    Some(BudgetAlert {
        task_id: cost.task.id.clone(),
        task_name: cost.task.name.clone(),
        message: format!(
            "Labor cost exceeds budget by {} (budget {})",
            format_currency(overage, settings),
            format_currency(budget, settings)
        ),
        budget,
        overage,
    })
}

/// Returns an alert for every over-budget task, in task order.
pub fn detect_budget_alerts(task_costs: &[TaskCost], settings: &EngineSettings) -> Vec<BudgetAlert> {
    task_costs
        .iter()
        .filter_map(|cost| check_budget(cost, settings))
        .collect()
}
