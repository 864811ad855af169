//! Calculation logic for the Site Labor Ledger.
//!
//! This module contains pay period generation, per-card payroll
//! accumulation, task cost tracking, budget overrun detection, invoice
//! summary lines, the aggregation pass that combines them, time entry
//! mutation, and job/project rollups.

mod aggregation;
mod budget_alerts;
mod entry_update;
mod invoice_summary;
mod pay_period;
mod payroll;
mod rollup;
mod task_costs;

pub use aggregation::{AggregationInput, aggregate};
pub use budget_alerts::{check_budget, detect_budget_alerts, format_currency};
pub use entry_update::update_entry;
pub use invoice_summary::{build_invoice_summary, invoice_line};
pub use pay_period::{
    DATE_FORMAT, PAY_PERIOD_DAYS, PayWindow, generate_period, parse_date, period_dates,
};
pub use payroll::{accumulate_time_card, payroll_for_card};
pub use rollup::{rollup_jobs, rollup_project};
pub use task_costs::TaskCostMap;
