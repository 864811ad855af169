//! Core data models for the Site Labor Ledger.
//!
//! This module contains the reference entities (projects, jobs, tasks,
//! employees), the time cards recorded against them, and the derived
//! aggregates the engine produces.

mod aggregation_result;
mod employee;
mod project;
mod time_card;

pub use aggregation_result::{
    AggregationResult, BudgetAlert, InvoiceLine, JobRollup, PayrollSummary, ProjectRollup,
    TaskCost,
};
pub use employee::Employee;
pub use project::{Job, Project, Status, Task};
pub use time_card::{DailyTimeEntry, EmployeeTimeCard, EntryUpdate};
