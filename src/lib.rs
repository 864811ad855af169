//! Site Labor Ledger
//!
//! This crate aggregates employee time cards for construction projects into
//! payroll summaries, per-task labor cost, budget alerts and invoice lines,
//! and rolls task cost up to jobs and projects.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod scope;
