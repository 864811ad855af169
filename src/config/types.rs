//! Configuration types for the Site Labor Ledger.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML files of a configuration directory: engine settings and the mock
//! data store of projects, jobs, tasks, employees and time cards.

use serde::Deserialize;

use crate::models::{Employee, EmployeeTimeCard, Job, Project, Task};

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_display_decimals() -> u32 {
    2
}

/// Display settings for report text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineSettings {
    /// Prefix for money amounts in messages.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Decimal places shown for money amounts in messages.
    #[serde(default = "default_display_decimals")]
    pub display_decimals: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            display_decimals: default_display_decimals(),
        }
    }
}

/// projects.yaml
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectsFile {
    /// All projects.
    pub projects: Vec<Project>,
}

/// jobs.yaml
#[derive(Debug, Clone, Deserialize)]
pub struct JobsFile {
    /// All jobs.
    pub jobs: Vec<Job>,
}

/// tasks.yaml
#[derive(Debug, Clone, Deserialize)]
pub struct TasksFile {
    /// All tasks.
    pub tasks: Vec<Task>,
}

/// employees.yaml
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesFile {
    /// All employees.
    pub employees: Vec<Employee>,
}

/// time_cards.yaml
#[derive(Debug, Clone, Deserialize)]
pub struct TimeCardsFile {
    /// Every stored time card.
    #[serde(default)]
    pub time_cards: Vec<EmployeeTimeCard>,
}

/// The full mock data store, across every project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    /// All projects.
    pub projects: Vec<Project>,
    /// All jobs.
    pub jobs: Vec<Job>,
    /// All tasks.
    pub tasks: Vec<Task>,
    /// All employees.
    pub employees: Vec<Employee>,
    /// Every stored time card.
    pub time_cards: Vec<EmployeeTimeCard>,
}
