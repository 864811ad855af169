//! Configuration loading and management for the Site Labor Ledger.
//!
//! This module loads display settings and the mock data store (projects,
//! jobs, tasks, employees and time cards) from a directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use site_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sample").unwrap();
//! println!("Loaded {} projects", config.dataset().projects.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    Dataset, EmployeesFile, EngineSettings, JobsFile, ProjectsFile, TasksFile, TimeCardsFile,
};
