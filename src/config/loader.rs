//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine settings
//! and the mock data store from YAML files.

use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::Project;

use super::types::{
    Dataset, EmployeesFile, EngineSettings, JobsFile, ProjectsFile, TasksFile, TimeCardsFile,
};

/// Loads and provides access to engine settings and the data store.
///
/// # Directory Structure
///
/// ```text
/// config/sample/
/// ├── engine.yaml          # Display settings
/// └── data/
///     ├── projects.yaml
///     ├── jobs.yaml
///     ├── tasks.yaml
///     ├── employees.yaml
///     └── time_cards.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use site_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sample")?;
/// let project = loader.get_project("P1")?;
/// println!("Project: {}", project.name);
/// # Ok::<(), site_ledger::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: EngineSettings,
    dataset: Dataset,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or missing fields (`ConfigParseError`)
    /// - A record violates a field constraint (`InvalidRecord`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<EngineSettings>(&path.join("engine.yaml"))?;

        let data_dir = path.join("data");
        let dataset = Dataset {
            projects: Self::load_yaml::<ProjectsFile>(&data_dir.join("projects.yaml"))?.projects,
            jobs: Self::load_yaml::<JobsFile>(&data_dir.join("jobs.yaml"))?.jobs,
            tasks: Self::load_yaml::<TasksFile>(&data_dir.join("tasks.yaml"))?.tasks,
            employees: Self::load_yaml::<EmployeesFile>(&data_dir.join("employees.yaml"))?
                .employees,
            time_cards: Self::load_yaml::<TimeCardsFile>(&data_dir.join("time_cards.yaml"))?
                .time_cards,
        };

        Self::validate(&dataset)?;

        info!(
            path = %path.display(),
            projects = dataset.projects.len(),
            tasks = dataset.tasks.len(),
            employees = dataset.employees.len(),
            time_cards = dataset.time_cards.len(),
            "Loaded configuration"
        );

        Ok(Self { settings, dataset })
    }

    /// Builds a loader from values already in memory.
    pub fn from_parts(settings: EngineSettings, dataset: Dataset) -> EngineResult<Self> {
        Self::validate(&dataset)?;
        Ok(Self { settings, dataset })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Checks constraints serde cannot express.
    fn validate(dataset: &Dataset) -> EngineResult<()> {
        if let Some(task) = dataset.tasks.iter().find(|t| t.progress > 100) {
            return Err(EngineError::InvalidRecord {
                entity: "task".to_string(),
                id: task.id.clone(),
                message: format!("progress {} is outside 0..=100", task.progress),
            });
        }
        Ok(())
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the loaded data store.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Gets a project by its id.
    ///
    /// # Returns
    ///
    /// Returns the project if found, or `ProjectNotFound`.
    pub fn get_project(&self, project_id: &str) -> EngineResult<&Project> {
        self.dataset
            .projects
            .iter()
            .find(|p| p.id == project_id)
            .ok_or_else(|| EngineError::ProjectNotFound {
                project_id: project_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/sample"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "site-ledger-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("data")).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.settings().currency_symbol, "$");
        assert_eq!(loader.dataset().projects.len(), 2);
        assert_eq!(loader.dataset().jobs.len(), 3);
        assert_eq!(loader.dataset().tasks.len(), 4);
        assert_eq!(loader.dataset().employees.len(), 3);
        assert_eq!(loader.dataset().time_cards.len(), 3);
    }

    #[test]
    fn test_get_project() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let project = loader.get_project("P1").unwrap();
        assert_eq!(project.name, "Harbor View Duplex");
        assert_eq!(project.quoted_cost, Decimal::new(25_000, 0));
    }

    #[test]
    fn test_get_project_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_project("P404") {
            Err(EngineError::ProjectNotFound { project_id }) => assert_eq!(project_id, "P404"),
            other => panic!("Expected ProjectNotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => assert!(path.contains("engine.yaml")),
            other => panic!("Expected ConfigNotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_data_file_returns_error() {
        let dir = scratch_dir("missing-data");
        fs::write(dir.join("engine.yaml"), "currency_symbol: \"$\"\n").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => assert!(path.contains("projects.yaml")),
            other => panic!("Expected ConfigNotFound error, got {other:?}"),
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let dir = scratch_dir("malformed");
        fs::write(dir.join("engine.yaml"), "display_decimals: [not, a, number]\n").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("engine.yaml"))
            }
            other => panic!("Expected ConfigParseError, got {other:?}"),
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_from_parts_rejects_progress_over_100() {
        let dataset = Dataset {
            tasks: vec![Task {
                id: "T1".to_string(),
                job_id: "J1".to_string(),
                name: "Excavation".to_string(),
                budget: None,
                progress: 120,
            }],
            ..Default::default()
        };

        match ConfigLoader::from_parts(EngineSettings::default(), dataset) {
            Err(EngineError::InvalidRecord { entity, id, .. }) => {
                assert_eq!(entity, "task");
                assert_eq!(id, "T1");
            }
            other => panic!("Expected InvalidRecord, got {other:?}"),
        }
    }
}
