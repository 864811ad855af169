//! Job and project cost rollups.
//!
//! Rolls the per-task labor cost from an aggregation up to jobs (against the
//! job budget) and to the project (against the quoted cost).

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Job, JobRollup, Project, ProjectRollup, TaskCost};

fn checked_sum(
    values: impl IntoIterator<Item = Decimal>,
    context: impl FnOnce() -> String,
) -> EngineResult<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
        .ok_or_else(|| EngineError::amount_overflow(context()))
}

fn mean(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    values.iter().sum::<Decimal>() / Decimal::from(values.len())
}

/// Rolls task cost and progress up to each job, in job order.
///
/// Tasks belonging to none of `jobs` are ignored.
///
/// # Errors
///
/// Returns `AmountOverflow` if a job's labor cost or variance leaves the
/// range of `Decimal`.
pub fn rollup_jobs(jobs: &[Job], task_costs: &[TaskCost]) -> EngineResult<Vec<JobRollup>> {
    jobs.iter()
        .map(|job| {
            let tasks: Vec<&TaskCost> = task_costs
                .iter()
                .filter(|c| c.task.job_id == job.id)
                .collect();
            let labor_cost = checked_sum(tasks.iter().map(|c| c.actual_employee_cost), || {
                format!("labor cost of job '{}'", job.id)
            })?;
            let budget_variance = job.budget.checked_sub(labor_cost).ok_or_else(|| {
                EngineError::amount_overflow(format!("budget variance of job '{}'", job.id))
            })?;
            let progress: Vec<Decimal> = tasks
                .iter()
                .map(|c| Decimal::from(c.task.progress))
                .collect();

            Ok(JobRollup {
                job_id: job.id.clone(),
                job_name: job.name.clone(),
                budget: job.budget,
                labor_cost,
                budget_variance,
                task_count: tasks.len(),
                progress: mean(&progress),
            })
        })
        .collect()
}

/// Rolls job totals up to the project.
///
/// Progress averages only the jobs that have at least one task.
///
/// # Errors
///
/// Returns `AmountOverflow` if the project labor cost or margin leaves the
/// range of `Decimal`.
///
/// # Examples
///
/// ```
/// use site_ledger::calculation::rollup_project;
/// use site_ledger::models::{JobRollup, Project, Status};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let project = Project {
///     id: "P1".to_string(),
///     name: "Harbor View Duplex".to_string(),
///     client: "Marlow Holdings".to_string(),
///     quoted_cost: Decimal::new(10_000, 0),
///     start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 9, 30).unwrap(),
///     status: Status::InProgress,
/// };
/// let jobs = vec![JobRollup {
///     job_id: "J1".to_string(),
///     job_name: "Foundations".to_string(),
///     budget: Decimal::new(4_000, 0),
///     labor_cost: Decimal::new(2_500, 0),
///     budget_variance: Decimal::new(1_500, 0),
///     task_count: 2,
///     progress: Decimal::new(50, 0),
/// }];
///
/// let rollup = rollup_project(&project, &jobs).unwrap();
/// assert_eq!(rollup.margin, Decimal::new(7_500, 0));
/// assert_eq!(rollup.progress, Decimal::new(50, 0));
/// ```
pub fn rollup_project(project: &Project, jobs: &[JobRollup]) -> EngineResult<ProjectRollup> {
    let labor_cost = checked_sum(jobs.iter().map(|j| j.labor_cost), || {
        format!("labor cost of project '{}'", project.id)
    })?;
    let margin = project.quoted_cost.checked_sub(labor_cost).ok_or_else(|| {
        EngineError::amount_overflow(format!("margin of project '{}'", project.id))
    })?;
    let progress: Vec<Decimal> = jobs
        .iter()
        .filter(|j| j.task_count > 0)
        .map(|j| j.progress)
        .collect();

    Ok(ProjectRollup {
        project_id: project.id.clone(),
        project_name: project.name.clone(),
        quoted_cost: project.quoted_cost,
        labor_cost,
        margin,
        progress: mean(&progress),
    })
}
