//! Ordered task cost accumulators.
//!
//! Tasks keep the order they were supplied in so that alerts and invoice
//! lines come out in a stable order, while lookups by id stay O(1).

use std::collections::HashMap;
use tracing::warn;

use crate::models::{Task, TaskCost};

/// Task id to [`TaskCost`], in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TaskCostMap {
    costs: Vec<TaskCost>,
    index: HashMap<String, usize>,
}

impl TaskCostMap {
    /// Builds zeroed accumulators for `tasks`.
    ///
    /// A repeated task id keeps its first position and record.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut map = Self::default();
        for task in tasks {
            if map.index.contains_key(&task.id) {
                warn!(task_id = %task.id, "Duplicate task id ignored");
                continue;
            }
            map.index.insert(task.id.clone(), map.costs.len());
            map.costs.push(TaskCost::new(task.clone()));
        }
        map
    }

    /// Returns the accumulator for a task id.
    pub fn get(&self, task_id: &str) -> Option<&TaskCost> {
        self.index.get(task_id).map(|&i| &self.costs[i])
    }

    /// Returns the mutable accumulator for a task id.
    pub fn get_mut(&mut self, task_id: &str) -> Option<&mut TaskCost> {
        self.index.get(task_id).map(|&i| &mut self.costs[i])
    }

    /// Accumulators in insertion order.
    pub fn as_slice(&self) -> &[TaskCost] {
        &self.costs
    }

    /// Number of tasks tracked.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Returns true if no tasks are tracked.
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Consumes the map, yielding accumulators in insertion order.
    pub fn into_vec(self) -> Vec<TaskCost> {
        self.costs
    }
}
