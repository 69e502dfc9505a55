//! Budget goal passthrough.
//!
//! Goal figures are sourced dataset values; nothing here recomputes them
//! from transactions.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::domain::SpendingGoal;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalsResponse {
    pub goals: Vec<SpendingGoal>,
}

pub struct GoalService;

impl GoalService {
    pub fn goals(dataset: &Dataset) -> GoalsResponse {
        GoalsResponse {
            goals: dataset.goals.clone(),
        }
    }
}
