use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::Goal;

/// Completion totals for one goal category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CategoryProgress {
    pub total: usize,
    pub completed: usize,
}

/// Goals grouped by completion state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GoalBreakdown {
    pub total: usize,
    /// progress >= 100
    pub completed: usize,
    /// 0 < progress < 100
    pub in_progress: usize,
    /// progress == 0
    pub not_started: usize,
    pub by_category: BTreeMap<String, CategoryProgress>,
}

impl GoalBreakdown {
    /// Completed goals as a whole percentage of all goals; 0 with no goals
    pub fn completion_rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }
}

pub fn goal_breakdown(goals: &[Goal]) -> GoalBreakdown {
    let mut breakdown = GoalBreakdown {
        total: goals.len(),
        ..Default::default()
    };

    for goal in goals {
        if goal.is_completed() {
            breakdown.completed += 1;
        } else if goal.is_not_started() {
            breakdown.not_started += 1;
        } else {
            breakdown.in_progress += 1;
        }

        let category = breakdown
            .by_category
            .entry(goal.category.clone())
            .or_default();
        category.total += 1;
        if goal.is_completed() {
            category.completed += 1;
        }
    }

    breakdown
}
