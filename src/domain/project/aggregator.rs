//! Portfolio statistics across a client's projects.

use serde::Serialize;

use super::Project;
use crate::domain::foundation::Money;

/// Count and total contract value of a project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    pub count: usize,
    pub total_contract_value: Money,
}

pub struct ProjectAggregator;

impl ProjectAggregator {
    /// Aggregates a project list. Absent contract values count as zero.
    pub fn aggregate(projects: &[Project]) -> PortfolioStats {
        PortfolioStats {
            count: projects.len(),
            total_contract_value: projects.iter().map(Project::contract_value_or_zero).sum(),
        }
    }
}
