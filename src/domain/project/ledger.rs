//! Payment Ledger - Paid-to-date and outstanding debt per project.

use serde::Serialize;

use super::Project;
use crate::domain::foundation::{Money, ProjectId};

/// One installment addressed by its 1-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    pub number: usize,
    pub amount: Money,
    pub paid: bool,
}

/// Ledger figures for a single project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLedger {
    pub project_id: ProjectId,
    pub contract_value: Money,
    pub paid_to_date: Money,
    /// Contract value minus paid installments. Negative means overpaid.
    pub debt: Money,
    pub installments: Vec<Installment>,
}

impl ProjectLedger {
    /// True when more has been paid than the contract is worth.
    pub fn is_credit(&self) -> bool {
        self.debt.is_negative()
    }

    pub fn is_settled(&self) -> bool {
        self.debt.is_zero()
    }
}

/// Computes payment progress for a project.
pub struct PaymentLedger;

impl PaymentLedger {
    /// Sum of the amounts of installments marked paid.
    pub fn paid_to_date(project: &Project) -> Money {
        project
            .payments
            .iter()
            .filter(|p| p.paid)
            .map(|p| p.amount)
            .sum()
    }

    /// Outstanding debt: contract value minus paid installments.
    ///
    /// # Edge Cases
    /// - No installments: the full contract value
    /// - Absent contract value: treated as zero, so any payment yields a credit
    /// - Overpayment: negative, never clamped
    pub fn compute_debt(project: &Project) -> Money {
        project.contract_value_or_zero() - Self::paid_to_date(project)
    }

    /// Installments numbered in repository order.
    pub fn installments(project: &Project) -> Vec<Installment> {
        project
            .payments
            .iter()
            .enumerate()
            .map(|(index, payment)| Installment {
                number: index + 1,
                amount: payment.amount,
                paid: payment.paid,
            })
            .collect()
    }

    /// Full ledger figures for one project.
    pub fn summarize(project: &Project) -> ProjectLedger {
        let paid_to_date = Self::paid_to_date(project);
        let contract_value = project.contract_value_or_zero();
        ProjectLedger {
            project_id: project.id.clone(),
            contract_value,
            paid_to_date,
            debt: contract_value - paid_to_date,
            installments: Self::installments(project),
        }
    }
}
