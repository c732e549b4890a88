//! Client detail state and its load phases.

use serde::Serialize;

use crate::domain::client::Client;
use crate::domain::foundation::{ClientId, StateMachine};
use crate::domain::presentation::{ClientDetailView, DisplayFormat};
use crate::domain::project::{
    PaymentLedger, PortfolioStats, Project, ProjectAggregator, ProjectLedger, StatusResolver,
};

/// Phase of the detail page, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPhase {
    /// No client resolved yet, or a fetch is in flight.
    Loading,
    Loaded,
    /// The client read failed for the current attempt.
    Error,
}

impl StateMachine for LoadPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use LoadPhase::*;
        matches!(
            (self, target),
            (Loading, Loading) | (Loading, Loaded) | (Loading, Error) | (Loaded, Loading) | (Error, Loading)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use LoadPhase::*;
        match self {
            Loading => vec![Loading, Loaded, Error],
            Loaded => vec![Loading],
            Error => vec![Loading],
        }
    }
}

/// A client together with its projects, as last read from the store.
///
/// Derived figures are recomputed from `projects` on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedClientDetail {
    pub client: Client,
    pub projects: Vec<Project>,
    /// Set when the project read failed and `projects` is empty because of it.
    pub project_warning: Option<String>,
}

impl LoadedClientDetail {
    pub fn stats(&self) -> PortfolioStats {
        ProjectAggregator::aggregate(&self.projects)
    }

    /// One ledger per project, in project order.
    pub fn ledgers(&self) -> Vec<ProjectLedger> {
        self.projects.iter().map(PaymentLedger::summarize).collect()
    }

    pub fn view(&self, format: &DisplayFormat, resolver: &StatusResolver) -> ClientDetailView {
        ClientDetailView::build(
            &self.client,
            &self.projects,
            self.project_warning.as_deref(),
            format,
            resolver,
        )
    }
}

/// Snapshot of the detail page state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "phase")]
pub enum ClientDetailState {
    #[serde(rename_all = "camelCase")]
    Loading {
        client_id: Option<ClientId>,
    },
    Loaded(LoadedClientDetail),
    #[serde(rename_all = "camelCase")]
    Error {
        client_id: ClientId,
        message: String,
    },
}

impl ClientDetailState {
    pub fn phase(&self) -> LoadPhase {
        match self {
            ClientDetailState::Loading { .. } => LoadPhase::Loading,
            ClientDetailState::Loaded(_) => LoadPhase::Loaded,
            ClientDetailState::Error { .. } => LoadPhase::Error,
        }
    }

    /// The client this state belongs to, if one has been requested.
    pub fn client_id(&self) -> Option<&ClientId> {
        match self {
            ClientDetailState::Loading { client_id } => client_id.as_ref(),
            ClientDetailState::Loaded(detail) => Some(&detail.client.id),
            ClientDetailState::Error { client_id, .. } => Some(client_id),
        }
    }

    pub fn loaded(&self) -> Option<&LoadedClientDetail> {
        match self {
            ClientDetailState::Loaded(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.phase() == LoadPhase::Loaded
    }
}

impl Default for ClientDetailState {
    fn default() -> Self {
        ClientDetailState::Loading { client_id: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Money, ProjectId};
    use crate::domain::project::{Payment, ProjectStatus};

    fn client() -> Client {
        Client {
            id: ClientId::new("c1").unwrap(),
            name: "Acme".to_string(),
            contact_person: "Jane".to_string(),
            email: "jane@acme.test".to_string(),
            invoice_email: None,
            contract_value: None,
            classification: None,
            source: None,
            profiles: vec![],
            folders: vec![],
        }
    }

    fn project(id: &str, value: i64, payments: Vec<Payment>) -> Project {
        Project {
            id: ProjectId::new(id).unwrap(),
            client_id: ClientId::new("c1").unwrap(),
            name: id.to_string(),
            status: ProjectStatus::InProgress,
            start_date: None,
            end_date: None,
            contract_value: Some(Money::from_units(value)),
            payments,
        }
    }

    #[test]
    fn loaded_phase_only_leaves_through_loading() {
        assert!(LoadPhase::Loaded.can_transition_to(&LoadPhase::Loading));
        assert!(!LoadPhase::Loaded.can_transition_to(&LoadPhase::Error));
        assert!(LoadPhase::Error.transition_to(LoadPhase::Loaded).is_err());
        assert!(!LoadPhase::Error.is_terminal());
    }

    #[test]
    fn initial_state_is_loading_without_id() {
        let state = ClientDetailState::default();
        assert_eq!(state.phase(), LoadPhase::Loading);
        assert_eq!(state.client_id(), None);
        assert!(state.loaded().is_none());
    }

    #[test]
    fn derived_figures_follow_current_projects() {
        let mut detail = LoadedClientDetail {
            client: client(),
            projects: vec![project("p1", 1000, vec![Payment::paid(Money::from_units(400))])],
            project_warning: None,
        };
        assert_eq!(detail.stats().total_contract_value, Money::from_units(1000));
        assert_eq!(detail.ledgers()[0].debt, Money::from_units(600));

        detail.projects.push(project("p2", 500, vec![Payment::paid(Money::from_units(600))]));
        assert_eq!(detail.stats().count, 2);
        assert_eq!(detail.stats().total_contract_value, Money::from_units(1500));
        assert!(detail.ledgers()[1].is_credit());
    }

    #[test]
    fn state_serializes_with_phase_tag() {
        let state = ClientDetailState::Error {
            client_id: ClientId::new("c1").unwrap(),
            message: "Client not found.".to_string(),
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["phase"], "error");
        assert_eq!(json["clientId"], "c1");
    }
}
