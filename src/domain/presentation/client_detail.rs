//! Client detail view model.

use serde::Serialize;

use super::{DisplayFormat, Route};
use crate::domain::client::Client;
use crate::domain::project::{
    PaymentLedger, ProjectAggregator, Project, StatusDisplay, StatusResolver,
};

/// Number of projects shown in the overview's recent list.
pub const RECENT_PROJECT_LIMIT: usize = 5;

/// Everything the client detail page renders, already formatted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetailView {
    pub header: ClientHeader,
    pub info_fields: Vec<InfoField>,
    pub overview: OverviewSummary,
    pub recent_projects: ProjectListing,
    pub projects: ProjectListing,
    pub profile_count: usize,
    pub folder_count: usize,
    pub folders: Vec<FolderSummary>,
    /// Set when projects could not be loaded; the client data is still valid.
    pub project_warning: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientHeader {
    pub name: String,
    pub avatar_initial: String,
    /// Canonical path of this page.
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderSummary {
    pub id: String,
    pub name: String,
    pub profile_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSummary {
    pub total_contract_value: String,
    pub project_count: usize,
}

/// A project list, or the empty-state marker.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "items")]
pub enum ProjectListing {
    Empty,
    Projects(Vec<ProjectCard>),
}

impl ProjectListing {
    pub fn is_empty(&self) -> bool {
        matches!(self, ProjectListing::Empty)
    }

    pub fn cards(&self) -> &[ProjectCard] {
        match self {
            ProjectListing::Empty => &[],
            ProjectListing::Projects(cards) => cards,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub id: String,
    pub name: String,
    pub link: String,
    pub status: StatusDisplay,
    pub start_date: String,
    pub end_date: String,
    pub contract_value: String,
    pub debt: String,
    /// Overpaid: the debt is a credit in the client's favour.
    pub is_credit: bool,
    pub is_settled: bool,
    pub installments: Vec<InstallmentBadge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentBadge {
    pub label: String,
    pub paid: bool,
}

impl ClientDetailView {
    pub fn build(
        client: &Client,
        projects: &[Project],
        project_warning: Option<&str>,
        format: &DisplayFormat,
        resolver: &StatusResolver,
    ) -> Self {
        let stats = ProjectAggregator::aggregate(projects);

        let cards: Vec<ProjectCard> = projects
            .iter()
            .map(|p| project_card(p, format, resolver))
            .collect();
        let recent: Vec<ProjectCard> = cards.iter().take(RECENT_PROJECT_LIMIT).cloned().collect();

        Self {
            header: ClientHeader {
                name: client.name.clone(),
                avatar_initial: avatar_initial(&client.name),
                link: Route::ClientDetail(client.id.clone()).path(),
            },
            info_fields: info_fields(client, format),
            overview: OverviewSummary {
                total_contract_value: format.currency(stats.total_contract_value),
                project_count: stats.count,
            },
            recent_projects: listing(recent),
            projects: listing(cards),
            profile_count: client.profile_count(),
            folder_count: client.folders.len(),
            folders: folder_summaries(client, format),
            project_warning: project_warning.map(str::to_string),
        }
    }
}

fn info_fields(client: &Client, format: &DisplayFormat) -> Vec<InfoField> {
    vec![
        InfoField {
            label: "Client name",
            value: format.text(Some(client.name.as_str())),
        },
        InfoField {
            label: "Contact person",
            value: format.text(Some(client.contact_person.as_str())),
        },
        InfoField {
            label: "Email",
            value: format.text(Some(client.email.as_str())),
        },
        InfoField {
            label: "Invoice email",
            value: format.text(client.invoice_email.as_deref()),
        },
        InfoField {
            label: "Contract value",
            value: format.optional_currency(client.contract_value),
        },
        InfoField {
            label: "Classification",
            value: format.text(client.classification.as_deref()),
        },
        InfoField {
            label: "Source",
            value: format.text(client.source.as_deref()),
        },
    ]
}

fn folder_summaries(client: &Client, format: &DisplayFormat) -> Vec<FolderSummary> {
    client
        .folders
        .iter()
        .map(|folder| FolderSummary {
            id: folder.id.clone(),
            name: format.text(folder.name.as_deref()),
            profile_count: client.profiles_in_folder(&folder.id).count(),
        })
        .collect()
}

fn project_card(project: &Project, format: &DisplayFormat, resolver: &StatusResolver) -> ProjectCard {
    let ledger = PaymentLedger::summarize(project);

    ProjectCard {
        id: project.id.to_string(),
        name: project.name.clone(),
        link: Route::ProjectSearch(project.name.clone()).path(),
        status: resolver.resolve_status(&project.status),
        start_date: format.date(project.start_date),
        end_date: format.date(project.end_date),
        contract_value: format.optional_currency(project.contract_value),
        debt: format.currency(ledger.debt),
        is_credit: ledger.is_credit(),
        is_settled: ledger.is_settled(),
        installments: ledger
            .installments
            .iter()
            .map(|i| InstallmentBadge {
                label: format!("Installment {}: {}", i.number, format.currency(i.amount)),
                paid: i.paid,
            })
            .collect(),
    }
}

fn listing(cards: Vec<ProjectCard>) -> ProjectListing {
    if cards.is_empty() {
        ProjectListing::Empty
    } else {
        ProjectListing::Projects(cards)
    }
}

fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}
