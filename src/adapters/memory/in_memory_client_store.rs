//! In-Memory Client Store Adapter
//!
//! Holds joined client rows and projects in memory. Used by tests and by the
//! CLI when it runs against a JSON fixture instead of Postgres.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::adapters::JoinedClientRecord;
use crate::domain::client::{Client, ClientError, ClientUpdate};
use crate::domain::foundation::ClientId;
use crate::domain::project::Project;
use crate::ports::ClientRepository;

/// On-disk fixture layout: joined client rows plus projects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreFixture {
    #[serde(default)]
    pub clients: Vec<JoinedClientRecord>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Errors raised while loading a fixture file.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to read fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Default)]
struct FailureSwitches {
    client_reads: AtomicBool,
    project_reads: AtomicBool,
    updates: AtomicBool,
}

/// In-memory implementation of `ClientRepository`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClientStore {
    clients: Arc<RwLock<HashMap<ClientId, JoinedClientRecord>>>,
    projects: Arc<RwLock<Vec<Project>>>,
    updates: Arc<RwLock<Vec<(ClientId, ClientUpdate)>>>,
    failures: Arc<FailureSwitches>,
}

impl InMemoryClientStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn from_fixture(fixture: StoreFixture) -> Self {
        let store = Self::new();
        for record in fixture.clients {
            store.insert_client(record).await;
        }
        for project in fixture.projects {
            store.insert_project(project).await;
        }
        store
    }

    /// Load a JSON fixture file.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let raw = tokio::fs::read_to_string(path).await?;
        let fixture: StoreFixture = serde_json::from_str(&raw)?;
        Ok(Self::from_fixture(fixture).await)
    }

    pub async fn insert_client(&self, record: JoinedClientRecord) {
        self.clients.write().await.insert(record.id.clone(), record);
    }

    pub async fn insert_project(&self, project: Project) {
        self.projects.write().await.push(project);
    }

    /// Make client reads fail with a fetch error.
    pub fn fail_client_reads(&self, fail: bool) {
        self.failures.client_reads.store(fail, Ordering::SeqCst);
    }

    /// Make project reads fail with a fetch error.
    pub fn fail_project_reads(&self, fail: bool) {
        self.failures.project_reads.store(fail, Ordering::SeqCst);
    }

    /// Make updates fail with an update error.
    pub fn fail_updates(&self, fail: bool) {
        self.failures.updates.store(fail, Ordering::SeqCst);
    }

    /// Updates accepted so far, in order.
    pub async fn applied_updates(&self) -> Vec<(ClientId, ClientUpdate)> {
        self.updates.read().await.clone()
    }

    /// The raw stored row, before normalization.
    pub async fn raw_client(&self, id: &ClientId) -> Option<JoinedClientRecord> {
        self.clients.read().await.get(id).cloned()
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientStore {
    async fn fetch_client_with_relations(&self, id: &ClientId) -> Result<Client, ClientError> {
        if self.failures.client_reads.load(Ordering::SeqCst) {
            return Err(ClientError::fetch("Simulated client read failure"));
        }
        self.clients
            .read()
            .await
            .get(id)
            .cloned()
            .map(JoinedClientRecord::into_client)
            .ok_or_else(|| ClientError::NotFound(id.clone()))
    }

    async fn fetch_projects_for_client(&self, id: &ClientId) -> Result<Vec<Project>, ClientError> {
        if self.failures.project_reads.load(Ordering::SeqCst) {
            return Err(ClientError::fetch("Simulated project read failure"));
        }
        Ok(self
            .projects
            .read()
            .await
            .iter()
            .filter(|p| &p.client_id == id)
            .cloned()
            .collect())
    }

    async fn update_client(&self, id: &ClientId, update: &ClientUpdate) -> Result<(), ClientError> {
        if self.failures.updates.load(Ordering::SeqCst) {
            return Err(ClientError::update("Simulated update failure"));
        }
        let mut clients = self.clients.write().await;
        let record = clients
            .get_mut(id)
            .ok_or_else(|| ClientError::update(format!("no client row matched {}", id)))?;
        record.apply_update(update);
        self.updates.write().await.push((id.clone(), update.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Money;
    use serde_json::json;
    use std::io::Write;

    fn fixture() -> StoreFixture {
        serde_json::from_value(json!({
            "clients": [
                {
                    "id": "c1",
                    "name": "Acme",
                    "contact_person": "Jane",
                    "email": "jane@acme.test",
                    "contract_value": 1000,
                    "profiles": [],
                    "profile_folders": [{"id": "f1", "name": "Contracts"}]
                },
                {"id": "c2", "name": "Beta"}
            ],
            "projects": [
                {"id": "p1", "client_id": "c1", "name": "Site", "status": "planning", "contract_value": 1000},
                {"id": "p2", "client_id": "c2", "name": "App", "status": "completed"},
                {"id": "p3", "client_id": "c1", "name": "SEO", "status": "overdue", "payments": [{"amount": 10, "paid": true}]}
            ]
        }))
        .unwrap()
    }

    fn id(raw: &str) -> ClientId {
        ClientId::new(raw).unwrap()
    }

    #[tokio::test]
    async fn fetches_normalized_client() {
        let store = InMemoryClientStore::from_fixture(fixture()).await;
        let client = store.fetch_client_with_relations(&id("c1")).await.unwrap();
        assert_eq!(client.name, "Acme");
        assert_eq!(client.folders.len(), 1);
    }

    #[tokio::test]
    async fn missing_client_is_not_found() {
        let store = InMemoryClientStore::from_fixture(fixture()).await;
        let result = store.fetch_client_with_relations(&id("missing")).await;
        assert!(matches!(result, Err(ClientError::NotFound(_))));
    }

    #[tokio::test]
    async fn projects_are_filtered_by_client_in_store_order() {
        let store = InMemoryClientStore::from_fixture(fixture()).await;
        let projects = store.fetch_projects_for_client(&id("c1")).await.unwrap();
        let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p3"]);
    }

    #[tokio::test]
    async fn update_overwrites_editable_fields_only() {
        let store = InMemoryClientStore::from_fixture(fixture()).await;
        let mut update = ClientUpdate::from_client(
            &store.fetch_client_with_relations(&id("c1")).await.unwrap(),
        );
        update.name = "Acme Ltd".to_string();
        update.contract_value = Money::from_units(5000);

        store.update_client(&id("c1"), &update).await.unwrap();

        let client = store.fetch_client_with_relations(&id("c1")).await.unwrap();
        assert_eq!(client.name, "Acme Ltd");
        assert_eq!(client.contract_value, Some(Money::from_units(5000)));
        assert_eq!(client.folders.len(), 1);
        assert_eq!(store.applied_updates().await.len(), 1);
    }

    #[tokio::test]
    async fn update_of_unknown_client_fails() {
        let store = InMemoryClientStore::new();
        let update = ClientUpdate {
            name: "X".to_string(),
            contact_person: String::new(),
            email: String::new(),
            invoice_email: None,
            contract_value: Money::ZERO,
            classification: None,
            source: None,
        };
        let result = store.update_client(&id("nobody"), &update).await;
        assert!(matches!(result, Err(ClientError::Update(_))));
    }

    #[tokio::test]
    async fn failure_switches_inject_errors() {
        let store = InMemoryClientStore::from_fixture(fixture()).await;

        store.fail_project_reads(true);
        assert!(matches!(
            store.fetch_projects_for_client(&id("c1")).await,
            Err(ClientError::Fetch(_))
        ));

        store.fail_client_reads(true);
        assert!(matches!(
            store.fetch_client_with_relations(&id("c1")).await,
            Err(ClientError::Fetch(_))
        ));

        store.fail_client_reads(false);
        assert!(store.fetch_client_with_relations(&id("c1")).await.is_ok());
    }

    #[tokio::test]
    async fn loads_fixture_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&fixture()).unwrap()).unwrap();

        let store = InMemoryClientStore::from_json_file(file.path()).await.unwrap();
        assert!(store.raw_client(&id("c2")).await.is_some());
    }

    #[tokio::test]
    async fn non_numeric_project_value_does_not_reject_fixture() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let raw = json!({
            "clients": [{"id": "c1", "name": "Acme"}],
            "projects": [
                {"id": "p1", "client_id": "c1", "name": "Site", "status": "planning", "contract_value": "abc"},
                {"id": "p2", "client_id": "c1", "name": "App", "status": "planning", "contract_value": "700"}
            ]
        });
        write!(file, "{raw}").unwrap();

        let store = InMemoryClientStore::from_json_file(file.path()).await.unwrap();
        let projects = store.fetch_projects_for_client(&id("c1")).await.unwrap();
        let stats = crate::domain::project::ProjectAggregator::aggregate(&projects);
        assert_eq!(projects[0].contract_value, None);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_contract_value, Money::from_units(700));
    }

    #[tokio::test]
    async fn malformed_fixture_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let result = InMemoryClientStore::from_json_file(file.path()).await;
        assert!(matches!(result, Err(FixtureError::Parse(_))));
    }
}
