//! ClientDetailController - drives the client detail page.
//!
//! One entry point, `load`, runs the read sequence: client first, projects
//! only after the client read succeeds. Each load takes a new generation
//! number; a response is applied only while its generation is still the
//! latest, so a slow read for an old id can never overwrite a newer one.
//! The state lock is never held across a repository call.

use std::sync::Arc;
use tokio::sync::RwLock;

use super::state::{ClientDetailState, LoadedClientDetail};
use crate::domain::client::{ClientError, ClientUpdate};
use crate::domain::foundation::{ClientId, StateMachine};
use crate::domain::presentation::{ClientDetailView, DisplayFormat, Route};
use crate::domain::project::StatusResolver;
use crate::ports::{ClientRepository, Navigator, Notice, Notifier};

pub const CLIENT_NOT_FOUND_MESSAGE: &str = "Client not found.";
pub const PROJECTS_UNAVAILABLE_MESSAGE: &str = "Projects could not be loaded.";
pub const CLIENT_UPDATED_MESSAGE: &str = "Client updated.";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update client.";

/// How a `load` call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Client and projects loaded.
    Loaded { project_count: usize },
    /// Client loaded; the project read failed and the list is empty.
    ProjectsUnavailable,
    /// The client read failed; the page moved to `Error`.
    ClientUnavailable,
    /// A newer load started before this one finished; nothing was applied.
    Superseded,
}

#[derive(Debug, Default)]
struct Inner {
    generation: u64,
    target: Option<ClientId>,
    state: ClientDetailState,
}

/// Controller for a single client detail page.
pub struct ClientDetailController {
    repository: Arc<dyn ClientRepository>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    inner: RwLock<Inner>,
}

impl ClientDetailController {
    pub fn new(
        repository: Arc<dyn ClientRepository>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            repository,
            notifier,
            navigator,
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> ClientDetailState {
        self.inner.read().await.state.clone()
    }

    /// The detail view model, when a client is loaded.
    pub async fn view(
        &self,
        format: &DisplayFormat,
        resolver: &StatusResolver,
    ) -> Option<ClientDetailView> {
        self.inner
            .read()
            .await
            .state
            .loaded()
            .map(|detail| detail.view(format, resolver))
    }

    /// Loads `client_id` from the top, superseding any load in flight.
    pub async fn load(&self, client_id: ClientId) -> LoadOutcome {
        let generation = {
            let mut inner = self.inner.write().await;
            inner.generation += 1;
            inner.target = Some(client_id.clone());
            inner.state = ClientDetailState::Loading {
                client_id: Some(client_id.clone()),
            };
            inner.generation
        };

        tracing::debug!(client_id = %client_id, generation, "Loading client detail");

        let client = match self.repository.fetch_client_with_relations(&client_id).await {
            Ok(client) => client,
            Err(err) => {
                let failed = ClientDetailState::Error {
                    client_id: client_id.clone(),
                    message: CLIENT_NOT_FOUND_MESSAGE.to_string(),
                };
                if !self.commit(generation, failed).await {
                    return LoadOutcome::Superseded;
                }
                tracing::warn!(client_id = %client_id, error = %err, "Client read failed");
                self.notifier.notify(Notice::error(CLIENT_NOT_FOUND_MESSAGE));
                self.navigator.navigate(Route::ClientList);
                return LoadOutcome::ClientUnavailable;
            }
        };

        if !self.is_current(generation).await {
            tracing::debug!(client_id = %client_id, generation, "Discarding superseded client read");
            return LoadOutcome::Superseded;
        }

        let (projects, project_warning) =
            match self.repository.fetch_projects_for_client(&client_id).await {
                Ok(projects) => (projects, None),
                Err(err) => {
                    tracing::warn!(client_id = %client_id, error = %err, "Project read failed");
                    (Vec::new(), Some(PROJECTS_UNAVAILABLE_MESSAGE.to_string()))
                }
            };

        let project_count = projects.len();
        let degraded = project_warning.is_some();
        let loaded = ClientDetailState::Loaded(LoadedClientDetail {
            client,
            projects,
            project_warning,
        });
        if !self.commit(generation, loaded).await {
            tracing::debug!(client_id = %client_id, generation, "Discarding superseded project read");
            return LoadOutcome::Superseded;
        }

        if degraded {
            self.notifier.notify(Notice::warning(PROJECTS_UNAVAILABLE_MESSAGE));
            return LoadOutcome::ProjectsUnavailable;
        }

        tracing::info!(client_id = %client_id, project_count, "Client detail loaded");
        LoadOutcome::Loaded { project_count }
    }

    /// Re-runs `load` for the most recently requested client.
    ///
    /// Used after changes made elsewhere, such as edits to the profile list.
    pub async fn reload(&self) -> Result<LoadOutcome, ClientError> {
        let target = self.inner.read().await.target.clone();
        match target {
            Some(client_id) => Ok(self.load(client_id).await),
            None => Err(ClientError::NotLoaded),
        }
    }

    /// Submits an edit of the loaded client.
    ///
    /// Failures are reported through a notice and leave the current state
    /// as it was. On success the page reloads from the store, unless a
    /// newer load started while the write was in flight.
    pub async fn submit_edit(&self, update: ClientUpdate) -> Result<(), ClientError> {
        let started = {
            let inner = self.inner.read().await;
            inner
                .state
                .loaded()
                .map(|detail| (detail.client.id.clone(), inner.generation))
        };
        let Some((client_id, generation)) = started else {
            let err = ClientError::NotLoaded;
            self.notifier.notify(Notice::error(err.to_string()));
            return Err(err);
        };

        let update = update.normalized();
        if let Err(err) = update.validate() {
            tracing::warn!(client_id = %client_id, error = %err, "Rejected client edit");
            let err = ClientError::from(err);
            self.notifier.notify(Notice::error(err.to_string()));
            return Err(err);
        }

        if let Err(err) = self.repository.update_client(&client_id, &update).await {
            tracing::error!(client_id = %client_id, error = %err, "Client update failed");
            self.notifier.notify(Notice::error(UPDATE_FAILED_MESSAGE));
            return Err(match err {
                ClientError::Update(_) => err,
                other => ClientError::update(other.to_string()),
            });
        }

        tracing::info!(client_id = %client_id, "Client updated");
        self.notifier.notify(Notice::success(CLIENT_UPDATED_MESSAGE));

        // Another client was requested while the write was in flight.
        if !self.is_current(generation).await {
            tracing::debug!(client_id = %client_id, generation, "Skipping reload after superseded edit");
            return Ok(());
        }
        self.load(client_id).await;
        Ok(())
    }

    async fn is_current(&self, generation: u64) -> bool {
        self.inner.read().await.generation == generation
    }

    /// Applies `next` if `generation` is still the latest load.
    async fn commit(&self, generation: u64, next: ClientDetailState) -> bool {
        let mut inner = self.inner.write().await;
        if inner.generation != generation {
            return false;
        }
        match inner.state.phase().transition_to(next.phase()) {
            Ok(_) => {
                inner.state = next;
                true
            }
            Err(err) => {
                tracing::error!(generation, error = %err, "Rejected detail state change");
                false
            }
        }
    }
}
