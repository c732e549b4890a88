//! Client repository port.
//!
//! Defines the contract between the client detail flow and the data store.
//!
//! # Design
//!
//! - **Pre-joined reads**: the client read returns profiles and folders
//!   already attached, with folders under their normalized name
//! - **Projects are separate**: fetched only after the client read succeeds
//! - **Partial writes**: updates carry the editable fields and nothing else

use async_trait::async_trait;

use crate::domain::client::{Client, ClientError, ClientUpdate};
use crate::domain::foundation::ClientId;
use crate::domain::project::Project;

/// Repository port for client reads and edits.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Fetch a client joined with its profiles and folders.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no client matches `id`
    /// - `Fetch` on transport or store failure
    async fn fetch_client_with_relations(&self, id: &ClientId) -> Result<Client, ClientError>;

    /// Fetch the projects belonging to a client, in store-defined order.
    ///
    /// Payment installments keep the order the store holds them in.
    ///
    /// # Errors
    ///
    /// - `Fetch` on transport or store failure
    async fn fetch_projects_for_client(&self, id: &ClientId) -> Result<Vec<Project>, ClientError>;

    /// Overwrite the editable fields of a client.
    ///
    /// # Errors
    ///
    /// - `Update` on transport or store failure
    async fn update_client(&self, id: &ClientId, update: &ClientUpdate) -> Result<(), ClientError>;
}
