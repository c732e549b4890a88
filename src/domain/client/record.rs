//! Client record as seen by the detail view.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::{ClientId, Money};

/// A client with its profile documents and folders already joined.
///
/// Folder data always lives under `folders`; the raw storage relation name
/// never reaches this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub invoice_email: Option<String>,
    /// Absent when no value was ever recorded.
    #[serde(default)]
    pub contract_value: Option<Money>,
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub folders: Vec<ProfileFolder>,
}

impl Client {
    /// Number of profile documents attached to the client.
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    /// Profiles filed under the given folder.
    pub fn profiles_in_folder<'a>(&'a self, folder_id: &'a str) -> impl Iterator<Item = &'a Profile> {
        self.profiles
            .iter()
            .filter(move |p| p.folder_id.as_deref() == Some(folder_id))
    }
}

/// A profile document owned by the profile-list collaborator.
///
/// Only the fields this crate reads are typed; every other column is kept
/// as-is in `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "folder_id")]
    pub folder_id: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// A folder grouping a client's profile documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFolder {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}
