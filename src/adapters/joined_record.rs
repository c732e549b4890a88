//! Storage shape of a client read with its nested relations.
//!
//! The store returns the folder relation under its table name
//! (`profile_folders`). `JoinedClientRecord::into_client` is the single place
//! that renames it to `folders` and drops the raw field, so nothing above the
//! adapters ever sees the storage name.

use serde::{Deserialize, Serialize};

use crate::domain::client::{Client, ClientUpdate, Profile, ProfileFolder};
use crate::domain::foundation::{ClientId, Money};

/// A `clients` row joined with `profiles` and `profile_folders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedClientRecord {
    pub id: ClientId,
    pub name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub invoice_email: Option<String>,
    #[serde(default)]
    pub contract_value: Option<Money>,
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub profiles: Option<Vec<Profile>>,
    #[serde(default)]
    pub profile_folders: Option<Vec<ProfileFolder>>,
}

impl JoinedClientRecord {
    /// Normalizes the joined row into the domain client.
    pub fn into_client(self) -> Client {
        Client {
            id: self.id,
            name: self.name,
            contact_person: self.contact_person.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            invoice_email: self.invoice_email,
            contract_value: self.contract_value,
            classification: self.classification,
            source: self.source,
            profiles: self.profiles.unwrap_or_default(),
            folders: self.profile_folders.unwrap_or_default(),
        }
    }

    /// Writes the editable columns; identity and relations stay as stored.
    pub fn apply_update(&mut self, update: &ClientUpdate) {
        self.name = update.name.clone();
        self.contact_person = Some(update.contact_person.clone());
        self.email = Some(update.email.clone());
        self.invoice_email = update.invoice_email.clone();
        self.contract_value = Some(update.contract_value);
        self.classification = update.classification.clone();
        self.source = update.source.clone();
    }
}
