//! Edit payload for a client's editable fields.

use serde::{Deserialize, Serialize};

use super::Client;
use crate::domain::foundation::{Money, ValidationError};

/// The only shape ever sent to the store when a client is edited.
///
/// Identity and the joined profile/folder relations have no field here,
/// so an update can never carry them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    pub name: String,
    pub contact_person: String,
    pub email: String,
    #[serde(default)]
    pub invoice_email: Option<String>,
    pub contract_value: Money,
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl ClientUpdate {
    /// Prefills an edit form from the current record.
    pub fn from_client(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            contact_person: client.contact_person.clone(),
            email: client.email.clone(),
            invoice_email: client.invoice_email.clone(),
            contract_value: client.contract_value.unwrap_or(Money::ZERO),
            classification: client.classification.clone(),
            source: client.source.clone(),
        }
    }

    /// Trims every text field and turns blank optionals into `None`.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            contact_person: self.contact_person.trim().to_string(),
            email: self.email.trim().to_string(),
            invoice_email: non_blank(self.invoice_email),
            contract_value: self.contract_value,
            classification: non_blank(self.classification),
            source: non_blank(self.source),
        }
    }

    /// Checks the payload before it is sent to the store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        check_email("email", Some(&self.email))?;
        check_email("invoice_email", self.invoice_email.as_deref())?;
        if self.contract_value.is_negative() {
            return Err(ValidationError::negative("contract_value"));
        }
        Ok(())
    }

    /// Overwrites the editable fields of `client`, leaving identity and
    /// relations untouched.
    pub fn apply_to(&self, client: &mut Client) {
        client.name = self.name.clone();
        client.contact_person = self.contact_person.clone();
        client.email = self.email.clone();
        client.invoice_email = self.invoice_email.clone();
        client.contract_value = Some(self.contract_value);
        client.classification = self.classification.clone();
        client.source = self.source.clone();
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_email(field: &str, value: Option<&str>) -> Result<(), ValidationError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() && !v.contains('@') => {
            Err(ValidationError::invalid_format(field, "missing @ symbol"))
        }
        _ => Ok(()),
    }
}
