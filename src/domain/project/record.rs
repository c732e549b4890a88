//! Project and payment installment records.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::ProjectStatus;
use crate::domain::foundation::{ClientId, Money, ProjectId};

/// A unit of billable work belonging to one client.
///
/// Accepts both the camelCase read shape and snake_case storage columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    #[serde(alias = "client_id")]
    pub client_id: ClientId,
    pub name: String,
    pub status: ProjectStatus,
    #[serde(default, alias = "start_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, alias = "end_date")]
    pub end_date: Option<NaiveDate>,
    /// Unparseable stored values read as unrecorded.
    #[serde(default, alias = "contract_value", deserialize_with = "lenient_money")]
    pub contract_value: Option<Money>,
    /// Installments in the order the store returned them.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub payments: Vec<Payment>,
}

impl Project {
    /// Contract value with an unrecorded value counted as zero.
    pub fn contract_value_or_zero(&self) -> Money {
        self.contract_value.unwrap_or(Money::ZERO)
    }
}

/// One scheduled portion of a project's contract value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub amount: Money,
    #[serde(default)]
    pub paid: bool,
}

impl Payment {
    pub fn paid(amount: Money) -> Self {
        Self { amount, paid: true }
    }

    pub fn unpaid(amount: Money) -> Self {
        Self {
            amount,
            paid: false,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Payment>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Payment>>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_money<'de, D>(deserializer: D) -> Result<Option<Money>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.to_string().parse().ok(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_storage_row() {
        let project: Project = serde_json::from_value(json!({
            "id": "p1",
            "client_id": "c1",
            "name": "Website",
            "status": "in-progress",
            "start_date": "2024-01-15",
            "end_date": null,
            "contract_value": 1000,
            "payments": [{"amount": 400, "paid": true}, {"amount": 600, "paid": false}]
        }))
        .unwrap();

        assert_eq!(project.client_id.as_str(), "c1");
        assert_eq!(project.status, ProjectStatus::InProgress);
        assert_eq!(project.start_date, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(project.end_date, None);
        assert_eq!(project.payments.len(), 2);
        assert!(project.payments[0].paid);
    }

    #[test]
    fn null_payments_become_empty_sequence() {
        let project: Project = serde_json::from_value(json!({
            "id": "p2",
            "clientId": "c1",
            "name": "Audit",
            "status": "planning",
            "payments": null
        }))
        .unwrap();

        assert!(project.payments.is_empty());
        assert_eq!(project.contract_value_or_zero(), Money::ZERO);
    }

    #[test]
    fn non_numeric_contract_value_reads_as_unrecorded() {
        let rows = json!([
            {"id": "p4", "client_id": "c1", "name": "A", "status": "planning", "contract_value": "abc"},
            {"id": "p5", "client_id": "c1", "name": "B", "status": "planning", "contract_value": true},
            {"id": "p6", "client_id": "c1", "name": "C", "status": "planning", "contract_value": " 250.5 "},
            {"id": "p7", "client_id": "c1", "name": "D", "status": "planning", "contract_value": null}
        ]);
        let projects: Vec<Project> = serde_json::from_value(rows).unwrap();

        assert_eq!(projects[0].contract_value, None);
        assert_eq!(projects[1].contract_value, None);
        assert_eq!(projects[2].contract_value, Some("250.5".parse().unwrap()));
        assert_eq!(projects[3].contract_value, None);
        assert_eq!(projects[0].contract_value_or_zero(), Money::ZERO);
    }

    #[test]
    fn serializes_read_shape_in_camel_case() {
        let project = Project {
            id: ProjectId::new("p3").unwrap(),
            client_id: ClientId::new("c1").unwrap(),
            name: "Rollout".to_string(),
            status: ProjectStatus::from("archived"),
            start_date: None,
            end_date: None,
            contract_value: Some(Money::from_units(10)),
            payments: vec![Payment::unpaid(Money::from_units(10))],
        };

        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["clientId"], json!("c1"));
        assert_eq!(value["status"], json!("archived"));
        assert!(value.get("contractValue").is_some());
    }
}
