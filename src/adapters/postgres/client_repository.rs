//! PostgreSQL implementation of ClientRepository.
//!
//! The client read assembles the joined record (client + profiles +
//! profile_folders) in SQL and hands it to `JoinedClientRecord` for
//! normalization. Amounts are read as text or `NUMERIC` so no float ever
//! touches them.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};

use crate::adapters::JoinedClientRecord;
use crate::domain::client::{Client, ClientError, ClientUpdate};
use crate::domain::foundation::{ClientId, Money, ProjectId};
use crate::domain::project::{Payment, Project, ProjectStatus};
use crate::ports::ClientRepository;

const FETCH_CLIENT_SQL: &str = r#"
    SELECT json_build_object(
        'id', c.id::text,
        'name', c.name,
        'contact_person', c.contact_person,
        'email', c.email,
        'invoice_email', c.invoice_email,
        'contract_value', c.contract_value::text,
        'classification', c.classification,
        'source', c.source,
        'profiles', COALESCE(
            (SELECT json_agg(p ORDER BY p.created_at) FROM profiles p WHERE p.client_id = c.id),
            '[]'::json
        ),
        'profile_folders', COALESCE(
            (SELECT json_agg(f ORDER BY f.created_at) FROM profile_folders f WHERE f.client_id = c.id),
            '[]'::json
        )
    ) AS record
    FROM clients c
    WHERE c.id::text = $1
"#;

const FETCH_PROJECTS_SQL: &str = r#"
    SELECT id::text AS id, client_id::text AS client_id, name, status,
           start_date, end_date, contract_value, payments
    FROM projects
    WHERE client_id::text = $1
    ORDER BY created_at DESC
"#;

const UPDATE_CLIENT_SQL: &str = r#"
    UPDATE clients
    SET name = $2,
        contact_person = $3,
        email = $4,
        invoice_email = $5,
        contract_value = $6,
        classification = $7,
        source = $8
    WHERE id::text = $1
"#;

/// PostgreSQL implementation of ClientRepository.
#[derive(Clone)]
pub struct PostgresClientRepository {
    pool: PgPool,
}

impl PostgresClientRepository {
    /// Creates a new PostgresClientRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn fetch_client_with_relations(&self, id: &ClientId) -> Result<Client, ClientError> {
        let row = sqlx::query(FETCH_CLIENT_SQL)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ClientError::fetch(format!("Failed to fetch client: {}", e)))?;

        let Some(row) = row else {
            return Err(ClientError::NotFound(id.clone()));
        };

        let value: serde_json::Value = row
            .try_get("record")
            .map_err(|e| ClientError::fetch(format!("Failed to get record: {}", e)))?;

        let record: JoinedClientRecord = serde_json::from_value(value)
            .map_err(|e| ClientError::fetch(format!("Malformed client record: {}", e)))?;

        Ok(record.into_client())
    }

    async fn fetch_projects_for_client(&self, id: &ClientId) -> Result<Vec<Project>, ClientError> {
        let rows = sqlx::query(FETCH_PROJECTS_SQL)
            .bind(id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ClientError::fetch(format!("Failed to fetch projects: {}", e)))?;

        tracing::debug!(client_id = %id, rows = rows.len(), "Fetched project rows");

        rows.into_iter().map(row_to_project).collect()
    }

    async fn update_client(&self, id: &ClientId, update: &ClientUpdate) -> Result<(), ClientError> {
        let result = sqlx::query(UPDATE_CLIENT_SQL)
            .bind(id.as_str())
            .bind(&update.name)
            .bind(&update.contact_person)
            .bind(&update.email)
            .bind(update.invoice_email.as_deref())
            .bind(update.contract_value.amount())
            .bind(update.classification.as_deref())
            .bind(update.source.as_deref())
            .execute(&self.pool)
            .await
            .map_err(|e| ClientError::update(format!("Failed to update client: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(ClientError::update(format!("No client row matched {}", id)));
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn column_error(column: &str, e: sqlx::Error) -> ClientError {
    ClientError::fetch(format!("Failed to get {}: {}", column, e))
}

fn row_to_project(row: sqlx::postgres::PgRow) -> Result<Project, ClientError> {
    let id: String = row.try_get("id").map_err(|e| column_error("id", e))?;
    let client_id: String = row
        .try_get("client_id")
        .map_err(|e| column_error("client_id", e))?;
    let name: Option<String> = row.try_get("name").map_err(|e| column_error("name", e))?;
    let status: Option<String> = row.try_get("status").map_err(|e| column_error("status", e))?;
    let start_date: Option<NaiveDate> = row
        .try_get("start_date")
        .map_err(|e| column_error("start_date", e))?;
    let end_date: Option<NaiveDate> = row
        .try_get("end_date")
        .map_err(|e| column_error("end_date", e))?;
    let contract_value: Option<Decimal> = row
        .try_get("contract_value")
        .map_err(|e| column_error("contract_value", e))?;
    let payments: Option<serde_json::Value> = row
        .try_get("payments")
        .map_err(|e| column_error("payments", e))?;

    Ok(Project {
        id: ProjectId::new(id).map_err(|e| ClientError::fetch(e.to_string()))?,
        client_id: ClientId::new(client_id).map_err(|e| ClientError::fetch(e.to_string()))?,
        name: name.unwrap_or_default(),
        status: ProjectStatus::from(status.unwrap_or_default()),
        start_date,
        end_date,
        contract_value: contract_value.map(Money::new),
        payments: parse_payments(payments)?,
    })
}

fn parse_payments(value: Option<serde_json::Value>) -> Result<Vec<Payment>, ClientError> {
    match value {
        None | Some(serde_json::Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value)
            .map_err(|e| ClientError::fetch(format!("Malformed payments: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_payments_keeps_order() {
        let payments = parse_payments(Some(json!([
            {"amount": "400.50", "paid": true},
            {"amount": 600, "paid": false}
        ])))
        .unwrap();

        assert_eq!(payments.len(), 2);
        assert_eq!(payments[0].amount, "400.50".parse().unwrap());
        assert!(!payments[1].paid);
    }

    #[test]
    fn parse_payments_treats_null_as_empty() {
        assert!(parse_payments(None).unwrap().is_empty());
        assert!(parse_payments(Some(serde_json::Value::Null)).unwrap().is_empty());
    }

    #[test]
    fn parse_payments_rejects_wrong_shape() {
        let result = parse_payments(Some(json!({"amount": 1})));
        assert!(matches!(result, Err(ClientError::Fetch(_))));
    }

    #[test]
    fn update_sql_touches_only_editable_columns() {
        for column in [
            "name", "contact_person", "email", "invoice_email",
            "contract_value", "classification", "source",
        ] {
            assert!(UPDATE_CLIENT_SQL.contains(&format!("{} = $", column)));
        }
        assert!(!UPDATE_CLIENT_SQL.contains("profile"));
        assert!(!UPDATE_CLIENT_SQL.contains("SET id"));
    }

    #[test]
    fn client_query_exposes_raw_folder_relation_for_normalization() {
        assert!(FETCH_CLIENT_SQL.contains("'profile_folders'"));
        assert!(!FETCH_CLIENT_SQL.contains("'folders'"));
    }
}
