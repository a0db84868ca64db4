// ============================================================================
// Bank Infrastructure - PostgreSQL Client Repository
// File: crates/bank-infrastructure/src/database/postgres/client_repo_impl.rs
// Description: Clients with their status row, optimistic locking on version
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use tracing::{error, info, warn};
use uuid::Uuid;

use bank_core::domain::{
    Address, Client, ClientState, ClientStatus, ClientType, ContactDetails, DocumentType,
    PersonalInformation,
};
use bank_core::error::DomainError;
use bank_core::repositories::ClientRepository;

pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        client: &Client,
    ) -> Result<i64, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO clients (
                id, first_name, last_name, document_id, document_type, date_of_birth,
                street, city, state, country, postal_code,
                email, phone_number, alternative_phone_number,
                client_type, created_at, version
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, 1)
            "#,
        )
        .bind(client.id)
        .bind(&client.personal_information.first_name)
        .bind(&client.personal_information.last_name)
        .bind(&client.personal_information.document_id)
        .bind(client.personal_information.document_type.as_str())
        .bind(client.personal_information.date_of_birth)
        .bind(&client.address.street)
        .bind(&client.address.city)
        .bind(&client.address.state)
        .bind(&client.address.country)
        .bind(&client.address.postal_code)
        .bind(&client.contact_details.email)
        .bind(&client.contact_details.phone_number)
        .bind(&client.contact_details.alternative_phone_number)
        .bind(client.client_type.as_str())
        .bind(client.created_at)
        .execute(&mut **tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error inserting client: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        sqlx::query(
            r#"
            INSERT INTO client_statuses (client_id, status, last_updated, reason)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(client.id)
        .bind(client.status().status.as_str())
        .bind(client.status().last_updated)
        .bind(&client.status().reason)
        .execute(&mut **tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error inserting client status: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(1)
    }

    async fn update(
        tx: &mut Transaction<'_, Postgres>,
        client: &Client,
    ) -> Result<i64, DomainError> {
        let version: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE clients SET
                first_name = $3, last_name = $4, document_id = $5, document_type = $6,
                date_of_birth = $7, street = $8, city = $9, state = $10, country = $11,
                postal_code = $12, email = $13, phone_number = $14,
                alternative_phone_number = $15, client_type = $16,
                version = version + 1
            WHERE id = $1 AND version = $2
            RETURNING version
            "#,
        )
        .bind(client.id)
        .bind(client.version)
        .bind(&client.personal_information.first_name)
        .bind(&client.personal_information.last_name)
        .bind(&client.personal_information.document_id)
        .bind(client.personal_information.document_type.as_str())
        .bind(client.personal_information.date_of_birth)
        .bind(&client.address.street)
        .bind(&client.address.city)
        .bind(&client.address.state)
        .bind(&client.address.country)
        .bind(&client.address.postal_code)
        .bind(&client.contact_details.email)
        .bind(&client.contact_details.phone_number)
        .bind(&client.contact_details.alternative_phone_number)
        .bind(client.client_type.as_str())
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating client: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        let Some(version) = version else {
            warn!("Stale version {} for client {}", client.version, client.id);
            return Err(DomainError::ConcurrentModification(client.id));
        };

        sqlx::query(
            r#"
            UPDATE client_statuses SET status = $2, last_updated = $3, reason = $4
            WHERE client_id = $1
            "#,
        )
        .bind(client.id)
        .bind(client.status().status.as_str())
        .bind(client.status().last_updated)
        .bind(&client.status().reason)
        .execute(&mut **tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating client status: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(version)
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct ClientRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub document_id: String,
    pub document_type: String,
    pub date_of_birth: NaiveDate,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub email: String,
    pub phone_number: String,
    pub alternative_phone_number: Option<String>,
    pub client_type: String,
    pub created_at: DateTime<Utc>,
    pub version: i64,
    pub status: String,
    pub status_updated: DateTime<Utc>,
    pub reason: Option<String>,
}

impl TryFrom<ClientRow> for Client {
    type Error = DomainError;

    fn try_from(row: ClientRow) -> Result<Self, Self::Error> {
        let document_type = DocumentType::from_str(&row.document_type).ok_or_else(|| {
            DomainError::DatabaseError(format!("Unknown document type: {}", row.document_type))
        })?;
        let client_type = ClientType::from_str(&row.client_type).ok_or_else(|| {
            DomainError::DatabaseError(format!("Unknown client type: {}", row.client_type))
        })?;
        let state = ClientState::from_str(&row.status).ok_or_else(|| {
            DomainError::DatabaseError(format!("Unknown client status: {}", row.status))
        })?;

        Ok(Client::restore(
            row.id,
            PersonalInformation {
                first_name: row.first_name,
                last_name: row.last_name,
                document_id: row.document_id,
                document_type,
                date_of_birth: row.date_of_birth,
            },
            Address {
                street: row.street,
                city: row.city,
                state: row.state,
                country: row.country,
                postal_code: row.postal_code,
            },
            ContactDetails {
                email: row.email,
                phone_number: row.phone_number,
                alternative_phone_number: row.alternative_phone_number,
            },
            client_type,
            ClientStatus {
                status: state,
                last_updated: row.status_updated,
                reason: row.reason,
            },
            row.created_at,
            row.version,
        ))
    }
}

const SELECT_CLIENTS: &str = r#"
    SELECT
        c.id, c.first_name, c.last_name, c.document_id, c.document_type, c.date_of_birth,
        c.street, c.city, c.state, c.country, c.postal_code,
        c.email, c.phone_number, c.alternative_phone_number,
        c.client_type, c.created_at, c.version,
        s.status, s.last_updated AS status_updated, s.reason
    FROM clients c
    JOIN client_statuses s ON s.client_id = c.id
"#;

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn find_all(&self) -> Result<Vec<Client>, DomainError> {
        let rows: Vec<ClientRow> = sqlx::query_as(&format!("{} ORDER BY c.created_at", SELECT_CLIENTS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error listing clients: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        rows.into_iter().map(Client::try_from).collect()
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Client>, DomainError> {
        let row: Option<ClientRow> = sqlx::query_as(&format!("{} WHERE c.id = $1", SELECT_CLIENTS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error finding client by id: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        row.map(Client::try_from).transpose()
    }

    async fn exists_by_id(&self, id: &Uuid) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error checking client: {}", e);
                DomainError::DatabaseError(e.to_string())
            })
    }

    async fn save(&self, client: &Client) -> Result<Client, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e: sqlx::Error| {
            error!("Database error starting transaction: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        let version = if client.version == 0 {
            Self::insert(&mut tx, client).await?
        } else {
            Self::update(&mut tx, client).await?
        };

        tx.commit().await.map_err(|e: sqlx::Error| {
            error!("Database error committing client: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        info!("Client saved: {} (version {})", client.id, version);
        let mut saved = client.clone();
        saved.version = version;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: &Uuid) -> Result<(), DomainError> {
        // client_statuses rows go with it (ON DELETE CASCADE)
        sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting client: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
            .fetch_one(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error counting clients: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
