use chrono::{DateTime, Utc};
use driftmail_core::{
    EmailAddress, LinkedAccount, LinkedAccountStore, LinkedAccountStoreError, NewLinkedAccount,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresLinkedAccountStore {
    pool: sqlx::PgPool,
}

impl PostgresLinkedAccountStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresLinkedAccountStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkedAccountRow {
    id: Uuid,
    user_id: Uuid,
    mail_tm_id: String,
    email_address: String,
    created_at: DateTime<Utc>,
    is_active: bool,
}

impl TryFrom<LinkedAccountRow> for LinkedAccount {
    type Error = LinkedAccountStoreError;

    fn try_from(row: LinkedAccountRow) -> Result<Self, Self::Error> {
        let email_address = EmailAddress::try_from(row.email_address)
            .map_err(|e| LinkedAccountStoreError::UnexpectedError(e.to_string()))?;

        Ok(LinkedAccount {
            id: row.id,
            user_id: row.user_id,
            mail_tm_id: row.mail_tm_id,
            email_address,
            created_at: row.created_at,
            is_active: row.is_active,
        })
    }
}

#[async_trait::async_trait]
impl LinkedAccountStore for PostgresLinkedAccountStore {
    #[tracing::instrument(name = "Inserting linked account into PostgreSQL", skip_all)]
    async fn insert(
        &self,
        link: NewLinkedAccount,
    ) -> Result<LinkedAccount, LinkedAccountStoreError> {
        let row = sqlx::query_as::<_, LinkedAccountRow>(
            r#"
                INSERT INTO email_accounts (user_id, mail_tm_id, email_address)
                VALUES ($1, $2, $3)
                RETURNING id, user_id, mail_tm_id, email_address, created_at, is_active
            "#,
        )
        .bind(link.user_id)
        .bind(&link.mail_tm_id)
        .bind(link.email_address.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint().is_some() {
                    return LinkedAccountStoreError::LinkConflict;
                }
            }
            LinkedAccountStoreError::UnexpectedError(e.to_string())
        })?;

        row.try_into()
    }
}
