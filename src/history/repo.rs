use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// A saved search: the queried URL and its response payload, stamped at
/// creation. Records are immutable and never deleted. Ownership is by email
/// only; no foreign key ties this to the users table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub id: Uuid,
    pub user_email: String,
    pub search_url: String,
    pub search_response: serde_json::Value,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl SearchRecord {
    /// Persist a new record stamped with the current time.
    pub async fn create(
        db: &PgPool,
        user_email: &str,
        search_url: &str,
        search_response: &serde_json::Value,
    ) -> Result<SearchRecord, sqlx::Error> {
        sqlx::query_as::<_, SearchRecord>(
            r#"
            INSERT INTO search_history (user_email, search_url, search_response)
            VALUES ($1, $2, $3)
            RETURNING id, user_email, search_url, search_response, created_at
            "#,
        )
        .bind(user_email)
        .bind(search_url)
        .bind(search_response)
        .fetch_one(db)
        .await
    }

    /// All records for one owner, newest first. Unbounded by design.
    pub async fn list_by_email(
        db: &PgPool,
        user_email: &str,
    ) -> Result<Vec<SearchRecord>, sqlx::Error> {
        sqlx::query_as::<_, SearchRecord>(
            r#"
            SELECT id, user_email, search_url, search_response, created_at
            FROM search_history
            WHERE user_email = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_email)
        .fetch_all(db)
        .await
    }
}
