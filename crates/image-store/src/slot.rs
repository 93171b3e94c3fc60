//! Single-slot canonical image store using PostgreSQL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};
use uuid::Uuid;

use depth_common::{DepthError, DepthResult};

/// Database connection pool and canonical image operations.
///
/// At most one image is ever live. Replacing the canonical image clears
/// the slot and inserts the new row inside a single transaction, so a
/// concurrent reader never observes a partially-replaced slot.
pub struct ImageStore {
    pool: PgPool,
}

impl ImageStore {
    /// Create a new store connection from database URL.
    pub async fn connect(database_url: &str) -> DepthResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(|e| DepthError::DatabaseError(format!("Connection failed: {}", e)))?;

        Ok(Self { pool })
    }

    /// Run database migrations.
    pub async fn migrate(&self) -> DepthResult<()> {
        // Split SQL statements and execute them individually
        for statement in SCHEMA_SQL.split(';') {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                sqlx::query(trimmed)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| DepthError::DatabaseError(format!("Migration failed: {}", e)))?;
            }
        }

        Ok(())
    }

    /// Replace the canonical image, clearing any previous slot contents.
    pub async fn replace_canonical(
        &self,
        file_name: &str,
        image_data: &[u8],
    ) -> DepthResult<Uuid> {
        let id = Uuid::new_v4();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DepthError::DatabaseError(format!("Transaction begin failed: {}", e)))?;

        sqlx::query("DELETE FROM canonical_images")
            .execute(&mut *tx)
            .await
            .map_err(|e| DepthError::DatabaseError(format!("Delete failed: {}", e)))?;

        sqlx::query(
            "INSERT INTO canonical_images (id, file_name, image_data, stored_at) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(file_name)
        .bind(image_data)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(|e| DepthError::DatabaseError(format!("Insert failed: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DepthError::DatabaseError(format!("Transaction commit failed: {}", e)))?;

        tracing::info!(
            "Replaced canonical image: id={}, {} bytes",
            id,
            image_data.len()
        );
        Ok(id)
    }

    /// Fetch the live canonical image, if one has been stored.
    pub async fn fetch_canonical(&self) -> DepthResult<Option<CanonicalImage>> {
        let row = sqlx::query_as::<_, CanonicalRow>(
            "SELECT id, file_name, image_data, stored_at FROM canonical_images \
             ORDER BY stored_at DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DepthError::DatabaseError(format!("Query failed: {}", e)))?;

        Ok(row.map(|r| r.into()))
    }

    /// Count stored images (0 or 1). Used by readiness probes.
    pub async fn canonical_count(&self) -> DepthResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM canonical_images")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DepthError::DatabaseError(format!("Query failed: {}", e)))?;

        Ok(count)
    }
}

/// The stored canonical image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalImage {
    pub id: Uuid,
    pub file_name: String,
    pub image_data: Vec<u8>,
    pub stored_at: DateTime<Utc>,
}

/// Internal row type for database queries.
#[derive(FromRow)]
struct CanonicalRow {
    id: Uuid,
    file_name: String,
    image_data: Vec<u8>,
    stored_at: DateTime<Utc>,
}

impl From<CanonicalRow> for CanonicalImage {
    fn from(row: CanonicalRow) -> Self {
        CanonicalImage {
            id: row.id,
            file_name: row.file_name,
            image_data: row.image_data,
            stored_at: row.stored_at,
        }
    }
}

/// Database schema SQL.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS canonical_images (
    id UUID PRIMARY KEY,
    file_name TEXT NOT NULL,
    image_data BYTEA NOT NULL,
    stored_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
"#;
