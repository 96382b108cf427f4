//! Postgres-backed vendor store.
//!
//! ## Schema
//!
//! ```sql
//! CREATE TABLE vendors (
//!     id         TEXT PRIMARY KEY,
//!     first_name TEXT NULL,
//!     last_name  TEXT NULL,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//! ```
//!
//! `get_all` orders by `created_at, id` so listing is stable across calls.
//! `put` is a single upsert statement; `created_at` is kept on overwrite.

use std::sync::Arc;

use sqlx::{FromRow, PgPool};
use tracing::instrument;

use vendorhub_core::VendorId;
use vendorhub_vendors::Vendor;

use super::r#trait::{StoreError, VendorStore};

#[derive(Debug, FromRow)]
struct VendorRow {
    id: String,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl TryFrom<VendorRow> for Vendor {
    type Error = StoreError;

    fn try_from(row: VendorRow) -> Result<Self, Self::Error> {
        let id = VendorId::try_from(row.id).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        Ok(Vendor {
            id: Some(id),
            first_name: row.first_name,
            last_name: row.last_name,
        })
    }
}

/// Postgres-backed vendor store.
///
/// Uses SQLx connection pool which is thread-safe (Arc + Send + Sync).
#[derive(Debug, Clone)]
pub struct PostgresVendorStore {
    pool: Arc<PgPool>,
}

impl PostgresVendorStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Connect to `database_url` and make sure the schema exists.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;
        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    /// Create the `vendors` table if it does not exist yet.
    #[instrument(skip(self), err)]
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS vendors (
                id         TEXT PRIMARY KEY,
                first_name TEXT NULL,
                last_name  TEXT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("migrate", e))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl VendorStore for PostgresVendorStore {
    #[instrument(skip(self), err)]
    async fn get_all(&self) -> Result<Vec<Vendor>, StoreError> {
        let rows: Vec<VendorRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name
            FROM vendors
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_all", e))?;

        rows.into_iter().map(Vendor::try_from).collect()
    }

    #[instrument(skip(self, id), fields(vendor_id = %id), err)]
    async fn get(&self, id: &VendorId) -> Result<Option<Vendor>, StoreError> {
        let row: Option<VendorRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name
            FROM vendors
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("get", e))?;

        row.map(Vendor::try_from).transpose()
    }

    #[instrument(skip(self, vendor), err)]
    async fn put(&self, mut vendor: Vendor) -> Result<Vendor, StoreError> {
        let id = vendor.id.get_or_insert_with(VendorId::generate).clone();

        sqlx::query(
            r#"
            INSERT INTO vendors (id, first_name, last_name)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET first_name = EXCLUDED.first_name,
                last_name  = EXCLUDED.last_name
            "#,
        )
        .bind(id.as_str())
        .bind(vendor.first_name.as_deref())
        .bind(vendor.last_name.as_deref())
        .execute(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("put", e))?;

        Ok(vendor)
    }
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => StoreError::Backend(format!(
            "database error in {}: {}",
            operation,
            db_err.message()
        )),
        sqlx::Error::ColumnDecode { index, source } => {
            StoreError::Corrupt(format!("{operation}: column {index}: {source}"))
        }
        other => StoreError::Backend(format!("{operation}: {other}")),
    }
}
