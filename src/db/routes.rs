//! Admission routes database repository
//!
//! Read-side operations for the route catalog: by-ID lookup and a
//! filtered, sorted, paginated list with an independent total count.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;

use crate::db::sqlite_helpers::{bool_to_int, int_to_bool, str_to_datetime};

/// An admission route record from the database
#[derive(Debug, Clone)]
pub struct RouteRecord {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl sqlx::FromRow<'_, SqliteRow> for RouteRecord {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        use sqlx::Row;

        let status_int: i32 = row.try_get("status")?;
        let created_str: String = row.try_get("created_at")?;
        let updated_str: String = row.try_get("updated_at")?;

        Ok(Self {
            id: row.try_get("id")?,
            code: row.try_get("code")?,
            name: row.try_get("name")?,
            status: int_to_bool(status_int),
            created_at: str_to_datetime(&created_str)
                .map_err(|e| sqlx::Error::Decode(e.into()))?,
            updated_at: str_to_datetime(&updated_str)
                .map_err(|e| sqlx::Error::Decode(e.into()))?,
        })
    }
}

/// Filter options for querying routes
///
/// All conditions are ANDed together.
#[derive(Debug, Clone, Default)]
pub struct RouteFilter {
    /// Substring match against the code OR name columns
    pub search: Option<String>,
    /// Equality filter on the active flag
    pub status: Option<bool>,
}

/// Sort order for route list queries
///
/// `column` and `direction` come from a fixed mapping, never user text.
#[derive(Debug, Clone)]
pub struct RouteOrderBy {
    pub column: String,
    pub direction: String,
}

/// Result for paginated route queries
#[derive(Debug, Clone)]
pub struct PaginatedRoutes {
    pub routes: Vec<RouteRecord>,
    pub total_count: i64,
}

const SELECT_COLUMNS: &str = "id, code, name, status, created_at, updated_at";

/// Routes repository for database operations
pub struct RouteRepository {
    pool: SqlitePool,
}

impl RouteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a single route by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<RouteRecord>> {
        let record = sqlx::query_as::<_, RouteRecord>(&format!(
            "SELECT {} FROM routes WHERE id = ?1",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Get routes with filtering, sorting and pagination
    ///
    /// The total count is computed by a second query against the same WHERE
    /// clause, ignoring LIMIT/OFFSET. Both queries run concurrently.
    pub async fn list(
        &self,
        filter: RouteFilter,
        order: Option<RouteOrderBy>,
        limit: i64,
        offset: i64,
    ) -> Result<PaginatedRoutes> {
        // Build the WHERE clause dynamically
        let mut conditions = Vec::new();

        if filter.search.is_some() {
            conditions
                .push("(code LIKE '%' || ? || '%' OR name LIKE '%' || ? || '%')".to_string());
        }

        if filter.status.is_some() {
            conditions.push("status = ?".to_string());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let order_clause = order
            .map(|o| format!("ORDER BY {} {}", o.column, o.direction))
            .unwrap_or_default();

        let count_sql = format!("SELECT COUNT(*) FROM routes {}", where_clause);
        let data_sql = format!(
            "SELECT {} FROM routes {} {} LIMIT ? OFFSET ?",
            SELECT_COLUMNS, where_clause, order_clause
        );
        tracing::debug!(sql = %data_sql, "Executing route list query");

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        let mut data_query = sqlx::query_as::<_, RouteRecord>(&data_sql);

        if let Some(ref search) = filter.search {
            // The search term is bound twice: once per matched column
            count_query = count_query.bind(search).bind(search);
            data_query = data_query.bind(search).bind(search);
        }
        if let Some(status) = filter.status {
            count_query = count_query.bind(bool_to_int(status));
            data_query = data_query.bind(bool_to_int(status));
        }

        data_query = data_query.bind(limit).bind(offset);

        let (routes, total_count) = tokio::try_join!(
            data_query.fetch_all(&self.pool),
            count_query.fetch_one(&self.pool),
        )?;

        Ok(PaginatedRoutes {
            routes,
            total_count,
        })
    }
}
