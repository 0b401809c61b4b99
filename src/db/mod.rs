//! Database connection and operations

pub mod routes;
pub mod sqlite_helpers;

use std::str::FromStr;

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub use routes::{PaginatedRoutes, RouteFilter, RouteOrderBy, RouteRecord, RouteRepository};

/// Database wrapper providing connection pool access
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database wrapper from an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the maximum connection pool size from environment or default
    fn get_max_connections() -> u32 {
        std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10)
    }

    /// Create a new database connection pool
    ///
    /// Accepts either a plain file path or a sqlite: URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let url = if url.starts_with("sqlite:") {
            url.to_string()
        } else {
            format!("sqlite://{}", url)
        };

        let options = SqliteConnectOptions::from_str(&url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(Self::get_max_connections())
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Get the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get a routes repository
    pub fn routes(&self) -> RouteRepository {
        RouteRepository::new(self.pool.clone())
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}
