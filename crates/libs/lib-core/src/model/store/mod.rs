//! # Database Store
//!
//! Database connection pool, migrations, and repository implementations.

// region: --- Modules
pub mod company_repository;
pub mod error;
pub mod models;
pub mod repository;
pub mod user_repository;
// endregion: --- Modules

// region: --- Re-exports
pub use company_repository::CompanyRepository;
pub use error::StoreError;
pub use repository::{Repository, SqliteStore};
pub use user_repository::UserRepository;

#[cfg(feature = "mocks")]
pub use repository::MockRepository;
// endregion: --- Re-exports

// region: --- Types and Functions
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Type alias for SQLite connection pool.
pub type DbPool = SqlitePool;

/// Create a new SQLite connection pool, creating the database file (and its
/// parent directory) when missing.
pub async fn create_pool(database_url: &str) -> anyhow::Result<DbPool> {
    if let Some(parent) = sqlite_file_path(database_url).and_then(|p| p.parent()) {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            info!("Created database directory: {:?}", parent);
        }
    }

    let options = database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options).await?;

    Ok(pool)
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &DbPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// File path of an on-disk SQLite URL; `None` for in-memory databases.
fn sqlite_file_path(database_url: &str) -> Option<&Path> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);

    if path.is_empty() || path.contains(":memory:") {
        return None;
    }

    Some(Path::new(path))
}
// endregion: --- Types and Functions

/// Fixtures shared with downstream crates' tests through the `mocks` feature.
#[cfg(any(test, feature = "mocks"))]
pub mod test_support {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    /// In-memory database with the schema applied.
    ///
    /// A single connection keeps every query on the same in-memory database.
    pub async fn setup_test_db() -> DbPool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }
}
