//! # User Repository
//!
//! Provides database access layer for user-related operations.
//!
//! ## Example
//!
//! ```rust,no_run
//! # use lib_core::model::store::{create_pool, UserRepository};
//! # use lib_core::model::UserForCreate;
//! # async fn example() -> anyhow::Result<()> {
//! let pool = create_pool("sqlite::memory:").await?;
//!
//! let user = UserRepository::create(
//!     &pool,
//!     UserForCreate::new("alice".to_string(), "hashed_password".to_string()),
//! ).await?;
//!
//! let found = UserRepository::find_by_name(&pool, "alice").await?;
//! assert_eq!(found.map(|u| u.id), Some(user.id));
//! # Ok(())
//! # }
//! ```

use super::models::{User, UserForCreate};
use super::DbPool;
use sqlx::query_as;

/// User repository for database operations.
pub struct UserRepository;

impl UserRepository {
    /// Find a user by their name.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(User))` - User found with matching name
    /// * `Ok(None)` - No user found with that name
    /// * `Err(sqlx::Error)` - Database error occurred
    pub async fn find_by_name(pool: &DbPool, name: &str) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>("SELECT id, name, password_hash FROM users WHERE name = ?")
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Create a new user in the database.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if:
    /// - Name already exists (UNIQUE constraint violation)
    /// - Database connection fails
    pub async fn create(pool: &DbPool, user: UserForCreate) -> Result<User, sqlx::Error> {
        let result = sqlx::query("INSERT INTO users (name, password_hash) VALUES (?, ?)")
            .bind(&user.name)
            .bind(&user.password_hash)
            .execute(pool)
            .await?;

        let id = result.last_insert_rowid();

        query_as::<_, User>("SELECT id, name, password_hash FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::store::test_support::setup_test_db;

    // ========== User Creation Tests ==========

    #[tokio::test]
    async fn test_create_user() {
        let pool = setup_test_db().await;

        let user = UserRepository::create(
            &pool,
            UserForCreate::new("bill".to_string(), "hash".to_string()),
        )
        .await
        .unwrap();

        assert!(user.id > 0);
        assert_eq!(user.name, "bill");
        assert_eq!(user.password_hash, "hash");
    }

    #[tokio::test]
    async fn test_create_user_duplicate_name() {
        let pool = setup_test_db().await;

        UserRepository::create(&pool, UserForCreate::new("bill".into(), "a".into()))
            .await
            .unwrap();
        let result =
            UserRepository::create(&pool, UserForCreate::new("bill".into(), "b".into())).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_ids_increase() {
        let pool = setup_test_db().await;

        let first = UserRepository::create(&pool, UserForCreate::new("ann".into(), "a".into()))
            .await
            .unwrap();
        let second = UserRepository::create(&pool, UserForCreate::new("bob".into(), "b".into()))
            .await
            .unwrap();

        assert!(second.id > first.id);
    }

    // ========== User Retrieval Tests ==========

    #[tokio::test]
    async fn test_find_by_name() {
        let pool = setup_test_db().await;
        UserRepository::create(&pool, UserForCreate::new("bill".into(), "hash".into()))
            .await
            .unwrap();

        let found = UserRepository::find_by_name(&pool, "bill").await.unwrap();

        assert_eq!(
            found.expect("User should exist after creation").password_hash,
            "hash"
        );
    }

    #[tokio::test]
    async fn test_find_by_name_not_found() {
        let pool = setup_test_db().await;

        let found = UserRepository::find_by_name(&pool, "nobody").await.unwrap();

        assert!(found.is_none());
    }
}
