//! # Repository Port
//!
//! The storage interface the service layer depends on, and its SQLite
//! implementation. Lookups that match no rows, and updates or deletes that
//! affect none, return [`StoreError::NotFound`]; every other failure is the
//! underlying `sqlx::Error`.

use async_trait::async_trait;
use uuid::Uuid;

use super::models::{Company, CompanyForCreate, User, UserForCreate};
use super::{CompanyRepository, DbPool, StoreError, UserRepository};

/// CRUD over companies and users.
#[cfg_attr(feature = "mocks", mockall::automock)]
#[async_trait]
pub trait Repository: Send + Sync {
    async fn create_company(&self, company: CompanyForCreate) -> Result<Company, StoreError>;

    async fn get_company(&self, id: Uuid) -> Result<Company, StoreError>;

    async fn update_company(&self, company: &Company) -> Result<Company, StoreError>;

    async fn delete_company(&self, id: Uuid) -> Result<(), StoreError>;

    async fn create_user(&self, user: UserForCreate) -> Result<User, StoreError>;

    async fn find_one_user(&self, name: &str) -> Result<User, StoreError>;
}

/// [`Repository`] backed by a SQLite pool.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for SqliteStore {
    async fn create_company(&self, company: CompanyForCreate) -> Result<Company, StoreError> {
        Ok(CompanyRepository::create(&self.pool, company).await?)
    }

    async fn get_company(&self, id: Uuid) -> Result<Company, StoreError> {
        CompanyRepository::find_by_id(&self.pool, id)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn update_company(&self, company: &Company) -> Result<Company, StoreError> {
        match CompanyRepository::update(&self.pool, company).await? {
            0 => Err(StoreError::NotFound),
            _ => Ok(company.clone()),
        }
    }

    async fn delete_company(&self, id: Uuid) -> Result<(), StoreError> {
        match CompanyRepository::delete(&self.pool, id).await? {
            0 => Err(StoreError::NotFound),
            _ => Ok(()),
        }
    }

    async fn create_user(&self, user: UserForCreate) -> Result<User, StoreError> {
        Ok(UserRepository::create(&self.pool, user).await?)
    }

    async fn find_one_user(&self, name: &str) -> Result<User, StoreError> {
        UserRepository::find_by_name(&self.pool, name)
            .await?
            .ok_or(StoreError::NotFound)
    }
}
