//! # Company Service
//!
//! Company CRUD, user registration, login and token handling on top of a
//! [`Repository`].

use std::sync::Arc;

use lib_auth::{hash_password, verify_password, Claims, TokenManager};
use lib_core::model::{Company, CompanyForCreate, User, UserForCreate};
use lib_core::{AppError, Repository, Result, StoreError};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Stateless apart from its collaborators; share it behind an `Arc`.
pub struct CompanyService {
    repo: Arc<dyn Repository>,
    tokens: TokenManager,
}

impl CompanyService {
    pub fn new(repo: Arc<dyn Repository>, tokens: TokenManager) -> Self {
        Self { repo, tokens }
    }

    /// Lifetime of issued tokens, in seconds.
    pub fn token_ttl_secs(&self) -> i64 {
        self.tokens.ttl_secs()
    }

    // region: --- Companies

    #[instrument(skip(self, company), fields(name = %company.name))]
    pub async fn create_company(&self, company: CompanyForCreate) -> Result<Company> {
        let created = self.repo.create_company(company).await.map_err(|e| {
            error!("[COMPANY] Create failed: {}", e);
            AppError::CreateCompany(e.to_string())
        })?;

        info!("[COMPANY] Created {} ({})", created.name, created.id);
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_company(&self, id: Uuid) -> Result<Company> {
        self.repo.get_company(id).await.map_err(|e| match e {
            StoreError::NotFound => {
                debug!("[COMPANY] {} not found", id);
                AppError::CompanyNotFound(id)
            }
            StoreError::Database(e) => {
                error!("[COMPANY] Get {} failed: {}", id, e);
                AppError::GetCompany(e.to_string())
            }
        })
    }

    /// Replace every field of an existing company. Returns the stored record.
    #[instrument(skip(self, company), fields(id = %company.id))]
    pub async fn update_company(&self, company: &Company) -> Result<Company> {
        let updated = self.repo.update_company(company).await.map_err(|e| match e {
            StoreError::NotFound => {
                warn!("[COMPANY] Update of unknown company {}", company.id);
                AppError::CompanyNotFound(company.id)
            }
            StoreError::Database(e) => {
                error!("[COMPANY] Update {} failed: {}", company.id, e);
                AppError::UpdateCompany(e.to_string())
            }
        })?;

        info!("[COMPANY] Updated {}", updated.id);
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_company(&self, id: Uuid) -> Result<()> {
        self.repo.delete_company(id).await.map_err(|e| match e {
            StoreError::NotFound => {
                warn!("[COMPANY] Delete of unknown company {}", id);
                AppError::CompanyNotFound(id)
            }
            StoreError::Database(e) => {
                error!("[COMPANY] Delete {} failed: {}", id, e);
                AppError::DeleteCompany(e.to_string())
            }
        })?;

        info!("[COMPANY] Deleted {}", id);
        Ok(())
    }

    // endregion: --- Companies

    // region: --- Users

    /// Register a user, storing an Argon2 hash of the password.
    #[instrument(skip(self, password))]
    pub async fn create_user(&self, name: &str, password: &str) -> Result<User> {
        let password = password.to_owned();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
            .map_err(|e| {
                error!("[USER] Password hashing failed: {}", e);
                AppError::CreateUser(e.to_string())
            })?;

        let user = self
            .repo
            .create_user(UserForCreate::new(name.to_owned(), password_hash))
            .await
            .map_err(|e| {
                error!("[USER] Create {} failed: {}", name, e);
                AppError::CreateUser(e.to_string())
            })?;

        info!("[USER] Registered {} (id: {})", user.name, user.id);
        Ok(user)
    }

    /// Check a name/password pair against the stored hash.
    #[instrument(skip(self, password))]
    pub async fn login(&self, name: &str, password: &str) -> Result<User> {
        let user = self.repo.find_one_user(name).await.map_err(|e| {
            warn!("[LOGIN] Lookup of {} failed: {}", name, e);
            AppError::FindOneUser(e.to_string())
        })?;

        let password = password.to_owned();
        let hash = user.password_hash.clone();
        let verified = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        match verified {
            Ok(true) => {
                info!("[LOGIN] {} authenticated", user.name);
                Ok(user)
            }
            Ok(false) => {
                warn!("[LOGIN] Wrong password for {}", name);
                Err(AppError::WrongPassword)
            }
            Err(e) => {
                error!("[LOGIN] Stored hash for {} is unusable: {}", name, e);
                Err(AppError::WrongPassword)
            }
        }
    }

    // endregion: --- Users

    // region: --- Tokens

    /// Sign a token carrying `user_id`, valid for [`Self::token_ttl_secs`].
    pub fn create_token(&self, user_id: &str) -> Result<String> {
        self.tokens.create_token(user_id).map_err(|e| {
            error!("[TOKEN] Signing failed for {}: {}", user_id, e);
            AppError::CreateJwtToken(e.to_string())
        })
    }

    /// Check signature and expiry; the claims must carry a user id.
    pub fn verify_token(&self, token: &str) -> lib_auth::Result<Claims> {
        self.tokens.verify_token(token)
    }

    // endregion: --- Tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::model::store::MockRepository;
    use lib_core::model::CompanyType;
    use mockall::predicate::eq;

    const SECRET: &str = "test-secret-key-must-be-at-least-32-characters-long!";

    fn service(repo: MockRepository) -> CompanyService {
        CompanyService::new(Arc::new(repo), TokenManager::new(SECRET, 120).unwrap())
    }

    fn acme(id: Uuid) -> Company {
        Company {
            id,
            name: "Acme".to_string(),
            description: String::new(),
            amount_of_employees: 10,
            registered: true,
            company_type: CompanyType::NonProfit,
        }
    }

    fn db_error() -> StoreError {
        StoreError::Database(sqlx::Error::PoolTimedOut)
    }

    #[tokio::test]
    async fn test_get_company_not_found() {
        let id = Uuid::new_v4();
        let mut repo = MockRepository::new();
        repo.expect_get_company()
            .with(eq(id))
            .times(1)
            .returning(|_| Err(StoreError::NotFound));

        let err = service(repo).get_company(id).await.unwrap_err();

        assert!(matches!(err, AppError::CompanyNotFound(found) if found == id));
    }

    #[tokio::test]
    async fn test_get_company_database_failure() {
        let mut repo = MockRepository::new();
        repo.expect_get_company().returning(|_| Err(db_error()));

        let err = service(repo).get_company(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, AppError::GetCompany(_)));
    }

    #[tokio::test]
    async fn test_create_company_wraps_store_error() {
        let mut repo = MockRepository::new();
        repo.expect_create_company().returning(|_| Err(db_error()));

        let input = CompanyForCreate {
            name: "Acme".to_string(),
            description: String::new(),
            amount_of_employees: 1,
            registered: false,
            company_type: CompanyType::Cooperative,
        };
        let err = service(repo).create_company(input).await.unwrap_err();

        assert!(matches!(err, AppError::CreateCompany(_)));
    }

    #[tokio::test]
    async fn test_update_and_delete_map_not_found() {
        let id = Uuid::new_v4();
        let mut repo = MockRepository::new();
        repo.expect_update_company()
            .returning(|_| Err(StoreError::NotFound));
        repo.expect_delete_company()
            .returning(|_| Err(StoreError::NotFound));
        let service = service(repo);

        assert!(matches!(
            service.update_company(&acme(id)).await,
            Err(AppError::CompanyNotFound(_))
        ));
        assert!(matches!(
            service.delete_company(id).await,
            Err(AppError::CompanyNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_company_database_failure() {
        let mut repo = MockRepository::new();
        repo.expect_delete_company().returning(|_| Err(db_error()));

        let err = service(repo).delete_company(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, AppError::DeleteCompany(_)));
    }

    #[tokio::test]
    async fn test_create_user_stores_hash_not_password() {
        let mut repo = MockRepository::new();
        repo.expect_create_user()
            .withf(|user| user.name == "bill" && user.password_hash != "password")
            .times(1)
            .returning(|user| {
                Ok(User {
                    id: 1,
                    name: user.name,
                    password_hash: user.password_hash,
                })
            });

        let user = service(repo).create_user("bill", "password").await.unwrap();

        assert!(verify_password("password", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_create_user_duplicate() {
        let mut repo = MockRepository::new();
        repo.expect_create_user().returning(|_| Err(db_error()));

        let err = service(repo).create_user("bill", "password").await.unwrap_err();

        assert!(matches!(err, AppError::CreateUser(_)));
    }

    #[tokio::test]
    async fn test_login() {
        let hash = hash_password("password").unwrap();
        let mut repo = MockRepository::new();
        repo.expect_find_one_user()
            .withf(|name| name == "bill")
            .returning(move |_| {
                Ok(User {
                    id: 7,
                    name: "bill".to_string(),
                    password_hash: hash.clone(),
                })
            });
        repo.expect_find_one_user()
            .withf(|name| name != "bill")
            .returning(|_| Err(StoreError::NotFound));
        let service = service(repo);

        assert_eq!(service.login("bill", "password").await.unwrap().id, 7);
        assert!(matches!(
            service.login("bill", "wrong").await,
            Err(AppError::WrongPassword)
        ));
        assert!(matches!(
            service.login("ghost", "password").await,
            Err(AppError::FindOneUser(_))
        ));
    }

    #[test]
    fn test_token_round_trip() {
        let service = service(MockRepository::new());

        let token = service.create_token("42").unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.user_id, "42");
        assert_eq!(service.token_ttl_secs(), 120);
        assert!(service.verify_token("not-a-token").is_err());
    }
}
