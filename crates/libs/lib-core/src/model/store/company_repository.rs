//! # Company Repository
//!
//! SQL access for the `companies` table.

use super::models::{Company, CompanyForCreate};
use super::DbPool;
use sqlx::query_as;
use uuid::Uuid;

const COMPANY_COLUMNS: &str =
    "id, name, description, amount_of_employees, registered, company_type";

/// Company repository for database operations.
pub struct CompanyRepository;

impl CompanyRepository {
    /// Insert a company under a freshly generated v4 id.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the name is already taken (UNIQUE constraint)
    /// or a column check fails.
    pub async fn create(pool: &DbPool, company: CompanyForCreate) -> Result<Company, sqlx::Error> {
        let id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO companies (id, name, description, amount_of_employees, registered, company_type) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&company.name)
        .bind(&company.description)
        .bind(company.amount_of_employees)
        .bind(company.registered)
        .bind(company.company_type.as_str())
        .execute(pool)
        .await?;

        Ok(company.into_company(id))
    }

    /// Find a company by id.
    pub async fn find_by_id(pool: &DbPool, id: Uuid) -> Result<Option<Company>, sqlx::Error> {
        query_as::<_, Company>(&format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite every mutable column of the company with `company.id`.
    ///
    /// Returns the number of rows affected (0 when the id is unknown).
    pub async fn update(pool: &DbPool, company: &Company) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE companies \
             SET name = ?, description = ?, amount_of_employees = ?, registered = ?, company_type = ? \
             WHERE id = ?",
        )
        .bind(&company.name)
        .bind(&company.description)
        .bind(company.amount_of_employees)
        .bind(company.registered)
        .bind(company.company_type.as_str())
        .bind(company.id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a company by id.
    ///
    /// Returns the number of rows affected (0 when the id is unknown).
    pub async fn delete(pool: &DbPool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
