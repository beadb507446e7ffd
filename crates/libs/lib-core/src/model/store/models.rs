use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

/// Legal form of a company.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CompanyType {
    #[serde(rename = "Corporations")]
    Corporation,
    NonProfit,
    Cooperative,
    #[serde(rename = "Sole Proprietorship")]
    SoleProprietorship,
}

impl CompanyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyType::Corporation => "Corporations",
            CompanyType::NonProfit => "NonProfit",
            CompanyType::Cooperative => "Cooperative",
            CompanyType::SoleProprietorship => "Sole Proprietorship",
        }
    }
}

impl std::fmt::Display for CompanyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Invalid company type: {0}")]
pub struct ParseCompanyTypeError(String);

impl std::str::FromStr for CompanyType {
    type Err = ParseCompanyTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Corporations" => Ok(CompanyType::Corporation),
            "NonProfit" => Ok(CompanyType::NonProfit),
            "Cooperative" => Ok(CompanyType::Cooperative),
            "Sole Proprietorship" => Ok(CompanyType::SoleProprietorship),
            _ => Err(ParseCompanyTypeError(s.to_string())),
        }
    }
}

impl TryFrom<String> for CompanyType {
    type Error = ParseCompanyTypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Company record, as stored and as returned by the API.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(rename = "amountOfEmployees")]
    pub amount_of_employees: i32,
    pub registered: bool,
    #[serde(rename = "type")]
    #[sqlx(try_from = "String")]
    pub company_type: CompanyType,
}

/// Data for inserting a company. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyForCreate {
    pub name: String,
    pub description: String,
    pub amount_of_employees: i32,
    pub registered: bool,
    pub company_type: CompanyType,
}

impl CompanyForCreate {
    /// Attach an id, producing the full record.
    pub fn into_company(self, id: Uuid) -> Company {
        Company {
            id,
            name: self.name,
            description: self.description,
            amount_of_employees: self.amount_of_employees,
            registered: self.registered,
            company_type: self.company_type,
        }
    }
}

/// User entity representing a complete user record from the database.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub password_hash: String,
}

/// Data structure for creating a new user.
///
/// Password should be hashed before creating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForCreate {
    pub name: String,
    pub password_hash: String,
}

impl UserForCreate {
    /// Create a new `UserForCreate` instance.
    pub fn new(name: String, password_hash: String) -> Self {
        Self {
            name,
            password_hash,
        }
    }
}
