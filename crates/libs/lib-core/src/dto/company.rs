//! # Company Data Transfer Objects
//!
//! - `POST /v1/companies` - [`CompanyCreateRequest`] -> [`Company`]
//! - `PUT /v1/companies` - [`CompanyUpdateRequest`] -> [`Company`]
//!
//! Field names follow the stored record: `name`, `description`,
//! `amountOfEmployees`, `registered`, `type`.

use lib_utils::validation::{validate_max_length, validate_not_empty};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Validate;
use crate::model::{Company, CompanyForCreate, CompanyType};

pub const NAME_MAX_LEN: usize = 255;
pub const DESCRIPTION_MAX_LEN: usize = 3000;

/// Body of `POST /v1/companies`. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyCreateRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "amountOfEmployees")]
    pub amount_of_employees: i32,
    #[serde(default)]
    pub registered: bool,
    #[serde(rename = "type")]
    pub company_type: CompanyType,
}

impl Validate for CompanyCreateRequest {
    fn validate(&self) -> Result<(), String> {
        validate_company_fields(&self.name, &self.description)
    }
}

impl From<CompanyCreateRequest> for CompanyForCreate {
    fn from(req: CompanyCreateRequest) -> Self {
        CompanyForCreate {
            name: req.name,
            description: req.description,
            amount_of_employees: req.amount_of_employees,
            registered: req.registered,
            company_type: req.company_type,
        }
    }
}

/// Body of `PUT /v1/companies`: the full record, addressed by `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyUpdateRequest {
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "amountOfEmployees")]
    pub amount_of_employees: i32,
    #[serde(default)]
    pub registered: bool,
    #[serde(rename = "type")]
    pub company_type: CompanyType,
}

impl Validate for CompanyUpdateRequest {
    fn validate(&self) -> Result<(), String> {
        if self.id.is_none() {
            return Err("id is required".to_string());
        }
        validate_company_fields(&self.name, &self.description)
    }
}

impl CompanyUpdateRequest {
    /// Convert into the stored record. `None` when `id` is missing.
    pub fn into_company(self) -> Option<Company> {
        let id = self.id?;
        Some(Company {
            id,
            name: self.name,
            description: self.description,
            amount_of_employees: self.amount_of_employees,
            registered: self.registered,
            company_type: self.company_type,
        })
    }
}

fn validate_company_fields(name: &str, description: &str) -> Result<(), String> {
    validate_not_empty(name, "name")?;
    validate_max_length(name, NAME_MAX_LEN, "name")?;
    validate_max_length(description, DESCRIPTION_MAX_LEN, "description")
}
