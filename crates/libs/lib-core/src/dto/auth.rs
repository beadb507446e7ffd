//! # Authentication Data Transfer Objects
//!
//! - `POST /v1/users` - [`UserRequest`] -> [`UserCreateResponse`]
//! - `POST /v1/login` - [`UserRequest`] -> [`UserLoginResponse`]

use lib_utils::validation::{validate_alpha, validate_not_empty, validate_required};
use serde::{Deserialize, Serialize};

use super::Validate;

/// Credentials used both to register and to log in.
///
/// ```json
/// { "name": "bill", "password": "password" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

impl Validate for UserRequest {
    fn validate(&self) -> Result<(), String> {
        validate_not_empty(&self.name, "name")?;
        validate_alpha(&self.name, "name")?;
        validate_required(&self.password, "password")
    }
}

/// Registered user, without the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserCreateResponse {
    pub id: i64,
    pub name: String,
}

/// Successful login. `hash` is the signed bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserLoginResponse {
    pub hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, password: &str) -> UserRequest {
        UserRequest {
            name: name.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_user_request_validation() {
        assert!(request("bill", "password").validate().is_ok());
        assert!(request("", "password").validate().is_err());
        assert!(request("bill1", "password").validate().is_err());
        assert!(request("bill", "").validate().is_err());
        assert!(request("Jürgen", "password").validate().is_err());
    }

    #[test]
    fn test_whitespace_password_is_accepted() {
        assert!(request("bill", "   ").validate().is_ok());
    }

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let req: UserRequest = serde_json::from_str(r#"{"name":"bill"}"#).unwrap();
        assert_eq!(req.password, "");
        assert_eq!(req.validate().unwrap_err(), "password is required");
    }
}
