//! # Auth Errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to hash password: {0}")]
    PwdHash(String),

    #[error("Failed to parse password hash: {0}")]
    PwdHashParse(String),

    #[error("Signing key must not be empty")]
    EmptySigningKey,

    #[error("Failed to encode JWT: {0}")]
    TokenEncode(String),

    #[error("Failed to decode JWT: {0}")]
    TokenDecode(String),

    #[error("Token carries no user id")]
    TokenMissingUserId,
}
