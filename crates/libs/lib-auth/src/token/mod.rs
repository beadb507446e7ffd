//! # JWT Token Management
//!
//! HS256 token issuing and validation. A [`TokenManager`] owns the signing
//! key and the fixed time-to-live applied to every token it issues.

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use lib_utils::now_utc;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// JWT Claims structure containing user authentication information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject user id
    pub user_id: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Issues and verifies signed bearer tokens.
#[derive(Clone)]
pub struct TokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl TokenManager {
    /// Create a manager for the given signing secret and token TTL.
    pub fn new(secret: &str, ttl_secs: i64) -> Result<Self> {
        if secret.is_empty() {
            return Err(Error::EmptySigningKey);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        })
    }

    /// Token time-to-live in seconds.
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Issue a token bound to `user_id`.
    pub fn create_token(&self, user_id: &str) -> Result<String> {
        let now = now_utc();
        let exp = now + Duration::seconds(self.ttl_secs);

        let claims = Claims {
            user_id: user_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| Error::TokenEncode(e.to_string()))
    }

    /// Decode and validate a token: signature, algorithm, expiry and user id.
    ///
    /// Expiry is exact: a token is rejected from its `exp` second onwards.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| Error::TokenDecode(e.to_string()))?;

        if token_data.claims.user_id.is_empty() {
            return Err(Error::TokenMissingUserId);
        }

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}
