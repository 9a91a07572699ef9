use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::booking::AuthContext;
use crate::error::{AppError, AppResult};

/// Role allowed to book seats.
pub const CUSTOMER_ROLE: &str = "user";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,       // user id
    pub role: String,
    pub exp: i64,        // expiration timestamp
    pub iat: i64,        // issued at timestamp
}

impl AuthContext for Claims {
    fn current_user_id(&self) -> Option<Uuid> {
        Some(self.sub)
    }
}

/// Issue a token. Sessions are owned by the identity service; this is used by
/// tooling and tests that need a valid bearer token.
pub fn create_token(
    user_id: Uuid,
    role: &str,
    secret: &str,
    expiration_hours: i64,
) -> AppResult<String> {
    let now = Utc::now();
    let exp = now + Duration::hours(expiration_hours);

    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
}

pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
}
