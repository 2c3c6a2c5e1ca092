// src/gsheets/auth.rs

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;

use super::SheetsError;
use crate::config::ServiceAccountKey;

/// Tokens are reused until shortly before Google's one-hour expiry.
const TOKEN_CACHE_LIFETIME: Duration = Duration::from_secs(55 * 60);
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);
const JWT_LIFETIME_SECS: u64 = 3600;
const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// JWT claims for the Google OAuth2 service-account flow.
#[derive(Debug, Serialize)]
struct JwtClaims {
    /// Issuer: the service account email.
    iss: String,
    /// Space-separated scopes.
    scope: String,
    /// Audience: the token endpoint.
    aud: String,
    iat: u64,
    exp: u64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

struct CachedToken {
    token: String,
    expires_at: SystemTime,
}

/// OAuth2 authenticator for a single service account. The bearer token is
/// fetched lazily on first use and cached; callers share one instance per
/// process through `SheetsClient`.
pub struct ServiceAccountAuth {
    key: ServiceAccountKey,
    scope: String,
    http: reqwest::Client,
    cached_token: RwLock<Option<CachedToken>>,
}

impl ServiceAccountAuth {
    pub fn new(key: ServiceAccountKey, scopes: &[&str]) -> Self {
        Self {
            key,
            scope: scopes.join(" "),
            http: reqwest::Client::new(),
            cached_token: RwLock::new(None),
        }
    }

    pub fn client_email(&self) -> &str {
        &self.key.client_email
    }

    /// Returns a valid bearer token, exchanging a fresh JWT when the cached
    /// one is absent or close to expiry.
    pub async fn access_token(&self) -> Result<String, SheetsError> {
        {
            let cached = self.cached_token.read().await;
            if let Some(token) = cached.as_ref() {
                if token.expires_at > SystemTime::now() + TOKEN_EXPIRY_MARGIN {
                    return Ok(token.token.clone());
                }
            }
        }

        let new_token = self.fetch_new_token().await?;

        {
            let mut cached = self.cached_token.write().await;
            *cached = Some(CachedToken {
                token: new_token.clone(),
                expires_at: SystemTime::now() + TOKEN_CACHE_LIFETIME,
            });
        }

        Ok(new_token)
    }

    async fn fetch_new_token(&self) -> Result<String, SheetsError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| SheetsError::Clock)?
            .as_secs();

        let claims = JwtClaims {
            iss: self.key.client_email.clone(),
            scope: self.scope.clone(),
            aud: self.key.token_uri.clone(),
            iat: now,
            exp: now + JWT_LIFETIME_SECS,
        };

        let header = Header::new(Algorithm::RS256);
        let encoding_key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())?;
        let assertion = encode(&header, &claims, &encoding_key)?;

        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT_TYPE),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            return Err(SheetsError::TokenExchange { status, body });
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_ignores_extra_fields() {
        let json = r#"{"access_token": "ya29.token", "expires_in": 3599, "token_type": "Bearer"}"#;
        let parsed: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.access_token, "ya29.token");
    }
}
