use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN, REFRESH_TOKEN,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish_non_exhaustive()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate_token(
        &self,
        user_id: Uuid,
        credential_version: i64,
        token_type: &str,
        expiry_seconds: i64,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        let claims = TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            token_type: token_type.to_string(),
            ver: credential_version,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(
        &self,
        user_id: Uuid,
        credential_version: i64,
    ) -> Result<String, TokenError> {
        self.generate_token(
            user_id,
            credential_version,
            ACCESS_TOKEN,
            self.config.access_token_expiry,
        )
    }

    fn generate_refresh_token(
        &self,
        user_id: Uuid,
        credential_version: i64,
    ) -> Result<String, TokenError> {
        self.generate_token(
            user_id,
            credential_version,
            REFRESH_TOKEN,
            self.config.refresh_token_expiry,
        )
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Token verification failed: foreign issuer");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!(error = %e, "Token verification failed: malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_at_least_32_bytes_long!!";

    fn config(access: i64, refresh: i64) -> JwtConfig {
        JwtConfig {
            secret_key: SECRET.to_string(),
            issuer: "accounts-test".to_string(),
            access_token_expiry: access,
            refresh_token_expiry: refresh,
        }
    }

    fn service() -> JwtTokenService {
        JwtTokenService::new(config(3600, 86400))
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let service = service();
        let user_id = Uuid::new_v4();

        let token = service.generate_access_token(user_id, 3).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.token_type, ACCESS_TOKEN);
        assert_eq!(claims.iss, "accounts-test");
        assert_eq!(claims.ver, 3);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_malformed_token() {
        let result = service().verify_token("invalid.jwt.token");
        assert!(matches!(result, Err(TokenError::MalformedToken)));
    }

    #[test]
    fn test_expired_token() {
        // beyond the 30s leeway
        let service = JwtTokenService::new(config(-35, 86400));
        let token = service.generate_access_token(Uuid::new_v4(), 0).unwrap();

        assert!(matches!(
            service.verify_token(&token),
            Err(TokenError::TokenExpired)
        ));
    }

    #[test]
    fn test_invalid_signature() {
        let token = service().generate_access_token(Uuid::new_v4(), 0).unwrap();

        let mut other = config(3600, 86400);
        other.secret_key = format!("{SECRET}_DIFFERENT");
        let result = JwtTokenService::new(other).verify_token(&token);

        assert!(matches!(result, Err(TokenError::InvalidSignature)));
    }

    #[test]
    fn test_foreign_issuer_rejected() {
        let token = service().generate_access_token(Uuid::new_v4(), 0).unwrap();

        let mut other = config(3600, 86400);
        other.issuer = "someone-else".to_string();
        let result = JwtTokenService::new(other).verify_token(&token);

        assert!(matches!(result, Err(TokenError::MalformedToken)));
    }

    #[test]
    fn test_refresh_token_carries_type_and_version() {
        let service = service();
        let user_id = Uuid::new_v4();

        let refresh = service.generate_refresh_token(user_id, 5).unwrap();
        let claims = service.verify_token(&refresh).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.token_type, REFRESH_TOKEN);
        assert_eq!(claims.ver, 5);
        assert!(claims.exp - claims.iat >= 86400);
    }

    #[test]
    fn test_expired_refresh_token_fails_verification() {
        let service = JwtTokenService::new(config(3600, -32));
        let refresh = service.generate_refresh_token(Uuid::new_v4(), 0).unwrap();

        assert!(matches!(
            service.verify_token(&refresh),
            Err(TokenError::TokenExpired)
        ));
    }

    #[test]
    fn test_debug_hides_secret() {
        let rendered = format!("{:?}", service());
        assert!(rendered.contains("JwtTokenService"));
        assert!(!rendered.contains(SECRET));
    }
}
