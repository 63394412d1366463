#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

    pub fn create_test_jwt_service() -> JwtTokenService {
        crate::tests::support::load_test_env();
        let jwt_config = JwtConfig {
            issuer: "accounts-test".to_string(),
            secret_key: "test_secret_key_for_testing_only".to_string(),
            access_token_expiry: 3600,
            refresh_token_expiry: 86400,
        };
        JwtTokenService::new(jwt_config)
    }

    /// Registered as `web::Data` in handler tests, as `main` does.
    pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
        Arc::new(create_test_jwt_service())
    }

    /// Access token issued at `credential_version`.
    pub fn access_token_at(user_id: Uuid, credential_version: i64) -> String {
        create_test_jwt_service()
            .generate_access_token(user_id, credential_version)
            .expect("access token")
    }

    pub fn access_token_for(user_id: Uuid) -> String {
        access_token_at(user_id, 0)
    }

    pub fn refresh_token_for(user_id: Uuid) -> String {
        create_test_jwt_service()
            .generate_refresh_token(user_id, 0)
            .expect("refresh token")
    }

    /// `Authorization` header value for `user_id` at credential version 0.
    pub fn bearer(user_id: Uuid) -> String {
        format!("Bearer {}", access_token_for(user_id))
    }

    pub fn bearer_at(user_id: Uuid, credential_version: i64) -> String {
        format!("Bearer {}", access_token_at(user_id, credential_version))
    }
}
