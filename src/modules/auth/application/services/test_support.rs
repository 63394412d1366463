//! In-memory ports shared by the service tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::{Identity, UserId};
use crate::auth::application::ports::outgoing::{
    token_provider::TokenProvider,
    token_repository::{TokenRepository, TokenRepositoryError},
    user_query::{UserQuery, UserQueryError, UserQueryResult},
    user_repository::{CreateUserData, UserRepository, UserRepositoryError, UserResult},
};
use crate::auth::application::services::password::{PasswordPolicyEngine, StandardPasswordPolicy};

pub use super::password::policy_engine::test_support::PlainHasher;

pub const CURRENT_PASSWORD: &str = "ValidPass123456,./";

pub fn engine() -> PasswordPolicyEngine {
    PasswordPolicyEngine::new(
        Arc::new(PlainHasher),
        Arc::new(StandardPasswordPolicy::default()),
    )
}

pub fn token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_at_least_32_bytes_long!!".to_string(),
        issuer: "accounts-test".to_string(),
        access_token_expiry: 900,
        refresh_token_expiry: 3600,
    }))
}

/// alicesmith@test.com / alice / smith with `CURRENT_PASSWORD`.
pub fn alice() -> Identity {
    Identity {
        id: UserId::from(Uuid::new_v4()),
        email: "alicesmith@test.com".to_string(),
        given_name: "alice".to_string(),
        family_name: "smith".to_string(),
        password_hash: format!("plain${CURRENT_PASSWORD}"),
        credential_version: 0,
        is_active: true,
    }
}

/// Users table stand-in with the same compare-and-swap rule as Postgres.
#[derive(Clone, Default)]
pub struct InMemoryUsers {
    users: Arc<Mutex<HashMap<Uuid, Identity>>>,
    fail: bool,
}

impl InMemoryUsers {
    pub fn with(identity: Identity) -> Self {
        let store = Self::default();
        store.insert(identity);
        store
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, identity: Identity) {
        self.users
            .lock()
            .unwrap()
            .insert(identity.id.value(), identity);
    }

    pub fn get(&self, id: Uuid) -> Option<Identity> {
        self.users.lock().unwrap().get(&id).cloned()
    }

    /// Simulates a concurrent writer bumping the version.
    pub fn bump_version(&self, id: Uuid) {
        if let Some(identity) = self.users.lock().unwrap().get_mut(&id) {
            identity.credential_version += 1;
        }
    }

    fn to_query_result(identity: &Identity) -> UserQueryResult {
        UserQueryResult {
            id: identity.id.value(),
            email: identity.email.clone(),
            password_hash: identity.password_hash.clone(),
            credential_version: identity.credential_version,
            is_active: identity.is_active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn to_user_result(identity: &Identity) -> UserResult {
        UserResult {
            id: identity.id.value(),
            email: identity.email.clone(),
            credential_version: identity.credential_version,
            is_active: identity.is_active,
        }
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        if self.fail {
            return Err(UserQueryError::DatabaseError("connection refused".to_string()));
        }
        Ok(self.get(user_id).as_ref().map(Self::to_query_result))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        if self.fail {
            return Err(UserQueryError::DatabaseError("connection refused".to_string()));
        }
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .map(Self::to_query_result))
    }

    async fn find_identity(&self, user_id: Uuid) -> Result<Option<Identity>, UserQueryError> {
        if self.fail {
            return Err(UserQueryError::DatabaseError("connection refused".to_string()));
        }
        Ok(self.get(user_id))
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == data.email) {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let identity = Identity {
            id: UserId::from(Uuid::new_v4()),
            email: data.email,
            given_name: String::new(),
            family_name: String::new(),
            password_hash: data.password_hash,
            credential_version: 0,
            is_active: true,
        };
        let result = Self::to_user_result(&identity);
        users.insert(identity.id.value(), identity);
        Ok(result)
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        expected_version: i64,
        new_password_hash: String,
    ) -> Result<i64, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        let identity = users
            .get_mut(&user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;

        if identity.credential_version != expected_version {
            return Err(UserRepositoryError::CredentialConflict);
        }
        identity.password_hash = new_password_hash;
        identity.credential_version += 1;
        Ok(identity.credential_version)
    }

    async fn update_email(
        &self,
        user_id: Uuid,
        email: String,
    ) -> Result<UserResult, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users
            .values()
            .any(|u| u.email == email && u.id.value() != user_id)
        {
            return Err(UserRepositoryError::UserAlreadyExists);
        }
        let identity = users
            .get_mut(&user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        identity.email = email;
        Ok(Self::to_user_result(identity))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryTokens {
    pub blacklisted: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

#[async_trait]
impl TokenRepository for InMemoryTokens {
    async fn blacklist_token(
        &self,
        token_hash: String,
        _user_id: Uuid,
        _expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        if self.fail {
            return Err(TokenRepositoryError::DatabaseError("redis down".to_string()));
        }
        self.blacklisted.lock().unwrap().push(token_hash);
        Ok(())
    }

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        if self.fail {
            return Err(TokenRepositoryError::DatabaseError("redis down".to_string()));
        }
        Ok(self
            .blacklisted
            .lock()
            .unwrap()
            .iter()
            .any(|h| h == token_hash))
    }

    async fn remove_blacklisted_token(&self, token_hash: &str) -> Result<(), TokenRepositoryError> {
        self.blacklisted.lock().unwrap().retain(|h| h != token_hash);
        Ok(())
    }
}
