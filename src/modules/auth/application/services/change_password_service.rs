use async_trait::async_trait;
use std::sync::Arc;
use tokio::task;
use tracing::{error, info, warn};

use crate::auth::application::domain::{
    entities::{Identity, SessionUser},
    password_validation::FailureCode,
};
use crate::auth::application::ports::incoming::use_cases::{
    AuthTokens, ChangePasswordError, ChangePasswordRequest, ChangePasswordResponse,
    ChangePasswordUseCase,
};
use crate::auth::application::ports::outgoing::{
    token_provider::TokenProvider, UserQuery, UserRepository, UserRepositoryError,
};

use super::password::PasswordPolicyEngine;

/// Loads the identity, validates the change with the policy engine and
/// commits the new hash against the credential version that was read.
pub struct ChangePasswordService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    engine: PasswordPolicyEngine,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> ChangePasswordService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        engine: PasswordPolicyEngine,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            engine,
            token_provider,
        }
    }

    /// Hashes and stores an already-validated password. Fails with
    /// `CredentialConflict` if the stored credential moved past
    /// `identity.credential_version` in the meantime.
    pub async fn commit(
        &self,
        identity: &Identity,
        new_password: String,
    ) -> Result<i64, ChangePasswordError> {
        let engine = self.engine.clone();
        let hash = task::spawn_blocking(move || engine.hash_new_password(&new_password))
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .update_password(identity.id.value(), identity.credential_version, hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ChangePasswordError::UserNotFound,
                UserRepositoryError::CredentialConflict => {
                    warn!(user_id = %identity.id, "Password change lost a concurrent write");
                    ChangePasswordError::CredentialConflict
                }
                other => {
                    error!(user_id = %identity.id, error = %other, "Failed to store password");
                    ChangePasswordError::RepositoryError(other.to_string())
                }
            })
    }
}

#[async_trait]
impl<Q, R> ChangePasswordUseCase for ChangePasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        session: SessionUser,
        request: ChangePasswordRequest,
    ) -> Result<ChangePasswordResponse, ChangePasswordError> {
        let user_id = session.id;
        let identity = self
            .query
            .find_identity(user_id.value())
            .await
            .map_err(|e| ChangePasswordError::QueryError(e.to_string()))?
            .ok_or(ChangePasswordError::UserNotFound)?;

        if !identity.is_active {
            return Err(ChangePasswordError::AccountDisabled);
        }
        if session.is_stale(identity.credential_version) {
            warn!(user_id = %user_id, "Password change from a retired session");
            return Err(ChangePasswordError::SessionExpired);
        }

        let engine = self.engine.clone();
        let checked = identity.clone();
        let ChangePasswordRequest {
            old_password,
            new_password1,
            new_password2,
        } = request;
        let new_password = new_password1.clone();

        let outcome = task::spawn_blocking(move || {
            engine.validate_change(&checked, &old_password, &new_password1, &new_password2)
        })
        .await
        .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?
        .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        if !outcome.is_pass() {
            if outcome.has(FailureCode::PasswordIncorrect) {
                warn!(user_id = %user_id, "Password change with wrong old password");
            }
            return Err(ChangePasswordError::PolicyViolation(
                outcome.into_failures(),
            ));
        }

        let credential_version = self.commit(&identity, new_password).await?;

        let access_token = self
            .token_provider
            .generate_access_token(user_id.value(), credential_version)
            .map_err(|e| ChangePasswordError::TokenGenerationFailed(e.to_string()))?;
        let refresh_token = self
            .token_provider
            .generate_refresh_token(user_id.value(), credential_version)
            .map_err(|e| ChangePasswordError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %user_id, credential_version, "Password changed");

        Ok(ChangePasswordResponse {
            credential_version,
            tokens: AuthTokens {
                access_token,
                refresh_token,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::security::Argon2Hasher;
    use crate::auth::application::domain::entities::UserId;
    use crate::auth::application::domain::password_validation::PasswordField;
    use crate::auth::application::ports::outgoing::PasswordHasher;
    use crate::auth::application::services::password::StandardPasswordPolicy;
    use crate::auth::application::ports::outgoing::user_repository::{CreateUserData, UserResult};
    use crate::auth::application::services::test_support::{
        alice, engine, token_provider, InMemoryUsers, CURRENT_PASSWORD,
    };
    use mockall::{mock, predicate::*};
    use uuid::Uuid;

    const NEW: &str = "NewValidPass7890!@#";

    mock! {
        pub Repo {}
        #[async_trait]
        impl UserRepository for Repo {
            async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;
            async fn update_password(
                &self,
                user_id: Uuid,
                expected_version: i64,
                new_password_hash: String,
            ) -> Result<i64, UserRepositoryError>;
            async fn update_email(
                &self,
                user_id: Uuid,
                email: String,
            ) -> Result<UserResult, UserRepositoryError>;
        }
    }

    fn service(users: InMemoryUsers) -> ChangePasswordService<InMemoryUsers, InMemoryUsers> {
        ChangePasswordService::new(users.clone(), users, engine(), token_provider())
    }

    fn session(id: UserId) -> SessionUser {
        SessionUser::new(id, 0)
    }

    fn request(old: &str, new1: &str, new2: &str) -> ChangePasswordRequest {
        ChangePasswordRequest {
            old_password: old.to_string(),
            new_password1: new1.to_string(),
            new_password2: new2.to_string(),
        }
    }

    #[tokio::test]
    async fn test_change_password_stores_new_hash_and_bumps_version() {
        let identity = alice();
        let id = identity.id;
        let users = InMemoryUsers::with(identity);

        let response = service(users.clone())
            .execute(session(id), request(CURRENT_PASSWORD, NEW, NEW))
            .await
            .unwrap();

        assert_eq!(response.credential_version, 1);
        let claims = token_provider()
            .verify_token(&response.tokens.refresh_token)
            .unwrap();
        assert_eq!(claims.ver, 1);

        let stored = users.get(id.value()).unwrap();
        assert_eq!(stored.password_hash, format!("plain${NEW}"));
        assert_eq!(stored.credential_version, 1);
    }

    #[tokio::test]
    async fn test_committed_hash_verifies_new_password_only() {
        let hasher = Arc::new(Argon2Hasher::with_params(4 * 1024, 1, 1));
        let engine = PasswordPolicyEngine::new(
            hasher.clone(),
            Arc::new(StandardPasswordPolicy::default()),
        );
        let identity = Identity {
            password_hash: hasher.hash_password(CURRENT_PASSWORD).unwrap(),
            ..alice()
        };
        let id = identity.id;
        let users = InMemoryUsers::with(identity);

        ChangePasswordService::new(users.clone(), users.clone(), engine, token_provider())
            .execute(session(id), request(CURRENT_PASSWORD, NEW, NEW))
            .await
            .unwrap();

        let stored = users.get(id.value()).unwrap();
        assert!(stored.password_hash.starts_with("$argon2id$"));
        assert_eq!(hasher.verify_password(NEW, &stored.password_hash), Ok(true));
        assert_eq!(
            hasher.verify_password(CURRENT_PASSWORD, &stored.password_hash),
            Ok(false)
        );
    }

    #[tokio::test]
    async fn test_token_from_before_last_change_is_refused() {
        let identity = alice();
        let id = identity.id;
        let users = InMemoryUsers::with(identity);
        users.bump_version(id.value());

        let result = service(users.clone())
            .execute(session(id), request(CURRENT_PASSWORD, NEW, NEW))
            .await;

        assert!(matches!(result, Err(ChangePasswordError::SessionExpired)));
        let stored = users.get(id.value()).unwrap();
        assert_eq!(stored.password_hash, format!("plain${CURRENT_PASSWORD}"));
    }

    #[tokio::test]
    async fn test_policy_failures_leave_credential_untouched() {
        let identity = alice();
        let id = identity.id;
        let users = InMemoryUsers::with(identity);

        let result = service(users.clone())
            .execute(session(id), request(CURRENT_PASSWORD, "UPPERlower,./$%^", "UPPERlower,./$%^"))
            .await;

        let Err(ChangePasswordError::PolicyViolation(failures)) = result else {
            panic!("expected a policy violation, got {:?}", result);
        };
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].code, FailureCode::NoNumber);

        let stored = users.get(id.value()).unwrap();
        assert_eq!(stored.credential_version, 0);
        assert_eq!(stored.password_hash, format!("plain${CURRENT_PASSWORD}"));
    }

    #[tokio::test]
    async fn test_wrong_old_password_is_reported_on_old_field() {
        let identity = alice();
        let id = identity.id;

        let result = service(InMemoryUsers::with(identity))
            .execute(session(id), request("WrongPass123,./", NEW, NEW))
            .await;

        let Err(ChangePasswordError::PolicyViolation(failures)) = result else {
            panic!("expected a policy violation, got {:?}", result);
        };
        assert_eq!(failures[0].code, FailureCode::PasswordIncorrect);
        assert_eq!(failures[0].field, PasswordField::OldPassword);
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let result = service(InMemoryUsers::default())
            .execute(
                session(UserId::from(Uuid::new_v4())),
                request(CURRENT_PASSWORD, NEW, NEW),
            )
            .await;

        assert!(matches!(result, Err(ChangePasswordError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_disabled_account_is_refused() {
        let mut identity = alice();
        identity.is_active = false;
        let id = identity.id;

        let result = service(InMemoryUsers::with(identity))
            .execute(session(id), request(CURRENT_PASSWORD, NEW, NEW))
            .await;

        assert!(matches!(result, Err(ChangePasswordError::AccountDisabled)));
    }

    #[tokio::test]
    async fn test_query_failure() {
        let result = service(InMemoryUsers::failing())
            .execute(
                session(UserId::from(Uuid::new_v4())),
                request(CURRENT_PASSWORD, NEW, NEW),
            )
            .await;

        assert!(matches!(result, Err(ChangePasswordError::QueryError(_))));
    }

    #[tokio::test]
    async fn test_commit_against_stale_version_conflicts() {
        let identity = alice();
        let users = InMemoryUsers::with(identity.clone());
        users.bump_version(identity.id.value());

        let result = service(users.clone())
            .commit(&identity, NEW.to_string())
            .await;

        assert!(matches!(result, Err(ChangePasswordError::CredentialConflict)));
        let stored = users.get(identity.id.value()).unwrap();
        assert_eq!(stored.password_hash, format!("plain${CURRENT_PASSWORD}"));
    }

    #[tokio::test]
    async fn test_commit_passes_read_version_to_repository() {
        let identity = Identity {
            credential_version: 7,
            ..alice()
        };
        let id = identity.id.value();
        let mut repo = MockRepo::new();
        repo.expect_update_password()
            .with(eq(id), eq(7), eq(format!("plain${NEW}")))
            .times(1)
            .returning(|_, _, _| Ok(8));

        let service = ChangePasswordService::new(
            InMemoryUsers::with(identity.clone()),
            repo,
            engine(),
            token_provider(),
        );
        let version = service.commit(&identity, NEW.to_string()).await.unwrap();

        assert_eq!(version, 8);
    }

    #[tokio::test]
    async fn test_concurrent_write_surfaces_as_conflict() {
        let identity = alice();
        let id = identity.id;
        let mut repo = MockRepo::new();
        repo.expect_update_password()
            .times(1)
            .returning(|_, _, _| Err(UserRepositoryError::CredentialConflict));

        let service = ChangePasswordService::new(
            InMemoryUsers::with(identity),
            repo,
            engine(),
            token_provider(),
        );
        let result = service
            .execute(session(id), request(CURRENT_PASSWORD, NEW, NEW))
            .await;

        assert!(matches!(result, Err(ChangePasswordError::CredentialConflict)));
    }

    #[tokio::test]
    async fn test_repository_failure_is_reported() {
        let identity = alice();
        let id = identity.id;
        let mut repo = MockRepo::new();
        repo.expect_update_password()
            .returning(|_, _, _| Err(UserRepositoryError::DatabaseError("down".to_string())));

        let service = ChangePasswordService::new(
            InMemoryUsers::with(identity),
            repo,
            engine(),
            token_provider(),
        );
        let result = service
            .execute(session(id), request(CURRENT_PASSWORD, NEW, NEW))
            .await;

        assert!(matches!(result, Err(ChangePasswordError::RepositoryError(_))));
    }
}
