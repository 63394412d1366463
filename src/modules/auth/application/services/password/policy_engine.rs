use std::sync::Arc;

use crate::auth::application::{
    domain::{
        entities::{Identity, IdentityAttributes},
        password_validation::{FailureCode, PasswordField, PolicyFailure, ValidationOutcome},
    },
    ports::{
        incoming::PasswordPolicy,
        outgoing::{HashError, PasswordHasher},
    },
};

/// Decides whether a credential change is acceptable. Every method here is
/// synchronous and blocking (hash verification); async callers move it onto
/// `spawn_blocking`.
#[derive(Clone)]
pub struct PasswordPolicyEngine {
    hasher: Arc<dyn PasswordHasher>,
    policy: Arc<dyn PasswordPolicy>,
}

impl PasswordPolicyEngine {
    pub fn new(hasher: Arc<dyn PasswordHasher>, policy: Arc<dyn PasswordPolicy>) -> Self {
        Self { hasher, policy }
    }

    /// Runs every check and collects all failures in step order:
    /// old password, confirmation, same-as-old, then the policy rules.
    ///
    /// The same-as-old comparison is skipped when the old password did not
    /// verify, so a caller cannot use it to test guesses at the current password.
    pub fn validate_change(
        &self,
        identity: &Identity,
        current_password: &str,
        new_password: &str,
        new_password_confirm: &str,
    ) -> Result<ValidationOutcome, HashError> {
        let mut outcome = ValidationOutcome::new();

        let old_password_ok = self
            .hasher
            .verify_password(current_password, &identity.password_hash)?;
        if !old_password_ok {
            outcome.push(PolicyFailure::new(
                FailureCode::PasswordIncorrect,
                PasswordField::OldPassword,
                "Your old password was entered incorrectly. Please enter it again.",
            ));
        }

        if let Some(failure) = confirmation_failure(new_password, new_password_confirm) {
            outcome.push(failure);
        }

        if old_password_ok && new_password == current_password {
            outcome.push(PolicyFailure::new(
                FailureCode::PasswordSameAsOld,
                PasswordField::NewPassword1,
                "The new password must be different from the old password.",
            ));
        }

        outcome.extend(self.policy.evaluate(new_password, identity.attributes()));

        Ok(outcome)
    }

    /// Checks a password for an account that has no credential yet.
    pub fn validate_new(
        &self,
        identity: IdentityAttributes<'_>,
        password: &str,
        password_confirm: &str,
    ) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();

        if let Some(failure) = confirmation_failure(password, password_confirm) {
            outcome.push(failure);
        }
        outcome.extend(self.policy.evaluate(password, identity));

        outcome
    }

    /// Hashes an accepted password for storage.
    pub fn hash_new_password(&self, new_password: &str) -> Result<String, HashError> {
        self.hasher.hash_password(new_password)
    }
}

fn confirmation_failure(password: &str, confirm: &str) -> Option<PolicyFailure> {
    (password != confirm).then(|| {
        PolicyFailure::new(
            FailureCode::PasswordMismatch,
            PasswordField::NewPassword2,
            "The two password fields didn't match.",
        )
    })
}
