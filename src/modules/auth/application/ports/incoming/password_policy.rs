use crate::auth::application::domain::{
    entities::IdentityAttributes, password_validation::PolicyFailure,
};

/// Rules a new password must satisfy on its own and against the account it
/// belongs to. Returns every violated rule, never short-circuits.
pub trait PasswordPolicy: Send + Sync {
    fn evaluate(&self, candidate: &str, identity: IdentityAttributes<'_>) -> Vec<PolicyFailure>;
}
