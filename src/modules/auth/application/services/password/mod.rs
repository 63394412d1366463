pub mod policy_config;
pub mod policy_engine;
pub mod rules;
pub mod standard_password_policy;

pub use policy_config::PasswordPolicyConfig;
pub use policy_engine::PasswordPolicyEngine;
pub use standard_password_policy::StandardPasswordPolicy;
