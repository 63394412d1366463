pub mod password_policy;
pub mod use_cases;

pub use password_policy::PasswordPolicy;
